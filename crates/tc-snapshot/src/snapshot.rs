//! The on-disk snapshot format: a single `bincode`-encoded struct covering
//! stops, buses, distances, render settings, and the compiled router state.
//!
//! Field order mirrors the order fields are decoded in: stops, buses,
//! distances, render settings, then the router block (settings, edge
//! metadata, graph edges, shortest-path table). `format_version` is written
//! first on the wire via a dedicated prefix so a version mismatch can be
//! reported before the rest of the document is even decoded.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tc_catalog::Catalogue;
use tc_core::{BusId, EdgeId, GeoPoint, StopId};
use tc_graph::{Graph, ShortestPaths};
use tc_render::RenderSettings;
use tc_router::{EdgeMeta, JourneyRouter, RouterSettings};

use crate::error::{SnapshotError, SnapshotResult};

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StopRecord {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
struct BusRecord {
    number: String,
    is_loop: bool,
    stop_ids: Vec<u32>,
}

#[derive(Serialize, Deserialize)]
struct DistanceRecord {
    from: u32,
    to: u32,
    meters: u32,
}

#[derive(Serialize, Deserialize)]
struct EdgeMetaRecord {
    bus_id: u32,
    span_count: u32,
}

#[derive(Serialize, Deserialize)]
struct GraphEdgeRecord {
    from: u32,
    to: u32,
    weight: f64,
}

#[derive(Serialize, Deserialize)]
struct RouterBlock {
    settings: RouterSettings,
    edge_meta: Vec<EdgeMetaRecord>,
    graph_edges: Vec<GraphEdgeRecord>,
    /// Row-major `V x V` shortest-path table; `None` = unreachable, else
    /// `(weight, predecessor edge id)`.
    routes: Vec<Option<(f64, Option<u32>)>>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    format_version: u32,
    stops: Vec<StopRecord>,
    buses: Vec<BusRecord>,
    distances: Vec<DistanceRecord>,
    render_settings: RenderSettings,
    router: RouterBlock,
}

/// Encode `catalog` + `router` + `render_settings` and atomically write them
/// to `path`: encode to `<path>.tmp` in the same directory, then rename over
/// `path` — rename is atomic on the same filesystem, so a concurrent reader
/// never observes a partially-written snapshot.
pub fn write_snapshot(
    path: &Path,
    catalog: &Catalogue,
    router: &JourneyRouter,
    render_settings: &RenderSettings,
) -> SnapshotResult<()> {
    let snapshot = build_snapshot(catalog, router, render_settings);
    let bytes = bincode::serialize(&snapshot)?;

    let tmp_path = path.with_extension("tmp");
    {
        let mut f = fs::File::create(&tmp_path)?;
        f.write_all(&bytes)?;
        f.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read and decode a snapshot previously written by [`write_snapshot`],
/// reconstructing a sealed [`Catalogue`], [`JourneyRouter`], and
/// [`RenderSettings`] without recomputing the shortest-path table.
pub fn read_snapshot(path: &Path) -> SnapshotResult<(Catalogue, JourneyRouter, RenderSettings)> {
    let bytes = fs::read(path)?;
    let snapshot: Snapshot = bincode::deserialize(&bytes)?;

    if snapshot.format_version != FORMAT_VERSION {
        return Err(SnapshotError::BadVersion { expected: FORMAT_VERSION, found: snapshot.format_version });
    }

    Ok(restore_snapshot(snapshot))
}

fn build_snapshot(catalog: &Catalogue, router: &JourneyRouter, render_settings: &RenderSettings) -> Snapshot {
    let stops = (0..catalog.stop_count())
        .map(|i| {
            let id = StopId(i as u32);
            let coord = catalog.stop_coord(id);
            StopRecord { name: catalog.stop_name(id).to_string(), lat: coord.lat, lon: coord.lon }
        })
        .collect();

    let buses = (0..catalog.bus_count())
        .map(|i| {
            let id = BusId(i as u32);
            let bus = catalog.bus(id);
            BusRecord {
                number: bus.number.clone(),
                is_loop: bus.is_loop,
                stop_ids: bus.stops.iter().map(|s| s.0).collect(),
            }
        })
        .collect();

    let distances = catalog
        .all_distances()
        .map(|(from, to, meters)| DistanceRecord { from: from.0, to: to.0, meters })
        .collect();

    let edge_meta = router
        .edge_meta()
        .iter()
        .map(|m| EdgeMetaRecord { bus_id: m.bus_id.0, span_count: m.span_count })
        .collect();

    let graph = router.graph();
    let graph_edges = (0..graph.edge_count())
        .map(|i| {
            let e = graph.edge(EdgeId(i as u32));
            GraphEdgeRecord { from: e.from.0, to: e.to.0, weight: e.weight }
        })
        .collect();

    let routes = router
        .shortest_paths()
        .raw_table()
        .into_iter()
        .map(|cell| cell.map(|(weight, prev_edge)| (weight, prev_edge.map(|e| e.0))))
        .collect();

    Snapshot {
        format_version: FORMAT_VERSION,
        stops,
        buses,
        distances,
        render_settings: render_settings.clone(),
        router: RouterBlock { settings: router.settings(), edge_meta, graph_edges, routes },
    }
}

fn restore_snapshot(snapshot: Snapshot) -> (Catalogue, JourneyRouter, RenderSettings) {
    let mut catalog = Catalogue::new();

    for s in &snapshot.stops {
        catalog.add_stop(&s.name, GeoPoint::new(s.lat, s.lon));
    }
    for b in &snapshot.buses {
        let stop_names: Vec<String> = b
            .stop_ids
            .iter()
            .map(|&id| catalog.stop_name(StopId(id)).to_string())
            .collect();
        let stop_name_refs: Vec<&str> = stop_names.iter().map(String::as_str).collect();
        catalog
            .add_bus(&b.number, b.is_loop, &stop_name_refs)
            .expect("snapshot bus records were valid when the snapshot was built");
    }
    for d in &snapshot.distances {
        catalog
            .add_distance(StopId(d.from), StopId(d.to), d.meters)
            .expect("snapshot distance records were valid when the snapshot was built");
    }

    let mut graph = Graph::new(catalog.stop_count());
    for e in &snapshot.router.graph_edges {
        graph.add_edge(StopId(e.from), StopId(e.to), e.weight);
    }

    let edge_meta: Vec<EdgeMeta> = snapshot
        .router
        .edge_meta
        .iter()
        .map(|m| EdgeMeta { bus_id: BusId(m.bus_id), span_count: m.span_count })
        .collect();

    let raw_table = snapshot
        .router
        .routes
        .into_iter()
        .map(|cell| cell.map(|(weight, prev_edge)| (weight, prev_edge.map(EdgeId))))
        .collect();
    let shortest_paths = ShortestPaths::from_raw_table(catalog.stop_count(), raw_table);

    let router = JourneyRouter::from_parts(snapshot.router.settings, graph, edge_meta, shortest_paths);

    (catalog, router, snapshot.render_settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_render::Offset;

    fn sample() -> (Catalogue, JourneyRouter, RenderSettings) {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(55.0, 37.0));
        c.add_stop("B", GeoPoint::new(55.01, 37.0));
        c.add_distance(c.stop_id("A").unwrap(), c.stop_id("B").unwrap(), 1000).unwrap();
        c.add_bus("1", false, &["A", "B"]).unwrap();

        let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
        let router = JourneyRouter::build(&c, settings);

        let render_settings = RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Offset { x: 7.0, y: 15.0 },
            stop_label_font_size: 20,
            stop_label_offset: Offset { x: 7.0, y: -3.0 },
            underlayer_color: "white".to_string(),
            underlayer_width: 3.0,
            color_palette: vec!["green".to_string()],
        };

        (c, router, render_settings)
    }

    #[test]
    fn round_trip_preserves_query_answers() {
        let (catalog, router, render_settings) = sample();
        let snapshot = build_snapshot(&catalog, &router, &render_settings);

        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: Snapshot = bincode::deserialize(&bytes).unwrap();
        let (catalog2, router2, render_settings2) = restore_snapshot(decoded);

        assert_eq!(catalog.bus_info("1"), catalog2.bus_info("1"));
        assert_eq!(catalog.stop_info("A"), catalog2.stop_info("A"));

        let before = router.route(&catalog, "A", "B").unwrap();
        let after = router2.route(&catalog2, "A", "B").unwrap();
        assert_eq!(before.total_time_min, after.total_time_min);
        assert_eq!(render_settings, render_settings2);
    }

    #[test]
    fn write_then_read_round_trips_through_a_real_file() {
        let (catalog, router, render_settings) = sample();
        let dir = std::env::temp_dir().join(format!("tc-snapshot-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snapshot.bin");

        write_snapshot(&path, &catalog, &router, &render_settings).unwrap();
        let (catalog2, router2, _) = read_snapshot(&path).unwrap();

        assert_eq!(catalog.bus_info("1"), catalog2.bus_info("1"));
        let before = router.route(&catalog, "A", "B").unwrap();
        let after = router2.route(&catalog2, "A", "B").unwrap();
        assert_eq!(before.total_time_min, after.total_time_min);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn bad_version_is_rejected() {
        let (catalog, router, render_settings) = sample();
        let mut snapshot = build_snapshot(&catalog, &router, &render_settings);
        snapshot.format_version = 999;
        let bytes = bincode::serialize(&snapshot).unwrap();

        let dir = std::env::temp_dir().join(format!("tc-snapshot-badver-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snapshot.bin");
        fs::write(&path, &bytes).unwrap();

        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::BadVersion { .. }));

        fs::remove_dir_all(&dir).ok();
    }

    /// A write that fails before the final `fs::rename` must never touch the
    /// destination's previous contents — only a `.tmp` sibling is written
    /// until the rename (same-filesystem, atomic) swaps it into place.
    #[test]
    fn a_write_left_in_the_tmp_file_does_not_disturb_the_previous_snapshot() {
        let (catalog, router, render_settings) = sample();
        let dir = std::env::temp_dir().join(format!("tc-snapshot-atomicity-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snapshot.bin");

        write_snapshot(&path, &catalog, &router, &render_settings).unwrap();
        let original_bytes = fs::read(&path).unwrap();

        // Simulate a second write that crashes after creating its temp file
        // but before the rename: leave stale/garbage bytes at the `.tmp`
        // path without ever calling `fs::rename`.
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, b"not a valid snapshot").unwrap();

        let bytes_after = fs::read(&path).unwrap();
        assert_eq!(bytes_after, original_bytes, "destination must be untouched by the failed write");

        let (catalog2, router2, _) = read_snapshot(&path).unwrap();
        assert_eq!(catalog.bus_info("1"), catalog2.bus_info("1"));
        let before = router.route(&catalog, "A", "B").unwrap();
        let after = router2.route(&catalog2, "A", "B").unwrap();
        assert_eq!(before.total_time_min, after.total_time_min);

        fs::remove_dir_all(&dir).ok();
    }
}
