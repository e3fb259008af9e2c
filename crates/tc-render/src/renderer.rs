//! Draws a [`Catalogue`] into an SVG map under a given [`RenderSettings`].

use tc_catalog::{Bus, Catalogue};
use tc_core::{GeoPoint, StopId};

use crate::document::Document;
use crate::projector::SphereProjector;
use crate::settings::RenderSettings;

/// Render the full network (every bus route, every served stop) as an SVG
/// document. Rendering the same catalogue and settings twice produces
/// byte-identical output: both inputs are read-only and every draw pass
/// walks lexicographically sorted lists.
pub fn render_map(catalog: &Catalogue, settings: &RenderSettings) -> String {
    let served_stop_names: std::collections::BTreeSet<&str> = catalog
        .all_buses()
        .iter()
        .flat_map(|b| b.stops.iter())
        .map(|&id| catalog.stop_name(id))
        .collect();

    let points: Vec<GeoPoint> = served_stop_names.iter().map(|&name| {
        let id = catalog.stop_id(name).expect("name came from the catalogue");
        catalog.stop_coord(id)
    }).collect();

    let projector = SphereProjector::new(points, settings.width, settings.height, settings.padding);

    let mut doc = Document::new();
    let buses = catalog.all_buses();

    // Pass 1: route polylines, one per bus, cycling through the palette.
    // Non-loop buses are drawn there-and-back, matching the same forward/
    // reverse traversal that `tc-catalog::Catalogue::bus_info` sums over for
    // `road_length`/`geodesic_length`.
    for (i, bus) in buses.iter().enumerate() {
        if bus.stops.is_empty() || settings.color_palette.is_empty() {
            continue;
        }
        let color = &settings.color_palette[i % settings.color_palette.len()];
        let pts: Vec<(f64, f64)> = route_path(bus)
            .into_iter()
            .map(|id| projector.project(catalog.stop_coord(id)))
            .collect();
        doc.add_polyline(pts, color.clone(), settings.line_width);
    }

    // Pass 2: route name labels at each terminal stop.
    for (i, bus) in buses.iter().enumerate() {
        if bus.stops.is_empty() || settings.color_palette.is_empty() {
            continue;
        }
        let color = &settings.color_palette[i % settings.color_palette.len()];
        let mut terminals = vec![bus.stops[0]];
        if !bus.is_loop && bus.stops.last() != bus.stops.first() {
            terminals.push(*bus.stops.last().unwrap());
        }
        for &stop_id in &terminals {
            let (x, y) = projector.project(catalog.stop_coord(stop_id));
            draw_label(
                &mut doc,
                x,
                y,
                settings.bus_label_offset.x,
                settings.bus_label_offset.y,
                settings.bus_label_font_size,
                &bus.number,
                color,
                &settings.underlayer_color,
                settings.underlayer_width,
            );
        }
    }

    // Pass 3: stop markers.
    for &name in &served_stop_names {
        let id = catalog.stop_id(name).expect("name came from the catalogue");
        let (x, y) = projector.project(catalog.stop_coord(id));
        doc.add_circle(x, y, settings.stop_radius, "white");
    }

    // Pass 4: stop name labels.
    for &name in &served_stop_names {
        let id = catalog.stop_id(name).expect("name came from the catalogue");
        let (x, y) = projector.project(catalog.stop_coord(id));
        draw_label(
            &mut doc,
            x,
            y,
            settings.stop_label_offset.x,
            settings.stop_label_offset.y,
            settings.stop_label_font_size,
            name,
            "black",
            &settings.underlayer_color,
            settings.underlayer_width,
        );
    }

    doc.render()
}

/// The stop sequence a bus's polyline should actually visit: the forward
/// sequence for a loop, forward-then-reverse (there and back) for a linear
/// route. `2*s - 1` stops for a non-loop bus with `s` declared stops, same
/// as `Catalogue::bus_info`'s `stop_count`.
fn route_path(bus: &Bus) -> Vec<StopId> {
    if bus.is_loop {
        return bus.stops.clone();
    }
    let n = bus.stops.len();
    let mut path = bus.stops.clone();
    path.extend(bus.stops[..n - 1].iter().rev().copied());
    path
}

#[allow(clippy::too_many_arguments)]
fn draw_label(
    doc: &mut Document,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    font_size: u32,
    text: &str,
    fill: &str,
    underlayer_color: &str,
    underlayer_width: f64,
) {
    doc.add_text(x, y, dx, dy, font_size, text, fill, Some((underlayer_color.to_string(), underlayer_width)));
    doc.add_text(x, y, dx, dy, font_size, text, fill, None);
}
