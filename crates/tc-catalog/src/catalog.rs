//! Stop/bus storage, directed distance table with symmetric fallback, the
//! buses-at-stop index, and derived per-bus metrics.

use std::collections::{BTreeSet, HashMap};

use tc_core::{BusId, GeoPoint, StopId};

use crate::error::{CatalogError, CatalogResult};

#[derive(Clone, Debug)]
pub struct Stop {
    pub name: String,
    pub coord: GeoPoint,
}

#[derive(Clone, Debug)]
pub struct Bus {
    pub number: String,
    pub is_loop: bool,
    pub stops: Vec<StopId>,
}

/// Summary statistics for one bus route, as returned by [`Catalogue::bus_info`].
#[derive(Clone, Debug, PartialEq)]
pub struct BusInfo {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub road_length: u64,
    pub geodesic_length: f64,
    pub stop_names: Vec<String>,
    pub is_loop: bool,
}

impl BusInfo {
    pub fn curvature(&self) -> f64 {
        self.road_length as f64 / self.geodesic_length
    }
}

/// Stop coordinates and the buses serving it, as returned by [`Catalogue::stop_info`].
#[derive(Clone, Debug, PartialEq)]
pub struct StopInfo {
    pub coord: GeoPoint,
    pub buses: Vec<String>,
}

/// The in-memory transport catalogue: stops, buses, and the distance table.
#[derive(Default, Debug)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_ids: HashMap<String, StopId>,
    bus_ids: HashMap<String, BusId>,
    buses_at_stop: HashMap<StopId, BTreeSet<BusId>>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent on `name`: a second call with the same name is a no-op and
    /// returns the already-assigned id (the new coordinate is discarded).
    pub fn add_stop(&mut self, name: &str, coord: GeoPoint) -> StopId {
        if let Some(&id) = self.stop_ids.get(name) {
            return id;
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { name: name.to_string(), coord });
        self.stop_ids.insert(name.to_string(), id);
        id
    }

    /// Idempotent on `number`: a second call with the same number is a no-op
    /// and returns the already-assigned id without re-validating `stop_names`.
    pub fn add_bus(
        &mut self,
        number: &str,
        is_loop: bool,
        stop_names: &[&str],
    ) -> CatalogResult<BusId> {
        if let Some(&id) = self.bus_ids.get(number) {
            return Ok(id);
        }
        if stop_names.is_empty() {
            return Err(CatalogError::EmptyRoute(number.to_string()));
        }
        if is_loop && stop_names.first() != stop_names.last() {
            return Err(CatalogError::LoopEndpointMismatch(number.to_string()));
        }

        let mut stops = Vec::with_capacity(stop_names.len());
        for &name in stop_names {
            let id = self
                .stop_ids
                .get(name)
                .copied()
                .ok_or_else(|| CatalogError::UnknownStop(name.to_string()))?;
            stops.push(id);
        }

        let id = BusId(self.buses.len() as u32);
        self.buses.push(Bus { number: number.to_string(), is_loop, stops: stops.clone() });
        self.bus_ids.insert(number.to_string(), id);

        for stop_id in stops {
            self.buses_at_stop.entry(stop_id).or_default().insert(id);
        }

        Ok(id)
    }

    pub fn add_distance(&mut self, src: StopId, dst: StopId, meters: u32) -> CatalogResult<()> {
        if meters == 0 {
            return Err(CatalogError::NonPositiveDistance {
                src: self.stop_name(src).to_string(),
                dst: self.stop_name(dst).to_string(),
                meters: meters as i64,
            });
        }
        self.distances.insert((src, dst), meters);
        Ok(())
    }

    pub fn distance(&self, src: StopId, dst: StopId) -> CatalogResult<u32> {
        if let Some(&d) = self.distances.get(&(src, dst)) {
            return Ok(d);
        }
        if let Some(&d) = self.distances.get(&(dst, src)) {
            return Ok(d);
        }
        Err(CatalogError::DistanceUndefined {
            src: self.stop_name(src).to_string(),
            dst: self.stop_name(dst).to_string(),
        })
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    pub fn bus_id(&self, number: &str) -> Option<BusId> {
        self.bus_ids.get(number).copied()
    }

    pub fn stop_name(&self, id: StopId) -> &str {
        &self.stops[id.index()].name
    }

    pub fn bus_name(&self, id: BusId) -> &str {
        &self.buses[id.index()].number
    }

    pub fn stop_coord(&self, id: StopId) -> GeoPoint {
        self.stops[id.index()].coord
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// All stops sorted lexicographically by name.
    pub fn all_stops(&self) -> Vec<&Stop> {
        let mut v: Vec<&Stop> = self.stops.iter().collect();
        v.sort_by(|a, b| a.name.cmp(&b.name));
        v
    }

    /// All buses sorted lexicographically by number.
    pub fn all_buses(&self) -> Vec<&Bus> {
        let mut v: Vec<&Bus> = self.buses.iter().collect();
        v.sort_by(|a, b| a.number.cmp(&b.number));
        v
    }

    pub fn bus_info(&self, number: &str) -> Option<BusInfo> {
        let id = self.bus_id(number)?;
        let bus = self.bus(id);
        let n = bus.stops.len();

        let unique_stop_count = {
            let set: std::collections::HashSet<StopId> = bus.stops.iter().copied().collect();
            set.len()
        };

        // `tc-io::apply_base_requests` eagerly validates that every consecutive
        // stop pair on every bus has a defined distance before a build is
        // considered complete, so a missing distance here would mean that
        // validation was skipped; fall back to 0 rather than panic on a
        // query-time call.
        let mut road_length: u64 = 0;
        for w in bus.stops.windows(2) {
            road_length += self.distance(w[0], w[1]).unwrap_or(0) as u64;
        }
        if !bus.is_loop {
            for w in bus.stops.windows(2) {
                road_length += self.distance(w[1], w[0]).unwrap_or(0) as u64;
            }
        }

        let mut geodesic_length: f64 = 0.0;
        for w in bus.stops.windows(2) {
            geodesic_length += self.stop_coord(w[0]).distance_m(self.stop_coord(w[1]));
        }
        if !bus.is_loop {
            geodesic_length *= 2.0;
        }

        let stop_count = if bus.is_loop { n } else { 2 * n - 1 };
        let stop_names = bus.stops.iter().map(|&id| self.stop_name(id).to_string()).collect();

        Some(BusInfo {
            stop_count,
            unique_stop_count,
            road_length,
            geodesic_length,
            stop_names,
            is_loop: bus.is_loop,
        })
    }

    /// All declared `(src, dst) -> meters` entries, in arbitrary order — used
    /// by the snapshot codec to serialize the distance table. Only the
    /// directions actually declared are returned; the query-time fallback to
    /// the reverse direction happens in [`Catalogue::distance`], not here.
    pub fn all_distances(&self) -> impl Iterator<Item = (StopId, StopId, u32)> + '_ {
        self.distances.iter().map(|(&(src, dst), &meters)| (src, dst, meters))
    }

    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        let id = self.stop_id(name)?;
        let mut buses: Vec<String> = self
            .buses_at_stop
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&bid| self.bus_name(bid).to_string())
            .collect();
        buses.sort();
        Some(StopInfo { coord: self.stop_coord(id), buses })
    }
}
