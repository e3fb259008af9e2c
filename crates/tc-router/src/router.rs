//! Compiles a [`Catalogue`] into a [`Graph`] and answers journey queries.
//!
//! One directed edge is added per `(i, j)` stop-span pair reachable within a
//! single traversal pass of a bus (loop buses get one pass; linear buses get
//! a forward pass and a reverse pass). This produces `O(n^2)` edges per bus
//! but lets the shortest-path engine consider "ride past my stop without
//! getting off" directly, with no need to special-case intermediate stops at
//! query time.

use tc_catalog::Catalogue;
use tc_core::{BusId, StopId};
use tc_graph::{Graph, ShortestPaths};

use crate::settings::RouterSettings;

/// Per-edge metadata that the graph itself does not know about: which bus
/// the edge belongs to and how many stop-spans it covers. Indexed in
/// lockstep with `tc_core::EdgeId`.
#[derive(Copy, Clone, Debug)]
pub struct EdgeMeta {
    pub bus_id: BusId,
    pub span_count: u32,
}

/// One leg of a [`RouteAnswer`]: either waiting at a stop or riding a bus.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteItem {
    Wait { stop_name: String, time_min: f64 },
    Bus { bus_name: String, span_count: u32, time_min: f64 },
}

/// The answer to a `route(from, to)` query.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteAnswer {
    pub total_time_min: f64,
    pub items: Vec<RouteItem>,
}

/// A compiled journey router: the graph, its edge metadata, and the
/// precomputed all-pairs shortest-path table.
#[derive(Debug)]
pub struct JourneyRouter {
    settings: RouterSettings,
    graph: Graph,
    edge_meta: Vec<EdgeMeta>,
    shortest_paths: ShortestPaths,
}

impl JourneyRouter {
    pub fn settings(&self) -> RouterSettings {
        self.settings
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn edge_meta(&self) -> &[EdgeMeta] {
        &self.edge_meta
    }

    pub fn shortest_paths(&self) -> &ShortestPaths {
        &self.shortest_paths
    }

    /// Reassemble a router directly from its already-computed pieces,
    /// bypassing [`JourneyRouter::build`]'s edge-generation loop. Used by
    /// the snapshot codec, which stores the graph and shortest-path table
    /// verbatim so that deserializing never recomputes anything.
    pub fn from_parts(
        settings: RouterSettings,
        graph: Graph,
        edge_meta: Vec<EdgeMeta>,
        shortest_paths: ShortestPaths,
    ) -> Self {
        Self { settings, graph, edge_meta, shortest_paths }
    }

    /// Compile `catalog` into a graph under `settings` and run the all-pairs
    /// shortest-path engine over it.
    pub fn build(catalog: &Catalogue, settings: RouterSettings) -> Self {
        let v_per_min = settings.velocity_m_per_min();
        let wait = settings.bus_wait_time_min as f64;

        let mut graph = Graph::new(catalog.stop_count());
        let mut edge_meta = Vec::new();

        for bus in catalog.all_buses() {
            let stops = &bus.stops;
            let n = stops.len();
            if n < 2 {
                continue;
            }

            let passes: &[bool] = if bus.is_loop { &[false] } else { &[false, true] };

            for &reverse in passes {
                let at = |k: usize| -> StopId {
                    if reverse { stops[n - 1 - k] } else { stops[k] }
                };

                for i in 0..n - 1 {
                    let from = at(i);
                    let mut sum = 0.0_f64;
                    let mut span_count = 0_u32;
                    for j in (i + 1)..n {
                        span_count += 1;
                        let a = at(j - 1);
                        let b = at(j);
                        sum += catalog.distance(a, b).unwrap_or(0) as f64;
                        let to = at(j);
                        let weight = sum / v_per_min + wait;

                        let eid = graph.add_edge(from, to, weight);
                        debug_assert_eq!(eid.index(), edge_meta.len());
                        edge_meta.push(EdgeMeta {
                            bus_id: catalog.bus_id(&bus.number).expect("bus was just iterated from catalog"),
                            span_count,
                        });
                    }
                }
            }
        }

        let shortest_paths = ShortestPaths::compute(&graph);

        Self { settings, graph, edge_meta, shortest_paths }
    }

    /// Answer a `from -> to` journey query, or `None` if either stop is
    /// unknown or no path exists.
    pub fn route(&self, catalog: &Catalogue, from_name: &str, to_name: &str) -> Option<RouteAnswer> {
        let from = catalog.stop_id(from_name)?;
        let to = catalog.stop_id(to_name)?;

        if from == to {
            return Some(RouteAnswer { total_time_min: 0.0, items: Vec::new() });
        }

        let route = self.shortest_paths.build_route(&self.graph, from, to)?;

        let mut items = Vec::with_capacity(route.edges.len() * 2);
        for eid in &route.edges {
            let edge = self.graph.edge(*eid);
            let meta = self.edge_meta[eid.index()];

            items.push(RouteItem::Wait {
                stop_name: catalog.stop_name(edge.from).to_string(),
                time_min: self.settings.bus_wait_time_min as f64,
            });
            items.push(RouteItem::Bus {
                bus_name: catalog.bus_name(meta.bus_id).to_string(),
                span_count: meta.span_count,
                time_min: edge.weight - self.settings.bus_wait_time_min as f64,
            });
        }

        Some(RouteAnswer { total_time_min: route.total_weight, items })
    }
}
