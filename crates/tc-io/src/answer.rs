//! Builds JSON response objects for `stat_requests` entries.
//!
//! Only malformed input (handled earlier, at parse time) is a hard error
//! here — a "not found" query answer is itself a valid, successful response.

use serde_json::{json, Value};

use tc_catalog::Catalogue;
use tc_render::{render_map, RenderSettings};
use tc_router::{JourneyRouter, RouteItem};

use crate::requests::StatRequest;

pub fn answer_stat_request(
    catalog: &Catalogue,
    router: &JourneyRouter,
    render_settings: &RenderSettings,
    request: &StatRequest,
) -> Value {
    let id = request.id();
    match request {
        StatRequest::Bus { name, .. } => match catalog.bus_info(name) {
            Some(info) => json!({
                "request_id": id,
                "curvature": info.curvature(),
                "route_length": info.road_length,
                "stop_count": info.stop_count,
                "unique_stop_count": info.unique_stop_count,
            }),
            None => not_found(id),
        },
        StatRequest::Stop { name, .. } => match catalog.stop_info(name) {
            Some(info) => json!({
                "request_id": id,
                "buses": info.buses,
            }),
            None => not_found(id),
        },
        StatRequest::Map { .. } => {
            let svg = render_map(catalog, render_settings);
            json!({ "request_id": id, "map": svg })
        }
        StatRequest::Route { from, to, .. } => match router.route(catalog, from, to) {
            Some(answer) => {
                let items: Vec<Value> = answer
                    .items
                    .iter()
                    .map(|item| match item {
                        RouteItem::Wait { stop_name, time_min } => json!({
                            "type": "Wait",
                            "stop_name": stop_name,
                            "time": time_min,
                        }),
                        RouteItem::Bus { bus_name, span_count, time_min } => json!({
                            "type": "Bus",
                            "bus": bus_name,
                            "span_count": span_count,
                            "time": time_min,
                        }),
                    })
                    .collect();
                json!({
                    "request_id": id,
                    "total_time": answer.total_time_min,
                    "items": items,
                })
            }
            None => not_found(id),
        },
    }
}

fn not_found(id: u64) -> Value {
    json!({ "request_id": id, "error_message": "not found" })
}
