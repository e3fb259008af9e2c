//! Drives a [`Catalogue`] from a parsed [`BaseRequest`] list in the order the
//! data model requires: every stop, then every bus, then every declared
//! distance — so that a bus's stop names always resolve by the time it is
//! added.

use tc_catalog::Catalogue;
use tc_core::GeoPoint;

use crate::error::{IoError, IoResult};
use crate::requests::BaseRequest;

pub fn apply_base_requests(catalog: &mut Catalogue, requests: &[BaseRequest]) -> IoResult<()> {
    for req in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = req {
            catalog.add_stop(name, GeoPoint::new(*latitude, *longitude));
        }
    }

    for req in requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = req {
            let stop_refs: Vec<&str> = stops.iter().map(String::as_str).collect();
            catalog.add_bus(name, *is_roundtrip, &stop_refs)?;
        }
    }

    for req in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = req {
            let src = catalog
                .stop_id(name)
                .expect("stop was just added in the first pass");
            for (dst_name, &meters) in road_distances {
                let dst = catalog
                    .stop_id(dst_name)
                    .ok_or_else(|| IoError::Catalog(tc_catalog::CatalogError::UnknownStop(dst_name.clone())))?;
                catalog.add_distance(src, dst, meters)?;
            }
        }
    }

    // Eagerly validate that every bus's consecutive stop pairs have a
    // defined distance, so an undefined distance fails the build rather
    // than surfacing later as a silently-zeroed stretch of a query answer.
    for req in requests {
        if let BaseRequest::Bus { name, .. } = req {
            let bus_id = catalog.bus_id(name).expect("bus was just added in the second pass");
            let stops = catalog.bus(bus_id).stops.clone();
            for w in stops.windows(2) {
                catalog.distance(w[0], w[1])?;
            }
        }
    }

    Ok(())
}
