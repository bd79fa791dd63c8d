#![allow(dead_code)]

use rack_core::{Rack, RackDetails, RackId};
use serde_json::{Value, json};

pub fn details(name: &str, district: &str) -> RackDetails {
    RackDetails {
        name: name.to_string(),
        district: district.to_string(),
        capacity: 5,
        ..RackDetails::default()
    }
}

pub fn rack(id: i64, name: &str, district: &str) -> Rack {
    Rack {
        id: RackId::Feed(id),
        details: details(name, district),
    }
}

/// `count` racks spread round-robin over `districts`, ids starting at 1.
pub fn racks(count: i64, districts: &[&str]) -> Vec<Rack> {
    (1..=count)
        .map(|id| {
            let district = districts[(id as usize - 1) % districts.len()];
            rack(id, &format!("자전거 보관소 {id}"), district)
        })
        .collect()
}

pub fn feature(id: i64, gucd: Value, sto_cnt: Value, coordinates: Value) -> Value {
    json!({
        "type": "Feature",
        "id": id,
        "properties": { "gucd": gucd, "sto_cnt": sto_cnt },
        "geometry": { "type": "Point", "coordinates": coordinates },
    })
}

pub fn collection(features: Vec<Value>) -> String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}
