use crate::dates::display_date;
use crate::error::IngestError;
use crate::model::{Rack, RackDetails, RackId, whole_number};
use serde_json::Value;
use shared::incheon::district::{district_name, placeholder_label};
use shared::incheon::feed::{Feature, FeatureCollection, FeatureProperties};
use std::collections::HashSet;
use tracing::debug;

const LAT_DIGITS: usize = 13;
const LNG_DIGITS: usize = 12;

/// Parses a raw feed body and normalizes every feature, all or nothing.
pub fn ingest(body: &str) -> Result<Vec<Rack>, IngestError> {
    let collection = parse_payload(body)?;
    normalize(&collection)
}

pub fn parse_payload(body: &str) -> Result<FeatureCollection, IngestError> {
    let mut value: Value = serde_json::from_str(body)?;
    let Some(Value::Array(raw_features)) = value.get_mut("features").map(Value::take) else {
        return Err(IngestError::MissingFeatures);
    };

    let features = raw_features
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value::<Feature>(raw)
                .map_err(|source| IngestError::MalformedFeature { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection { features })
}

/// Maps the collection to racks in source order. Fails on the first feature
/// without an id or with an id already seen.
pub fn normalize(collection: &FeatureCollection) -> Result<Vec<Rack>, IngestError> {
    let mut seen = HashSet::with_capacity(collection.features.len());
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let rack = normalize_feature(index, feature)?;
            if !seen.insert(rack.id.clone()) {
                return Err(IngestError::DuplicateId {
                    index,
                    id: rack.id.to_string(),
                });
            }
            Ok(rack)
        })
        .collect()
}

pub fn normalize_feature(index: usize, feature: &Feature) -> Result<Rack, IngestError> {
    let id = RackId::from_json(&feature.id).ok_or(IngestError::MissingId { index })?;
    let empty = FeatureProperties::default();
    let p = feature.properties.as_ref().unwrap_or(&empty);
    let coordinates = feature
        .geometry
        .as_ref()
        .and_then(|g| g.coordinates.as_ref());

    let name = format!("자전거 보관소 {id}");

    Ok(Rack {
        id,
        details: RackDetails {
            name,
            district: resolve_district(p.gucd.as_ref()),
            lat: coordinate(coordinates, 1, LAT_DIGITS),
            lng: coordinate(coordinates, 0, LNG_DIGITS),
            capacity: count(p.sto_cnt.as_ref()),
            updated_at: display_date(p.update_ymd.as_ref()),
            installation_date: display_date(p.ist_ymd.as_ref()),
            manager: text(p.mngt.as_ref()),
            road_segment: text(p.ridn.as_ref()),
            ftc_number: text(p.ftc.as_ref()),
        },
    })
}

/// Absent, null and empty codes give `""`. Any other code, `0` included, is
/// looked up and falls back to the placeholder.
pub fn resolve_district(code: Option<&Value>) -> String {
    let code = text(code);
    if code.is_empty() {
        return code;
    }
    match district_name(&code) {
        Some(name) => name.to_string(),
        None => {
            debug!(code = %code, "district code not in lookup table");
            placeholder_label(&code)
        }
    }
}

fn coordinate(coordinates: Option<&Value>, position: usize, digits: usize) -> Option<f64> {
    let raw = coordinates?.get(position)?.as_f64()?;
    Some(round_to(raw, digits))
}

/// Rounds through the decimal representation so the stored value is exactly
/// what a fixed-digit rendering would show.
fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

fn count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Opaque text fields arrive as strings or numbers; anything absent is empty.
/// Whole numbers render without a fraction, so `28177.0` reads as `28177`.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match whole_number(n) {
            Some(whole) => whole.to_string(),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
