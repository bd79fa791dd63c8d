use crate::error::{RackIdParseError, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Canonical rack identity.
///
/// Feed racks carry the numeric FeatureServer id, racks created in the session
/// get a UUID v7. Any other text id from the feed is kept as `External`. Every
/// textual or JSON form is normalized into this type once, so `"42"`, `" 42"`
/// and `42` all name the same rack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RackId {
    Feed(i64),
    Local(Uuid),
    External(String),
}

impl RackId {
    pub fn generate() -> Self {
        Self::Local(Uuid::now_v7())
    }

    /// Reads a feature id as sent by the feed, which may be a number or a string.
    /// Only null, blank text and non-scalar values are unusable.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(
                whole_number(n)
                    .map(Self::Feed)
                    .unwrap_or_else(|| Self::External(n.to_string())),
            ),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// A JSON number with no fractional part as `i64`, including floats such as
/// `28177.0`.
pub(crate) fn whole_number(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

impl Display for RackId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feed(id) => write!(f, "{id}"),
            Self::Local(id) => write!(f, "{id}"),
            Self::External(id) => f.write_str(id),
        }
    }
}

impl FromStr for RackId {
    type Err = RackIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RackIdParseError(s.to_string()));
        }
        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(Self::Feed(id));
        }
        Ok(Uuid::parse_str(trimmed)
            .map(Self::Local)
            .unwrap_or_else(|_| Self::External(trimmed.to_string())))
    }
}

impl From<i64> for RackId {
    fn from(id: i64) -> Self {
        Self::Feed(id)
    }
}

impl From<Uuid> for RackId {
    fn from(id: Uuid) -> Self {
        Self::Local(id)
    }
}

impl Serialize for RackId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Feed(id) => serializer.serialize_i64(*id),
            Self::Local(id) => serializer.collect_str(id),
            Self::External(id) => serializer.serialize_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for RackId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(Self::Feed(id)),
            RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Everything about a rack except its identity. This is also the payload of
/// create and update commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RackDetails {
    pub name: String,
    pub district: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub capacity: i64,
    pub updated_at: String,
    pub installation_date: String,
    pub manager: String,
    pub road_segment: String,
    pub ftc_number: String,
}

impl RackDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.district.trim().is_empty() {
            return Err(ValidationError::EmptyDistrict);
        }
        if self.capacity < 0 {
            return Err(ValidationError::NegativeCapacity(self.capacity));
        }
        if let Some(lat) = self.lat
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if let Some(lng) = self.lng
            && !(-180.0..=180.0).contains(&lng)
        {
            return Err(ValidationError::LongitudeOutOfRange(lng));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    pub id: RackId,
    #[serde(flatten)]
    pub details: RackDetails,
}

impl Rack {
    /// Marker for the map widget; `None` when either coordinate is unknown.
    pub fn marker(&self) -> Option<MapMarker> {
        let (lat, lng) = (self.details.lat?, self.details.lng?);
        Some(MapMarker {
            lat,
            lng,
            label: self.details.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

/// Result of a store command. Missing targets are reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Unchanged,
    NotFound,
}
