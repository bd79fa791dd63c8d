use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FEED_URL: &str = "https://smart.incheon.go.kr/server/rest/services/Hosted/%EC%98%A4%ED%94%88%EB%8D%B0%EC%9D%B4%ED%84%B0_%EA%B5%90%ED%86%B5%EC%8B%9C%EC%84%A4%EB%AC%BC_%EC%A0%95%EB%B3%B4_%EC%9E%90%EC%A0%84%EA%B1%B0%EB%B3%B4%EA%B4%80%EC%86%8C/FeatureServer/26/query?outFields=*&where=1%3D1&f=geojson";

/// GeoJSON feature collection returned by the bicycle-rack FeatureServer.
///
/// Only `features` is required. The server also sends `type`, `crs` and paging
/// hints, which are ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Feature {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Property bag of one rack. The feed is loosely typed (codes and counts show up
/// both as numbers and as strings), so every field is kept as raw JSON and
/// coerced during normalization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FeatureProperties {
    /// District code.
    pub gucd: Option<Value>,
    /// Stock count.
    pub sto_cnt: Option<Value>,
    pub update_ymd: Option<Value>,
    pub ist_ymd: Option<Value>,
    /// Managing agency.
    pub mngt: Option<Value>,
    /// Road segment id.
    pub ridn: Option<Value>,
    /// Feature catalog number.
    pub ftc: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Geometry {
    /// `[longitude, latitude]` for point geometries.
    pub coordinates: Option<Value>,
}
