use thiserror::Error;

/// Failures of the one-shot startup ingestion. All of them are fatal for the
/// session; no partial rack list is ever produced.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("feed payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feed payload has no `features` list")]
    MissingFeatures,
    #[error("feature #{index} is malformed: {source}")]
    MalformedFeature {
        index: usize,
        source: serde_json::Error,
    },
    #[error("feature #{index} has no usable id")]
    MissingId { index: usize },
    #[error("feature #{index} repeats rack id {id}")]
    DuplicateId { index: usize, id: String },
}

/// Rejections of create/update drafts. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("rack name must not be empty")]
    EmptyName,
    #[error("rack district must not be empty")]
    EmptyDistrict,
    #[error("capacity must not be negative, got {0}")]
    NegativeCapacity(i64),
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a rack id")]
pub struct RackIdParseError(pub String);
