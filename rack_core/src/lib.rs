pub mod browse;
pub mod dates;
pub mod error;
pub mod favorites;
pub mod model;
pub mod normalizer;
pub mod query;
pub mod registry;
pub mod session;
pub mod store;

pub use browse::BrowseState;
pub use error::{IngestError, RackIdParseError, ValidationError};
pub use favorites::{Favorite, FavoriteIndex, ResolvedFavorite};
pub use model::{MapMarker, Outcome, Rack, RackDetails, RackId};
pub use query::{DistrictFilter, PAGE_SIZE, Pagination, RackPage, RackQuery};
pub use registry::RackRegistry;
pub use session::LoadState;
pub use store::RackStore;
