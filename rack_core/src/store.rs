use crate::error::ValidationError;
use crate::favorites::{FavoriteIndex, ResolvedFavorite};
use crate::model::{Outcome, Rack, RackDetails, RackId};
use crate::query::{self, DistrictFilter, RackPage, RackQuery};
use crate::registry::RackRegistry;
use tracing::{debug, warn};

/// The session's single mutable store. Racks and favorites are only changed
/// through the commands below, which keep favorites consistent with racks.
#[derive(Debug, Clone, Default)]
pub struct RackStore {
    registry: RackRegistry,
    favorites: FavoriteIndex,
}

impl RackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_racks(racks: Vec<Rack>) -> Self {
        let mut store = Self::new();
        store.registry.replace_all(racks);
        store
    }

    pub fn registry(&self) -> &RackRegistry {
        &self.registry
    }

    pub fn favorites(&self) -> &FavoriteIndex {
        &self.favorites
    }

    pub fn get(&self, id: &RackId) -> Option<&Rack> {
        self.registry.get(id)
    }

    pub fn create(&mut self, details: RackDetails) -> Result<RackId, ValidationError> {
        self.registry.create(details).inspect_err(|e| {
            warn!(error = %e, "rejected rack creation");
        })
    }

    pub fn update(&mut self, id: &RackId, details: RackDetails) -> Result<Outcome, ValidationError> {
        let outcome = self.registry.update(id, details).inspect_err(|e| {
            warn!(rack_id = %id, error = %e, "rejected rack update");
        })?;
        if outcome == Outcome::NotFound {
            debug!(rack_id = %id, "update for unknown rack ignored");
        }
        Ok(outcome)
    }

    /// Deletes the rack and, when it existed, its favorite entry.
    pub fn delete(&mut self, id: &RackId) -> Outcome {
        match self.registry.delete(id) {
            Some(_) => {
                self.favorites.remove(id);
                Outcome::Applied
            }
            None => {
                debug!(rack_id = %id, "delete for unknown rack ignored");
                Outcome::NotFound
            }
        }
    }

    pub fn add_favorite(&mut self, rack_id: RackId) -> Outcome {
        self.favorites.add(rack_id)
    }

    pub fn remove_favorite(&mut self, rack_id: &RackId) -> Outcome {
        self.favorites.remove(rack_id)
    }

    pub fn update_memo(&mut self, rack_id: &RackId, memo: impl Into<String>) -> Outcome {
        self.favorites.update_memo(rack_id, memo)
    }

    pub fn resolved_favorites(&self) -> Vec<ResolvedFavorite<'_>> {
        self.favorites.resolve(&self.registry)
    }

    pub fn is_favorite(&self, rack_id: &RackId) -> bool {
        self.favorites.contains(rack_id)
    }

    pub fn district_facets(&self) -> Vec<DistrictFilter> {
        query::district_facets(self.registry.racks())
    }

    pub fn query(&self, rack_query: &RackQuery, page: usize) -> RackPage<'_> {
        query::run(self.registry.racks(), &self.favorites, rack_query, page)
    }
}
