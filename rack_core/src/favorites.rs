use crate::model::{Outcome, Rack, RackId};
use crate::registry::RackRegistry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub rack_id: RackId,
    pub memo: String,
}

/// A favorite joined with the rack it points at.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFavorite<'a> {
    pub rack_id: &'a RackId,
    pub memo: &'a str,
    pub rack: &'a Rack,
}

/// Rack id to memo entries, at most one per rack, in insertion order.
///
/// Entries only hold ids. An entry whose rack is gone is skipped by
/// [`FavoriteIndex::resolve`] but stays stored until removed.
#[derive(Debug, Clone, Default)]
pub struct FavoriteIndex {
    entries: Vec<Favorite>,
}

impl FavoriteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Favorite] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, rack_id: &RackId) -> bool {
        self.entries.iter().any(|fav| fav.rack_id == *rack_id)
    }

    pub fn add(&mut self, rack_id: RackId) -> Outcome {
        if self.contains(&rack_id) {
            return Outcome::Unchanged;
        }
        self.entries.push(Favorite {
            rack_id,
            memo: String::new(),
        });
        Outcome::Applied
    }

    pub fn remove(&mut self, rack_id: &RackId) -> Outcome {
        let before = self.entries.len();
        self.entries.retain(|fav| fav.rack_id != *rack_id);
        if self.entries.len() < before {
            Outcome::Applied
        } else {
            Outcome::NotFound
        }
    }

    pub fn update_memo(&mut self, rack_id: &RackId, memo: impl Into<String>) -> Outcome {
        match self.entries.iter_mut().find(|fav| fav.rack_id == *rack_id) {
            Some(fav) => {
                fav.memo = memo.into();
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    pub fn resolve<'a>(&'a self, registry: &'a RackRegistry) -> Vec<ResolvedFavorite<'a>> {
        self.entries
            .iter()
            .filter_map(|fav| {
                registry.get(&fav.rack_id).map(|rack| ResolvedFavorite {
                    rack_id: &fav.rack_id,
                    memo: &fav.memo,
                    rack,
                })
            })
            .collect()
    }
}
