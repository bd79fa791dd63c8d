use crate::error::ValidationError;
use crate::model::{Outcome, Rack, RackDetails, RackId};

/// Owns the canonical rack collection. Order is observable: ingested racks keep
/// feed order and created racks go to the front.
#[derive(Debug, Clone, Default)]
pub struct RackRegistry {
    racks: Vec<Rack>,
}

impl RackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with an ingested batch.
    pub fn replace_all(&mut self, racks: Vec<Rack>) {
        self.racks = racks;
    }

    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    pub fn len(&self) -> usize {
        self.racks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.racks.is_empty()
    }

    pub fn get(&self, id: &RackId) -> Option<&Rack> {
        self.racks.iter().find(|rack| rack.id == *id)
    }

    pub fn contains(&self, id: &RackId) -> bool {
        self.get(id).is_some()
    }

    pub fn create(&mut self, details: RackDetails) -> Result<RackId, ValidationError> {
        details.validate()?;
        let id = self.fresh_id();
        self.racks.insert(
            0,
            Rack {
                id: id.clone(),
                details,
            },
        );
        Ok(id)
    }

    pub fn update(&mut self, id: &RackId, details: RackDetails) -> Result<Outcome, ValidationError> {
        details.validate()?;
        match self.racks.iter_mut().find(|rack| rack.id == *id) {
            Some(rack) => {
                rack.details = details;
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::NotFound),
        }
    }

    /// Removes the rack with `id`, returning it if it existed.
    pub fn delete(&mut self, id: &RackId) -> Option<Rack> {
        let position = self.racks.iter().position(|rack| rack.id == *id)?;
        Some(self.racks.remove(position))
    }

    fn fresh_id(&self) -> RackId {
        loop {
            let id = RackId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
