use tracing::debug;

use crate::model::{BrandId, Car, CarId, ModelId, Resource};

use super::Catalog;

/// The operator's current brand, model and car selection.
///
/// Setting a selection does not check it against any collection; a selection
/// may briefly point at something a pending refresh is about to remove.
/// [`Selection::reconcile`] is what restores the invariant that every present
/// id exists in the current catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    brand: Option<BrandId>,
    model: Option<ModelId>,
    car: Option<CarId>,
}

impl Selection {
    pub fn brand(&self) -> Option<BrandId> {
        self.brand
    }

    pub fn model(&self) -> Option<ModelId> {
        self.model
    }

    pub fn car(&self) -> Option<CarId> {
        self.car
    }

    pub fn get(&self, kind: Resource) -> Option<i64> {
        match kind {
            Resource::Brand => self.brand.map(BrandId::get),
            Resource::Model => self.model.map(ModelId::get),
            Resource::Car => self.car.map(CarId::get),
        }
    }

    pub fn select(&mut self, kind: Resource, id: i64) {
        match kind {
            Resource::Brand => self.brand = Some(BrandId(id)),
            Resource::Model => self.model = Some(ModelId(id)),
            Resource::Car => self.car = Some(CarId(id)),
        }
    }

    pub fn select_brand(&mut self, id: BrandId) {
        self.brand = Some(id);
    }

    pub fn select_model(&mut self, id: ModelId) {
        self.model = Some(id);
    }

    pub fn select_car(&mut self, id: CarId) {
        self.car = Some(id);
    }

    pub fn clear(&mut self, kind: Resource) {
        match kind {
            Resource::Brand => self.brand = None,
            Resource::Model => self.model = None,
            Resource::Car => self.car = None,
        }
    }

    /// Clear `kind` only if it currently points at `id`.
    pub fn clear_if(&mut self, kind: Resource, id: i64) -> bool {
        if self.get(kind) == Some(id) {
            self.clear(kind);
            return true;
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.model.is_none() && self.car.is_none()
    }

    /// Drop every selection whose id is missing from `catalog`. Returns the
    /// kinds that were cleared.
    pub fn reconcile(&mut self, catalog: &Catalog) -> Vec<Resource> {
        let mut cleared = Vec::new();
        for kind in Resource::ALL {
            let Some(id) = self.get(kind) else {
                continue;
            };
            if !catalog.contains(kind, id) {
                self.clear(kind);
                debug!(%kind, id, revision = catalog.revision, "selection cleared");
                cleared.push(kind);
            }
        }
        cleared
    }

    pub fn holds_for(&self, catalog: &Catalog) -> bool {
        Resource::ALL
            .iter()
            .all(|&kind| self.get(kind).is_none_or(|id| catalog.contains(kind, id)))
    }

    pub fn selected_car<'a>(&self, catalog: &'a Catalog) -> Option<&'a Car> {
        self.car.and_then(|id| catalog.car(id))
    }
}

#[cfg(test)]
#[path = "../tests/catalog/selection_tests.rs"]
mod tests;
