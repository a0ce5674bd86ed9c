//! The admin console: the single writer of the catalog.
//!
//! Every mutation runs as validate -> API call -> refresh -> reconcile ->
//! reset owned drafts. A failed API call leaves the drafts as they were and
//! skips the rest; a failed refresh leaves the previous snapshot in place.

use std::sync::Arc;

use tracing::info;

use crate::catalog::{Catalog, CatalogStore, Selection};
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::model::{Brand, Car, CarModel, Resource};
use crate::remote::CatalogApi;

mod draft;
mod mutations;

pub use self::draft::{CarDraft, Drafts, validate_name};

/// Search boxes above the three lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQueries {
    pub brands: String,
    pub models: String,
    pub cars: String,
}

pub struct AdminConsole<A> {
    store: CatalogStore<A>,
    selection: Selection,
    drafts: Drafts,
    search: SearchQueries,
    auto_select_created: bool,
}

impl<A: CatalogApi> AdminConsole<A> {
    pub fn new(api: A, config: &AdminConfig) -> Self {
        Self::with_store(CatalogStore::new(api), config)
    }

    pub fn with_store(store: CatalogStore<A>, config: &AdminConfig) -> Self {
        Self {
            store,
            selection: Selection::default(),
            drafts: Drafts::default(),
            search: SearchQueries::default(),
            auto_select_created: config.auto_select_created,
        }
    }

    pub fn store(&self) -> &CatalogStore<A> {
        &self.store
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.store.current()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut Drafts {
        &mut self.drafts
    }

    pub fn car_draft_mut(&mut self) -> &mut CarDraft {
        &mut self.drafts.car
    }

    pub fn search_mut(&mut self) -> &mut SearchQueries {
        &mut self.search
    }

    /// Refresh and reconcile. Used on startup and by every mutation.
    pub async fn sync(&mut self) -> Result<Arc<Catalog>, AdminError> {
        self.store.refresh().await?;
        let catalog = self.store.current();
        self.reconcile(&catalog);
        Ok(catalog)
    }

    fn reconcile(&mut self, catalog: &Catalog) {
        let cleared = self.selection.reconcile(catalog);
        if !cleared.is_empty() {
            info!(?cleared, revision = catalog.revision, "dropped stale selections");
        }

        // The car form's brand/model pickers follow the same rule.
        let car = &mut self.drafts.car;
        if car.brand_id.is_some_and(|id| catalog.brand(id).is_none()) {
            car.brand_id = None;
        }
        if car.model_id.is_some_and(|id| catalog.model(id).is_none()) {
            car.model_id = None;
        }
    }

    /// Select a brand, model or car. Brand and model selections also fill the
    /// car form's pickers.
    pub fn select(&mut self, kind: Resource, id: i64) {
        self.selection.select(kind, id);
        match kind {
            Resource::Brand => self.drafts.car.brand_id = self.selection.brand(),
            Resource::Model => self.drafts.car.model_id = self.selection.model(),
            Resource::Car => {}
        }
    }

    pub fn clear_selection(&mut self, kind: Resource) {
        self.selection.clear(kind);
        match kind {
            Resource::Brand => self.drafts.car.brand_id = None,
            Resource::Model => self.drafts.car.model_id = None,
            Resource::Car => {}
        }
    }

    pub fn selected_car(&self) -> Option<Car> {
        let catalog = self.store.current();
        self.selection.selected_car(&catalog).cloned()
    }

    pub fn visible_brands(&self) -> Vec<Brand> {
        let catalog = self.store.current();
        catalog
            .filter_brands(&self.search.brands)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn visible_models(&self) -> Vec<CarModel> {
        let catalog = self.store.current();
        catalog
            .filter_models(&self.search.models)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn visible_cars(&self) -> Vec<Car> {
        let catalog = self.store.current();
        catalog
            .filter_cars(&self.search.cars)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/console/console_tests.rs"]
mod tests;
