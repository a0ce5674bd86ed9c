use std::sync::{Arc, RwLock};
use std::time::Instant;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::{RefreshError, RequestError};
use crate::model::Resource;
use crate::remote::CatalogApi;

use super::Catalog;

/// Owns the three mirrored collections.
///
/// `refresh` lists brands, models and cars concurrently and swaps in a new
/// [`Catalog`] only when all three succeeded. Overlapping refreshes are not
/// serialized: each commits when it completes, so the refresh that completes
/// last is the one retained.
pub struct CatalogStore<A> {
    api: A,
    current: RwLock<Arc<Catalog>>,
}

impl<A: CatalogApi> CatalogStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            current: RwLock::new(Arc::new(Catalog::default())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The last committed snapshot.
    pub fn current(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub async fn refresh(&self) -> Result<Arc<Catalog>, RefreshError> {
        let started = Instant::now();

        // Wait for all three to settle before deciding; nothing is committed
        // on partial success.
        let (brands, models, cars) = tokio::join!(
            self.api.list_brands(),
            self.api.list_models(),
            self.api.list_cars()
        );

        let failed = |resource: Resource| {
            move |source: RequestError| {
                warn!(%resource, error = %source, "catalog refresh failed");
                RefreshError { resource, source }
            }
        };
        let brands = brands.map_err(failed(Resource::Brand))?;
        let models = models.map_err(failed(Resource::Model))?;
        let cars = cars.map_err(failed(Resource::Car))?;

        let committed = {
            let mut slot = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let next = Arc::new(Catalog {
                brands,
                models,
                cars,
                revision: slot.revision + 1,
                refreshed_at: Some(OffsetDateTime::now_utc()),
            });
            *slot = next.clone();
            next
        };

        debug!(
            revision = committed.revision,
            brands = committed.brands.len(),
            models = committed.models.len(),
            cars = committed.cars.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog refreshed"
        );
        Ok(committed)
    }
}

#[cfg(test)]
#[path = "../tests/catalog/store_tests.rs"]
mod tests;
