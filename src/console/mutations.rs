use tracing::{info, warn};

use crate::error::{AdminError, DraftField, ValidationError};
use crate::model::{Brand, BrandId, Car, CarId, CarModel, ModelId, Resource};

use super::draft::validate_name;
use super::*;

impl<A: CatalogApi> AdminConsole<A> {
    /// Create a brand from the "new brand" field.
    pub async fn create_brand(&mut self) -> Result<Brand, AdminError> {
        let name = validate_name(&self.drafts.new_brand_name, DraftField::BrandName)?;

        let brand = self
            .store
            .api()
            .create_brand(&name)
            .await
            .inspect_err(|err| warn!(%name, error = %err, "create brand failed"))?;
        info!(id = %brand.id, name = %brand.name, "brand created");

        let catalog = self.sync().await?;
        self.drafts.new_brand_name.clear();
        if self.auto_select_created && catalog.brand(brand.id).is_some() {
            self.select(Resource::Brand, brand.id.get());
        }
        Ok(brand)
    }

    pub async fn delete_brand(&mut self, id: BrandId) -> Result<(), AdminError> {
        self.store
            .api()
            .delete_brand(id)
            .await
            .inspect_err(|err| warn!(%id, error = %err, "delete brand failed"))?;
        info!(%id, "brand deleted");

        self.sync().await?;
        if self.selection.brand() == Some(id) {
            self.clear_selection(Resource::Brand);
        }
        Ok(())
    }

    pub async fn delete_selected_brand(&mut self) -> Result<(), AdminError> {
        let id = self.selection.brand().ok_or(ValidationError::Missing {
            field: DraftField::Brand,
        })?;
        self.delete_brand(id).await
    }

    /// Create a model from the "new model" field.
    pub async fn create_model(&mut self) -> Result<CarModel, AdminError> {
        let name = validate_name(&self.drafts.new_model_name, DraftField::ModelName)?;

        let model = self
            .store
            .api()
            .create_model(&name)
            .await
            .inspect_err(|err| warn!(%name, error = %err, "create model failed"))?;
        info!(id = %model.id, name = %model.name, "model created");

        let catalog = self.sync().await?;
        self.drafts.new_model_name.clear();
        if self.auto_select_created && catalog.model(model.id).is_some() {
            self.select(Resource::Model, model.id.get());
        }
        Ok(model)
    }

    pub async fn delete_model(&mut self, id: ModelId) -> Result<(), AdminError> {
        self.store
            .api()
            .delete_model(id)
            .await
            .inspect_err(|err| warn!(%id, error = %err, "delete model failed"))?;
        info!(%id, "model deleted");

        self.sync().await?;
        if self.selection.model() == Some(id) {
            self.clear_selection(Resource::Model);
        }
        Ok(())
    }

    pub async fn delete_selected_model(&mut self) -> Result<(), AdminError> {
        let id = self.selection.model().ok_or(ValidationError::Missing {
            field: DraftField::Model,
        })?;
        self.delete_model(id).await
    }

    /// Submit the car form. On success the form and the brand/model pickers
    /// are emptied; on any failure they are left for the operator to fix.
    pub async fn submit_car(&mut self) -> Result<Car, AdminError> {
        let new_car = self.drafts.car.validate()?;

        let car = self
            .store
            .api()
            .create_car(&new_car)
            .await
            .inspect_err(|err| warn!(error = %err, "create car failed"))?;
        info!(
            id = %car.id,
            brand = %car.brand_id,
            model = %car.model_id,
            year = car.year,
            "car created"
        );

        self.sync().await?;
        self.drafts.car.clear();
        self.selection.clear(Resource::Brand);
        self.selection.clear(Resource::Model);
        Ok(car)
    }

    pub async fn delete_car(&mut self, id: CarId) -> Result<(), AdminError> {
        self.store
            .api()
            .delete_car(id)
            .await
            .inspect_err(|err| warn!(%id, error = %err, "delete car failed"))?;
        info!(%id, "car deleted");

        self.sync().await?;
        if self.selection.car() == Some(id) {
            self.clear_selection(Resource::Car);
        }
        Ok(())
    }

    pub async fn delete_selected_car(&mut self) -> Result<(), AdminError> {
        let id = self.selection.car().ok_or(ValidationError::Missing {
            field: DraftField::Car,
        })?;
        self.delete_car(id).await
    }
}
