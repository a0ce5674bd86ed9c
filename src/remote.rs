use std::future::Future;

use anyhow::{Context, Result};

use crate::config::AdminConfig;
use crate::error::RequestError;
use crate::model::{Brand, BrandId, Car, CarId, CarModel, ModelId, NewCar};

mod cars;
mod http_client;
mod names;

/// List, create and delete for each admin collection, as seen by the client.
///
/// Every call is a single round-trip; nothing here retries. Failures come back
/// as [`RequestError`] for the caller to surface.
pub trait CatalogApi {
    fn list_brands(&self) -> impl Future<Output = Result<Vec<Brand>, RequestError>> + Send;
    fn create_brand(&self, name: &str)
    -> impl Future<Output = Result<Brand, RequestError>> + Send;
    fn delete_brand(&self, id: BrandId) -> impl Future<Output = Result<(), RequestError>> + Send;

    fn list_models(&self) -> impl Future<Output = Result<Vec<CarModel>, RequestError>> + Send;
    fn create_model(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<CarModel, RequestError>> + Send;
    fn delete_model(&self, id: ModelId) -> impl Future<Output = Result<(), RequestError>> + Send;

    fn list_cars(&self) -> impl Future<Output = Result<Vec<Car>, RequestError>> + Send;
    fn create_car(&self, car: &NewCar) -> impl Future<Output = Result<Car, RequestError>> + Send;
    fn delete_car(&self, id: CarId) -> impl Future<Output = Result<(), RequestError>> + Send;
}

#[derive(Clone)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: config.api_base().to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogApi for RemoteClient {
    async fn list_brands(&self) -> Result<Vec<Brand>, RequestError> {
        RemoteClient::list_brands(self).await
    }

    async fn create_brand(&self, name: &str) -> Result<Brand, RequestError> {
        RemoteClient::create_brand(self, name).await
    }

    async fn delete_brand(&self, id: BrandId) -> Result<(), RequestError> {
        RemoteClient::delete_brand(self, id).await
    }

    async fn list_models(&self) -> Result<Vec<CarModel>, RequestError> {
        RemoteClient::list_models(self).await
    }

    async fn create_model(&self, name: &str) -> Result<CarModel, RequestError> {
        RemoteClient::create_model(self, name).await
    }

    async fn delete_model(&self, id: ModelId) -> Result<(), RequestError> {
        RemoteClient::delete_model(self, id).await
    }

    async fn list_cars(&self) -> Result<Vec<Car>, RequestError> {
        RemoteClient::list_cars(self).await
    }

    async fn create_car(&self, car: &NewCar) -> Result<Car, RequestError> {
        RemoteClient::create_car(self, car).await
    }

    async fn delete_car(&self, id: CarId) -> Result<(), RequestError> {
        RemoteClient::delete_car(self, id).await
    }
}
