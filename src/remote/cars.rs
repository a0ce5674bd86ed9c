use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::model::Resource;

use super::http_client::{decode_error, transport_error};
use super::*;

impl RemoteClient {
    pub async fn list_cars(&self) -> Result<Vec<Car>, RequestError> {
        self.get_json(Resource::Car.path(), "list cars").await
    }

    /// `POST /cars` as multipart: `description`, `year`, `brandId`, `modelId`
    /// text parts plus the `image` file part.
    pub async fn create_car(&self, car: &NewCar) -> Result<Car, RequestError> {
        let label = "create car";
        let image = Part::bytes(car.image.bytes.clone())
            .file_name(car.image.file_name.clone())
            .mime_str(&car.image.content_type)
            .map_err(|err| RequestError::transport(format!("{}: image part: {}", label, err)))?;
        let form = Form::new()
            .text("description", car.description.clone())
            .text("year", car.year.to_string())
            .text("brandId", car.brand_id.to_string())
            .text("modelId", car.model_id.to_string())
            .part("image", image);

        debug!(
            method = "POST",
            path = Resource::Car.path(),
            image = %car.image.file_name,
            bytes = car.image.bytes.len(),
            "admin api request"
        );
        let resp = self
            .client
            .post(self.url(Resource::Car.path()))
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error(label, err))?;
        let resp = self.ensure_ok(resp, label).await?;
        resp.json().await.map_err(|err| decode_error(label, err))
    }

    pub async fn delete_car(&self, id: CarId) -> Result<(), RequestError> {
        self.delete(&Resource::Car.item_path(id.get()), "delete car")
            .await
    }
}
