//! Brands and models: both are `{id, name}` collections created from a JSON
//! `{name}` body.

use crate::model::Resource;

use super::*;

#[derive(Debug, serde::Serialize)]
struct CreateNamedRequest<'a> {
    name: &'a str,
}

impl RemoteClient {
    pub async fn list_brands(&self) -> Result<Vec<Brand>, RequestError> {
        self.get_json(Resource::Brand.path(), "list brands").await
    }

    pub async fn create_brand(&self, name: &str) -> Result<Brand, RequestError> {
        self.post_json(
            Resource::Brand.path(),
            &CreateNamedRequest { name },
            "create brand",
        )
        .await
    }

    pub async fn delete_brand(&self, id: BrandId) -> Result<(), RequestError> {
        self.delete(&Resource::Brand.item_path(id.get()), "delete brand")
            .await
    }

    pub async fn list_models(&self) -> Result<Vec<CarModel>, RequestError> {
        self.get_json(Resource::Model.path(), "list models").await
    }

    pub async fn create_model(&self, name: &str) -> Result<CarModel, RequestError> {
        self.post_json(
            Resource::Model.path(),
            &CreateNamedRequest { name },
            "create model",
        )
        .await
    }

    pub async fn delete_model(&self, id: ModelId) -> Result<(), RequestError> {
        self.delete(&Resource::Model.item_path(id.get()), "delete model")
            .await
    }
}
