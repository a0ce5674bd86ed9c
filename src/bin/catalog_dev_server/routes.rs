//! Admin API routes, mounted under the admin prefix.

use super::*;

pub(super) fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/brands", get(list_brands).post(create_brand))
        .route("/brands/:id", delete(delete_brand))
        .route("/models", get(list_models).post(create_model))
        .route("/models/:id", delete(delete_model))
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", delete(delete_car))
}
