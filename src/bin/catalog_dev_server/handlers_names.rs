use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct CreateNamedRequest {
    name: String,
}

fn required_name(req: CreateNamedRequest) -> Result<String, Response> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(bad_request("name is required"));
    }
    Ok(name.to_string())
}

pub(super) async fn list_brands(State(state): State<Arc<AppState>>) -> Json<Vec<Brand>> {
    Json(state.tables.read().await.brands.clone())
}

pub(super) async fn create_brand(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<Brand>), Response> {
    let name = required_name(req)?;
    let brand = state.tables.write().await.insert_brand(name);
    info!(id = %brand.id, name = %brand.name, "brand created");
    Ok((StatusCode::CREATED, Json(brand)))
}

pub(super) async fn delete_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    if !state.tables.write().await.remove_brand(BrandId(id)) {
        return Err(not_found());
    }
    info!(id, "brand deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_models(State(state): State<Arc<AppState>>) -> Json<Vec<CarModel>> {
    Json(state.tables.read().await.models.clone())
}

pub(super) async fn create_model(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<CarModel>), Response> {
    let name = required_name(req)?;
    let model = state.tables.write().await.insert_model(name);
    info!(id = %model.id, name = %model.name, "model created");
    Ok((StatusCode::CREATED, Json(model)))
}

pub(super) async fn delete_model(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    if !state.tables.write().await.remove_model(ModelId(id)) {
        return Err(not_found());
    }
    info!(id, "model deleted");
    Ok(StatusCode::NO_CONTENT)
}
