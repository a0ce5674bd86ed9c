use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::*;

pub(super) async fn list_cars(State(state): State<Arc<AppState>>) -> Json<Vec<Car>> {
    Json(state.tables.read().await.list_cars())
}

#[derive(Default)]
struct RawCarForm {
    description: Option<String>,
    year: Option<String>,
    brand_id: Option<String>,
    model_id: Option<String>,
    image: Option<(String, Option<String>, Vec<u8>)>,
}

pub(super) async fn create_car(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Car>), Response> {
    let mut raw = RawCarForm::default();
    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_request)?;
                raw.image = Some((file_name, content_type, bytes.to_vec()));
            }
            "description" => raw.description = Some(field.text().await.map_err(bad_request)?),
            "year" => raw.year = Some(field.text().await.map_err(bad_request)?),
            "brandId" => raw.brand_id = Some(field.text().await.map_err(bad_request)?),
            "modelId" => raw.model_id = Some(field.text().await.map_err(bad_request)?),
            _ => {}
        }
    }

    let date_added = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| internal_error(anyhow::Error::new(err).context("format dateAdded")))?;

    let mut tables = state.tables.write().await;
    let form = parse_car_form(raw, &tables)?;
    let car = tables.insert_car(form, date_added);
    info!(id = %car.id, image = %car.image_ref, "car created");
    Ok((StatusCode::CREATED, Json(car)))
}

fn parse_car_form(raw: RawCarForm, tables: &Tables) -> Result<CarForm, Response> {
    let description = raw.description.unwrap_or_default().trim().to_string();
    if description.is_empty() {
        return Err(bad_request("description is required"));
    }

    let year: i32 = required(raw.year, "year")?
        .parse()
        .map_err(|_| bad_request("year must be a whole number"))?;
    if year <= 0 {
        return Err(bad_request("year must be positive"));
    }

    let brand_id = BrandId(parse_id(raw.brand_id, "brandId")?);
    if !tables.brands.iter().any(|b| b.id == brand_id) {
        return Err(bad_request(format!("unknown brand {}", brand_id)));
    }
    let model_id = ModelId(parse_id(raw.model_id, "modelId")?);
    if !tables.models.iter().any(|m| m.id == model_id) {
        return Err(bad_request(format!("unknown model {}", model_id)));
    }

    let Some((file_name, content_type, bytes)) = raw.image else {
        return Err(bad_request("image is required"));
    };
    if bytes.is_empty() {
        return Err(bad_request("image is empty"));
    }
    let content_type = content_type.unwrap_or_else(|| {
        mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    });

    Ok(CarForm {
        year,
        brand_id,
        model_id,
        description,
        file_name,
        content_type,
        bytes,
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, Response> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(bad_request(format!("{} is required", field))),
    }
}

fn parse_id(value: Option<String>, field: &str) -> Result<i64, Response> {
    required(value, field)?
        .parse()
        .map_err(|_| bad_request(format!("{} must be an integer id", field)))
}

pub(super) async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    if !state.tables.write().await.remove_car(CarId(id)) {
        return Err(not_found());
    }
    info!(id, "car deleted");
    Ok(StatusCode::NO_CONTENT)
}
