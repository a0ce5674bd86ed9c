//! In-memory admin tables. Ids are assigned per table starting at 1 and are
//! never reused. Deleting a brand or model leaves cars pointing at it.

use std::collections::HashMap;

use super::*;

pub(super) struct StoredUpload {
    pub(super) content_type: String,
    pub(super) bytes: Vec<u8>,
}

pub(super) struct CarRecord {
    pub(super) id: CarId,
    pub(super) year: i32,
    pub(super) brand_id: BrandId,
    pub(super) model_id: ModelId,
    pub(super) description: String,
    pub(super) image_ref: String,
    pub(super) date_added: String,
}

/// A validated `POST /cars` form.
pub(super) struct CarForm {
    pub(super) year: i32,
    pub(super) brand_id: BrandId,
    pub(super) model_id: ModelId,
    pub(super) description: String,
    pub(super) file_name: String,
    pub(super) content_type: String,
    pub(super) bytes: Vec<u8>,
}

#[derive(Default)]
pub(super) struct Tables {
    pub(super) brands: Vec<Brand>,
    pub(super) models: Vec<CarModel>,
    pub(super) cars: Vec<CarRecord>,
    pub(super) uploads: HashMap<String, StoredUpload>,

    last_brand_id: i64,
    last_model_id: i64,
    last_car_id: i64,
}

impl Tables {
    pub(super) fn insert_brand(&mut self, name: String) -> Brand {
        self.last_brand_id += 1;
        let brand = Brand {
            id: BrandId(self.last_brand_id),
            name,
        };
        self.brands.push(brand.clone());
        brand
    }

    pub(super) fn insert_model(&mut self, name: String) -> CarModel {
        self.last_model_id += 1;
        let model = CarModel {
            id: ModelId(self.last_model_id),
            name,
        };
        self.models.push(model.clone());
        model
    }

    pub(super) fn remove_brand(&mut self, id: BrandId) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b.id != id);
        self.brands.len() != before
    }

    pub(super) fn remove_model(&mut self, id: ModelId) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m.id != id);
        self.models.len() != before
    }

    pub(super) fn insert_car(&mut self, form: CarForm, date_added: String) -> Car {
        self.last_car_id += 1;
        let id = CarId(self.last_car_id);
        let image_ref = format!("{}-{}", id, sanitize_file_name(&form.file_name));
        self.uploads.insert(
            image_ref.clone(),
            StoredUpload {
                content_type: form.content_type,
                bytes: form.bytes,
            },
        );
        self.cars.push(CarRecord {
            id,
            year: form.year,
            brand_id: form.brand_id,
            model_id: form.model_id,
            description: form.description,
            image_ref,
            date_added,
        });
        let record = &self.cars[self.cars.len() - 1];
        self.car_view(record)
    }

    /// Removes the listing together with its image.
    pub(super) fn remove_car(&mut self, id: CarId) -> bool {
        let Some(pos) = self.cars.iter().position(|c| c.id == id) else {
            return false;
        };
        let record = self.cars.remove(pos);
        self.uploads.remove(&record.image_ref);
        true
    }

    pub(super) fn list_cars(&self) -> Vec<Car> {
        self.cars.iter().map(|c| self.car_view(c)).collect()
    }

    /// Listing as served, with brand and model names joined in. A deleted
    /// brand or model leaves the name out.
    fn car_view(&self, record: &CarRecord) -> Car {
        Car {
            id: record.id,
            year: record.year,
            brand_id: record.brand_id,
            model_id: record.model_id,
            brand_name: self
                .brands
                .iter()
                .find(|b| b.id == record.brand_id)
                .map(|b| b.name.clone()),
            model_name: self
                .models
                .iter()
                .find(|m| m.id == record.model_id)
                .map(|m| m.name.clone()),
            description: record.description.clone(),
            image_ref: record.image_ref.clone(),
            date_added: record.date_added.clone(),
        }
    }
}

fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}
