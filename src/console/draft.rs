use crate::error::{DraftField, ValidationError};
use crate::model::{BrandId, ImageUpload, ModelId, NewCar};

/// Fields of the "add car" form. Kept as typed-in text until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarDraft {
    pub year: String,
    pub description: String,
    pub brand_id: Option<BrandId>,
    pub model_id: Option<ModelId>,
    pub image: Option<ImageUpload>,
}

impl CarDraft {
    /// Check the form in display order and build the request payload.
    pub fn validate(&self) -> Result<NewCar, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::Missing {
                field: DraftField::Description,
            });
        }

        let year = parse_year(&self.year)?;

        let brand_id = self.brand_id.ok_or(ValidationError::Missing {
            field: DraftField::Brand,
        })?;
        let model_id = self.model_id.ok_or(ValidationError::Missing {
            field: DraftField::Model,
        })?;

        let image = self.image.as_ref().ok_or(ValidationError::Missing {
            field: DraftField::Image,
        })?;
        if image.bytes.is_empty() {
            return Err(ValidationError::Invalid {
                field: DraftField::Image,
                reason: "file is empty".to_string(),
            });
        }
        if !image.is_image() {
            return Err(ValidationError::Invalid {
                field: DraftField::Image,
                reason: format!("{} is not an image", image.content_type),
            });
        }

        Ok(NewCar {
            year,
            brand_id,
            model_id,
            description: description.to_string(),
            image: image.clone(),
        })
    }

    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().map(ImageUpload::preview_label)
    }

    pub fn is_empty(&self) -> bool {
        *self == CarDraft::default()
    }

    pub fn clear(&mut self) {
        *self = CarDraft::default();
    }
}

fn parse_year(raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing {
            field: DraftField::Year,
        });
    }
    match raw.parse::<i32>() {
        Ok(year) if year > 0 => Ok(year),
        Ok(_) => Err(ValidationError::Invalid {
            field: DraftField::Year,
            reason: "must be positive".to_string(),
        }),
        Err(_) => Err(ValidationError::Invalid {
            field: DraftField::Year,
            reason: format!("{:?} is not a whole number", raw),
        }),
    }
}

/// Trimmed, non-blank name for a new brand or model.
pub fn validate_name(raw: &str, field: DraftField) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(name.to_string())
}

/// Every pending form on the admin page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drafts {
    pub car: CarDraft,
    pub new_brand_name: String,
    pub new_model_name: String,
}

#[cfg(test)]
#[path = "../tests/console/draft_tests.rs"]
mod tests;
