use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }
    };
}

entity_id!(BrandId);
entity_id!(ModelId);
entity_id!(CarId);

/// The three collections served by the admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Brand,
    Model,
    Car,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Brand, Resource::Model, Resource::Car];

    /// Collection path relative to the admin API base.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Brand => "/brands",
            Resource::Model => "/models",
            Resource::Car => "/cars",
        }
    }

    pub fn item_path(self, id: i64) -> String {
        format!("{}/{}", self.path(), id)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Brand => "brands",
            Resource::Model => "models",
            Resource::Car => "cars",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

/// A car model (e.g. "Corolla"). Same shape and lifecycle as [`Brand`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: ModelId,
    pub name: String,
}

/// A car listing as returned by `GET /cars`.
///
/// `brand_id` / `model_id` may dangle: brands and models can be deleted while
/// listings still reference them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub year: i32,
    pub brand_id: BrandId,
    pub model_id: ModelId,

    // Display names denormalized by the backend, when it sends them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(alias = "imageName")]
    pub image_ref: String,

    #[serde(alias = "dateAdd")]
    pub date_added: String,
}

/// Validated payload for `POST /cars`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCar {
    pub year: i32,
    pub brand_id: BrandId,
    pub model_id: ModelId,
    pub description: String,
    pub image: ImageUpload,
}

/// An image file picked by the operator, held in memory until submission.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Short text shown next to the file picker.
    pub fn preview_label(&self) -> String {
        format!("{} ({} bytes)", self.file_name, self.bytes.len())
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
