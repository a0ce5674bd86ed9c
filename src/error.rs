//! Error taxonomy shared by the client, the store and the console.

use std::fmt;

use crate::model::Resource;

/// Draft form fields that can fail local validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    BrandName,
    ModelName,
    Year,
    Description,
    Brand,
    Model,
    Image,
    Car,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::BrandName => "brand name",
            DraftField::ModelName => "model name",
            DraftField::Year => "year",
            DraftField::Description => "description",
            DraftField::Brand => "brand",
            DraftField::Model => "model",
            DraftField::Image => "image",
            DraftField::Car => "car",
        })
    }
}

/// Raised before any network call when a draft is incomplete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: DraftField },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: DraftField, reason: String },
}

impl ValidationError {
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::Missing { field } | ValidationError::Invalid { field, .. } => *field,
        }
    }
}

/// A failed round-trip to the admin API. `status` is `None` for transport
/// failures (connection refused, timeouts, undecodable bodies).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_request_error(.status, .message))]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

fn describe_request_error(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("request failed with status {}: {}", code, message),
        None => format!("request failed: {}", message),
    }
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

/// One of the list calls of a refresh failed; the store kept its prior
/// collections.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("refresh failed while listing {resource}")]
pub struct RefreshError {
    pub resource: Resource,
    #[source]
    pub source: RequestError,
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

impl AdminError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AdminError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
