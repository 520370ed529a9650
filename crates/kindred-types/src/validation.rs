//! Structural checks applied after a payload has been deserialized.
//!
//! serde already enforces presence, JSON types and optionality. What is left
//! is rejecting blank strings in required fields, so `{"name": "  "}` is
//! treated the same as a missing name.

use thiserror::Error;

use crate::models::{
    HealthContentPatch, NewDonation, NewHealthContent, NewPartner, NewResource, NewVolunteer,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    fn blank(field: &'static str) -> Self {
        Self {
            field,
            reason: "must not be blank",
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(())
}

fn required_if_present(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => required(field, v),
        None => Ok(()),
    }
}

impl Validate for NewVolunteer {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)
    }
}

impl Validate for NewDonation {
    fn validate(&self) -> Result<(), ValidationError> {
        // amount is NonZeroU64, already positive
        required("name", &self.name)?;
        required("email", &self.email)
    }
}

impl Validate for NewPartner {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("description", &self.description)?;
        required("website", &self.website)?;
        required("logo", &self.logo)?;
        required("type", &self.kind)
    }
}

impl Validate for NewResource {
    fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)?;
        required("description", &self.description)?;
        required("category", &self.category)?;
        required("content", &self.content)
    }
}

impl Validate for NewHealthContent {
    fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)?;
        required("content", &self.content)?;
        required("status", &self.status)
    }
}

impl Validate for HealthContentPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        required_if_present("title", self.title.as_deref())?;
        required_if_present("content", self.content.as_deref())?;
        required_if_present("status", self.status.as_deref())
    }
}
