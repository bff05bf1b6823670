use crate::validation::{FieldSource, STUDENT_SCHEMA};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq)]
pub struct CreateStudentRequest {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    /// Public path of the stored upload, `/uploads/<file>`.
    #[serde(rename = "ProfileImage", default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq)]
pub struct UpdateStudentRequest {
    #[serde(rename = "ID", default)]
    pub id: i32,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    /// `None` keeps the stored image.
    #[serde(rename = "ProfileImage", default)]
    pub profile_image: Option<String>,
}

impl FieldSource for CreateStudentRequest {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Name" => Some(&self.name),
            "Email" => Some(&self.email),
            _ => None,
        }
    }
}

impl FieldSource for UpdateStudentRequest {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Name" => Some(&self.name),
            "Email" => Some(&self.email),
            _ => None,
        }
    }
}

impl Validate for CreateStudentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        STUDENT_SCHEMA.check(self)
    }
}

impl Validate for UpdateStudentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        STUDENT_SCHEMA.check(self)
    }
}
