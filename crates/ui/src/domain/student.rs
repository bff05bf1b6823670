use axum::body::Bytes;
use shared::{
    domain::responses::StudentResponse,
    validation::{FieldSource, STUDENT_SCHEMA},
};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq)]
pub struct FormFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Student form values. The file is only carried for the submission that
/// attached it and is never loaded back from a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub image: Option<FormFile>,
}

impl From<&StudentResponse> for StudentForm {
    fn from(student: &StudentResponse) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            image: None,
        }
    }
}

impl FieldSource for StudentForm {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Name" => Some(&self.name),
            "Email" => Some(&self.email),
            _ => None,
        }
    }
}

impl Validate for StudentForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        STUDENT_SCHEMA.check(self)
    }
}
