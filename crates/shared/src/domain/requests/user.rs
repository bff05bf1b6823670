use crate::validation::{FieldSource, USER_SCHEMA};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// String fields default to empty so that a missing field is reported by the
/// schema instead of the JSON decoder. The two status flags have no default:
/// anything other than a JSON boolean is rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub user_firstname: String,
    #[serde(default)]
    pub user_lastname: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub user_password: String,
    #[serde(default)]
    pub user_confirmpassword: String,
    #[serde(default)]
    pub role: String,
    pub isactive: bool,
    pub isdeleted: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub struct UserStatus {
    pub isactive: bool,
    pub isdeleted: bool,
}

/// Full replacement of a user row. The status flags may arrive nested under
/// `status` or flat at the top level; the nested form wins.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<i32>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub user_firstname: String,
    #[serde(default)]
    pub user_lastname: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub user_password: String,
    #[serde(default)]
    pub user_confirmpassword: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isactive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isdeleted: Option<bool>,
}

impl UpdateUserRequest {
    pub fn resolved_status(&self) -> Option<UserStatus> {
        self.status.or(match (self.isactive, self.isdeleted) {
            (Some(isactive), Some(isdeleted)) => Some(UserStatus {
                isactive,
                isdeleted,
            }),
            _ => None,
        })
    }
}

impl FieldSource for CreateUserRequest {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "user_firstname" => Some(&self.user_firstname),
            "user_lastname" => Some(&self.user_lastname),
            "user_email" => Some(&self.user_email),
            "user_phone" => Some(&self.user_phone),
            "user_password" => Some(&self.user_password),
            "user_confirmpassword" => Some(&self.user_confirmpassword),
            "role" => Some(&self.role),
            _ => None,
        }
    }
}

impl FieldSource for UpdateUserRequest {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "user_firstname" => Some(&self.user_firstname),
            "user_lastname" => Some(&self.user_lastname),
            "user_email" => Some(&self.user_email),
            "user_phone" => Some(&self.user_phone),
            "user_password" => Some(&self.user_password),
            "user_confirmpassword" => Some(&self.user_confirmpassword),
            "role" => Some(&self.role),
            _ => None,
        }
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        USER_SCHEMA.check(self)
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match USER_SCHEMA.check(self) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.resolved_status().is_none() {
            let mut error = ValidationError::new("required");
            error.message = Some(Cow::Borrowed(
                "status.isactive and status.isdeleted are required",
            ));
            errors.add("status", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
