use serde::{Deserialize, Deserializer};
use shared::{
    domain::{
        requests::user::{CreateUserRequest, UpdateUserRequest, UserStatus},
        responses::UserResponse,
    },
    validation::{FieldSource, USER_SCHEMA},
};
use validator::{Validate, ValidationErrors};

/// Values of the user master form as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserForm {
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
    #[serde(default, deserialize_with = "checkbox")]
    pub isactive: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub isdeleted: bool,
}

// unchecked boxes are simply absent from the body
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(raw.as_str(), "on" | "true" | "1"))
}

impl UserForm {
    pub fn to_create(&self) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username.clone(),
            user_firstname: self.user_firstname.clone(),
            user_lastname: self.user_lastname.clone(),
            user_email: self.user_email.clone(),
            user_phone: self.user_phone.clone(),
            user_password: self.user_password.clone(),
            user_confirmpassword: self.user_confirmpassword.clone(),
            role: self.role.clone(),
            isactive: self.isactive,
            isdeleted: self.isdeleted,
        }
    }

    pub fn to_update(&self, userid: i32) -> UpdateUserRequest {
        UpdateUserRequest {
            userid: Some(userid),
            username: self.username.clone(),
            user_firstname: self.user_firstname.clone(),
            user_lastname: self.user_lastname.clone(),
            user_email: self.user_email.clone(),
            user_phone: self.user_phone.clone(),
            user_password: self.user_password.clone(),
            user_confirmpassword: self.user_confirmpassword.clone(),
            role: self.role.clone(),
            status: Some(UserStatus {
                isactive: self.isactive,
                isdeleted: self.isdeleted,
            }),
            isactive: None,
            isdeleted: None,
        }
    }
}

impl From<&UserResponse> for UserForm {
    fn from(user: &UserResponse) -> Self {
        Self {
            username: user.username.clone(),
            user_firstname: user.user_firstname.clone(),
            user_lastname: user.user_lastname.clone(),
            user_email: user.user_email.clone(),
            user_phone: user.user_phone.clone(),
            user_password: user.user_password.clone(),
            user_confirmpassword: user.user_confirmpassword.clone(),
            role: user.role.clone(),
            isactive: user.isactive,
            isdeleted: user.isdeleted,
        }
    }
}

impl FieldSource for UserForm {
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

impl Validate for UserForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        USER_SCHEMA.check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_nests_the_status_flags() {
        let form = UserForm {
            isactive: true,
            ..Default::default()
        };

        let req = form.to_update(4);
        assert_eq!(req.userid, Some(4));
        assert_eq!(
            req.status,
            Some(UserStatus {
                isactive: true,
                isdeleted: false
            })
        );
        assert_eq!(req.isactive, None);
    }

    #[test]
    fn empty_form_fails_the_shared_schema() {
        let errors = UserForm::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("role"));
    }
}
