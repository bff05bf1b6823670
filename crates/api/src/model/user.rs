use serde::{Deserialize, Serialize};
use shared::domain::responses::UserResponse;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub userid: i32,
    pub username: String,
    pub user_firstname: String,
    pub user_lastname: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_password: String,
    pub user_confirmpassword: String,
    pub role: String,
    pub isactive: bool,
    pub isdeleted: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            userid: value.userid,
            username: value.username,
            user_firstname: value.user_firstname,
            user_lastname: value.user_lastname,
            user_email: value.user_email,
            user_phone: value.user_phone,
            user_password: value.user_password,
            user_confirmpassword: value.user_confirmpassword,
            role: value.role,
            isactive: value.isactive,
            isdeleted: value.isdeleted,
        }
    }
}
