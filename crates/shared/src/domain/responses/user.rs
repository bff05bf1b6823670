use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A `usermaster` row as it goes over the wire. Passwords are returned as
/// stored so the edit form can be filled from a table row.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UserResponse {
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
