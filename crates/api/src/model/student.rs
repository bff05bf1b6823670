use serde::{Deserialize, Serialize};
use shared::domain::responses::StudentResponse;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
}

impl From<Student> for StudentResponse {
    fn from(value: Student) -> Self {
        StudentResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            profile_image: value.profile_image,
        }
    }
}
