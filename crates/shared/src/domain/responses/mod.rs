mod api;
mod student;
mod user;

pub use self::api::{ApiResponse, MessageResponse};
pub use self::student::StudentResponse;
pub use self::user::UserResponse;
