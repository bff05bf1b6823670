mod student;
mod user;

pub use self::student::{FormFile, StudentForm};
pub use self::user::UserForm;
