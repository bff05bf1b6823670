mod command;
mod query;

pub use self::command::StudentCommandRepository;
pub use self::query::StudentQueryRepository;

pub(crate) const STUDENT_COLUMNS: &str = "id, name, email, profile_image";
