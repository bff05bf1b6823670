mod command;
mod query;

pub use self::command::{DynStudentCommandRepository, StudentCommandRepositoryTrait};
pub use self::query::{DynStudentQueryRepository, StudentQueryRepositoryTrait};
