mod command;
mod query;

pub use self::command::{DynStudentCommandService, StudentCommandServiceTrait};
pub use self::query::{DynStudentQueryService, StudentQueryServiceTrait};
