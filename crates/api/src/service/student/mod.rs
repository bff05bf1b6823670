mod command;
mod query;

pub use self::command::{StudentCommandService, StudentCommandServiceDeps};
pub use self::query::StudentQueryService;
