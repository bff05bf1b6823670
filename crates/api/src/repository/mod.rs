mod patch;
mod student;
mod user;

pub use self::patch::Patch;
pub use self::student::{StudentCommandRepository, StudentQueryRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};
