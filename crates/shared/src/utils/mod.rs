mod gracefullshutdown;
mod logs;
mod metrics;
mod operation;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::operation::OperationContext;
