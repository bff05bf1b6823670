pub mod storage;
pub mod student;
pub mod user;
