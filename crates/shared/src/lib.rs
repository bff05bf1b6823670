pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
pub mod validation;
