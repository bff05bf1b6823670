mod client;

pub use self::client::{DynResourceClient, ResourceClientTrait};
