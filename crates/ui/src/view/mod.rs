mod actions;
mod list_form;
mod resource;

pub use self::actions::{delete, refresh, submit};
pub use self::list_form::{ListFormView, Mutation, Refusal, SubmitTicket};
pub use self::resource::{Resource, Students, Users};
