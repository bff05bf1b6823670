use crate::domain::{StudentForm, UserForm};
use shared::domain::responses::{StudentResponse, UserResponse};
use validator::Validate;

/// One kind of record managed by a list+form view.
pub trait Resource: Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;
    type Form: Clone + Default + Validate + Send + Sync + 'static;

    const NAME: &'static str;

    fn id(record: &Self::Record) -> i32;

    /// Form values used when a record is picked for editing.
    fn edit_form(record: &Self::Record) -> Self::Form;
}

pub struct Users;

impl Resource for Users {
    type Record = UserResponse;
    type Form = UserForm;

    const NAME: &'static str = "user";

    fn id(record: &UserResponse) -> i32 {
        record.userid
    }

    fn edit_form(record: &UserResponse) -> UserForm {
        UserForm::from(record)
    }
}

pub struct Students;

impl Resource for Students {
    type Record = StudentResponse;
    type Form = StudentForm;

    const NAME: &'static str = "student";

    fn id(record: &StudentResponse) -> i32 {
        record.id
    }

    fn edit_form(record: &StudentResponse) -> StudentForm {
        StudentForm::from(record)
    }
}
