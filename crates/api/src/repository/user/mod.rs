mod command;
mod query;

pub use self::command::UserCommandRepository;
pub use self::query::UserQueryRepository;

pub(crate) const USER_COLUMNS: &str = "userid, username, user_firstname, user_lastname, \
    user_email, user_phone, user_password, user_confirmpassword, role, isactive, isdeleted";
