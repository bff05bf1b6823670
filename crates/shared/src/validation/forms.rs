use super::schema::{FieldSchema, Rule, Schema};

pub const ROLES: &[&str] = &["admin", "user"];

pub static USER_SCHEMA: Schema = Schema::new(&[
    FieldSchema {
        name: "username",
        label: "User Name",
        rules: &[Rule::Required("UserName is required")],
    },
    FieldSchema {
        name: "user_firstname",
        label: "First Name",
        rules: &[Rule::Required("FirstName is required")],
    },
    FieldSchema {
        name: "user_lastname",
        label: "Last Name",
        rules: &[Rule::Required("LastName is required")],
    },
    FieldSchema {
        name: "user_email",
        label: "Email",
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email address"),
        ],
    },
    FieldSchema {
        name: "user_phone",
        label: "Phone",
        rules: &[Rule::Required("Phone is required")],
    },
    FieldSchema {
        name: "user_password",
        label: "Password",
        rules: &[Rule::Required("Password is required")],
    },
    FieldSchema {
        name: "user_confirmpassword",
        label: "Confirm Password",
        rules: &[
            Rule::Required("Confirm Password is required"),
            Rule::MatchesField("user_password", "Passwords must match"),
        ],
    },
    FieldSchema {
        name: "role",
        label: "Role",
        rules: &[
            Rule::Required("Role selection is required"),
            Rule::OneOf(ROLES, "Role must be admin or user"),
        ],
    },
]);

pub static STUDENT_SCHEMA: Schema = Schema::new(&[
    FieldSchema {
        name: "Name",
        label: "Name",
        rules: &[Rule::Required("Name is required")],
    },
    FieldSchema {
        name: "Email",
        label: "Email",
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email address"),
        ],
    },
]);
