use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

/// A single predicate attached to a form field. Each variant carries the
/// message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    MatchesField(&'static str, &'static str),
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    fn code(&self) -> &'static str {
        match self {
            Rule::Required(_) => "required",
            Rule::Email(_) => "email",
            Rule::MatchesField(..) => "must_match",
            Rule::OneOf(..) => "one_of",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(msg) | Rule::Email(msg) => msg,
            Rule::MatchesField(_, msg) | Rule::OneOf(_, msg) => msg,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSchema {
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_)))
    }

    pub fn is_email(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Email(_)))
    }
}

fn is_email(value: &str) -> bool {
    value.to_string().validate_email()
}

/// Anything whose fields can be looked up by their wire name.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSchema],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSchema]) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Runs every rule in declaration order. A field that fails `Required`
    /// reports only that error.
    pub fn check<S: FieldSource + ?Sized>(&self, source: &S) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in self.fields {
            let value = source.field(field.name).map(str::trim).unwrap_or("");

            for rule in field.rules {
                let ok = match rule {
                    Rule::Required(_) => !value.is_empty(),
                    Rule::Email(_) => value.is_empty() || is_email(value),
                    Rule::MatchesField(other, _) => {
                        source.field(other).map(str::trim).unwrap_or("") == value
                    }
                    Rule::OneOf(allowed, _) => value.is_empty() || allowed.contains(&value),
                };

                if !ok {
                    let mut error = ValidationError::new(rule.code());
                    error.message = Some(Cow::Borrowed(rule.message()));
                    errors.add(field.name, error);

                    if matches!(rule, Rule::Required(_)) {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
