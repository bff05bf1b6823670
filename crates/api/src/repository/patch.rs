use shared::domain::requests::student::UpdateStudentRequest;
use sqlx::{Postgres, QueryBuilder};

/// Ordered column assignments for a single-row `UPDATE`.
///
/// Columns appear in the statement in the order they were `set`; absent
/// optional values are left out entirely, so the stored value is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    table: &'static str,
    key_column: &'static str,
    assignments: Vec<(&'static str, String)>,
}

impl Patch {
    pub fn new(table: &'static str, key_column: &'static str) -> Self {
        Self {
            table,
            key_column,
            assignments: Vec::new(),
        }
    }

    pub fn set(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    pub fn set_opt(self, column: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(column, _)| *column).collect()
    }

    pub fn build(&self, id: i32, returning: &str) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", self.table));

        let mut assignments = qb.separated(", ");
        for (column, value) in &self.assignments {
            assignments.push(format!("{column} = "));
            assignments.push_bind_unseparated(value.clone());
        }

        qb.push(format!(" WHERE {} = ", self.key_column));
        qb.push_bind(id);

        if !returning.is_empty() {
            qb.push(" RETURNING ");
            qb.push(returning);
        }

        qb
    }
}

impl From<&UpdateStudentRequest> for Patch {
    fn from(req: &UpdateStudentRequest) -> Self {
        Patch::new("student", "id")
            .set("name", req.name.as_str())
            .set("email", req.email.as_str())
            .set_opt("profile_image", req.profile_image.as_deref())
    }
}
