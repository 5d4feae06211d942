use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `students` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Decoded request payload for create and update operations.
///
/// Absent fields decode to `""` / `0` rather than rejecting the payload;
/// the validator reports them as missing, and the patch selector treats
/// them as "not provided".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl StudentInput {
    /// Selects the single field a PATCH request updates, in priority order
    /// name, email, age. Returns `None` when nothing usable was provided.
    pub fn single_field(&self) -> Option<FieldPatch> {
        if !self.name.is_empty() {
            Some(FieldPatch::Name(self.name.clone()))
        } else if !self.email.is_empty() {
            Some(FieldPatch::Email(self.email.clone()))
        } else if self.age != 0 {
            Some(FieldPatch::Age(self.age))
        } else {
            None
        }
    }
}

/// One updatable column together with its new value.
///
/// The column identifier is derived from the variant, never from request
/// text, so a column name outside {name, email, age} cannot reach the SQL
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch {
    Name(String),
    Email(String),
    Age(i64),
}

impl FieldPatch {
    pub fn column(&self) -> &'static str {
        match self {
            FieldPatch::Name(_) => "name",
            FieldPatch::Email(_) => "email",
            FieldPatch::Age(_) => "age",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_prefers_name_over_email_and_age() {
        let input = StudentInput {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
        };
        assert_eq!(
            input.single_field(),
            Some(FieldPatch::Name("Ann".to_string()))
        );
    }

    #[test]
    fn single_field_prefers_email_over_age() {
        let input = StudentInput {
            email: "a@x.com".to_string(),
            age: 30,
            ..StudentInput::default()
        };
        assert_eq!(
            input.single_field(),
            Some(FieldPatch::Email("a@x.com".to_string()))
        );
    }

    #[test]
    fn single_field_falls_back_to_age() {
        let input = StudentInput {
            age: 30,
            ..StudentInput::default()
        };
        assert_eq!(input.single_field(), Some(FieldPatch::Age(30)));
    }

    #[test]
    fn single_field_treats_zero_values_as_absent() {
        assert_eq!(StudentInput::default().single_field(), None);
    }

    #[test]
    fn patch_maps_to_fixed_columns() {
        assert_eq!(FieldPatch::Name(String::new()).column(), "name");
        assert_eq!(FieldPatch::Email(String::new()).column(), "email");
        assert_eq!(FieldPatch::Age(1).column(), "age");
    }
}
