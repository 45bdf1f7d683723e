//! Student entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned student identifier.
pub type StudentId = i64;

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique identifier assigned by the store.
    pub id: StudentId,
    /// Free-text name.
    pub name: String,
    /// Email address, unique across all students.
    pub email: String,
    /// Date of birth.
    pub dob: NaiveDate,
}

/// Data required to create a new student.
///
/// Carries no id; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudent {
    /// Name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Date of birth.
    pub dob: NaiveDate,
}

impl CreateStudent {
    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            dob: self.dob,
        }
    }
}

/// A partial update. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStudent {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement date of birth.
    pub dob: Option<NaiveDate>,
}

impl UpdateStudent {
    /// Update touching only the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Update touching only the email.
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Update touching only the date of birth.
    pub fn dob(dob: NaiveDate) -> Self {
        Self {
            dob: Some(dob),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_json_shape() {
        let student = Student {
            id: 1,
            name: "Mariam".to_string(),
            email: "mariam@example.com".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 1, 5).unwrap(),
        };

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Mariam",
                "email": "mariam@example.com",
                "dob": "2000-01-05",
            })
        );
    }

    #[test]
    fn test_create_student_ignores_missing_id() {
        let create: CreateStudent = serde_json::from_value(serde_json::json!({
            "name": "Alex",
            "email": "alex@example.com",
            "dob": "2004-02-29",
        }))
        .unwrap();

        let student = create.with_id(42);
        assert_eq!(student.id, 42);
        assert_eq!(student.email, "alex@example.com");
    }
}
