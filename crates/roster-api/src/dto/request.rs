//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use roster_entity::student::{CreateStudent, UpdateStudent};

/// Body of `POST /api/v1/student`. An `id` field, if sent, is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub dob: NaiveDate,
}

impl From<CreateStudentRequest> for CreateStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            dob: req.dob,
        }
    }
}

/// Query string of `PUT /api/v1/student/{studentId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentParams {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New date of birth (`YYYY-MM-DD`). An empty value counts as absent.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub dob: Option<NaiveDate>,
}

/// Reads `dob=` as `None`; non-empty values must parse as `YYYY-MM-DD`.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl From<UpdateStudentParams> for UpdateStudent {
    fn from(params: UpdateStudentParams) -> Self {
        Self {
            name: params.name,
            email: params.email,
            dob: params.dob,
        }
    }
}
