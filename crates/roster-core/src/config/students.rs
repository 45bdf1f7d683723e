//! Student record policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bounds applied to date-of-birth updates.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPolicyConfig {
    /// Earliest accepted date of birth.
    #[serde(default = "default_dob_earliest")]
    pub dob_earliest: NaiveDate,
    /// Latest accepted date of birth.
    #[serde(default = "default_dob_latest")]
    pub dob_latest: NaiveDate,
}

impl StudentPolicyConfig {
    /// Returns whether `dob` lies inside the accepted range.
    pub fn accepts_dob(&self, dob: NaiveDate) -> bool {
        dob >= self.dob_earliest && dob <= self.dob_latest
    }
}

impl Default for StudentPolicyConfig {
    fn default() -> Self {
        Self {
            dob_earliest: default_dob_earliest(),
            dob_latest: default_dob_latest(),
        }
    }
}

fn default_dob_earliest() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_dob_latest() -> NaiveDate {
    NaiveDate::from_ymd_opt(2006, 12, 31).unwrap_or(NaiveDate::MAX)
}
