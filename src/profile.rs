//! Profile records and raw registration submissions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as captured by the registration form's radio buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// A raw registration submission.
///
/// Every field arrives as text, exactly as a form would post it. Nothing is
/// parsed or checked here; that happens in
/// [`validate_submission`](crate::profile_validation::validate_submission).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub bio: String,
    pub phone: String,
    pub subscription_months: String,
}

/// A stored registrant record with derived age and subscription expiry.
///
/// Profiles are immutable once registered: there is no edit operation, and
/// the only way one leaves the registry is an expiry eviction pass. `age` is
/// derived once at registration and never recomputed, so it reflects the
/// applicant's age on `registered_on`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub bio: String,
    pub phone: String,
    pub registered_on: NaiveDate,
    pub subscription_expiry: NaiveDate,
}
