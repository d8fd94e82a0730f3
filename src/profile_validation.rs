//! Submission validation for the profile registry

use crate::date_arithmetic::age_in_years;
use crate::profile::{Gender, ProfileInput};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

/// Minimum age to register, in whole years.
pub const MINIMUM_AGE_YEARS: i32 = 18;

/// Why a submission was turned away.
///
/// Each variant is a distinct, user-facing rejection; the message is what
/// the form would display next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("please enter a valid 10-digit mobile number")]
    InvalidPhone,
    #[error("please enter your date of birth")]
    MissingDateOfBirth,
    #[error("you must be at least 18 years old to register")]
    UnderageApplicant,
    #[error("please select your gender")]
    MissingGender,
    #[error("subscription duration must be a whole number of months, at least 1")]
    InvalidSubscriptionDuration,
}

/// A submission that passed every check, with its fields parsed into the
/// types the registry stores.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub name: String,
    pub gender: Gender,
    pub bio: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub subscription_months: u32,
}

/// Validate a raw submission against `today`.
///
/// Checks run in a fixed order and stop at the first failure: phone, date
/// of birth, age, gender, subscription duration. `name` and `bio` are kept
/// verbatim; their non-emptiness is the form's concern.
pub fn validate_submission(
    input: &ProfileInput,
    today: NaiveDate,
) -> Result<ValidatedSubmission, ProfileValidationError> {
    if !is_ten_digit_phone(&input.phone) {
        debug!("Rejecting submission - phone is not a 10-digit number");
        return Err(ProfileValidationError::InvalidPhone);
    }

    let date_of_birth = match NaiveDate::parse_from_str(&input.date_of_birth, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            debug!(
                "Rejecting submission - missing or unparseable date of birth: {:?}",
                input.date_of_birth
            );
            return Err(ProfileValidationError::MissingDateOfBirth);
        }
    };

    // A date of birth in the future yields a negative age and is caught here.
    let age = age_in_years(date_of_birth, today);
    if age < MINIMUM_AGE_YEARS {
        debug!("Rejecting submission - applicant age {} below minimum", age);
        return Err(ProfileValidationError::UnderageApplicant);
    }

    // Exactly the form's radio values.
    let gender = match input.gender.as_str() {
        "male" => Gender::Male,
        "female" => Gender::Female,
        _ => {
            debug!("Rejecting submission - gender not selected");
            return Err(ProfileValidationError::MissingGender);
        }
    };

    let subscription_months = match input.subscription_months.parse::<u32>() {
        Ok(months) if months >= 1 => months,
        _ => {
            debug!(
                "Rejecting submission - invalid subscription duration: {:?}",
                input.subscription_months
            );
            return Err(ProfileValidationError::InvalidSubscriptionDuration);
        }
    };

    Ok(ValidatedSubmission {
        name: input.name.clone(),
        gender,
        bio: input.bio.clone(),
        phone: input.phone.clone(),
        date_of_birth,
        age: age as u32,
        subscription_months,
    })
}

fn is_ten_digit_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}
