use crate::profile::{Gender, ProfileInput};
use crate::profile_validation::{validate_submission, ProfileValidationError};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn valid_input() -> ProfileInput {
    ProfileInput {
        name: "Asha".to_string(),
        date_of_birth: "2000-01-01".to_string(),
        gender: "female".to_string(),
        bio: "Reader, hiker".to_string(),
        phone: "9876543210".to_string(),
        subscription_months: "1".to_string(),
    }
}

#[test]
fn test_valid_submission_passes() {
    let submission = validate_submission(&valid_input(), today()).unwrap();

    assert_eq!(submission.name, "Asha");
    assert_eq!(submission.gender, Gender::Female);
    assert_eq!(submission.age, 24);
    assert_eq!(submission.subscription_months, 1);
    assert_eq!(
        submission.date_of_birth,
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    );
}

#[test]
fn test_short_phone_rejected() {
    let mut input = valid_input();
    input.phone = "98765".to_string();

    let result = validate_submission(&input, today());
    assert_eq!(result.unwrap_err(), ProfileValidationError::InvalidPhone);
}

#[test]
fn test_long_phone_rejected() {
    let mut input = valid_input();
    input.phone = "98765432101".to_string();

    let result = validate_submission(&input, today());
    assert_eq!(result.unwrap_err(), ProfileValidationError::InvalidPhone);
}

#[test]
fn test_non_digit_phone_rejected() {
    // Right length, wrong characters.
    for phone in ["98765abcde", "9876 54321", "+919876543"] {
        let mut input = valid_input();
        input.phone = phone.to_string();

        let result = validate_submission(&input, today());
        assert_eq!(
            result.unwrap_err(),
            ProfileValidationError::InvalidPhone,
            "phone {phone:?} should be rejected"
        );
    }
}

#[test]
fn test_empty_date_of_birth_rejected() {
    let mut input = valid_input();
    input.date_of_birth = String::new();

    let result = validate_submission(&input, today());
    assert_eq!(
        result.unwrap_err(),
        ProfileValidationError::MissingDateOfBirth
    );
}

#[test]
fn test_unparseable_date_of_birth_rejected() {
    for dob in ["15-06-2000", "2000/01/01", "yesterday", "2000-13-01"] {
        let mut input = valid_input();
        input.date_of_birth = dob.to_string();

        let result = validate_submission(&input, today());
        assert_eq!(
            result.unwrap_err(),
            ProfileValidationError::MissingDateOfBirth,
            "date of birth {dob:?} should be rejected"
        );
    }
}

#[test]
fn test_underage_applicant_rejected() {
    let mut input = valid_input();
    input.date_of_birth = "2010-01-01".to_string();

    let result = validate_submission(&input, today());
    assert_eq!(
        result.unwrap_err(),
        ProfileValidationError::UnderageApplicant
    );
}

#[test]
fn test_future_date_of_birth_rejected_as_underage() {
    let mut input = valid_input();
    input.date_of_birth = "2030-01-01".to_string();

    let result = validate_submission(&input, today());
    assert_eq!(
        result.unwrap_err(),
        ProfileValidationError::UnderageApplicant
    );
}

#[test]
fn test_eighteenth_birthday_is_the_cutoff() {
    // Turns 18 exactly on the submission date: accepted.
    let mut input = valid_input();
    input.date_of_birth = "2006-06-15".to_string();
    assert_eq!(validate_submission(&input, today()).unwrap().age, 18);

    // One day short of 18: rejected.
    input.date_of_birth = "2006-06-16".to_string();
    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::UnderageApplicant
    );
}

#[test]
fn test_gender_must_match_form_values() {
    // Only the form's exact radio values pass.
    for gender in ["", "Female", "MALE", "other", " male"] {
        let mut input = valid_input();
        input.gender = gender.to_string();

        let result = validate_submission(&input, today());
        assert_eq!(
            result.unwrap_err(),
            ProfileValidationError::MissingGender,
            "gender {gender:?} should be rejected"
        );
    }
}

#[test]
fn test_invalid_subscription_duration_rejected() {
    // Never coerced to a default: anything that is not a whole number of
    // months >= 1 is turned away.
    for months in ["0", "-3", "abc", "1.5", ""] {
        let mut input = valid_input();
        input.subscription_months = months.to_string();

        let result = validate_submission(&input, today());
        assert_eq!(
            result.unwrap_err(),
            ProfileValidationError::InvalidSubscriptionDuration,
            "duration {months:?} should be rejected"
        );
    }
}

#[test]
fn test_checks_run_in_a_fixed_order() {
    // An input wrong in every field reports the phone first; fixing each
    // field in turn surfaces the next kind.
    let mut input = ProfileInput {
        name: "Asha".to_string(),
        date_of_birth: String::new(),
        gender: String::new(),
        bio: String::new(),
        phone: "123".to_string(),
        subscription_months: "0".to_string(),
    };

    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::InvalidPhone
    );

    input.phone = "9876543210".to_string();
    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::MissingDateOfBirth
    );

    input.date_of_birth = "2010-01-01".to_string();
    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::UnderageApplicant
    );

    input.date_of_birth = "2000-01-01".to_string();
    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::MissingGender
    );

    input.gender = "male".to_string();
    assert_eq!(
        validate_submission(&input, today()).unwrap_err(),
        ProfileValidationError::InvalidSubscriptionDuration
    );

    input.subscription_months = "3".to_string();
    assert!(validate_submission(&input, today()).is_ok());
}

#[test]
fn test_name_and_bio_are_kept_verbatim() {
    let mut input = valid_input();
    input.name = "  Asha  ".to_string();
    input.bio = String::new();

    let submission = validate_submission(&input, today()).unwrap();
    assert_eq!(submission.name, "  Asha  ");
    assert_eq!(submission.bio, "");
}
