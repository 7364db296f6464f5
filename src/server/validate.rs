//! Payload validation for create and update requests.
//!
//! One function per payload, checking fields in declaration order and
//! stopping at the first failure. Reference resolution (vocabulary names,
//! owner refs, foreign rows) is the services' business; these functions only
//! judge the shape of what the caller sent.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::{
    model::{
        address::CreateAddressDto,
        job::CreateJobDto,
        material::CreateMaterialStockDto,
        profession::CreateProfessionDto,
        shop::CreateShopDto,
        user::{CreateUserDto, UpdateUserDto},
    },
    server::error::validation::ValidationError,
};

/// Letters and spaces, starting with a letter. Names, cities, brands.
static ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s]*$").expect("alpha pattern must parse"));

/// House or plot numbers such as "12/4-B".
static BUILDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9/-]+$").expect("building pattern must parse"));

/// Quantity followed by a unit, such as "40 kg" or "12pcs".
static STOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\s?[A-Za-z]+$").expect("stock pattern must parse"));

/// Optional two-digit country prefix, then loosely grouped digits.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+\d{2})?\d{3,4}\D?\d{3}\D?\d{3}").expect("phone pattern must parse")
});

fn check_alpha(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if ALPHA.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("Field '{field}' must contain only letters and spaces"),
        ))
    }
}

fn check_phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if PHONE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("Field '{field}' is not a valid phone number"),
        ))
    }
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new(
            "email",
            format!("'{value}' is not a valid email address"),
        ))
    }
}

fn check_password(value: &str) -> Result<(), ValidationError> {
    if value.len() >= 8 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "password",
            "Password must be at least 8 characters",
        ))
    }
}

/// Validates a bare email field, as submitted to the verification endpoints.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    check_email(value)
}

pub fn validate_new_user(payload: &CreateUserDto) -> Result<(), ValidationError> {
    if payload.username.len() < 10 {
        return Err(ValidationError::new(
            "username",
            "Username must be at least 10 characters",
        ));
    }

    check_password(&payload.password)?;
    check_alpha("name", &payload.name)?;
    check_phone("mobile", &payload.mobile.to_string())?;
    check_email(&payload.email)?;

    if payload.roles.is_empty() {
        return Err(ValidationError::new(
            "roles",
            "At least one role must be requested",
        ));
    }

    Ok(())
}

pub fn validate_user_update(payload: &UpdateUserDto) -> Result<(), ValidationError> {
    if payload.username.len() < 10 {
        return Err(ValidationError::new(
            "username",
            "Username must be at least 10 characters",
        ));
    }

    if let Some(password) = &payload.password {
        check_password(password)?;
    }

    check_alpha("name", &payload.name)?;
    check_phone("mobile", &payload.mobile.to_string())?;
    check_email(&payload.email)?;

    Ok(())
}

pub fn validate_address(payload: &CreateAddressDto) -> Result<(), ValidationError> {
    if let Some(building_number) = &payload.building_number {
        if !BUILDING.is_match(building_number) {
            return Err(ValidationError::new(
                "building_number",
                "Building number may contain letters, digits, '-' and '/'",
            ));
        }
    }

    if let Some(street) = &payload.street {
        check_alpha("street", street)?;
    }

    if let Some(village_area) = &payload.village_area {
        check_alpha("village_area", village_area)?;
    }

    check_alpha("city", &payload.city)?;
    check_alpha("landmark", &payload.landmark)?;
    check_alpha("district", &payload.district)?;
    check_alpha("state", &payload.state)?;

    if !(100_000..=999_999).contains(&payload.pincode) {
        return Err(ValidationError::new(
            "pincode",
            "Pincode must be exactly six digits",
        ));
    }

    Ok(())
}

pub fn validate_shop(payload: &CreateShopDto) -> Result<(), ValidationError> {
    check_alpha("name", &payload.name)?;

    let current_year = Utc::now().year();
    if payload.invented_year < 1800 || payload.invented_year > current_year {
        return Err(ValidationError::new(
            "invented_year",
            format!("Invented year must be between 1800 and {current_year}"),
        ));
    }

    if let Some(email) = &payload.email {
        check_email(email)?;
    }

    if let Some(telephone) = &payload.telephone {
        check_phone("telephone", telephone)?;
    }

    if let Some(mobile) = payload.mobile {
        check_phone("mobile", &mobile.to_string())?;
    }

    check_alpha("type", &payload.category)?;

    Ok(())
}

pub fn validate_material(payload: &CreateMaterialStockDto) -> Result<(), ValidationError> {
    check_alpha("type", &payload.category)?;
    check_alpha("name", &payload.name)?;

    if !STOCK.is_match(&payload.stock) {
        return Err(ValidationError::new(
            "stock",
            "Stock must be a quantity followed by a unit, such as '40 kg'",
        ));
    }

    if !payload.rate.is_finite() || payload.rate < 0.0 {
        return Err(ValidationError::new(
            "rate",
            "Rate must be a non-negative number",
        ));
    }

    check_alpha("brand", &payload.brand)?;

    Ok(())
}

pub fn validate_profession(payload: &CreateProfessionDto) -> Result<(), ValidationError> {
    check_alpha("profession", &payload.profession)?;

    if !payload.work_experience.is_finite()
        || payload.work_experience < 0.0
        || payload.work_experience >= 40.0
    {
        return Err(ValidationError::new(
            "work_experience",
            "Work experience must be between 0 and 40 years",
        ));
    }

    if !(0..2000).contains(&payload.expected_salary) {
        return Err(ValidationError::new(
            "expected_salary",
            "Expected salary must be below 2000",
        ));
    }

    check_alpha("gender", &payload.gender)?;

    Ok(())
}

pub fn validate_job(payload: &CreateJobDto) -> Result<(), ValidationError> {
    check_alpha("type", &payload.work_type)?;

    if !(1..=999).contains(&payload.number_of_workers) {
        return Err(ValidationError::new(
            "number_of_workers",
            "Number of workers must be between 1 and 999",
        ));
    }

    if payload.work_date <= today() {
        return Err(ValidationError::new(
            "work_date",
            "Work date must be in the future",
        ));
    }

    if !(1..=999).contains(&payload.working_days) {
        return Err(ValidationError::new(
            "working_days",
            "Working days must be between 1 and 999",
        ));
    }

    if !(0.0..=2000.0).contains(&payload.work_pay) {
        return Err(ValidationError::new(
            "work_pay",
            "Work pay must be between 0 and 2000",
        ));
    }

    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
