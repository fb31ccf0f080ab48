use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

fn invalid(message: &'static str) -> ValidationError {
    ValidationError::new("0").with_message(Cow::from(message))
}

pub fn is_username(username: &str) -> Result<(), ValidationError> {
    if username.len() < 3 || username.len() > 32 {
        return Err(invalid("Username must contain between 3 and 32 characters"));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(invalid("Username must only contain letters and digits"));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 6 || password.len() > 72 {
        return Err(invalid("Password must contain between 6 and 72 characters"));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();

    if name.is_empty() || name.chars().count() > 150 {
        return Err(invalid("Name must contain between 1 and 150 characters"));
    }

    Ok(())
}

pub fn is_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > 1000 {
        return Err(invalid("Description must contain at most 1000 characters"));
    }

    Ok(())
}

pub fn is_gender(gender: &str) -> Result<(), ValidationError> {
    if gender.trim().is_empty() || gender.len() > 32 {
        return Err(invalid("Gender must contain between 1 and 32 characters"));
    }

    Ok(())
}
