//! Login and registration form validation.
//!
//! Errors are collected per field so a view can show each message under its
//! input, the way the forms did with a schema resolver.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.0.push((field, message.to_string()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email format");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result()
    }

    /// Email as the API expects it: trimmed and lower-cased.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

pub const GENDERS: [&str; 3] = ["male", "female", "other"];

/// Body of `POST /users`, also the register form state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            gender: "male".to_string(),
        }
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.first_name.trim().chars().count() < 2 {
            errors.push("firstName", "First name must be at least 2 characters");
        }
        if self.last_name.trim().chars().count() < 2 {
            errors.push("lastName", "Last name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email format");
        }
        if self.password.chars().count() < 6 {
            errors.push("password", "Password must be at least 6 characters");
        }
        if !GENDERS.contains(&self.gender.as_str()) {
            errors.push("gender", "Please select a gender");
        }
        errors.into_result()
    }

    /// Trimmed names and a lower-cased email, ready to send.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            gender: self.gender.clone(),
        }
    }
}
