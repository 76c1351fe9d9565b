// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Login, registration and profile forms.

use chrono::NaiveDate;

use crate::forms::{blank, is_digits, is_valid_email, FieldErrors};
use crate::models::{Credentials, Gender, Registration, UserRole};

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < 6 {
            errors.add("password", "Password must be at least 6 characters");
        }

        errors.into_result()?;
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Live password strength indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
}

impl PasswordChecks {
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn passed(&self) -> usize {
        [self.length, self.uppercase, self.lowercase, self.number]
            .iter()
            .filter(|ok| **ok)
            .count()
    }

    pub fn all(&self) -> bool {
        self.passed() == 4
    }
}

/// Self-registration form. Field names match the API so server-side
/// field errors land on the same inputs.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
}

impl RegisterForm {
    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::of(&self.password)
    }

    pub fn validate(&self) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() < 2 {
            errors.add("name", "Name must be at least 2 characters");
        }

        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < 8 {
            errors.add("password", "Password must be at least 8 characters");
        }

        if self.password_confirmation.is_empty() {
            errors.add("password_confirmation", "Please confirm your password");
        } else if self.password != self.password_confirmation {
            errors.add("password_confirmation", "Passwords do not match");
        }

        if self.phone.is_empty() {
            errors.add("phone", "Phone is required");
        } else if !is_digits(&self.phone, 11) {
            errors.add("phone", "Phone must be 11 digits");
        }

        if self.gender.is_none() {
            errors.add("gender", "Gender is required");
        }
        if self.date_of_birth.is_none() {
            errors.add("date_of_birth", "Date of birth is required");
        }

        errors.into_result()?;

        // Both options were checked above.
        let (Some(gender), Some(date_of_birth)) = (self.gender, self.date_of_birth) else {
            return Err(FieldErrors::new());
        };

        Ok(Registration {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            phone: self.phone.clone(),
            gender,
            date_of_birth,
            role: UserRole::Member,
        })
    }
}

/// Display-name and avatar editor.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    /// Avatar as a URL or `data:` URL
    pub avatar: Option<String>,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(String, Option<String>), FieldErrors> {
        let mut errors = FieldErrors::new();
        if blank(&self.name) {
            errors.add("name", "Name is required");
        }
        errors.into_result()?;
        Ok((self.name.trim().to_string(), self.avatar.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Omar Hassan".to_string(),
            email: "omar@email.com".to_string(),
            password: "Secret123".to_string(),
            password_confirmation: "Secret123".to_string(),
            phone: "01012345678".to_string(),
            gender: Some(Gender::Male),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 2, 14),
        }
    }

    #[test]
    fn test_login_rules() {
        let errors = LoginForm::new("admin", "123").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let errors = LoginForm::new("", "").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));

        let credentials = LoginForm::new("admin@ironpulse.com", "admin123")
            .validate()
            .unwrap();
        assert_eq!(credentials.email, "admin@ironpulse.com");
    }

    #[test]
    fn test_register_mismatch_is_inline_error() {
        let mut form = register_form();
        form.password_confirmation = "Secret124".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_register_builds_member_registration() {
        let registration = register_form().validate().unwrap();
        assert_eq!(registration.role, UserRole::Member);
        assert_eq!(registration.gender, Gender::Male);
    }

    #[test]
    fn test_register_required_fields() {
        let errors = RegisterForm::default().validate().unwrap_err();
        for field in [
            "name",
            "email",
            "password",
            "password_confirmation",
            "phone",
            "gender",
            "date_of_birth",
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert_eq!(errors.get("password_confirmation"), Some("Please confirm your password"));
    }

    #[test]
    fn test_password_checks() {
        let checks = PasswordChecks::of("abcdefgh");
        assert!(checks.length && checks.lowercase);
        assert!(!checks.uppercase && !checks.number);
        assert_eq!(checks.passed(), 2);
        assert!(PasswordChecks::of("Secret123").all());
    }

    #[test]
    fn test_profile_requires_name() {
        let form = ProfileForm {
            name: "   ".to_string(),
            avatar: None,
        };
        assert_eq!(form.validate().unwrap_err().get("name"), Some("Name is required"));
    }
}
