//! Input validation and sanitization
//!
//! Boundary validation for caller-supplied values. Validation rejects, it
//! never normalizes: a phone number that passes is stored and compared
//! exactly as given.

use crate::error::{ClinicError, Result};
use crate::models::BookingRequest;

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate a patient name
    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ClinicError::InvalidInput("name cannot be empty".to_string()));
        }

        if name.len() > 100 {
            return Err(ClinicError::InvalidInput(
                "name too long (max 100 characters)".to_string(),
            ));
        }

        if name.contains('\0') || name.contains('\r') || name.contains('\n') {
            return Err(ClinicError::InvalidInput(
                "name contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a patient age
    pub fn validate_age(age: u32) -> Result<()> {
        if !(1..=130).contains(&age) {
            return Err(ClinicError::InvalidInput(
                "age must be between 1 and 130".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a phone number format
    pub fn validate_phone(phone: &str) -> Result<()> {
        if phone.trim().is_empty() {
            return Err(ClinicError::InvalidInput(
                "phone number cannot be empty".to_string(),
            ));
        }

        let allowed = |c: char| {
            c.is_ascii_digit() || c == '+' || c == '-' || c == '(' || c == ')' || c == ' '
        };
        if !phone.chars().all(allowed) {
            return Err(ClinicError::InvalidInput(
                "phone number contains invalid characters".to_string(),
            ));
        }

        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            return Err(ClinicError::InvalidInput(
                "phone number must be between 7 and 15 digits".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an entire booking request
    pub fn validate_booking(request: &BookingRequest) -> Result<()> {
        Self::validate_name(&request.name)?;
        Self::validate_age(request.age)?;
        Self::validate_phone(&request.phone)?;
        Ok(())
    }

    /// Validate message content
    pub fn validate_message_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(ClinicError::InvalidInput(
                "message content cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a system content key
    pub fn validate_content_key(key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(ClinicError::InvalidInput(
                "content key cannot be empty".to_string(),
            ));
        }

        if key.len() > 100 {
            return Err(ClinicError::InvalidInput(
                "content key too long (max 100 characters)".to_string(),
            ));
        }

        if key.chars().any(char::is_control) {
            return Err(ClinicError::InvalidInput(
                "content key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }
}
