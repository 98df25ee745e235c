//! Form rules the dashboard attaches to individual fields.

use chrono::NaiveDate;

use crate::error::{DashboardError, Result};

pub const EXPIRY_IN_PAST: &str = "Expiry date cannot be in the past";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Parse the value of an HTML date input (`YYYY-MM-DD`).
pub fn parse_date_input(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| DashboardError::InvalidDate {
        input: text.to_string(),
    })
}

/// Validity message for an expiry date; today itself is still allowed.
pub fn expiry_date_error(date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    (date < today).then_some(EXPIRY_IN_PAST)
}

/// Only food donations carry (and require) an expiry date.
pub fn expiry_date_required(donation_type: &str) -> bool {
    donation_type == "food"
}

/// Strip everything but ASCII digits from a numeric text field.
pub fn sanitize_numeric(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn password_mismatch(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some(PASSWORD_MISMATCH)
}
