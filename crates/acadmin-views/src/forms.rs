//! Form input checks shared by the mutation flows.
//!
//! Only presence and range checks live here; real validation belongs to
//! the records API, whose verdict is surfaced verbatim.

use acadmin_common::{AdminError, Result};

/// Trimmed value of a required field, or a validation failure naming it.
pub fn required(value: &str, label: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::Validation(format!("{label} is required.")));
    }
    Ok(trimmed.to_string())
}

pub fn year_in_range(year: i32) -> Result<i32> {
    if !(1..=4).contains(&year) {
        return Err(AdminError::Validation(
            "Year must be between 1 and 4.".to_string(),
        ));
    }
    Ok(year)
}

pub fn mark_in_range(mark: i32, label: &str) -> Result<i32> {
    if !(0..=100).contains(&mark) {
        return Err(AdminError::Validation(format!(
            "{label} must be between 0 and 100."
        )));
    }
    Ok(mark)
}
