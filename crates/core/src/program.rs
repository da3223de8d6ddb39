//! Program field rules and active-program scheduling.

use chrono::{Days, Months};

use crate::error::CoreError;
use crate::types::Timestamp;

pub const UNIT_DAYS: &str = "days";
pub const UNIT_WEEKS: &str = "weeks";
pub const UNIT_MONTHS: &str = "months";

/// All accepted `duration_unit` values.
pub const VALID_DURATION_UNITS: &[&str] = &[UNIT_DAYS, UNIT_WEEKS, UNIT_MONTHS];

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_DAYS_PER_WEEK: i32 = 7;

pub fn validate_program_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Program name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Program name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_duration_unit(unit: &str) -> Result<(), CoreError> {
    if VALID_DURATION_UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid duration_unit '{unit}'. Must be one of: {}",
            VALID_DURATION_UNITS.join(", ")
        )))
    }
}

/// Validate the scalar fields shared by program create and update.
pub fn validate_program_fields(
    name: &str,
    program_duration: i32,
    duration_unit: &str,
    days_per_week: i32,
) -> Result<(), CoreError> {
    validate_program_name(name)?;
    if program_duration < 1 {
        return Err(CoreError::Validation(
            "program_duration must be at least 1".to_string(),
        ));
    }
    validate_duration_unit(duration_unit)?;
    if !(1..=MAX_DAYS_PER_WEEK).contains(&days_per_week) {
        return Err(CoreError::Validation(format!(
            "days_per_week must be between 1 and {MAX_DAYS_PER_WEEK}"
        )));
    }
    Ok(())
}

/// End of an active program that starts at `start`.
///
/// Weeks are seven days; months are calendar months, clamped to the last day
/// of a shorter month. Unknown units count as days.
pub fn compute_end_date(
    start: Timestamp,
    program_duration: i32,
    duration_unit: &str,
) -> Result<Timestamp, CoreError> {
    let n = u32::try_from(program_duration).map_err(|_| {
        CoreError::Validation(format!(
            "program_duration must not be negative, got {program_duration}"
        ))
    })?;

    let end = match duration_unit {
        UNIT_WEEKS => start.checked_add_days(Days::new(u64::from(n) * 7)),
        UNIT_MONTHS => start.checked_add_months(Months::new(n)),
        _ => start.checked_add_days(Days::new(u64::from(n))),
    };

    end.ok_or_else(|| {
        CoreError::Validation(format!(
            "program_duration {program_duration} {duration_unit} is out of range"
        ))
    })
}
