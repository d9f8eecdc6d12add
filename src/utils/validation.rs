use crate::utils::error::{FlightError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(FlightError::InvalidConfigValue {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one value must be given".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FlightError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 偶數長度檢查，用於「出發/抵達」成對的時間序列
pub fn validate_even_length<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.len() % 2 != 0 {
        return Err(FlightError::invalid_argument(format!(
            "{} must contain an even number of entries, got {}",
            field_name,
            values.len()
        )));
    }
    Ok(())
}
