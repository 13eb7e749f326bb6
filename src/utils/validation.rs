use crate::utils::error::{Result, SizingError};

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SizingError::InvalidInput {
            field: field_name.to_string(),
            reason: format!("must be a positive number, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SizingError::InvalidInput {
            field: field_name.to_string(),
            reason: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_min_count(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SizingError::InvalidInput {
            field: field_name.to_string(),
            reason: format!("must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}

pub fn validate_required_field<T: Copy>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| SizingError::InvalidInput {
        field: field_name.to_string(),
        reason: "required field is missing".to_string(),
    })
}
