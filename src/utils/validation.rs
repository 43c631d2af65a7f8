use crate::utils::error::{CertError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(CertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 確認清單中的 id 不重複
pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(CertError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./certificados").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("certificate.workload_hours", 40, 1).is_ok());
        assert!(validate_positive_number("certificate.workload_hours", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("certificate.signature_label", "Coordenação").is_ok());
        assert!(validate_non_empty_string("certificate.signature_label", "   ").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("courses", ["a", "b"]).is_ok());
        assert!(validate_unique_ids("courses", ["a", "b", "a"]).is_err());
    }
}
