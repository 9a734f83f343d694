use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Source and output files are plain file names or paths ending in `.csv`.
pub fn validate_csv_file(field_name: &str, file: &str) -> Result<()> {
    validate_path(field_name, file)?;

    match Path::new(file).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(()),
        Some(ext) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: csv", ext),
        }),
        None => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Source file names are resolved inside the datasets directory.
pub fn validate_file_name(field_name: &str, file: &str) -> Result<()> {
    validate_csv_file(field_name, file)?;

    if file.contains('/') || file.contains('\\') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "Expected a file name, not a path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("paths.datasets_dir", "datasets").is_ok());
        assert!(validate_path("paths.datasets_dir", "  ").is_err());
        assert!(validate_path("paths.datasets_dir", "data\0sets").is_err());
    }

    #[test]
    fn test_validate_csv_file() {
        assert!(validate_csv_file("paths.output", "datasets/devices.csv").is_ok());
        assert!(validate_csv_file("paths.output", "datasets/DEVICES.CSV").is_ok());
        assert!(validate_csv_file("paths.output", "datasets/devices.tsv").is_err());
        assert!(validate_csv_file("paths.output", "datasets/devices").is_err());
    }

    #[test]
    fn test_validate_file_name_rejects_paths() {
        assert!(validate_file_name("sources.tablets", "tablets.csv").is_ok());
        assert!(validate_file_name("sources.tablets", "../tablets.csv").is_err());
    }
}
