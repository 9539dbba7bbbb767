//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential
//! issues. Warnings are non-fatal; the CLI prints them and carries on.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The data file does not exist yet.
    DataFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured page size is zero.
    PageSizeZero,
    /// The admin email does not look like an email address.
    AdminEmailInvalid {
        /// The configured value.
        email: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataFileMissing { path } => {
                write!(f, "data file does not exist yet: {path}")
            }
            Self::PageSizeZero => {
                write!(f, "page_size is 0; listings will use a page size of 1")
            }
            Self::AdminEmailInvalid { email } => {
                write!(f, "admin_email does not look like an email address: {email}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if !config.data_path.exists() {
        warnings.push(ConfigWarning::DataFileMissing {
            path: config.data_path.display().to_string(),
        });
    }

    if config.page_size == 0 {
        warnings.push(ConfigWarning::PageSizeZero);
    }

    let email = &config.admin_email;
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        warnings.push(ConfigWarning::AdminEmailInvalid {
            email: email.clone(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn valid_config(dir: &std::path::Path) -> Config {
        let data = dir.join("portfolio.json");
        fs::write(&data, "{}").unwrap();
        Config {
            data_path: data,
            ..Config::default()
        }
    }

    #[test]
    fn valid_config_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(dir.path());
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn missing_data_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_path: dir.path().join("nope.json"),
            ..Config::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::DataFileMissing { .. }))
        );
    }

    #[test]
    fn zero_page_size_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            page_size: 0,
            ..valid_config(dir.path())
        };
        assert!(validate_config(&config).contains(&ConfigWarning::PageSizeZero));
    }

    #[test]
    fn bad_admin_email_warns() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            admin_email: "not-an-email".into(),
            ..valid_config(dir.path())
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::AdminEmailInvalid { .. }))
        );
    }
}
