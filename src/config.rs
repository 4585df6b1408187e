use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::shift::input::parse_date;
use crate::core::week::navigator::week_key_of;

pub const DATA_DIR_VAR: &str = "WEEKLY_INCOME_DATA_DIR";
pub const VIEW_DATE_VAR: &str = "WEEKLY_INCOME_VIEW_DATE";

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a date formatted YYYY-MM-DD inside a whole calendar week, got {value:?}")]
    InvalidDate { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    /// Date whose week is shown first; today when unset.
    pub view_date: Option<NaiveDate>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            view_date: None,
        }
    }
}

impl TrackerConfig {
    /// Reads the process environment. Load a `.env` file beforehand if one is wanted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source, so tests need not touch the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let data_dir = value(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let view_date = value(VIEW_DATE_VAR)
            .map(|raw| match parse_date(&raw) {
                Ok(date) if week_key_of(date).is_some() => Ok(date),
                _ => Err(ConfigError::InvalidDate {
                    var: VIEW_DATE_VAR,
                    value: raw,
                }),
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            view_date,
        })
    }
}
