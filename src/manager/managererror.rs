use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFound(String),
    #[error("invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

impl ManagerError {
    pub fn name_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFound(name.to_owned())
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: for<'a> Deserialize<'a>,
{
    serde_json::from_value(json_value).map_err(ManagerError::JsonParse)
}
