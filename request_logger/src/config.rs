use anyhow::Result;
use shared::required_env;

pub(crate) const BUCKET_NAME_VAR: &str = "BUCKET_NAME";

/// Process-wide settings, read once at cold start.
#[derive(Debug)]
pub(crate) struct Config {
    pub bucket_name: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Ok(Config {
            bucket_name: required_env(BUCKET_NAME_VAR)?,
        })
    }
}
