use anyhow::{anyhow, Context, Result};
use std::env::{self, VarError};
use std::str::FromStr;

use super::routing::geocode::AUTOCOMPLETE_SIZE;

pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_PROFILE: &str = "driving-car";
pub const DEFAULT_LANGUAGE: &str = "ja";
pub const DEFAULT_COUNTRY: &str = "JP";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// openrouteservice settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrsConfig {
    pub api_key: String,
    pub base_url: String,
    pub profile: String,
    pub language: String,
    pub country: String,
    pub autocomplete_size: usize,
    pub timeout_secs: u64,
}

impl OrsConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
        })
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let get = |name: &str| -> Result<Option<String>> {
            Ok(lookup(name)?
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()))
        };

        let api_key = get("ORS_API_KEY")?.ok_or_else(|| anyhow!("ORS_API_KEY not set"))?;
        let base_url = get("ORS_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            base_url,
            profile: get("ORS_PROFILE")?.unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            language: get("ORS_LANGUAGE")?.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            country: get("ORS_COUNTRY")?.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            autocomplete_size: parse_or(
                get("ORS_AUTOCOMPLETE_SIZE")?,
                "ORS_AUTOCOMPLETE_SIZE",
                AUTOCOMPLETE_SIZE,
            )?,
            timeout_secs: parse_or(
                get("ORS_TIMEOUT_SECS")?,
                "ORS_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_or<T>(value: Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a number, got \"{raw}\"")),
        None => Ok(default),
    }
}
