use std::env;
use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const YELP_API_URL: &str = "https://api.yelp.com";
const MAX_ALTERNATES: usize = 3;
const VENUE_LIMIT: u32 = 10;
/// Yelp answers `limit` above 50 with an error.
const VENUE_LIMIT_RANGE: RangeInclusive<u32> = 1..=50;
const MAX_TRIP_DAYS: u32 = 14;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "{} has an invalid value: '{}'", name, value)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` keeps the service up in degraded mode with empty venue pools.
    pub yelp_api_key: Option<String>,
    pub yelp_api_url: String,
    pub max_alternates: usize,
    pub venue_limit: u32,
    pub max_trip_days: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let yelp_api_key = env::var("YELP_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let venue_limit = parse_var("VENUE_LIMIT", VENUE_LIMIT)?;
        if !VENUE_LIMIT_RANGE.contains(&venue_limit) {
            return Err(ConfigError::InvalidValue {
                name: "VENUE_LIMIT".to_string(),
                value: venue_limit.to_string(),
            });
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parse_var("PORT", PORT)?,
            yelp_api_key,
            yelp_api_url: env::var("YELP_API_URL").unwrap_or_else(|_| YELP_API_URL.to_string()),
            max_alternates: parse_var("MAX_ALTERNATES", MAX_ALTERNATES)?,
            venue_limit,
            max_trip_days: parse_var("MAX_TRIP_DAYS", MAX_TRIP_DAYS)?,
        })
    }

    /// Key shown in health output, e.g. `abcd***wxyz`.
    pub fn masked_api_key(&self) -> Option<String> {
        let key = self.yelp_api_key.as_ref()?;
        if key.len() > 8 && key.is_ascii() {
            Some(format!("{}***{}", &key[0..4], &key[key.len() - 4..]))
        } else {
            Some("***".to_string())
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
