use std::fmt;

use crate::domain::error::DomainError;

/// Maximum accepted length for a city query, in characters.
pub const MAX_CITY_LENGTH: usize = 100;

/// A validated city name: non-empty after trimming, at most
/// [`MAX_CITY_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_city("city must not be empty"));
        }
        if trimmed.chars().count() > MAX_CITY_LENGTH {
            return Err(DomainError::invalid_city(format!(
                "city must be at most {MAX_CITY_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
