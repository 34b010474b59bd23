//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An Admin API version, used as the `/admin/api/{version}/` path segment.
///
/// Shopify releases a stable version each quarter (January, April, July,
/// October). Any quarterly release can be named, so new versions do not need
/// a crate update.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::release(2024, 10).unwrap());
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(version < ApiVersion::Unstable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A quarterly stable release.
    Release {
        /// Four-digit year.
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The unstable version, for features not yet released.
    Unstable,
}

impl ApiVersion {
    /// The most recent stable release known to this crate.
    pub const LATEST: Self = Self::Release {
        year: 2025,
        month: 10,
    };

    /// Returns [`ApiVersion::LATEST`].
    #[must_use]
    pub const fn latest() -> Self {
        Self::LATEST
    }

    /// Creates a stable release version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `month` is not a
    /// quarterly release month or `year` is not four digits.
    pub fn release(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(1000..=9999).contains(&year) || !matches!(month, 1 | 4 | 7 | 10) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year}-{month:02}"),
            });
        }
        Ok(Self::Release { year, month })
    }

    /// Returns `true` for stable releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Release { .. })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { year, month } => write!(f, "{year}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unstable") {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;

        Self::release(year, month).map_err(|_| invalid())
    }
}
