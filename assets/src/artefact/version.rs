//! Version label newtype for asset archives.
//!
//! A label appears in both the archive filename and the release tag, so it is
//! limited to ASCII alphanumerics plus `.`, `_` and `-`. The default label is
//! the current local date in `YYYYMMDD` form.

use super::error::{Result, VersionError};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Maximum length of a version label.
const MAX_LEN: usize = 64;

/// `strftime` format of the date-based default label.
const DATE_FORMAT: &str = "%Y%m%d";

/// A validated asset version label such as `20250725` or `v0.3`.
///
/// # Examples
///
/// ```
/// use workshop_assets::artefact::version::VersionLabel;
///
/// let label: VersionLabel = "v0.3".try_into().expect("valid label");
/// assert_eq!(label.as_str(), "v0.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Return the label for today's local date.
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Return the `YYYYMMDD` label for `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// Resolve an optional override, falling back to [`VersionLabel::today`].
    ///
    /// # Errors
    ///
    /// Returns a [`VersionError`] if the override is not a valid label.
    pub fn resolve(value: Option<&str>) -> Result<Self> {
        value.map_or_else(|| Ok(Self::today()), Self::try_from)
    }

    /// Return the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for VersionLabel {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self> {
        validate_label(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for VersionLabel {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        validate_label(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for VersionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_label(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(VersionError::Empty);
    }
    if value.len() > MAX_LEN {
        return Err(VersionError::TooLong {
            value: value.to_owned(),
            max: MAX_LEN,
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(VersionError::InvalidCharacter {
            value: value.to_owned(),
            character: bad,
        });
    }
    Ok(())
}
