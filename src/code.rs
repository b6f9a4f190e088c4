//! Code queries against the ZIP and area code tables.
//!
//! [`GeoCode`] wraps a digits-only code. Three-digit codes resolve through
//! the area code table, five-digit codes through the ZIP table; any other
//! shape fails classification and reports absent from every operation.
//! Codes built from numbers are a deprecated compatibility path and log a
//! notice per call.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::dst::{self, IanaDstService};
use crate::error::AreaError;
use crate::tables::{Tables, ZipRow};

/// A ZIP or area code query.
///
/// # Example
///
/// ```
/// use area::GeoCode;
///
/// let zip = GeoCode::new("11211")?;
/// assert_eq!(zip.to_lat().as_deref(), Some("40.71209"));
///
/// let area_code = GeoCode::new("646")?;
/// assert_eq!(area_code.to_region().as_deref(), Some("NY"));
/// # Ok::<(), area::AreaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoCode {
    code: String,
    from_numeric: bool,
}

impl GeoCode {
    /// Builds a code from its string form, the canonical path.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::MalformedCode`] when the trimmed input is empty
    /// or contains anything but ASCII digits.
    pub fn new(code: &str) -> Result<Self, AreaError> {
        let code = code.trim();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AreaError::MalformedCode(code.to_string()));
        }
        Ok(GeoCode {
            code: code.to_string(),
            from_numeric: false,
        })
    }

    /// The code digits.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    fn warn_if_numeric(&self, operation: &str) {
        if self.from_numeric {
            log::warn!(
                "{} on a numeric code is deprecated; pass the code as a string",
                operation
            );
        }
    }

    fn zip_row(&self) -> Option<&'static ZipRow> {
        Tables::shared().find_zip(&self.code)
    }

    /// Converts an area code to its region.
    ///
    /// Only codes that classify as area codes scan the table; everything
    /// else reports `None`.
    pub fn to_region(&self) -> Option<String> {
        self.warn_if_numeric("to_region");
        Tables::shared()
            .find_area_code(&self.code)
            .map(|row| row.region.clone())
    }

    /// Converts a ZIP code to its stored `(lat, lon)` pair.
    pub fn to_latlon(&self) -> Option<(String, String)> {
        self.warn_if_numeric("to_latlon");
        self.zip_row().map(|row| (row.lat.clone(), row.lon.clone()))
    }

    /// Converts a ZIP code to its stored latitude.
    pub fn to_lat(&self) -> Option<String> {
        self.warn_if_numeric("to_lat");
        self.zip_row().map(|row| row.lat.clone())
    }

    /// Converts a ZIP code to its stored longitude.
    pub fn to_lon(&self) -> Option<String> {
        self.warn_if_numeric("to_lon");
        self.zip_row().map(|row| row.lon.clone())
    }

    /// Converts a ZIP code to its DST-adjusted GMT offset as of now.
    ///
    /// The result is time-dependent: it changes when a DST boundary is
    /// crossed. Use [`GeoCode::to_gmt_offset_at`] for a fixed instant.
    pub fn to_gmt_offset(&self) -> Option<String> {
        self.to_gmt_offset_at(true, Utc::now())
    }

    /// Converts a ZIP code to its GMT offset with an explicit DST policy,
    /// as of now.
    pub fn to_gmt_offset_with(&self, use_dst: bool) -> Option<String> {
        self.to_gmt_offset_at(use_dst, Utc::now())
    }

    /// Converts a ZIP code to its GMT offset at an explicit reference
    /// instant.
    pub fn to_gmt_offset_at(&self, use_dst: bool, at: DateTime<Utc>) -> Option<String> {
        self.warn_if_numeric("to_gmt_offset");
        let row = self.zip_row()?;
        Some(dst::effective_offset(row, use_dst, at, &IanaDstService))
    }

    /// DST observance flag for a ZIP code, `"0"` or `"1"`.
    pub fn to_dst(&self) -> Option<String> {
        self.warn_if_numeric("to_dst");
        self.zip_row().map(|row| row.dst.clone())
    }

    /// Whether the ZIP code's row observes DST. Unknown codes report
    /// `false`.
    pub fn observes_dst(&self) -> bool {
        self.to_dst().as_deref() == Some("1")
    }

    /// IANA time zone name for a ZIP code.
    ///
    /// Rows the dataset never mapped to a zone report `None`.
    pub fn to_time_zone(&self) -> Option<String> {
        self.warn_if_numeric("to_time_zone");
        let row = self.zip_row()?;
        if row.timezone.is_empty() {
            None
        } else {
            Some(row.timezone.clone())
        }
    }
}

impl From<u32> for GeoCode {
    /// Builds a code from a number, the deprecated compatibility path.
    ///
    /// Results are identical to the string form, but every operation on the
    /// value logs a deprecation notice. A ZIP code that started with a zero
    /// cannot round-trip through a number and will not classify.
    fn from(code: u32) -> Self {
        GeoCode {
            code: code.to_string(),
            from_numeric: true,
        }
    }
}

impl FromStr for GeoCode {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoCode::new(s)
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
