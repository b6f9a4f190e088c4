//! Coordinate queries against the ZIP code table.
//!
//! [`Coordinate`] is the entry point for every lat/lon-keyed conversion.
//! The canonical form carries the pair as decimal strings, compared
//! verbatim against the stored table values. The numeric form exists for
//! callers that only have floats; it goes through per-row precision
//! matching instead, and the operations whose canonical input is strings
//! log a deprecation notice when reached through it.

use chrono::{DateTime, Utc};

use crate::dst::{self, IanaDstService};
use crate::error::AreaError;
use crate::tables::{Tables, ZipRow};

/// Internal representation of a query pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CoordinateRepr {
    /// Decimal strings, compared verbatim against stored values.
    Text { lat: String, lon: String },
    /// Numeric values, rounded to each row's stored precision.
    Numeric { lat: f64, lon: f64 },
}

/// A latitude/longitude query pair.
///
/// # Example
///
/// ```
/// use area::Coordinate;
///
/// let pair = Coordinate::parse("40.71209", "-73.95427")?;
/// assert_eq!(pair.to_zip().as_deref(), Some("11211"));
/// # Ok::<(), area::AreaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    repr: CoordinateRepr,
}

/// Field selection for [`Coordinate::to_region_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionOptions {
    /// Return only the city name.
    pub city: bool,
    /// Return only the state abbreviation.
    pub state: bool,
}

impl Coordinate {
    /// Builds a coordinate from decimal strings, the canonical form.
    ///
    /// Surrounding whitespace is trimmed; the trimmed text is kept exactly
    /// as given for comparison against the stored table values.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::MalformedCoordinate`] when either value does
    /// not parse as a decimal number.
    pub fn parse(lat: &str, lon: &str) -> Result<Self, AreaError> {
        let lat = lat.trim();
        let lon = lon.trim();
        for value in [lat, lon] {
            if value.parse::<f64>().is_err() {
                return Err(AreaError::MalformedCoordinate(value.to_string()));
            }
        }
        Ok(Coordinate {
            repr: CoordinateRepr::Text {
                lat: lat.to_string(),
                lon: lon.to_string(),
            },
        })
    }

    /// Builds a coordinate from numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::MalformedCoordinate`] when either value is NaN
    /// or infinite.
    pub fn numeric(lat: f64, lon: f64) -> Result<Self, AreaError> {
        for value in [lat, lon] {
            if !value.is_finite() {
                return Err(AreaError::MalformedCoordinate(value.to_string()));
            }
        }
        Ok(Coordinate {
            repr: CoordinateRepr::Numeric { lat, lon },
        })
    }

    pub(crate) fn repr(&self) -> &CoordinateRepr {
        &self.repr
    }

    fn row(&self) -> Option<&'static ZipRow> {
        Tables::shared().find_by_coordinate(self)
    }

    fn warn_if_numeric(&self, operation: &str) {
        if let CoordinateRepr::Numeric { .. } = self.repr {
            log::warn!(
                "{} on a numeric lat/lon pair is deprecated; pass the pair as strings",
                operation
            );
        }
    }

    /// Converts the pair to `"city, state"`.
    ///
    /// Returns `None` when no table row stores this pair.
    pub fn to_region(&self) -> Option<String> {
        self.to_region_with(RegionOptions::default())
    }

    /// Converts the pair to a region, narrowed by `options`.
    ///
    /// With `options.city` only the city is returned, with `options.state`
    /// only the state abbreviation. When both flags are set, `city` wins.
    pub fn to_region_with(&self, options: RegionOptions) -> Option<String> {
        self.warn_if_numeric("to_region");
        let row = self.row()?;
        if options.city {
            Some(row.city.clone())
        } else if options.state {
            Some(row.state.clone())
        } else {
            Some(format!("{}, {}", row.city, row.state))
        }
    }

    /// Converts the pair to a ZIP code.
    ///
    /// This is the supported path for raw float input: a numeric pair is
    /// rounded to each row's stored precision before comparison, so a pair
    /// read from a GPS fix still resolves against the table's canonical
    /// strings.
    pub fn to_zip(&self) -> Option<String> {
        self.row().map(|row| row.zip.clone())
    }

    /// Converts the pair to its DST-adjusted GMT offset as of now.
    ///
    /// The result is time-dependent: it changes when a DST boundary is
    /// crossed. Use [`Coordinate::to_gmt_offset_at`] for a fixed instant.
    pub fn to_gmt_offset(&self) -> Option<String> {
        self.to_gmt_offset_at(true, Utc::now())
    }

    /// Converts the pair to its GMT offset with an explicit DST policy,
    /// as of now.
    pub fn to_gmt_offset_with(&self, use_dst: bool) -> Option<String> {
        self.to_gmt_offset_at(use_dst, Utc::now())
    }

    /// Converts the pair to its GMT offset at an explicit reference
    /// instant.
    pub fn to_gmt_offset_at(&self, use_dst: bool, at: DateTime<Utc>) -> Option<String> {
        self.warn_if_numeric("to_gmt_offset");
        let row = self.row()?;
        Some(dst::effective_offset(row, use_dst, at, &IanaDstService))
    }

    /// DST observance flag for the matched row, `"0"` or `"1"`.
    pub fn to_dst(&self) -> Option<String> {
        self.warn_if_numeric("to_dst");
        self.row().map(|row| row.dst.clone())
    }

    /// Whether the matched row observes DST. Unmatched pairs report
    /// `false`.
    pub fn observes_dst(&self) -> bool {
        self.to_dst().as_deref() == Some("1")
    }

    /// IANA time zone name for the matched row.
    ///
    /// Rows the dataset never mapped to a zone report `None`.
    pub fn to_time_zone(&self) -> Option<String> {
        self.warn_if_numeric("to_time_zone");
        let row = self.row()?;
        if row.timezone.is_empty() {
            None
        } else {
            Some(row.timezone.clone())
        }
    }
}

impl TryFrom<(&str, &str)> for Coordinate {
    type Error = AreaError;

    fn try_from((lat, lon): (&str, &str)) -> Result<Self, Self::Error> {
        Coordinate::parse(lat, lon)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = AreaError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::numeric(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_keeps_text() {
        let pair = Coordinate::parse(" 40.71209 ", "-73.95427").expect("decimal pair");
        assert_eq!(
            pair.repr(),
            &CoordinateRepr::Text {
                lat: "40.71209".to_string(),
                lon: "-73.95427".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_decimal_text() {
        let err = Coordinate::parse("40.7", "west").expect_err("malformed longitude");
        assert!(matches!(err, AreaError::MalformedCoordinate(v) if v == "west"));
    }

    #[test]
    fn test_numeric_rejects_non_finite_values() {
        assert!(Coordinate::numeric(f64::NAN, -73.9).is_err());
        assert!(Coordinate::numeric(40.7, f64::INFINITY).is_err());
        assert!(Coordinate::numeric(40.7, -73.9).is_ok());
    }

    #[test]
    fn test_try_from_tuples() {
        assert!(Coordinate::try_from(("40.7", "-73.9")).is_ok());
        assert!(Coordinate::try_from((40.7, -73.9)).is_ok());
        assert!(Coordinate::try_from(("", "-73.9")).is_err());
    }
}
