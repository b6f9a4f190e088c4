//! Reference table row types.

use serde::{Deserialize, Serialize};

/// One record of the ZIP code reference table.
///
/// Every field is kept as the exact string stored in the dataset:
/// coordinate matching depends on the stored decimal precision, and offsets
/// are returned verbatim when no DST adjustment applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRow {
    /// Five-digit ZIP code, unique within the table.
    pub zip: String,
    /// City name.
    pub city: String,
    /// Two-letter state or territory abbreviation.
    pub state: String,
    /// Latitude as a fixed-precision decimal string. Precision varies per
    /// row and is never normalized.
    pub lat: String,
    /// Longitude as a fixed-precision decimal string.
    pub lon: String,
    /// Base GMT offset in whole hours, as a signed integer string.
    pub gmt_offset: String,
    /// DST observance flag: `"1"` observes, `"0"` does not. While DST is
    /// in effect the flag value is also the hour shift added to the base
    /// offset.
    pub dst: String,
    /// IANA time zone name; empty for rows the dataset never mapped.
    pub timezone: String,
}

/// One record of the area code reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodeRow {
    /// Three-digit North American area code. Not necessarily unique; the
    /// first row wins on lookup.
    pub code: String,
    /// Region the code belongs to, a state or territory abbreviation.
    pub region: String,
}
