//! Coordinate comparison against stored table values.
//!
//! The reference table stores coordinates as decimal strings with uneven
//! precision, and nothing downstream tolerates reformatting them. String
//! queries must equal the stored text exactly. Numeric queries are rounded
//! to each row's own stored precision before comparing, so a row storing
//! one decimal place matches anything that rounds onto it while a
//! high-precision row never matches a coarser query.

use crate::coordinate::{Coordinate, CoordinateRepr};
use crate::tables::ZipRow;

/// Tests a single row against the query pair.
pub(crate) fn row_matches(row: &ZipRow, coordinate: &Coordinate) -> bool {
    match coordinate.repr() {
        CoordinateRepr::Text { lat, lon } => row.lat == *lat && row.lon == *lon,
        CoordinateRepr::Numeric { lat, lon } => {
            matches_stored(&row.lat, *lat) && matches_stored(&row.lon, *lon)
        }
    }
}

/// Compares a numeric query value against one stored decimal string at the
/// stored string's own precision.
///
/// Both sides are reformatted: the stored side so that trailing zeros like
/// `"-73.90"` survive the comparison, the query side so that it is rounded
/// to the stored precision. A stored value that does not parse as a number
/// cannot match.
fn matches_stored(stored: &str, query: f64) -> bool {
    let precision = decimal_precision(stored);
    let Ok(stored_value) = stored.parse::<f64>() else {
        return false;
    };
    format_at_precision(query, precision) == format_at_precision(stored_value, precision)
}

/// Number of digits after the decimal point in a stored coordinate string.
fn decimal_precision(value: &str) -> usize {
    value.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Formats a value with a fixed number of decimals, rounding halves away
/// from zero.
///
/// `format!("{:.n}")` alone rounds half to even, which is not how the table
/// values were produced, so the value is scaled and rounded first.
fn format_at_precision(value: f64, precision: usize) -> String {
    let factor = 10f64.powi(precision as i32);
    let mut scaled = (value * factor).round();
    if scaled == 0.0 {
        // collapse -0 so "-0.0" never leaks into a comparison
        scaled = 0.0;
    }
    format!("{:.prec$}", scaled / factor, prec = precision)
}
