//! DST-adjusted GMT offset computation.
//!
//! The reference table stores a base GMT offset and a DST flag per row;
//! whether daylight saving is actually in effect depends on the row's IANA
//! zone and the reference instant. Zone resolution sits behind the
//! [`DstLookup`] trait so the calculator can be exercised without the real
//! zone database.

use chrono::{DateTime, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::AreaError;
use crate::tables::ZipRow;

/// Zone consulted when a row carries no time zone name. DST transitions
/// for such rows follow the US Eastern clock.
pub(crate) const FALLBACK_ZONE: &str = "America/New_York";

/// Reports whether daylight saving time is in effect for a named zone at a
/// given instant.
pub trait DstLookup {
    /// Returns `true` when `zone` observes DST at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`AreaError::ZoneNotFound`] when the zone name is not in the
    /// underlying database.
    fn is_dst_active(&self, zone: &str, at: DateTime<Utc>) -> Result<bool, AreaError>;
}

/// [`DstLookup`] backed by the compiled-in IANA time zone database.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaDstService;

impl DstLookup for IanaDstService {
    fn is_dst_active(&self, zone: &str, at: DateTime<Utc>) -> Result<bool, AreaError> {
        let tz: Tz = zone
            .parse()
            .map_err(|_| AreaError::ZoneNotFound(zone.to_string()))?;
        let local = at.with_timezone(&tz);
        Ok(!local.offset().dst_offset().is_zero())
    }
}

/// Computes the effective GMT offset for a row.
///
/// With `use_dst` off the stored offset is returned verbatim. With it on,
/// the row's zone (or the Eastern fallback) is consulted at `at`; while DST
/// is in effect the stored offset and DST shift are summed into a signed
/// integer string. A zone the service cannot resolve downgrades to the
/// unadjusted offset with a logged warning rather than an error.
pub(crate) fn effective_offset(
    row: &ZipRow,
    use_dst: bool,
    at: DateTime<Utc>,
    service: &dyn DstLookup,
) -> String {
    if !use_dst {
        return row.gmt_offset.clone();
    }
    let zone = if row.timezone.is_empty() {
        FALLBACK_ZONE
    } else {
        row.timezone.as_str()
    };
    match service.is_dst_active(zone, at) {
        Ok(true) => {
            // unparseable fields degrade to zero, i.e. no adjustment
            let base = row.gmt_offset.trim().parse::<i64>().unwrap_or(0);
            let shift = row.dst.trim().parse::<i64>().unwrap_or(0);
            (base + shift).to_string()
        }
        Ok(false) => row.gmt_offset.clone(),
        Err(e) => {
            log::warn!("Time zone lookup failed ({}); returning base offset", e);
            row.gmt_offset.clone()
        }
    }
}
