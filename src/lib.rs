//! area: convert between US geographic identifiers.
//!
//! Converts ZIP codes, area codes, latitude/longitude pairs, time zones,
//! and GMT/DST offsets against a bundled reference table. Lookups resolve
//! only exact or precision-matched table entries; an unknown location is a
//! normal absent result, not an error.
//!
//! # Example
//!
//! ```
//! use area::{Coordinate, GeoCode};
//!
//! let pair = Coordinate::parse("40.71209", "-73.95427")?;
//! assert_eq!(pair.to_region().as_deref(), Some("Brooklyn, NY"));
//! assert_eq!(pair.to_zip().as_deref(), Some("11211"));
//!
//! let code = GeoCode::new("646")?;
//! assert_eq!(code.to_region().as_deref(), Some("NY"));
//! # Ok::<(), area::AreaError>(())
//! ```
//!
//! The tables are loaded once per process and never mutated, so every
//! operation is a pure read and safe to call from any thread. GMT offset
//! conversions default to the current instant and therefore change when a
//! DST boundary is crossed; the `*_at` variants take an explicit instant.

#![warn(missing_docs)]

mod classify;
mod code;
mod coordinate;
mod dst;
mod error;
mod matching;
mod tables;

pub use classify::{is_area_code, is_zip_code};
pub use code::GeoCode;
pub use coordinate::{Coordinate, RegionOptions};
pub use dst::{DstLookup, IanaDstService};
pub use error::{AreaError, TableError};
pub use tables::{AreaCodeRow, Tables, ZipRow};
