//! Process-wide reference tables and lookup scans.
//!
//! The ZIP and area code tables are loaded once and never mutated
//! afterwards. The shared instance lives behind a `LazyLock`, so it is
//! built on first access and can be read from any number of threads
//! without locking. Row order is table order: every scan returns the first
//! matching row.

mod loader;
mod models;

pub use models::{AreaCodeRow, ZipRow};

use std::path::Path;
use std::sync::LazyLock;

use crate::classify;
use crate::coordinate::Coordinate;
use crate::error::TableError;
use crate::matching;

/// Shared tables, built from the bundled dataset on first access.
static TABLES: LazyLock<Tables> = LazyLock::new(Tables::bundled);

/// The ZIP code and area code reference tables.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    zip_codes: Vec<ZipRow>,
    area_codes: Vec<AreaCodeRow>,
}

impl Tables {
    /// Returns the process-wide tables backed by the bundled dataset.
    pub fn shared() -> &'static Tables {
        &TABLES
    }

    /// Builds tables from already-parsed rows.
    ///
    /// Row order is preserved; lookups return the first matching row.
    pub fn new(zip_codes: Vec<ZipRow>, area_codes: Vec<AreaCodeRow>) -> Self {
        Tables {
            zip_codes,
            area_codes,
        }
    }

    /// Loads tables from two CSV files.
    ///
    /// The ZIP file carries `zip,city,state,lat,lon,gmt_offset,dst,timezone`
    /// and the area code file `code,region`, each with a header record.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] when a file cannot be read or a record does
    /// not fit the schema.
    pub fn from_paths(zip_codes: &Path, area_codes: &Path) -> Result<Self, TableError> {
        Ok(Tables {
            zip_codes: loader::zip_rows_from_path(zip_codes)?,
            area_codes: loader::area_code_rows_from_path(area_codes)?,
        })
    }

    /// Parses the embedded dataset. A parse failure here is a packaging
    /// defect; it is logged and yields empty tables so lookups degrade to
    /// absent results instead of aborting the process.
    fn bundled() -> Self {
        let zip_codes = match loader::read_zip_rows(loader::BUNDLED_ZIP_CODES.as_bytes()) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Failed to parse bundled ZIP code dataset: {}", e);
                Vec::new()
            }
        };
        let area_codes = match loader::read_area_code_rows(loader::BUNDLED_AREA_CODES.as_bytes()) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Failed to parse bundled area code dataset: {}", e);
                Vec::new()
            }
        };
        log::debug!(
            "Loaded {} ZIP code rows and {} area code rows",
            zip_codes.len(),
            area_codes.len()
        );
        Tables {
            zip_codes,
            area_codes,
        }
    }

    /// All ZIP rows in table order.
    pub fn zip_codes(&self) -> &[ZipRow] {
        &self.zip_codes
    }

    /// All area code rows in table order.
    pub fn area_codes(&self) -> &[AreaCodeRow] {
        &self.area_codes
    }

    /// Finds the ZIP table row for an exact five-digit code.
    ///
    /// Input that does not classify as a ZIP code reports `None` without a
    /// scan.
    pub fn find_zip(&self, code: &str) -> Option<&ZipRow> {
        if !classify::is_zip_code(code) {
            return None;
        }
        self.zip_codes.iter().find(|row| row.zip == code)
    }

    /// Finds the area code table row for an exact three-digit code.
    ///
    /// Input that does not classify as an area code reports `None` without
    /// a scan.
    pub fn find_area_code(&self, code: &str) -> Option<&AreaCodeRow> {
        if !classify::is_area_code(code) {
            return None;
        }
        self.area_codes.iter().find(|row| row.code == code)
    }

    /// Finds the ZIP table row whose stored coordinates match the query.
    ///
    /// String queries compare against the stored strings verbatim; numeric
    /// queries are rounded to each row's own stored precision first.
    pub fn find_by_coordinate(&self, coordinate: &Coordinate) -> Option<&ZipRow> {
        self.zip_codes
            .iter()
            .find(|row| matching::row_matches(row, coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip_row(zip: &str, lat: &str, lon: &str) -> ZipRow {
        ZipRow {
            zip: zip.to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
            gmt_offset: "-5".to_string(),
            dst: "1".to_string(),
            timezone: "America/New_York".to_string(),
        }
    }

    fn area_row(code: &str, region: &str) -> AreaCodeRow {
        AreaCodeRow {
            code: code.to_string(),
            region: region.to_string(),
        }
    }

    fn fixture() -> Tables {
        Tables::new(
            vec![
                zip_row("11211", "40.71209", "-73.95427"),
                zip_row("11212", "40.66264", "-73.91361"),
            ],
            vec![
                area_row("646", "NY"),
                area_row("646", "XX"),
                area_row("212", "NY"),
            ],
        )
    }

    #[test]
    fn test_find_zip_exact_match() {
        let tables = fixture();
        assert_eq!(tables.find_zip("11212").map(|r| r.zip.as_str()), Some("11212"));
        assert!(tables.find_zip("11213").is_none());
    }

    #[test]
    fn test_find_zip_gated_by_classification() {
        let tables = fixture();
        // present in the table but not ZIP-shaped inputs
        assert!(tables.find_zip("1121").is_none());
        assert!(tables.find_zip("112111").is_none());
        assert!(tables.find_zip("646").is_none());
    }

    #[test]
    fn test_find_area_code_first_match_wins() {
        let tables = fixture();
        assert_eq!(
            tables.find_area_code("646").map(|r| r.region.as_str()),
            Some("NY")
        );
    }

    #[test]
    fn test_find_area_code_gated_by_classification() {
        let tables = fixture();
        assert!(tables.find_area_code("6460").is_none());
        assert!(tables.find_area_code("11211").is_none());
    }

    #[test]
    fn test_find_by_coordinate_first_match_in_table_order() {
        let tables = Tables::new(
            vec![
                zip_row("11211", "40.7", "-73.9"),
                zip_row("11212", "40.71209", "-73.95427"),
            ],
            Vec::new(),
        );
        // rounds onto the coarse first row even though a later row is a
        // closer value
        let query = Coordinate::numeric(40.71209, -73.94).expect("finite pair");
        assert_eq!(
            tables.find_by_coordinate(&query).map(|r| r.zip.as_str()),
            Some("11211")
        );
    }

    #[test]
    fn test_find_by_coordinate_absent_for_unknown_pair() {
        let tables = fixture();
        let query = Coordinate::parse("0.0", "0.0").expect("decimal pair");
        assert!(tables.find_by_coordinate(&query).is_none());
    }
}
