//! Reference dataset loading.
//!
//! Parses the CSV datasets into row vectors. The bundled dataset is
//! embedded at compile time; callers with a fuller or fresher dataset can
//! load their own files through [`Tables::from_paths`](super::Tables::from_paths).

use std::io::Read;
use std::path::Path;

use crate::error::TableError;
use crate::tables::models::{AreaCodeRow, ZipRow};

/// ZIP code dataset compiled into the crate.
pub(crate) const BUNDLED_ZIP_CODES: &str = include_str!("../../data/zip_codes.csv");

/// Area code dataset compiled into the crate.
pub(crate) const BUNDLED_AREA_CODES: &str = include_str!("../../data/area_codes.csv");

/// Reads ZIP rows from CSV input with a header record.
pub(crate) fn read_zip_rows<R: Read>(input: R) -> Result<Vec<ZipRow>, TableError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Reads area code rows from CSV input with a header record.
pub(crate) fn read_area_code_rows<R: Read>(input: R) -> Result<Vec<AreaCodeRow>, TableError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Loads ZIP rows from a CSV file on disk.
pub(crate) fn zip_rows_from_path(path: &Path) -> Result<Vec<ZipRow>, TableError> {
    let file = std::fs::File::open(path)?;
    read_zip_rows(file)
}

/// Loads area code rows from a CSV file on disk.
pub(crate) fn area_code_rows_from_path(path: &Path) -> Result<Vec<AreaCodeRow>, TableError> {
    let file = std::fs::File::open(path)?;
    read_area_code_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_zip_rows_parses_all_fields() {
        let input = "zip,city,state,lat,lon,gmt_offset,dst,timezone\n\
                     11211,Brooklyn,NY,40.71209,-73.95427,-5,1,America/New_York\n";
        let rows = read_zip_rows(input.as_bytes()).expect("well-formed CSV");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].zip, "11211");
        assert_eq!(rows[0].city, "Brooklyn");
        assert_eq!(rows[0].lat, "40.71209");
        assert_eq!(rows[0].timezone, "America/New_York");
    }

    #[test]
    fn test_read_zip_rows_keeps_empty_timezone() {
        let input = "zip,city,state,lat,lon,gmt_offset,dst,timezone\n\
                     05501,Andover,MA,42.64714,-71.18438,-5,1,\n";
        let rows = read_zip_rows(input.as_bytes()).expect("well-formed CSV");
        assert_eq!(rows[0].timezone, "");
    }

    #[test]
    fn test_read_zip_rows_rejects_short_records() {
        let input = "zip,city,state,lat,lon,gmt_offset,dst,timezone\n11211,Brooklyn\n";
        assert!(matches!(
            read_zip_rows(input.as_bytes()),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn test_read_area_code_rows_preserves_order() {
        let input = "code,region\n646,NY\n646,XX\n212,NY\n";
        let rows = read_area_code_rows(input.as_bytes()).expect("well-formed CSV");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].region, "NY");
        assert_eq!(rows[1].region, "XX");
    }

    #[test]
    fn test_bundled_datasets_parse() {
        let zips = read_zip_rows(BUNDLED_ZIP_CODES.as_bytes()).expect("bundled ZIP dataset");
        let codes =
            read_area_code_rows(BUNDLED_AREA_CODES.as_bytes()).expect("bundled area code dataset");
        assert!(!zips.is_empty());
        assert!(!codes.is_empty());
    }
}
