//! Moving user data in and out of the store.
//!
//! - [`json`] - full-mirror export and id-merging import
//! - [`csv`] - flat practice-history export for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::{csv_file_name, practices_csv, CSV_HEADER};
pub use self::json::{
    export_file_name, export_json, import_file, import_json, ExportDocument, ImportSummary,
    EXPORT_VERSION,
};
