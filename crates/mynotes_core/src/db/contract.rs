//! Table and column names of the note schema.
//!
//! Column casing is part of the on-disk contract: `TITLE` is upper case while
//! the other columns are lower case.

pub const TABLE_NAME: &str = "note";
pub const COLUMN_ID: &str = "_id";
pub const COLUMN_TITLE: &str = "TITLE";
pub const COLUMN_DESCRIPTION: &str = "description";
pub const COLUMN_DATE: &str = "date";

/// All columns in select order.
pub const COLUMNS: [&str; 4] = [COLUMN_ID, COLUMN_TITLE, COLUMN_DESCRIPTION, COLUMN_DATE];
