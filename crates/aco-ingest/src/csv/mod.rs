//! Delimited file reading utilities.

mod reader;

pub use reader::{check_file_exists, read_case_frame};
