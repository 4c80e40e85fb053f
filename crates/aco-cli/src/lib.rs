//! Library side of the `aco` binary: logging setup and selection assembly.

pub mod logging;
pub mod selection;
