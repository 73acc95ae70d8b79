//! Convert the rows of a CSV file into key-value records.
//!
//! The pipeline is: parse arguments into a `Config`, check the input file, then stream the file's
//! rows through a rendezvous channel to a consumer (the binary writes them out as JSON).

pub mod args;
pub mod error;
pub mod output;
pub mod process;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use types::{Config, Record, Separator, StreamSummary};
