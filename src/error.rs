//! Error type shared by the argument parser, file validator and CSV streamer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("a filepath argument is required")]
	MissingPath,
	#[error("only comma or semicolon separators are allowed (got '{0}')")]
	InvalidSeparator(String),
	#[error(transparent)]
	Usage(#[from] clap::Error),
	#[error("file {} is not a CSV", .0.display())]
	NotCsv(PathBuf),
	#[error("file {} does not exist", .0.display())]
	NotFound(PathBuf),
	#[error("input has no header row")]
	MissingHeader,
	#[error("line doesn't match headers format (expected {expected} fields, found {found})")]
	FieldCount { expected: usize, found: usize },
	#[error("record receiver hung up before the end of input")]
	ReceiverClosed,
	#[error("CSV streamer thread panicked")]
	StreamerPanicked,
	#[error(transparent)]
	Io(#[from] io::Error),
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}
