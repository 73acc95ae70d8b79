//! Global type definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// One data row, keyed by header name. Ordered so serialised output is stable.
pub type Record = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
	#[default]
	Comma,
	Semicolon,
}

/// Validated invocation settings. Built once by `args::parse_args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub path: PathBuf,
	pub separator: Separator,
	// NB only the output writer looks at this, the streamer ignores it
	pub pretty: bool,
}

/// Counts reported by the streamer once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
	pub emitted: usize,
	pub skipped: usize,
}

impl Separator {
	pub fn delimiter(self) -> u8 {
		match self {
			Separator::Comma => b',',
			Separator::Semicolon => b';',
		}
	}
}

impl FromStr for Separator {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"comma" => Ok(Separator::Comma),
			"semicolon" => Ok(Separator::Semicolon),
			other => Err(Error::InvalidSeparator(other.to_string())),
		}
	}
}

impl fmt::Display for Separator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Separator::Comma => write!(f, "comma"),
			Separator::Semicolon => write!(f, "semicolon"),
		}
	}
}
