//! Command line parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::types::{Config, Separator};

#[derive(Debug, Parser)]
#[command(name = "csv2json", version, about = "Convert the rows of a CSV file into JSON records")]
struct Args {
	/// Column separator, either `comma` or `semicolon`
	#[arg(long, default_value = "comma")]
	separator: String,

	/// Generate pretty JSON
	#[arg(long)]
	pretty: bool,

	/// Path to the CSV file to convert
	path: Option<PathBuf>,
}

/// Parse Args
///
/// Build a `Config` from a full argument list (program name first). The separator is checked
/// here rather than by clap so that a bad value surfaces as `Error::InvalidSeparator`.
pub fn parse_args<I, T>(args: I) -> Result<Config>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let args = Args::try_parse_from(args)?;
	let path = args.path.ok_or(Error::MissingPath)?;
	let separator = args.separator.parse::<Separator>()?;
	Ok(Config {
		path,
		separator,
		pretty: args.pretty,
	})
}
