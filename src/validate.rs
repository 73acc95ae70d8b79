//! Input file checks performed before the file is opened.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Check If Valid File
///
/// Succeeds only if `path` has a (case sensitive) `.csv` extension and refers to something that
/// can be stat'ed. The file itself is neither opened nor read.
pub fn check_if_valid_file<P: AsRef<Path>>(path: P) -> Result<()> {
	let path = path.as_ref();
	if !has_csv_extension(path) {
		return Err(Error::NotCsv(path.to_path_buf()));
	}
	if let Err(e) = fs::metadata(path) {
		log::debug!("Failed to stat '{}': {}", path.display(), e);
		return Err(Error::NotFound(path.to_path_buf()));
	}
	Ok(())
}

/// The extension is whatever follows the last `.` of the file name, so a file called `.csv`
/// counts. `Path::extension` treats that as a stem with no extension.
fn has_csv_extension(path: &Path) -> bool {
	path.file_name()
		.and_then(OsStr::to_str)
		.and_then(|name| name.rsplit_once('.'))
		.map_or(false, |(_, ext)| ext == "csv")
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[test]
	fn existing_csv_is_valid() {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/comma.csv");
		assert!(check_if_valid_file(path).is_ok());
	}

	#[test]
	fn missing_csv_is_rejected() {
		let result = check_if_valid_file("nowhere/test.csv");
		assert!(matches!(result, Err(Error::NotFound(_))));
	}

	#[rstest]
	#[case("test.txt")]
	#[case("test.CSV")]
	#[case("test.csv.bak")]
	#[case("test")]
	#[case("test.")]
	#[case("csv")]
	#[case("data.csv/test")]
	fn non_csv_extension_is_rejected(#[case] path: &str) {
		let result = check_if_valid_file(path);
		assert!(matches!(result, Err(Error::NotCsv(_))));
	}

	#[test]
	fn dot_csv_file_is_valid() {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/.csv");
		assert!(check_if_valid_file(path).is_ok());
	}

	#[rstest]
	#[case("nowhere/.csv")]
	#[case("nowhere/archive.tar.csv")]
	fn last_dot_segment_is_the_extension(#[case] path: &str) {
		// Passes the extension check, then fails on existence
		let result = check_if_valid_file(path);
		assert!(matches!(result, Err(Error::NotFound(_))));
	}

	#[test]
	fn extension_is_checked_before_existence() {
		// Exists, but isn't a CSV
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
		assert!(matches!(check_if_valid_file(path), Err(Error::NotCsv(_))));
	}
}
