//! CSV streaming: turns rows into `Record`s and hands them to a consumer one at a time.

use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::mpsc::SyncSender;

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::types::{Config, Record, Separator, StreamSummary};

/// Process CSV File
///
/// Open the file named by `config` and stream its rows into `sender`. Failing to open the file
/// aborts before anything is sent. The file handle and `sender` are both dropped on return, so
/// the receiving side sees the channel disconnect however this function exits.
pub fn process_csv_file(config: &Config, sender: SyncSender<Record>) -> Result<StreamSummary> {
	let file = File::open(&config.path)?;
	stream_records(file, config.separator, sender)
}

/// Stream Records
///
/// Read the header row from `input` (trait bound `std::io::Read`), then convert every following
/// row into a `Record` and send it on `sender`. With a rendezvous channel each send blocks until
/// the consumer has taken the record, so rows are delivered strictly in input order.
///
/// Rows whose width differs from the header are logged and skipped. Any read error is fatal and
/// halts the stream, as does the receiver hanging up.
pub fn stream_records<R: Read>(
	input: R,
	separator: Separator,
	sender: SyncSender<Record>,
) -> Result<StreamSummary> {
	let buffered = BufReader::new(input);
	let mut rdr = csv::ReaderBuilder::new()
		.delimiter(separator.delimiter())
		// Width is checked per row by `process_line` so a bad row can be skipped
		.flexible(true)
		.from_reader(buffered);

	let headers = rdr.headers()?.clone();
	if headers.is_empty() {
		return Err(Error::MissingHeader);
	}
	log::debug!("Headers {:?}", headers.iter().collect::<Vec<_>>());

	let mut summary = StreamSummary::default();
	for result in rdr.records() {
		let line = result?;
		match process_line(&headers, &line) {
			Ok(record) => {
				log::debug!("{:?}", record);
				sender.send(record).map_err(|_| Error::ReceiverClosed)?;
				summary.emitted += 1;
			}
			Err(e) => {
				log::error!("Line: {:?} Error: {}. Skipping", line.iter().collect::<Vec<_>>(), e);
				summary.skipped += 1;
			}
		}
	}

	log::info!(
		"Finished streaming: {} records emitted, {} lines skipped",
		summary.emitted,
		summary.skipped
	);
	Ok(summary)
}

/// Process Line
///
/// Zip the header names with the fields of one row. If a header name repeats, the later column
/// wins.
pub fn process_line(headers: &StringRecord, line: &StringRecord) -> Result<Record> {
	if line.len() != headers.len() {
		return Err(Error::FieldCount {
			expected: headers.len(),
			found: line.len(),
		});
	}
	Ok(headers
		.iter()
		.zip(line.iter())
		.map(|(name, value)| (name.to_string(), value.to_string()))
		.collect())
}
