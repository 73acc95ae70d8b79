//! JSON output for streamed records.

use std::io::{BufWriter, Write};

use serde::ser::{SerializeSeq, Serializer as _};
use serde_json::ser::Formatter;

use crate::error::Result;
use crate::types::Record;

/// Write JSON
///
/// Drain `records` (typically the receiving end of the streamer's channel) into `output` as a
/// single JSON array, one element per record, without buffering the records themselves. Returns
/// the number of records written.
///
/// `finish` runs once `records` is exhausted and before the array is closed. If it fails, the
/// array is left unterminated so a truncated stream never reads as complete JSON.
pub fn write_json<I, W, C>(records: I, output: W, pretty: bool, finish: C) -> Result<usize>
where
	I: IntoIterator<Item = Record>,
	W: Write,
	C: FnOnce() -> Result<()>,
{
	let mut buffered = BufWriter::new(output);
	let count = if pretty {
		write_array(records, serde_json::Serializer::pretty(&mut buffered), finish)?
	} else {
		write_array(records, serde_json::Serializer::new(&mut buffered), finish)?
	};
	writeln!(buffered)?;
	buffered.flush()?;
	Ok(count)
}

fn write_array<I, W, F, C>(records: I, mut ser: serde_json::Serializer<W, F>, finish: C) -> Result<usize>
where
	I: IntoIterator<Item = Record>,
	W: Write,
	F: Formatter,
	C: FnOnce() -> Result<()>,
{
	let mut seq = (&mut ser).serialize_seq(None)?;
	let mut count = 0;
	for record in records {
		seq.serialize_element(&record)?;
		count += 1;
	}
	finish()?;
	seq.end()?;
	Ok(count)
}
