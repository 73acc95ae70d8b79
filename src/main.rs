//! Program entrypoint.
//!
//! Usage: `csv2json [--separator=comma|semicolon] [--pretty] <file.csv>`

use std::env;
use std::io;
use std::sync::mpsc;
use std::thread;

use anyhow::Result;

use csv2json::{args, output, process, validate, Error};

fn main() -> Result<()> {
	env_logger::init();
	let config = match args::parse_args(env::args_os()) {
		Ok(config) => config,
		// Let clap print help, version and usage errors itself
		Err(Error::Usage(e)) => e.exit(),
		Err(e) => return Err(e.into()),
	};
	validate::check_if_valid_file(&config.path)?;

	let (sender, receiver) = mpsc::sync_channel(0);
	let streamer = {
		let config = config.clone();
		thread::spawn(move || process::process_csv_file(&config, sender))
	};

	// The streamer's outcome is checked before the JSON array is closed
	let written = output::write_json(receiver, io::stdout().lock(), config.pretty, || {
		let summary = streamer.join().map_err(|_| Error::StreamerPanicked)??;
		log::debug!("Streamer finished with {:?}", summary);
		Ok(())
	})?;
	log::debug!("Wrote {} records", written);
	Ok(())
}
