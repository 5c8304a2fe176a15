/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_term;
#[cfg(windows)]
extern crate windows_sys;

#[cfg(test)]
extern crate pretty_assertions;

mod behavior;
mod catalogue;
mod crash;
mod error;
mod invocation;
mod util;

use behavior::{Outcome, Streams};
use error::FixtureError;
use slog::Drain;
use std::ffi::OsString;
use std::{env, io, process};

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

/// Anything below this stays out of stderr, which the harness compares byte for byte.
const LOG_LEVEL: slog::Level = slog::Level::Warning;

fn logger() -> (slog::Logger, slog_async::AsyncGuard) {
	let decorator = slog_term::PlainDecorator::new(io::stderr());
	let drain = slog_term::FullFormat::new(decorator).build().fuse();
	let drain = slog::LevelFilter::new(drain, LOG_LEVEL).fuse();
	let (drain, guard) = slog_async::Async::new(drain).build_with_guard();
	let log = slog::Logger::root(drain.fuse(), o!("version" => VERSION));

	(log, guard)
}

fn _main(log: &slog::Logger, args: &[OsString]) -> Result<Outcome, FixtureError> {
	debug!(log, "Starting: {}", invocation::describe(args));

	let behavior = match invocation::parse(args)? {
		Some(behavior) => behavior,
		None => {
			debug!(log, "Nothing to do");
			return Ok(Outcome::Completed);
		}
	};

	let stdout = io::stdout();
	let stderr = io::stderr();

	let mut streams = Streams {
		stdin: util::raw_stdin(),
		stdout: stdout.lock(),
		stderr: stderr.lock(),
	};

	behavior::execute(log, &behavior, &mut streams)
}

fn main() {
	let args: Vec<OsString> = env::args_os().skip(1).collect();
	let (log, guard) = logger();

	let result = _main(&log, &args);

	let status = match result {
		Ok(outcome) => outcome.status(),
		Err(ref err) if err.is_misuse() => {
			crit!(log, "{}", err);
			drop(log);
			drop(guard);
			process::abort();
		}
		Err(err) => {
			error!(log, "{}", err);
			1
		}
	};

	// flush the async drain; process::exit skips destructors
	drop(log);
	drop(guard);

	process::exit(status);
}
