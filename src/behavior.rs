/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

use crash;
use error::FixtureError;
use invocation::Behavior;
use slog;
use std::ffi::OsStr;
use std::io::prelude::*;
use std::{thread, time};
use util;

pub const TIMEOUT: time::Duration = time::Duration::from_secs(3);

pub const STDOUT_PREFIX: &'static [u8] = b"OUT: ";
pub const STDERR_PREFIX: &'static [u8] = b"ERR: ";

/// How the process should end once a behavior has returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Completed,
	Exit(i32),
}

impl Outcome {
	pub fn status(self) -> i32 {
		match self {
			Outcome::Completed => 0,
			Outcome::Exit(code) => code,
		}
	}
}

pub struct Streams<I, O, E> {
	pub stdin: I,
	pub stdout: O,
	pub stderr: E,
}

fn write_line<W: Write>(writer: &mut W, prefix: &[u8], msg: &OsStr) -> Result<(), FixtureError> {
	let msg = util::os_bytes(msg);

	let mut line = Vec::with_capacity(prefix.len() + msg.len() + 1);
	line.extend_from_slice(prefix);
	line.extend_from_slice(&msg);
	line.push(b'\n');

	writer.write_all(&line)?;
	writer.flush()?;

	Ok(())
}

/**
 * Runs one behavior against the given streams.
 *
 * The crash behaviors never return. Everything written is flushed before
 * this returns, so a harness that reads the streams after the process ends
 * sees all of it.
 */
pub fn execute<I, O, E>(
	log: &slog::Logger,
	behavior: &Behavior,
	streams: &mut Streams<I, O, E>,
) -> Result<Outcome, FixtureError>
where
	I: Read,
	O: Write,
	E: Write,
{
	debug!(log, "execute: {}", behavior.verb().name());

	match *behavior {
		Behavior::CrashNullDeref => crash::null_deref(),
		Behavior::CrashAbort => crash::abort(),
		Behavior::Timeout => {
			info!(log, "Sleeping for {:?}", TIMEOUT);
			thread::sleep(TIMEOUT);
		}
		Behavior::NoOpSignal => {
			// Reserved. Its intended effect was never pinned down, so it does nothing.
		}
		Behavior::ExitCode(code) => {
			info!(log, "Exiting with {}", code);
			return Ok(Outcome::Exit(code));
		}
		Behavior::WriteStderr(ref msg) => {
			write_line(&mut streams.stderr, b"", msg)?;
		}
		Behavior::WriteBoth(ref msg) => {
			write_line(&mut streams.stdout, STDOUT_PREFIX, msg)?;
			write_line(&mut streams.stderr, STDERR_PREFIX, msg)?;
		}
		Behavior::EchoStdinLine => {
			let line = util::read_line(&mut streams.stdin)?;
			debug!(log, "Read {} bytes from stdin", line.len());

			streams.stdout.write_all(&line)?;
			streams.stdout.flush()?;
		}
	}

	Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::ffi::OsString;
	use std::io;

	fn logger() -> slog::Logger {
		slog::Logger::root(slog::Discard, o!())
	}

	fn streams(input: &[u8]) -> Streams<io::Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
		Streams {
			stdin: io::Cursor::new(input.to_vec()),
			stdout: Vec::new(),
			stderr: Vec::new(),
		}
	}

	#[test]
	fn write_stderr() {
		let mut s = streams(b"");
		let behavior = Behavior::WriteStderr(OsString::from("hello"));

		let outcome = execute(&logger(), &behavior, &mut s).unwrap();

		assert_eq!(outcome, Outcome::Completed);
		assert_eq!(s.stdout, b"".to_vec());
		assert_eq!(s.stderr, b"hello\n".to_vec());
	}

	#[test]
	fn write_both() {
		let mut s = streams(b"");
		let behavior = Behavior::WriteBoth(OsString::from("x"));

		execute(&logger(), &behavior, &mut s).unwrap();

		assert_eq!(s.stdout, b"OUT: x\n".to_vec());
		assert_eq!(s.stderr, b"ERR: x\n".to_vec());
	}

	#[test]
	fn echo_stdin_line_leaves_rest() {
		let mut s = streams(b"foo\nbar\n");

		execute(&logger(), &Behavior::EchoStdinLine, &mut s).unwrap();

		assert_eq!(s.stdout, b"foo\n".to_vec());
		assert_eq!(s.stdin.position(), 4);
		assert!(s.stderr.is_empty());
	}

	#[test]
	fn echo_stdin_line_empty_input() {
		let mut s = streams(b"");

		let outcome = execute(&logger(), &Behavior::EchoStdinLine, &mut s).unwrap();

		assert_eq!(outcome, Outcome::Completed);
		assert!(s.stdout.is_empty());
	}

	#[test]
	fn exit_code_outcome() {
		let mut s = streams(b"");

		let outcome = execute(&logger(), &Behavior::ExitCode(42), &mut s).unwrap();

		assert_eq!(outcome, Outcome::Exit(42));
		assert_eq!(outcome.status(), 42);
		assert!(s.stdout.is_empty() && s.stderr.is_empty());
	}

	#[test]
	fn no_op_signal_does_nothing() {
		let mut s = streams(b"input\n");

		let outcome = execute(&logger(), &Behavior::NoOpSignal, &mut s).unwrap();

		assert_eq!(outcome.status(), 0);
		assert!(s.stdout.is_empty() && s.stderr.is_empty());
		assert_eq!(s.stdin.position(), 0);
	}

	struct ClosedPipe;

	impl Write for ClosedPipe {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn write_failure_is_reported() {
		let mut s = Streams {
			stdin: io::empty(),
			stdout: Vec::new(),
			stderr: ClosedPipe,
		};
		let behavior = Behavior::WriteStderr(OsString::from("lost"));

		let err = execute(&logger(), &behavior, &mut s).unwrap_err();

		assert!(!err.is_misuse());
	}
}
