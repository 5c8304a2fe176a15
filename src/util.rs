/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io;
use std::io::prelude::*;
#[cfg(unix)]
use std::{fs, mem::ManuallyDrop};

/**
 * Parses an integer the way C's `atoi` does: leading whitespace, an optional
 * sign, then decimal digits up to the first non-digit. Input without digits
 * yields 0. Overflow wraps, which keeps the low bits of the written number.
 */
pub fn parse_int(input: &str) -> i32 {
	let mut chars = input
		.trim_start_matches(|c: char| c == ' ' || ('\t'..='\r').contains(&c))
		.chars()
		.peekable();

	let negative = match chars.peek() {
		Some(&'-') => {
			chars.next();
			true
		}
		Some(&'+') => {
			chars.next();
			false
		}
		_ => false,
	};

	let mut value: i32 = 0;

	for c in chars {
		match c.to_digit(10) {
			Some(digit) => value = value.wrapping_mul(10).wrapping_add(digit as i32),
			None => break,
		}
	}

	if negative {
		value.wrapping_neg()
	} else {
		value
	}
}

/**
 * Reads a single line, terminator included, one byte at a time so that
 * nothing past the terminator is taken from `reader`. Returns an empty
 * buffer at end of input.
 */
pub fn read_line<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
	let mut line = Vec::new();
	let mut byte = [0u8; 1];

	loop {
		match reader.read(&mut byte) {
			Ok(0) => break,
			Ok(_) => {
				line.push(byte[0]);

				if byte[0] == b'\n' {
					break;
				}
			}
			Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(err),
		}
	}

	Ok(line)
}

#[cfg(unix)]
pub fn os_bytes(s: &OsStr) -> Cow<[u8]> {
	use std::os::unix::ffi::OsStrExt;

	Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
pub fn os_bytes(s: &OsStr) -> Cow<[u8]> {
	match s.to_string_lossy() {
		Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
		Cow::Owned(s) => Cow::Owned(s.into_bytes()),
	}
}

/// The process's standard input, unbuffered so a read never takes more
/// from the descriptor than the caller consumes.
#[cfg(unix)]
pub struct RawStdin(ManuallyDrop<fs::File>);

#[cfg(unix)]
impl Read for RawStdin {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		self.0.read(buf)
	}
}

#[cfg(unix)]
pub fn raw_stdin() -> RawStdin {
	use std::os::unix::io::FromRawFd;

	// ManuallyDrop keeps descriptor 0 open when this goes away
	RawStdin(ManuallyDrop::new(unsafe { fs::File::from_raw_fd(0) }))
}

#[cfg(not(unix))]
pub type RawStdin = io::Stdin;

#[cfg(not(unix))]
pub fn raw_stdin() -> RawStdin {
	io::stdin()
}
