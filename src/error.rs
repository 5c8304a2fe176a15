/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

use std::{error, fmt, io};

#[derive(Debug)]
pub enum FixtureError {
	/// A verb that needs arguments was invoked with the wrong number of them.
	MissingArgument {
		verb: &'static str,
		expected: usize,
		got: usize,
	},
	Io(io::Error),
}

impl FixtureError {
	/// Misuse by the harness. Never recovered from: the process aborts.
	pub fn is_misuse(&self) -> bool {
		match *self {
			FixtureError::MissingArgument { .. } => true,
			FixtureError::Io(_) => false,
		}
	}
}

impl fmt::Display for FixtureError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			FixtureError::MissingArgument {
				verb,
				expected,
				got,
			} => write!(
				f,
				"Bad arguments: {} expects exactly {} argument(s), got {}",
				verb, expected, got
			),
			FixtureError::Io(ref err) => write!(f, "Stream error: {}", err),
		}
	}
}

impl error::Error for FixtureError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match *self {
			FixtureError::MissingArgument { .. } => None,
			FixtureError::Io(ref err) => Some(err),
		}
	}
}

impl From<io::Error> for FixtureError {
	fn from(err: io::Error) -> FixtureError {
		FixtureError::Io(err)
	}
}
