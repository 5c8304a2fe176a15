/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

use catalogue::{self, Verb};
use error::FixtureError;
use std::ffi::{OsStr, OsString};
use util;

/// A recognized verb together with its already validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
	CrashNullDeref,
	CrashAbort,
	Timeout,
	NoOpSignal,
	ExitCode(i32),
	WriteStderr(OsString),
	WriteBoth(OsString),
	EchoStdinLine,
}

impl Behavior {
	pub fn verb(&self) -> Verb {
		match *self {
			Behavior::CrashNullDeref => Verb::CrashNullDeref,
			Behavior::CrashAbort => Verb::CrashAbort,
			Behavior::Timeout => Verb::Timeout,
			Behavior::NoOpSignal => Verb::NoOpSignal,
			Behavior::ExitCode(_) => Verb::ExitCode,
			Behavior::WriteStderr(_) => Verb::WriteStderr,
			Behavior::WriteBoth(_) => Verb::WriteBoth,
			Behavior::EchoStdinLine => Verb::EchoStdinLine,
		}
	}
}

/**
 * Turns the arguments that follow the program name into a behavior.
 *
 * Returns `Ok(None)` when there is no verb or the verb is not in the
 * catalogue; both are silent successes. A verb that takes arguments must
 * get exactly as many as it declares.
 */
pub fn parse(args: &[OsString]) -> Result<Option<Behavior>, FixtureError> {
	let (token, rest) = match args.split_first() {
		Some(split) => split,
		None => return Ok(None),
	};

	// a verb that isn't valid unicode can't match any catalogue entry
	let verb = match token.to_str().and_then(catalogue::lookup) {
		Some(verb) => verb,
		None => return Ok(None),
	};

	let arity = verb.arity();

	if arity > 0 && rest.len() != arity {
		return Err(FixtureError::MissingArgument {
			verb: verb.name(),
			expected: arity,
			got: rest.len(),
		});
	}

	let behavior = match verb {
		Verb::CrashNullDeref => Behavior::CrashNullDeref,
		Verb::CrashAbort => Behavior::CrashAbort,
		Verb::Timeout => Behavior::Timeout,
		Verb::NoOpSignal => Behavior::NoOpSignal,
		Verb::ExitCode => Behavior::ExitCode(util::parse_int(&rest[0].to_string_lossy())),
		Verb::WriteStderr => Behavior::WriteStderr(rest[0].clone()),
		Verb::WriteBoth => Behavior::WriteBoth(rest[0].clone()),
		Verb::EchoStdinLine => Behavior::EchoStdinLine,
	};

	Ok(Some(behavior))
}

/// Human-readable rendering of the invocation, for the log.
pub fn describe(args: &[OsString]) -> String {
	args.iter()
		.map(|arg| arg.as_os_str())
		.map(OsStr::to_string_lossy)
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn args(list: &[&str]) -> Vec<OsString> {
		list.iter().map(OsString::from).collect()
	}

	#[test]
	fn no_verb() {
		assert_eq!(parse(&[]).unwrap(), None);
	}

	#[test]
	fn unknown_verb_is_ignored() {
		assert_eq!(parse(&args(&["frobnicate"])).unwrap(), None);
		assert_eq!(parse(&args(&["frobnicate", "a", "b"])).unwrap(), None);
		assert_eq!(parse(&args(&["EXIT-CODE", "3"])).unwrap(), None);
	}

	#[test]
	fn zero_argument_verbs_ignore_extras() {
		assert_eq!(
			parse(&args(&["timeout", "1"])).unwrap(),
			Some(Behavior::Timeout)
		);
		assert_eq!(
			parse(&args(&["crash-abort"])).unwrap(),
			Some(Behavior::CrashAbort)
		);
		assert_eq!(
			parse(&args(&["usersig"])).unwrap(),
			Some(Behavior::NoOpSignal)
		);
	}

	#[test]
	fn exit_code_parses_value() {
		assert_eq!(
			parse(&args(&["exit-code", "6"])).unwrap(),
			Some(Behavior::ExitCode(6))
		);
		assert_eq!(
			parse(&args(&["rc", "-10"])).unwrap(),
			Some(Behavior::ExitCode(-10))
		);
		assert_eq!(
			parse(&args(&["exit-code", "nope"])).unwrap(),
			Some(Behavior::ExitCode(0))
		);
	}

	#[test]
	fn write_verbs_carry_message() {
		assert_eq!(
			parse(&args(&["write-stderr", "hello"])).unwrap(),
			Some(Behavior::WriteStderr(OsString::from("hello")))
		);
		assert_eq!(
			parse(&args(&["stdouterr", "yoda"])).unwrap(),
			Some(Behavior::WriteBoth(OsString::from("yoda")))
		);
	}

	#[test]
	fn missing_argument_is_misuse() {
		for verb in ["exit-code", "write-stderr", "write-both"].iter() {
			let err = parse(&args(&[*verb])).unwrap_err();
			assert!(err.is_misuse(), "{}", verb);
		}
	}

	#[test]
	fn surplus_argument_is_misuse() {
		match parse(&args(&["exit-code", "1", "2"])) {
			Err(FixtureError::MissingArgument {
				verb,
				expected,
				got,
			}) => {
				assert_eq!(verb, "exit-code");
				assert_eq!(expected, 1);
				assert_eq!(got, 2);
			}
			other => panic!("unexpected result {:?}", other),
		}
	}

	#[test]
	fn behavior_reports_its_verb() {
		assert_eq!(Behavior::ExitCode(3).verb(), Verb::ExitCode);
		assert_eq!(Behavior::EchoStdinLine.verb().name(), "echo-stdin-line");
	}

	#[test]
	fn describe_joins_arguments() {
		assert_eq!(describe(&args(&["write-both", "a b"])), "write-both a b");
	}
}
