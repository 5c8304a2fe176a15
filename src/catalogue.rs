/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
	CrashNullDeref,
	CrashAbort,
	Timeout,
	NoOpSignal,
	ExitCode,
	WriteStderr,
	WriteBoth,
	EchoStdinLine,
}

pub struct Entry {
	pub name: &'static str,
	pub alias: &'static str,
	pub verb: Verb,
}

/**
 * Every verb the fixture understands. Both `name` and `alias` are matched
 * by exact, case-sensitive string equality and are unique across the table.
 */
pub const CATALOGUE: &'static [Entry] = &[
	Entry {
		name: "crash-null-deref",
		alias: "segfault",
		verb: Verb::CrashNullDeref,
	},
	Entry {
		name: "crash-abort",
		alias: "abort",
		verb: Verb::CrashAbort,
	},
	Entry {
		name: "timeout",
		alias: "timeout",
		verb: Verb::Timeout,
	},
	Entry {
		name: "no-op-signal",
		alias: "usersig",
		verb: Verb::NoOpSignal,
	},
	Entry {
		name: "exit-code",
		alias: "rc",
		verb: Verb::ExitCode,
	},
	Entry {
		name: "write-stderr",
		alias: "stderr",
		verb: Verb::WriteStderr,
	},
	Entry {
		name: "write-both",
		alias: "stdouterr",
		verb: Verb::WriteBoth,
	},
	Entry {
		name: "echo-stdin-line",
		alias: "read_line_from_stdin",
		verb: Verb::EchoStdinLine,
	},
];

pub fn lookup(token: &str) -> Option<Verb> {
	CATALOGUE
		.iter()
		.find(|entry| entry.name == token || entry.alias == token)
		.map(|entry| entry.verb)
}

impl Verb {
	/// Canonical name, as listed in the catalogue.
	pub fn name(self) -> &'static str {
		CATALOGUE
			.iter()
			.find(|entry| entry.verb == self)
			.map(|entry| entry.name)
			.unwrap_or("unknown")
	}

	/// Extra arguments the verb requires. Zero-argument verbs ignore extras.
	pub fn arity(self) -> usize {
		match self {
			Verb::ExitCode | Verb::WriteStderr | Verb::WriteBoth => 1,
			_ => 0,
		}
	}
}
