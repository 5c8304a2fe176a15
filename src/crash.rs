/*-----------------------------------------------------------------------------------------
 *  Copyright (c) Microsoft Corporation. All rights reserved.
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *----------------------------------------------------------------------------------------*/

use std::{process, ptr};

/// Inside the unmapped zero page, but non-null so debug-build pointer
/// checks don't turn the fault into an abort.
const ZERO_PAGE_PROBE: usize = 0x1;

/**
 * Stops Windows from showing an error reporting dialog when the process
 * faults, which would keep the harness waiting on a window nobody sees.
 */
#[cfg(windows)]
pub fn suppress_crash_dialogs() {
	use windows_sys::Win32::System::Diagnostics::Debug::{SetErrorMode, SEM_FAILCRITICALERRORS,
	                                                     SEM_NOGPFAULTERRORBOX};

	unsafe {
		SetErrorMode(SEM_FAILCRITICALERRORS | SEM_NOGPFAULTERRORBOX);
	}
}

#[cfg(not(windows))]
pub fn suppress_crash_dialogs() {}

/// Reads through an invalid address. Dies with SIGSEGV (or an access
/// violation on Windows).
pub fn null_deref() -> ! {
	suppress_crash_dialogs();

	unsafe {
		let _byte = ptr::read_volatile(ZERO_PAGE_PROBE as *const u8);
	}

	// only reachable if the zero page is mapped
	process::abort()
}

/// Dies with SIGABRT.
pub fn abort() -> ! {
	suppress_crash_dialogs();
	process::abort()
}
