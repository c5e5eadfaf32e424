// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Test support for the Floe crates: shared schema fixtures and a tracing
//! subscriber for test output.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

pub mod fixture;

/// Install a test-writer subscriber filtered by `RUST_LOG`, `warn` when
/// unset. Safe to call from every test.
pub fn init_test_tracing() {
	static INIT: Once = Once::new();

	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

		fmt().with_env_filter(filter).with_test_writer().try_init().ok();
	});
}
