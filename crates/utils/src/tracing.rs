// Copyright 2023-2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that turns on span close events (with busy/idle timings).
pub const SPAN_EVENTS_FLAG: &str = "CTPRIM_LOG_SPAN_EVENTS";

/// Install a global subscriber for benches and binaries.
///
/// The filter is taken from `RUST_LOG` and defaults to `warn`. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set(SPAN_EVENTS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
