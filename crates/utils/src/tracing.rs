// Copyright 2023-2025 Irreducible Inc.

/// Installs a global subscriber that writes formatted events to stderr.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. Installing twice is not an error; the
/// first subscriber stays in place.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
