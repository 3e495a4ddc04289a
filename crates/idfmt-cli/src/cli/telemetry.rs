//! Console logging for the `idfmt` binary.
//!
//! Log output goes to stderr so that stdout carries only the command's
//! result and can be piped. The level is taken from `RUST_LOG` and defaults
//! to `info`, e.g.:
//!
//! ```bash
//! RUST_LOG=idfmt=trace idfmt generate 'ITEM-{SEQ}' --count 3
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;

    Ok(())
}
