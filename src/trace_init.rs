//! Optional tracing subscriber setup, compiled in with the `trace` feature.
//!
//! Library code only emits spans and events; binaries decide where they go.

use std::path::Path;

#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "romans=debug";

/// Install a global subscriber. Only the first call has any effect.
///
/// With `log_dir`, spans and events are appended as JSON lines to
/// `romans-trace.jsonl` in that directory; otherwise they go to stderr.
/// `RUST_LOG` overrides the default `romans=debug` filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "romans-trace.jsonl");
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) {}
