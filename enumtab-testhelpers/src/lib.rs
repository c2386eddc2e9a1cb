#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
//! Shared setup for enumtab's test suites.
//!
//! Annotate tests with `#[enumtab_testhelpers::test]` to get a tracing
//! subscriber (filtered by `ENUMTAB_LOG`, e.g. `ENUMTAB_LOG=enumtab_core=trace`)
//! and colored backtraces on panic.

pub use enumtab_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the `tracing` target filter for tests.
pub const LOG_ENV: &str = "ENUMTAB_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

fn is_harness_frame(name: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "test::run_test",
        "test::__rust_begin_short_backtrace",
        "std::panicking::",
        "std::panic::",
        "core::panicking::",
        "std::sys::backtrace::",
        "core::ops::function::FnOnce::call_once",
    ];
    PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Parses a filter such as `info,enumtab_core=trace`; without one, everything
/// at `DEBUG` and above is shown.
fn filter_from(directives: Option<&str>) -> Targets {
    directives
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::DEBUG))
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Medium)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| match &frame.name {
                Some(name) => !is_harness_frame(name),
                None => true,
            })
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::Auto,
        )));

    let filter = filter_from(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(Uptime)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the test subscriber and panic printer, once per process.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

#[cfg(test)]
mod tests {
    use super::{filter_from, is_harness_frame};

    #[test]
    fn harness_frames_are_hidden() {
        assert!(is_harness_frame("test::run_test::{{closure}}"));
        assert!(is_harness_frame("core::panicking::panic_fmt"));
        assert!(!is_harness_frame("enumtab_core::tables::EnumTables::find_name"));
    }

    #[test]
    fn filter_falls_back_to_debug() {
        let fallback = filter_from(None);
        assert!(fallback.would_enable("enumtab_core", &tracing::Level::DEBUG));
        assert!(!fallback.would_enable("enumtab_core", &tracing::Level::TRACE));

        let custom = filter_from(Some("enumtab_core=trace"));
        assert!(custom.would_enable("enumtab_core", &tracing::Level::TRACE));
    }
}
