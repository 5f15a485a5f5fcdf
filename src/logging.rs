//! Log file setup.
//!
//! Every run writes a fresh plain-text log. Lines look like
//! `2026-10-16T09:12:44.120Z [INFO] checking /repositories/2/archival_objects/10 for thumbnail links`.

use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Renders `<timestamp> [LEVEL] message`.
struct BracketedLevel;

impl<S, N> FormatEvent<S, N> for BracketedLevel
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        SystemTime.format_time(&mut writer)?;
        write!(writer, " [{}] ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(BracketedLevel)
            .with_writer(Mutex::new(file)),
    )
}

/// Creates (or truncates) `log_path` and installs it as the global log sink.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(log_path: &Path) -> anyhow::Result<()> {
    let file = File::create(log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    file_subscriber(file, filter).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_tagged_with_level() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let log_path = dir.path().join("run.log");
        let file = File::create(&log_path).unwrap();

        let subscriber = file_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("checking {} for thumbnail links", "/repositories/2/archival_objects/10");
            tracing::debug!("not written");
            tracing::error!("failed to fetch");
        });

        let contents = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0]
            .ends_with("[INFO] checking /repositories/2/archival_objects/10 for thumbnail links"));
        assert!(lines[1].ends_with("[ERROR] failed to fetch"));
    }

    #[test]
    fn test_init_fails_for_unwritable_path() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let log_path = dir.path().join("missing").join("run.log");

        let err = init(&log_path).unwrap_err();
        assert!(err.to_string().contains("failed to create log file"));
    }
}
