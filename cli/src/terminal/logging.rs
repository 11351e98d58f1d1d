use std::fmt;

use anyhow::Context;
use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target used by [`print`](crate::terminal::print::print) for layout lines.
pub const PRINT_TARGET: &str = "contractr::print";

pub struct ContractrFormatter;

impl<S, N> FormatEvent<S, N> for ContractrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Target of the `success!` macro in `contractr_common`.
const SUCCESS_TARGET: &str = "contractr::success";

/// Installs the stderr subscriber. `RUST_LOG` wins over the `-q` level.
pub fn init_logging(quiet: u8) -> anyhow::Result<()> {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref(), quiet)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ContractrFormatter)
        .init();
    Ok(())
}

/// Builds the filter from `RUST_LOG` when given, else from `-q`.
///
/// A user directive such as `contractr_core=debug` must not hide the summary
/// layout or the success lines, so both targets are enabled on top of it.
fn env_filter(rust_log: Option<&str>, quiet: u8) -> anyhow::Result<EnvFilter> {
    let Some(directives) = rust_log.filter(|raw| !raw.trim().is_empty()) else {
        let default_level = match quiet {
            0 => "info",
            1 => "warn",
            _ => "error",
        };
        return Ok(EnvFilter::new(default_level));
    };

    let mut filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid RUST_LOG value `{directives}`"))?;
    for target in [PRINT_TARGET, SUCCESS_TARGET] {
        filter = filter.add_directive(format!("{target}=info").parse()?);
    }
    Ok(filter)
}
