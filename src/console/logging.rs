//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the game's stdout text. The
//! filter defaults to `warn` and can be raised with `RUST_LOG`.
//!
//! Lines read `[component] level: message fields`, where the component is
//! the emitting module (`input`, `session`, ...), so a rejected field and a
//! judged round are easy to tell apart in a transcript.

use std::io;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Last path segment of an event target: `city_trunfo::console::input` -> `input`.
fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::ERROR => "erro".red().bold(),
        Level::WARN => "aviso".yellow().bold(),
        Level::INFO => "info".green(),
        Level::DEBUG => "debug".blue(),
        _ => "trace".dimmed(),
    }
}

/// Formats game events as `[component] level: fields`.
pub struct TrunfoFormatter;

impl<S, N> FormatEvent<S, N> for TrunfoFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let component = format!("[{}]", component(meta.target()));

        write!(writer, "{} {}: ", component.bright_black(), level_tag(*meta.level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(TrunfoFormatter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_is_last_module() {
        assert_eq!(component("city_trunfo::console::input"), "input");
        assert_eq!(component("city_trunfo::console::session"), "session");
        assert_eq!(component("city_trunfo"), "city_trunfo");
    }

    #[test]
    fn test_level_tags() {
        colored::control::set_override(false);
        assert_eq!(level_tag(Level::ERROR).to_string(), "erro");
        assert_eq!(level_tag(Level::WARN).to_string(), "aviso");
        assert_eq!(level_tag(Level::INFO).to_string(), "info");
        assert_eq!(level_tag(Level::TRACE).to_string(), "trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
