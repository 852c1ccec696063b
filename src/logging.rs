use std::fs::OpenOptions;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::{LoggingConfig, expand_path};

/// Install the global logger: stderr always, plus the configured log file.
///
/// The terminal always shows warnings, whatever `level` says: malformed alias
/// lines and unreadable alias files must reach the user. The file logger
/// follows `level` exactly.
///
/// Best-effort: a bad level name, an unwritable file or a logger that is
/// already installed are reported on stderr and otherwise ignored. Standard
/// output is never written to, it carries the expanded command.
pub fn init(config: &LoggingConfig) {
    let level = parse_level(&config.level);

    // Terminal records are user-facing warnings; no timestamps.
    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        terminal_level(level),
        term_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(raw) = config.file.as_deref() {
        let path = expand_path(raw);
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => loggers.push(WriteLogger::new(level, simplelog::Config::default(), file)),
            Err(e) => eprintln!("tcsh-dealias: cannot open log file {}: {e}", path.display()),
        }
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("tcsh-dealias: logger init failed: {e}");
    }
}

/// Terminal level: the configured one, but never quieter than `warn`.
fn terminal_level(level: LevelFilter) -> LevelFilter {
    level.max(LevelFilter::Warn)
}

/// Parse a level name, falling back to `warn`.
fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or_else(|_| {
        eprintln!("tcsh-dealias: unknown log level {name:?}, using warn");
        LevelFilter::Warn
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_levels() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("OFF"), LevelFilter::Off);
        assert_eq!(parse_level("Trace"), LevelFilter::Trace);
    }

    #[test]
    fn parse_unknown_level_falls_back() {
        assert_eq!(parse_level("loud"), LevelFilter::Warn);
    }

    #[test]
    fn terminal_never_hides_warnings() {
        assert_eq!(terminal_level(LevelFilter::Off), LevelFilter::Warn);
        assert_eq!(terminal_level(LevelFilter::Error), LevelFilter::Warn);
        assert_eq!(terminal_level(LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(terminal_level(LevelFilter::Debug), LevelFilter::Debug);
    }
}
