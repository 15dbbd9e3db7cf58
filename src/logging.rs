use std::env;
use std::sync::OnceLock;

use log::{self, LevelFilter, Metadata, Record};

/// Per-target levels parsed from `SEABATTLE_LOG`, e.g. `info,seabattle::core=trace`.
/// A bare level sets the default; `target=level` applies to that module path and
/// everything below it, the longest matching prefix winning.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl Filter {
    fn parse(directives: &str, default: LevelFilter) -> Self {
        let mut filter = Filter {
            default,
            targets: Vec::new(),
        };
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .filter(|(prefix, _)| {
                target == prefix
                    || target
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, std::cmp::max)
    }
}

struct StderrLogger {
    filter: Filter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("{} [{}] - {}", record.level(), record.target(), record.args())
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Initialize logging from the `SEABATTLE_LOG` environment variable.
/// Defaults to `warn` so log lines stay out of the way of the board.
pub fn init_logging() {
    let directives = env::var("SEABATTLE_LOG").unwrap_or_default();
    let logger = LOGGER.get_or_init(|| StderrLogger {
        filter: Filter::parse(&directives, LevelFilter::Warn),
    });
    let _ = log::set_logger(logger).map(|()| log::set_max_level(logger.filter.max_level()));
}
