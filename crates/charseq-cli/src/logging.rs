use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Raise the log level (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Timestamp log lines.
    #[clap(long, global = true)]
    pub ts: bool,
}

/// Map a numeric verbosity onto a `stderrlog` level; `0` is off.
fn log_level(level: u8) -> LogLevelNum {
    match level {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// The effective verbosity: each `-v` raises `default` by one.
    pub fn level(
        &self,
        default: u8,
    ) -> u8 {
        default.saturating_add(self.verbose)
    }

    /// Install the global `stderrlog` logger.
    ///
    /// ## Arguments
    /// * `default` - the verbosity used without `-v`; `2` is warnings.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level(self.level(default)))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
