use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use log::LevelFilter;

use crate::{Error, Result, candidates::DEFAULT_MAX_CANDIDATES};

/// Runtime options for a solver run.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Path to the TSPLIB instance file (required positional).
    pub input: PathBuf,
    /// Optional wall-clock budget in seconds, checked between 2-opt passes.
    pub time_budget: Option<f64>,
    /// Maximum candidates retained per node, clamped to N-1 at build time.
    pub max_candidates: usize,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
    /// Optional output file path for the result. Empty means stdout.
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {value}"
            ))),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Off => "off",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {value}"
            ))),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            time_budget: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut positionals: Vec<String> = Vec::new();
        let mut args = args.into_iter().map(|arg| arg.as_ref().to_owned());

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                positionals.push(arg);
                continue;
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, mut value) = match raw_name.split_once('=') {
                Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
                None => (raw_name.to_owned(), None),
            };

            match name.as_str() {
                "time-budget" => {
                    let value = require_value(&name, value.take(), &mut args)?;
                    options.time_budget = Some(parse_time_budget(&value)?);
                }
                "max-candidates" => {
                    let value = require_value(&name, value.take(), &mut args)?;
                    options.max_candidates = value.parse().map_err(|_| {
                        Error::invalid_input(format!(
                            "Invalid value for --max-candidates: {value}"
                        ))
                    })?;
                }
                "log-level" => {
                    let value = require_value(&name, value.take(), &mut args)?;
                    options.log_level = LogLevel::parse(&value)?;
                }
                "log-format" => {
                    let value = require_value(&name, value.take(), &mut args)?;
                    options.log_format = LogFormat::parse(&value)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                "log-output" => {
                    options.log_output = require_value(&name, value.take(), &mut args)?;
                }
                "output" => {
                    options.output = require_value(&name, value.take(), &mut args)?;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        match positionals.len() {
            0 => {
                return Err(Error::invalid_input(format!(
                    "Missing instance file path\n\n{}",
                    Self::usage()
                )));
            }
            1 => {
                options.input = PathBuf::from(&positionals[0]);
            }
            2 => {
                options.input = PathBuf::from(&positionals[0]);
                options.time_budget = Some(parse_time_budget(&positionals[1])?);
            }
            _ => {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {}\n\n{}",
                    positionals[2],
                    Self::usage()
                )));
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tour-opt <instance.tsp> [time-budget-secs] [options]\n\n",
            "Options:\n",
            "  --max-candidates <usize>\n",
            "  --time-budget <secs>\n",
            "  --output <path>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tour-opt instance.tsp\n",
            "  tour-opt instance.tsp 30 --log-level=info\n",
            "  tour-opt instance.tsp --max-candidates 10 --output tour.txt\n",
        )
    }

    pub fn output_path(&self) -> Option<&Path> {
        let output = self.output.trim();
        if output.is_empty() || output == "-" {
            None
        } else {
            Some(Path::new(output))
        }
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        let log_output = self.log_output.trim();
        if log_output.is_empty() || log_output == "-" {
            None
        } else {
            Some(Path::new(log_output))
        }
    }
}

impl fmt::Display for SolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input={} time_budget={} max_candidates={} log_level={} log_format={}",
            self.input.display(),
            self.time_budget
                .map_or_else(|| "none".to_owned(), |secs| format!("{secs}s")),
            self.max_candidates,
            self.log_level.tag(),
            self.log_format.tag(),
        )
    }
}

fn require_value<I>(name: &str, value: Option<String>, args: &mut I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    value
        .or_else(|| args.next())
        .ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_time_budget(value: &str) -> Result<f64> {
    let secs: f64 = value.parse().map_err(|_| {
        Error::invalid_input(format!("Invalid time budget: {value} (expected seconds)"))
    })?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::invalid_input(format!(
            "Invalid time budget: {value} (must be a non-negative number)"
        )));
    }
    Ok(secs)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
