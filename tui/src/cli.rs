//! Command Line
//!
//! Turns `argv` into an [`AnimationConfig`] before the terminal is touched.
//!
//! Arguments are read left to right and the first one that decides the
//! outcome wins: `--help` prints usage at once, a bad flag fails at once.
//! Single-letter flags may be clustered (`-aF`); a `t` anywhere in a cluster
//! takes the *next* argument as its value (`-ta 500`). That pass rewrites
//! `argv` into one flag per argument for clap. When several variant flags are
//! given the last one wins, so the raw clap matches are consulted for flag
//! positions after the derive struct is filled in.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use thiserror::Error;
use tracing::debug;

use sl_core::{AnimationConfig, AnimationError, TrainVariant};

/// Raw command line flags
#[derive(Debug, Parser)]
#[command(
    name = "sl",
    about = "A steam locomotive runs across your terminal",
    after_help = "Without a train flag one is picked at random. Press q or Esc to stop early.",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// An accident is occurring. People cry for help.
    #[arg(short = 'a')]
    pub accident: bool,

    /// The train takes off and flies across the screen
    #[arg(short = 'F')]
    pub fly: bool,

    /// Little SL logo train
    #[arg(short = 'l')]
    pub logo: bool,

    /// C51 steam locomotive
    #[arg(short = 'c')]
    pub c51: bool,

    /// D51 steam locomotive
    #[arg(short = 'd')]
    pub d51: bool,

    /// TGV high-speed train
    #[arg(short = 'G')]
    pub tgv: bool,

    /// Total animation time in milliseconds (1 to 60000)
    #[arg(short = 't', long = "time", value_name = "MS", allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Print this help
    #[arg(long = "help")]
    pub help: bool,
}

/// What the user asked for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit successfully
    Help(String),
    /// Run the animation
    Run(AnimationConfig),
}

/// Command line errors, each with its own exit code
#[derive(Debug, Error)]
pub enum ArgsError {
    /// Unknown flag or stray argument
    #[error("{0}")]
    UnrecognizedFlag(String),

    /// `--time` value that is not a number
    #[error("invalid duration '{0}': expected milliseconds")]
    InvalidDuration(String),

    /// `--time` given without a value
    #[error("--time requires a value in milliseconds")]
    MissingDuration,

    /// Picking the default train failed
    #[error(transparent)]
    Variant(#[from] AnimationError),
}

impl ArgsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnrecognizedFlag(_) => 1,
            Self::InvalidDuration(_) => 2,
            Self::MissingDuration => 3,
            Self::Variant(err) => err.exit_code(),
        }
    }

    fn from_clap(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidValue => Self::MissingDuration,
            _ => Self::UnrecognizedFlag(first_line(&err.to_string())),
        }
    }
}

/// Variant flags by clap argument id
const VARIANT_FLAGS: [(&str, TrainVariant); 4] = [
    ("logo", TrainVariant::Logo),
    ("c51", TrainVariant::C51),
    ("d51", TrainVariant::D51),
    ("tgv", TrainVariant::Tgv),
];

/// Single-letter flags that may appear in a cluster, besides `t`
const CLUSTER_FLAGS: &str = "aFlcdG";

/// Result of the left-to-right pass over `argv`
#[derive(Debug, PartialEq, Eq)]
enum Expanded {
    /// `--help` came before anything that fails
    Help,
    /// One flag per argument, ready for clap
    Args(Vec<OsString>),
}

/// Parse a full argument list, program name first
///
/// # Errors
///
/// Returns an [`ArgsError`] for anything the command line does not accept.
pub fn parse<I, T>(args: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let args = match expand(args.into_iter().map(Into::into))? {
        Expanded::Help => return Ok(Invocation::Help(command.render_help().to_string())),
        Expanded::Args(args) => args,
    };

    let matches = command
        .try_get_matches_from_mut(args)
        .map_err(|err| ArgsError::from_clap(&err))?;
    let cli = Cli::from_arg_matches(&matches).map_err(|err| ArgsError::from_clap(&err))?;

    let variant = match last_variant(&matches) {
        Some(variant) => variant,
        None => TrainVariant::random()?,
    };

    let mut config = AnimationConfig::new(variant)
        .with_accident(cli.accident)
        .with_fly(cli.fly);
    if let Some(time) = cli.time.as_deref() {
        config = config.with_duration_ms(parse_millis(time)?);
    }

    debug!(?config, "command line parsed");
    Ok(Invocation::Run(config))
}

/// Rewrite `argv` into one flag per argument, failing on the first bad one
///
/// A pending time value is consumed by the very next argument, whatever it
/// looks like. A bare `-` is an empty cluster.
fn expand(mut args: impl Iterator<Item = OsString>) -> Result<Expanded, ArgsError> {
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut pending_time = false;

    for arg in args {
        let arg = arg.to_string_lossy();

        if pending_time {
            let millis = parse_millis(&arg)?;
            out.push("--time".into());
            out.push(millis.to_string().into());
            pending_time = false;
        } else if arg == "--time" {
            pending_time = true;
        } else if arg == "--help" {
            return Ok(Expanded::Help);
        } else if let Some(cluster) = arg.strip_prefix('-') {
            for flag in cluster.chars() {
                match flag {
                    't' => pending_time = true,
                    _ if CLUSTER_FLAGS.contains(flag) => out.push(format!("-{flag}").into()),
                    _ => {
                        return Err(ArgsError::UnrecognizedFlag(format!(
                            "unexpected argument '-{flag}' found"
                        )))
                    }
                }
            }
        } else {
            return Err(ArgsError::UnrecognizedFlag(format!(
                "unexpected argument '{arg}' found"
            )));
        }
    }

    if pending_time {
        return Err(ArgsError::MissingDuration);
    }
    Ok(Expanded::Args(out))
}

/// Parse a millisecond count the way `strtol` would accept a whole string
///
/// Leading whitespace and a sign are allowed, and an empty string reads as
/// zero; anything else that is not a base-10 integer is rejected. The result
/// is not yet clamped.
///
/// # Errors
///
/// Returns [`ArgsError::InvalidDuration`] for non-numeric input.
pub fn parse_millis(value: &str) -> Result<i64, ArgsError> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .trim_start()
        .parse::<i64>()
        .map_err(|_| ArgsError::InvalidDuration(value.to_string()))
}

fn last_variant(matches: &ArgMatches) -> Option<TrainVariant> {
    VARIANT_FLAGS
        .into_iter()
        .filter(|(id, _)| matches.get_flag(id))
        .filter_map(|(id, variant)| {
            matches
                .indices_of(id)
                .and_then(Iterator::max)
                .map(|index| (index, variant))
        })
        .max_by_key(|(index, _)| *index)
        .map(|(_, variant)| variant)
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sl_core::config::clamp_duration_ms;

    fn run(args: &[&str]) -> Result<AnimationConfig, ArgsError> {
        let argv = std::iter::once("sl").chain(args.iter().copied());
        match parse(argv)? {
            Invocation::Run(config) => Ok(config),
            Invocation::Help(_) => panic!("unexpected help for {args:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run(&["-d"]).unwrap();
        assert_eq!(config, AnimationConfig::new(TrainVariant::D51));
        assert_eq!(config.duration_ms(), 4000);
    }

    #[test]
    fn test_no_variant_flag_picks_any_variant() {
        let config = run(&[]).unwrap();
        assert!(TrainVariant::ALL.contains(&config.variant));
    }

    #[test]
    fn test_time_is_clamped() {
        assert_eq!(run(&["-d", "--time", "99999"]).unwrap().duration_ms(), 60_000);
        assert_eq!(run(&["-d", "--time", "0"]).unwrap().duration_ms(), 1);
        assert_eq!(run(&["-d", "--time", "-50"]).unwrap().duration_ms(), 1);
        assert_eq!(run(&["-d", "-t", "1500"]).unwrap().duration_ms(), 1500);
    }

    #[test]
    fn test_time_accepts_leading_space_and_sign() {
        assert_eq!(run(&["-d", "--time", "  250"]).unwrap().duration_ms(), 250);
        assert_eq!(run(&["-d", "--time", "+250"]).unwrap().duration_ms(), 250);
        assert_eq!(clamp_duration_ms(parse_millis(" 7").unwrap()), 7);
    }

    #[test]
    fn test_non_numeric_time_exits_2() {
        for value in ["fast", "12ms", "1.5", "99999999999999999999"] {
            let err = run(&["-d", "--time", value]).unwrap_err();
            assert_eq!(err.exit_code(), 2, "value {value:?}");
        }
    }

    #[test]
    fn test_missing_time_exits_3() {
        assert_eq!(run(&["--time"]).unwrap_err().exit_code(), 3);
        assert_eq!(run(&["-d", "-t"]).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn test_unknown_flag_exits_1() {
        assert_eq!(run(&["-x"]).unwrap_err().exit_code(), 1);
        assert_eq!(run(&["--fast"]).unwrap_err().exit_code(), 1);
        assert_eq!(run(&["-ax"]).unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_stray_argument_exits_1() {
        let err = run(&["-d", "extra"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnrecognizedFlag(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_clustered_flags() {
        let config = run(&["-aFc"]).unwrap();
        assert!(config.accident);
        assert!(config.fly);
        assert_eq!(config.variant, TrainVariant::C51);
    }

    #[test]
    fn test_last_variant_flag_wins() {
        assert_eq!(run(&["-l", "-G"]).unwrap().variant, TrainVariant::Tgv);
        assert_eq!(run(&["-G", "-l"]).unwrap().variant, TrainVariant::Logo);
        assert_eq!(run(&["-cd"]).unwrap().variant, TrainVariant::D51);
        assert_eq!(run(&["-dc"]).unwrap().variant, TrainVariant::C51);
        assert_eq!(run(&["-l", "-a", "-c"]).unwrap().variant, TrainVariant::C51);
    }

    #[test]
    fn test_repeated_time_last_wins() {
        let config = run(&["-d", "--time", "100", "--time", "200"]).unwrap();
        assert_eq!(config.duration_ms(), 200);
    }

    #[test]
    fn test_time_in_cluster_takes_next_argument() {
        let config = run(&["-d", "-ta", "500"]).unwrap();
        assert!(config.accident);
        assert_eq!(config.duration_ms(), 500);

        let config = run(&["-at", "750", "-c"]).unwrap();
        assert!(config.accident);
        assert_eq!(config.variant, TrainVariant::C51);
        assert_eq!(config.duration_ms(), 750);
    }

    #[test]
    fn test_time_value_is_never_glued_to_the_flag() {
        // `5` is read as a flag of its own
        assert_eq!(run(&["-d", "-t500"]).unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_pending_time_consumes_any_next_argument() {
        assert_eq!(run(&["-d", "-t", "-a"]).unwrap_err().exit_code(), 2);
        assert_eq!(run(&["-d", "--time", "--help"]).unwrap_err().exit_code(), 2);
        assert_eq!(run(&["-d", "-t", "-20"]).unwrap().duration_ms(), 1);
    }

    #[test]
    fn test_empty_time_reads_as_zero() {
        assert_eq!(run(&["-d", "--time", ""]).unwrap().duration_ms(), 1);
    }

    #[test]
    fn test_bare_dashes() {
        assert_eq!(run(&["-d", "-"]).unwrap().variant, TrainVariant::D51);
        assert_eq!(run(&["-d", "--"]).unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_help_wins_over_later_errors() {
        for args in [["sl", "--help", "-x"], ["sl", "--help", "--time"]] {
            assert!(
                matches!(parse(args), Ok(Invocation::Help(_))),
                "{args:?}"
            );
        }
    }

    #[test]
    fn test_earlier_error_wins_over_help() {
        assert_eq!(parse(["sl", "-x", "--help"]).unwrap_err().exit_code(), 1);
        assert_eq!(parse(["sl", "--time", "x", "--help"]).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_help_lists_flags() {
        let Invocation::Help(text) = parse(["sl", "--help"]).unwrap() else {
            panic!("expected help");
        };
        for flag in ["-a", "-F", "-l", "-c", "-d", "-G", "--time"] {
            assert!(text.contains(flag), "help is missing {flag}");
        }
    }
}
