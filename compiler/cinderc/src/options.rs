//! Command-line parsing.

use std::path::PathBuf;

use cinder_eval::{EvalConfig, ScopingMode};
use thiserror::Error;

pub const USAGE: &str = "\
Usage: cinder [OPTIONS] [FILE]

Evaluate a JSON-encoded Cinder program read from FILE, or stdin when FILE
is absent or `-`.

Options:
  --lexical           Resolve free variables where a lambda was defined (default)
  --dynamic           Resolve free variables where a lambda is called
  --max-depth <N>     Limit active closure calls to N (0 = unlimited)
  --define NAME=INT   Bind NAME to an integer before evaluation (repeatable)
  --trace             Print a hierarchical evaluation trace to stderr
  -h, --help          Print this help

Environment:
  CINDER_SCOPING      `lexical` or `dynamic`, used when no scoping flag is given
  RUST_LOG            Log filter (tracing EnvFilter syntax)";

/// Where the program text comes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Options {
    /// Scoping flag, if one was given. The last flag wins.
    pub scoping: Option<ScopingMode>,
    /// `Some(None)` is an explicit "unlimited".
    pub max_depth: Option<Option<usize>>,
    pub defines: Vec<(String, i64)>,
    pub trace: bool,
    pub input: Input,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Options),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid --max-depth value: {0}")]
    InvalidDepth(String),
    #[error("invalid --define (expected NAME=INT): {0}")]
    InvalidDefine(String),
    #[error("unexpected extra argument: {0}")]
    ExtraArgument(String),
    #[error("invalid {var} value: {value} (expected `lexical` or `dynamic`)")]
    InvalidScopingEnv { var: &'static str, value: String },
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut input = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--lexical" => options.scoping = Some(ScopingMode::Lexical),
            "--dynamic" => options.scoping = Some(ScopingMode::Dynamic),
            "--trace" => options.trace = true,
            "--max-depth" => {
                let value = args.next().ok_or(UsageError::MissingValue("--max-depth"))?;
                options.max_depth = Some(parse_depth(&value)?);
            }
            "--define" => {
                let value = args.next().ok_or(UsageError::MissingValue("--define"))?;
                options.defines.push(parse_define(&value)?);
            }
            "-" => set_input(&mut input, Input::Stdin, &arg)?,
            flag if flag.starts_with('-') => {
                return Err(UsageError::UnknownOption(flag.to_string()));
            }
            path => set_input(&mut input, Input::File(PathBuf::from(path)), &arg)?,
        }
    }

    options.input = input.unwrap_or_default();
    Ok(Command::Run(options))
}

fn set_input(slot: &mut Option<Input>, input: Input, arg: &str) -> Result<(), UsageError> {
    if slot.is_some() {
        return Err(UsageError::ExtraArgument(arg.to_string()));
    }
    *slot = Some(input);
    Ok(())
}

fn parse_depth(value: &str) -> Result<Option<usize>, UsageError> {
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(UsageError::InvalidDepth(value.to_string())),
    }
}

fn parse_define(value: &str) -> Result<(String, i64), UsageError> {
    let invalid = || UsageError::InvalidDefine(value.to_string());
    let (name, int) = value.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let int = int.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((name.to_string(), int))
}

impl Options {
    /// Resolve the evaluator configuration. A scoping flag beats the
    /// environment variable, which beats the default.
    pub fn eval_config(&self, env_scoping: Option<&str>) -> Result<EvalConfig, UsageError> {
        let scoping = match (self.scoping, env_scoping) {
            (Some(mode), _) => mode,
            (None, Some(value)) => {
                value
                    .parse()
                    .map_err(|_| UsageError::InvalidScopingEnv {
                        var: crate::SCOPING_ENV_VAR,
                        value: value.to_string(),
                    })?
            }
            (None, None) => ScopingMode::default(),
        };

        let mut config = EvalConfig {
            scoping,
            ..EvalConfig::default()
        };
        if let Some(depth) = self.max_depth {
            config.max_call_depth = depth;
        }
        Ok(config)
    }
}
