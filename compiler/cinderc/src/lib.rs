//! Cinder driver library.
//!
//! `main.rs` only handles process concerns (arguments, stdin, exit status);
//! everything between source text and result value lives here so it can be
//! tested without spawning the binary.

mod error;
mod options;
mod tracing_setup;

pub use error::DriverError;
pub use options::{parse_args, Command, Input, Options, UsageError, USAGE};
pub use tracing_setup::init_tracing;

use cinder_eval::{Interpreter, Prelude, Value};
use cinder_ir::StringInterner;

/// Environment variable consulted when no scoping flag is given.
pub const SCOPING_ENV_VAR: &str = "CINDER_SCOPING";

/// Decode and evaluate one JSON-encoded program.
///
/// `env_scoping` is the value of [`SCOPING_ENV_VAR`], if set.
pub fn run_source(
    source: &str,
    options: &Options,
    env_scoping: Option<&str>,
) -> Result<Value, DriverError> {
    let config = options.eval_config(env_scoping)?;

    let interner = StringInterner::new();
    let program = cinder_json::decode_str(source, &interner)?;

    let env = Prelude::environment(&interner);
    for (name, value) in &options.defines {
        env.define(interner.intern(name), Value::Int(*value));
    }

    let mut interp = Interpreter::builder(&interner, &program.arena)
        .config(config)
        .build();
    Ok(interp.run(program.root, &env)?)
}

/// Read the program text named by `input`.
pub fn read_input(input: &Input) -> Result<String, DriverError> {
    match input {
        Input::Stdin => std::io::read_to_string(std::io::stdin()).map_err(|source| {
            DriverError::Io {
                path: "<stdin>".to_string(),
                source,
            }
        }),
        Input::File(path) => std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}
