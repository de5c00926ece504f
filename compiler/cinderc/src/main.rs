//! Cinder CLI
//!
//! Evaluates a JSON-encoded Cinder program and prints the result.

use cinderc::{
    init_tracing, parse_args, read_input, run_source, Command, DriverError, SCOPING_ENV_VAR, USAGE,
};

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let options = match command {
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::Run(options) => options,
    };

    init_tracing(options.trace);

    let env_scoping = std::env::var(SCOPING_ENV_VAR).ok();
    let result = read_input(&options.input)
        .and_then(|source| run_source(&source, &options, env_scoping.as_deref()));

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            report(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn report(err: &DriverError) {
    eprintln!("error: {err}");
    if let DriverError::Eval(eval) = err {
        if let Some(backtrace) = &eval.backtrace {
            eprint!("{backtrace}");
        }
    }
}
