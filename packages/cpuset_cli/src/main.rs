#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the cpuset tool.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::process::ExitCode;

use argh::FromArgs;
use cpuset_cli::{Command, Format, RunInput, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives, e.g. `CPUSET_LOG=debug`.
const LOG_FILTER_ENV: &str = "CPUSET_LOG";

const PROGRAM_NAME: &str = "cpuset";

/// Exit code for usage, argument and parse errors.
const USAGE_ERROR: u8 = 2;

/// Compute the difference, intersection or union of two cpusets.
#[derive(FromArgs)]
#[argh(
    example = "cpuset difference 0-32 8-16",
    example = "cpuset --format mask difference 00000001,ffffffff 0000ff00",
    note = "Commands:
  difference     compute the difference of the two cpusets
  intersection   compute the intersection of the two cpusets
  union          compute the union of the two cpusets

See also:
  man 7 cpuset for more information about cpusets"
)]
struct Args {
    /// use the specified format for parsing the two cpusets and outputting the result (list,
    /// mask)
    #[argh(option, default = "Format::List")]
    format: Format,

    /// print the version and exit
    #[argh(switch)]
    version: bool,

    /// the command followed by the two cpusets
    #[argh(positional, greedy)]
    args: Vec<String>,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let env_args: Vec<String> = std::env::args().skip(1).collect();
    let str_args: Vec<&str> = env_args.iter().map(String::as_str).collect();

    let args = match Args::from_args(&[PROGRAM_NAME], &str_args) {
        Ok(args) => args,
        Err(early_exit) => {
            return match early_exit.status {
                Ok(()) => {
                    println!("{}", early_exit.output);
                    ExitCode::SUCCESS
                }
                Err(()) => {
                    eprintln!("{}", early_exit.output);
                    ExitCode::from(USAGE_ERROR)
                }
            };
        }
    };

    if args.version {
        println!("{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let Ok([command, s1, s2]) = <[String; 3]>::try_from(args.args) else {
        return fail("invalid number of arguments");
    };

    let command = match command.parse::<Command>() {
        Ok(command) => command,
        Err(message) => return fail(&message),
    };

    debug!(format = %args.format, %command, "arguments accepted");

    let input = RunInput {
        format: args.format,
        command,
        s1,
        s2,
    };

    match run(&input) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Reports a usage or parse error together with the help text.
#[cfg_attr(test, mutants::skip)]
fn fail(message: &str) -> ExitCode {
    eprintln!("{message}");

    if let Err(help) = Args::from_args(&[PROGRAM_NAME], &["--help"]) {
        eprintln!("{}", help.output);
    }

    ExitCode::from(USAGE_ERROR)
}
