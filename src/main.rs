#[macro_use]
extern crate serde_derive;

use std::fs::File;
use std::io::{Read, stdin};
use std::process::exit;

use anyhow::{Context, bail};
use docopt::Docopt;
use tracing_subscriber::EnvFilter;

use bfrun::{CompileError, Config, Error, Interpreter, NewlinePolicy, Program};

const USAGE: &str = "
bfrun

Usage:
  bfrun [options] <program>
  bfrun (-h | --help)

Options:
  -h --help              Show this screen.
  --ast                  Display the compiled program instead of running it.
  --tape-size=<cells>    Number of memory cells [default: 30000].
  --max-nesting=<depth>  Deepest loop nesting accepted [default: 1024].
  --no-rle               Do not collapse runs of + - < >.
  --keep-cr              Pass a lone carriage return in input through unchanged.
";

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    arg_program: String,
    flag_ast: bool,
    flag_tape_size: usize,
    flag_max_nesting: usize,
    flag_no_rle: bool,
    flag_keep_cr: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        if self.flag_tape_size == 0 {
            bail!("--tape-size must be at least 1");
        }

        let newline = if self.flag_keep_cr {
            NewlinePolicy::Preserve
        } else {
            NewlinePolicy::Normalize
        };

        Ok(Config::default()
            .with_tape_capacity(self.flag_tape_size)
            .with_max_loop_nesting(self.flag_max_nesting)
            .with_run_length(!self.flag_no_rle)
            .with_newline(newline))
    }
}

fn main() {
    init_logging();

    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let config = args.config().unwrap_or_else(|e| {
        eprintln!("Invalid arguments: {e}");
        exit(1)
    });

    let program = read_program(&args.arg_program)
        .and_then(|source| Program::compile(&source, &config))
        .unwrap_or_else(|e| {
            eprintln!("Error occurred while loading program: {e}");
            exit(Error::from(e).exit_code())
        });

    if args.flag_ast {
        print!("{program:?}");
        return;
    }

    let mut interpreter = Interpreter::new(program, &config);

    if let Err(e) = interpreter.run() {
        let e = Error::from(e);
        let code = e.exit_code();
        let report = anyhow::Error::new(e).context("Error occurred while running program");
        eprintln!("{report:#}");
        exit(code);
    }
}

/// Send diagnostics to stderr so stdout only carries program output.
///
/// `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a BrainFuck program's source code.
///
/// When path is "-" this will read from stdin.
fn read_program(path: &str) -> Result<Vec<u8>, CompileError> {
    let mut buffer = Vec::new();

    let result = if path == "-" {
        stdin().read_to_end(&mut buffer).context("Could not read stdin")
    } else {
        File::open(path)
            .with_context(|| format!("Could not open file {path}"))
            .and_then(|mut file| {
                file.read_to_end(&mut buffer)
                    .with_context(|| format!("Could not read file {path}"))
            })
    };

    result.map_err(|e| CompileError::EmptyOrUnreadableSource(format!("{e:#}")))?;
    Ok(buffer)
}
