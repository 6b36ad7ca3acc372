use std::{fs, path::PathBuf, process};

use clap::{ArgAction, Parser, ValueEnum};
use letc::{Compilation, Statement, compile, compiler::lexer::render_tokens};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// letc compiles `let` statements over integer arithmetic, printing the
/// computed variables and the generated IR.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letc to read a file instead of taking the source inline.
    #[arg(short, long)]
    file: bool,

    /// Outputs to print, in the order given. May be repeated.
    #[arg(short, long, value_enum, default_values_t = [Emit::Trace, Emit::Ir])]
    emit: Vec<Emit>,

    /// Also write the generated IR to this path, e.g. `output.ll`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raises the log level: `-v` for debug, `-vv` for trace. `RUST_LOG`
    /// overrides it.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// One printable output of a run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// The numbered token listing.
    Tokens,
    /// Each statement followed by its expression tree.
    Ast,
    /// The `name = value` evaluation trace.
    Trace,
    /// The generated IR.
    Ir,
    /// All of the above.
    All,
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn print_output(emit: Emit, compilation: &Compilation) {
    match emit {
        Emit::Tokens => print!("{}", render_tokens(&compilation.tokens)),
        Emit::Ast => {
            for statement in &compilation.program {
                let Statement::Assignment { value, .. } = statement;
                println!("{statement}");
                print!("{}", value.render_tree());
            }
        },
        Emit::Trace => {
            for binding in &compilation.bindings {
                println!("{binding}");
            }
        },
        Emit::Ir => print!("{}", compilation.module),
        Emit::All => {
            for emit in [Emit::Tokens, Emit::Ast, Emit::Trace, Emit::Ir] {
                print_output(emit, compilation);
            }
        },
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
                                               error!(path = %args.contents, error = %e, "failed to read input");
                                               eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                         &args.contents);
                                               process::exit(1);
                                           })
    } else {
        args.contents.clone()
    };

    let compilation = match compile(&source) {
        Ok(compilation) => compilation,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    };

    for emit in &args.emit {
        print_output(*emit, &compilation);
    }

    if let Some(path) = &args.output {
        if let Err(e) = fs::write(path, compilation.module.to_string()) {
            eprintln!("Failed to write IR to '{}': {e}", path.display());
            process::exit(1);
        }
        debug!(path = %path.display(), "wrote IR");
    }
}
