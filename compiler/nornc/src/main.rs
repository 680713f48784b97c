//! Norn CLI
//!
//! Interactive console for mailing-list expressions.

use nornc::commands::{eval_expression, run_repl};
use nornc::Config;

fn main() {
    nornc::init_tracing();

    let mut config = Config::from_env();
    let args: Vec<String> = std::env::args()
        .skip(1)
        .filter(|arg| !config.apply_flag(arg))
        .collect();

    let Some(command) = args.first() else {
        run_repl(config);
        return;
    };

    match command.as_str() {
        "repl" => run_repl(config),
        "eval" => {
            let mut load = None;
            let mut source = None;
            for arg in args.iter().skip(1) {
                if let Some(file) = arg.strip_prefix("--load=") {
                    load = Some(file);
                } else if source.is_none() {
                    source = Some(arg.as_str());
                }
            }

            let Some(source) = source else {
                eprintln!("error: missing expression");
                eprintln!("Usage: norn eval <expression> [--load=<file>]");
                std::process::exit(1);
            };
            eval_expression(source, load, config);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Norn {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Norn mailing-list console");
    println!();
    println!("Usage: norn [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the console (default)");
    println!("  eval <expression>    Evaluate one expression and print the addresses");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --files-dir=<path>   Directory for /save and /load (default: ./files,");
    println!("                       or $NORN_FILES_DIR)");
    println!("  --load=<file>        (eval) Load a saved file before evaluating");
    println!();
    println!("Console commands:");
    println!("  /save <file>         Write every list definition to <file>");
    println!("  /load <file>         Evaluate each line of <file>");
    println!("  /list                Show the defined list names");
    println!("  (empty line)         Quit");
    println!();
    println!("Examples:");
    println!("  norn eval 'a@mit.edu, b@mit.edu * b@mit.edu'");
    println!("  norn eval 'staff ! eve@mit.edu' --load=lists");
    println!("  RUST_LOG=norn_eval=debug norn");
}
