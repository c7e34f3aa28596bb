//! Lift compiler CLI.

use liftc::commands::{check_module, lex_file, module_manifest};

fn main() {
    liftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lift lex <file.lift>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "module" | "manifest" => {
            let mut dir: Option<&str> = None;
            let mut config: Option<&str> = None;

            for arg in args.iter().skip(2) {
                if let Some(path) = arg.strip_prefix("--config=") {
                    config = Some(path);
                } else if !arg.starts_with('-') && dir.is_none() {
                    dir = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(dir) = dir else {
                eprintln!("error: missing directory");
                eprintln!("Usage: lift {command} <dir> [--config=<file.json>]");
                std::process::exit(1);
            };

            if command == "module" {
                check_module(dir, config);
            } else {
                module_manifest(dir, config);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Lift {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lift compiler");
    println!();
    println!("Usage: lift <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>                    Print the tokens of a source file");
    println!("  module <dir> [--config=FILE]  Load a directory as a module and summarize it");
    println!("  manifest <dir> [--config=FILE]");
    println!("                                Print the module manifest as JSON");
    println!("  help                          Show this message");
    println!("  version                       Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lift_lexical=debug) to enable logging.");
}
