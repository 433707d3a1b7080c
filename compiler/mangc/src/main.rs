//! Mang Compiler CLI

use mangc::commands::{print_file, run_file, Command};

fn main() {
    mangc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("mangc {}", env!("CARGO_PKG_VERSION"));
        }
        name => {
            let Some(command) = Command::parse(name) else {
                eprintln!("Unknown command: {name}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            };
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mangc {name} <file>");
                std::process::exit(1);
            };
            match command {
                Command::Run => run_file(path, args.get(3).map(String::as_str)),
                Command::Eval | Command::Types | Command::Fmt => print_file(command, path),
            }
        }
    }
}

fn print_usage() {
    println!("Mang interpreter");
    println!();
    println!("Usage: mangc <command> <file> [output]");
    println!();
    println!("Commands:");
    println!("  run <file> [output]  Check and evaluate a program, writing the result");
    println!("                       to output (default: <file>_evaluated.txt)");
    println!("  eval <file>          Evaluate without the type pass");
    println!("  types <file>         Print the type of a program");
    println!("  fmt <file>           Print a program in canonical form");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  MANG_LOG             Tracing filter (falls back to RUST_LOG)");
}
