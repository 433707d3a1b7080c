//! CLI commands.
//!
//! Each command reads one source file, runs one entry point of `mang_eval`
//! and reports the outcome. Failures are rendered to stderr as diagnostics
//! and end the process with status 1.

use std::path::Path;
use std::time::Instant;

use mang_diagnostic::emitter::{emit, ColorMode};
use mang_eval::EvalError;

/// Which entry point a command runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Type pass, then value pass; the result is also written to a file.
    Run,
    /// Value pass only.
    Eval,
    /// Type pass only.
    Types,
    /// Canonical form.
    Fmt,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "run" => Some(Command::Run),
            "eval" => Some(Command::Eval),
            "types" => Some(Command::Types),
            "fmt" => Some(Command::Fmt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Run => "run",
            Command::Eval => "eval",
            Command::Types => "types",
            Command::Fmt => "fmt",
        }
    }

    /// Run the entry point for this command on `source`.
    pub fn execute(self, source: &str) -> Result<String, EvalError> {
        match self {
            Command::Run => mang_eval::evaluate_all(source),
            Command::Eval => mang_eval::evaluate(source),
            Command::Types => mang_eval::evaluate_types(source),
            Command::Fmt => mang_eval::reformat(source),
        }
    }
}

/// Where `run` writes its result when no output path is given: the input
/// path with its extension replaced by `_evaluated.txt`.
pub fn default_output_path(input: &str) -> String {
    let stem = match input.rfind('.') {
        Some(dot) if !input[dot..].contains(['/', '\\']) => &input[..dot],
        _ => input,
    };
    format!("{stem}_evaluated.txt")
}

/// `mangc run <file> [output]`
pub fn run_file(path: &str, output: Option<&str>) {
    println!("Reading program from {path} ...");
    let source = read_file(path);
    println!("Done.");

    println!("Evaluating program ...");
    let start = Instant::now();
    let result = report(Command::Run, path, &source);
    println!("Done in {:.3} seconds.", start.elapsed().as_secs_f64());

    let output = output.map_or_else(|| default_output_path(path), str::to_string);
    println!("Writing result to {output} ...");
    if let Err(e) = std::fs::write(Path::new(&output), &result) {
        eprintln!("error writing '{output}': {e}");
        std::process::exit(1);
    }
    println!("Done.");
    println!("{result}");
}

/// `mangc eval|types|fmt <file>`
pub fn print_file(command: Command, path: &str) {
    let source = read_file(path);
    println!("{}", report(command, path, &source));
}

/// Run `command`, exiting with a rendered diagnostic on failure.
fn report(command: Command, path: &str, source: &str) -> String {
    match command.execute(source) {
        Ok(result) => result,
        Err(error) => {
            tracing::debug!(command = command.name(), code = %error.code(), "failed");
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            let colors = ColorMode::Auto.should_use_colors(is_tty);
            if emit(&error.to_diagnostic(), path, source, colors, std::io::stderr()).is_err() {
                eprintln!("{error}");
            }
            std::process::exit(1);
        }
    }
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
