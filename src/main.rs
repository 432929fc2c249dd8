use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use lox_expr::{
    error::Error,
    interpreter::{
        evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser as ExprParser,
        value::core::Value,
    },
};
use simple_logger::SimpleLogger;

/// lox evaluates Lox expressions, either from a script or line by line from
/// standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lox to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the token stream before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed tree in prefix form before evaluating it.
    #[arg(short = 'a', long)]
    print_ast: bool,

    /// How much diagnostic output to show.
    #[arg(short, long, value_enum, default_value_t = LogLevel::Error)]
    log_level: LogLevel,

    /// The expression to evaluate, or a path with `--file`. Starts an
    /// interactive prompt when absent.
    contents: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level.into()).init() {
        eprintln!("Failed to install the logger: {e}");
    }

    match &args.contents {
        Some(path) if args.file => match fs::read_to_string(path) {
            Ok(script) => exit_code(&execute(&script, &args)),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                ExitCode::FAILURE
            },
        },
        Some(script) => exit_code(&execute(script, &args)),
        None => repl(&args),
    }
}

/// Reads expressions line by line until end of input. Errors are reported
/// and the prompt keeps going; the exit status reflects the last line.
fn repl(args: &Args) -> ExitCode {
    let stdin = io::stdin();
    let mut status = ExitCode::SUCCESS;

    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
        };

        if !line.trim().is_empty() {
            status = exit_code(&execute(&line, args));
        }
        prompt();
    }

    status
}

fn prompt() {
    print!("> ");
    if let Err(e) = io::stdout().flush() {
        log::warn!("Failed to flush the prompt: {e}");
    }
}

/// Runs one source buffer through every stage and prints its value.
fn execute(source: &str, args: &Args) -> Result<Value, Error> {
    let tokens = Lexer::new(source).tokenize().tokens;
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let expr = ExprParser::new(&tokens)?.parse()?;
    if args.print_ast {
        println!("{expr}");
    }

    let value = Evaluator::new().evaluate(&expr)?;
    println!("{value}");

    Ok(value)
}

fn exit_code(result: &Result<Value, Error>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
