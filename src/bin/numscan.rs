//! Command-line front end: scans literals from arguments or stdin and prints the values.
//!
//! ```text
//! numscan [--type T] [--max N] [--uncharged] [--no-sign] [--no-float] [--no-hex]
//!         [--no-binary] [--no-exponent] [LITERAL...]
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use numscan::{Limit, Numeric, ScanOptions, scan};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    UnknownType(String),
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidMaxLength(String),
    Io(io::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Io(_) => ExitCode::FAILURE,
            _ => ExitCode::from(2),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownType(name) => write!(f, "unknown target type '{name}'"),
            CliError::UnknownFlag(flag) => write!(f, "unknown flag '{flag}'"),
            CliError::MissingValue(flag) => write!(f, "flag '{flag}' expects a value"),
            CliError::InvalidMaxLength(raw) => {
                write!(f, "'{raw}' is not a valid character count for --max")
            }
            CliError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetType {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl FromStr for TargetType {
    type Err = CliError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "i8" => TargetType::I8,
            "i16" => TargetType::I16,
            "i32" => TargetType::I32,
            "i64" => TargetType::I64,
            "i128" => TargetType::I128,
            "isize" => TargetType::Isize,
            "u8" => TargetType::U8,
            "u16" => TargetType::U16,
            "u32" => TargetType::U32,
            "u64" => TargetType::U64,
            "u128" => TargetType::U128,
            "usize" => TargetType::Usize,
            "f32" => TargetType::F32,
            "f64" => TargetType::F64,
            other => return Err(CliError::UnknownType(other.to_string())),
        })
    }
}

#[derive(Debug)]
struct Config {
    target: TargetType,
    options: ScanOptions,
    limit: Limit,
    literals: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Config, CliError> {
    let mut config = Config {
        target: TargetType::I64,
        options: ScanOptions::default(),
        limit: Limit::unbounded(),
        literals: Vec::new(),
    };
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--type" => {
                let name = it.next().ok_or(CliError::MissingValue("--type"))?;
                config.target = name.parse()?;
            }
            "--max" => {
                let raw = it.next().ok_or(CliError::MissingValue("--max"))?;
                config.limit.max_length = raw
                    .parse()
                    .map_err(|_| CliError::InvalidMaxLength(raw.clone()))?;
            }
            "--uncharged" => config.limit = config.limit.uncharged(),
            "--no-sign" => config.options = config.options.without_sign(),
            "--no-float" => config.options = config.options.without_floating_point(),
            "--no-hex" => config.options = config.options.without_hex(),
            "--no-binary" => config.options = config.options.without_binary(),
            "--no-exponent" => config.options = config.options.without_exponent(),
            // literals may start with '-', so only long flags are reserved
            flag if flag.starts_with("--") => return Err(CliError::UnknownFlag(flag.to_string())),
            literal => config.literals.push(literal.to_string()),
        }
    }
    Ok(config)
}

fn report<T: Numeric>(out: &mut impl Write, literal: &str, config: &Config) -> io::Result<()> {
    let scanned = scan::<T>(literal, &config.options, config.limit);
    if !scanned.is_complete(literal) {
        warn!(
            literal,
            consumed = scanned.consumed,
            "literal has trailing characters outside the grammar"
        );
    }
    writeln!(
        out,
        "{literal} => {} (consumed {})",
        scanned.value, scanned.consumed
    )
}

fn dispatch(out: &mut impl Write, literal: &str, config: &Config) -> io::Result<()> {
    match config.target {
        TargetType::I8 => report::<i8>(out, literal, config),
        TargetType::I16 => report::<i16>(out, literal, config),
        TargetType::I32 => report::<i32>(out, literal, config),
        TargetType::I64 => report::<i64>(out, literal, config),
        TargetType::I128 => report::<i128>(out, literal, config),
        TargetType::Isize => report::<isize>(out, literal, config),
        TargetType::U8 => report::<u8>(out, literal, config),
        TargetType::U16 => report::<u16>(out, literal, config),
        TargetType::U32 => report::<u32>(out, literal, config),
        TargetType::U64 => report::<u64>(out, literal, config),
        TargetType::U128 => report::<u128>(out, literal, config),
        TargetType::Usize => report::<usize>(out, literal, config),
        TargetType::F32 => report::<f32>(out, literal, config),
        TargetType::F64 => report::<f64>(out, literal, config),
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let config = parse_args(args)?;
    debug!(
        target_type = ?config.target,
        bounded = config.limit.is_bounded(),
        max_length = config.limit.max_length,
        "parsed command line"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.literals.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let literal = line.trim();
            if literal.is_empty() {
                continue;
            }
            dispatch(&mut out, literal, &config)?;
        }
    } else {
        for literal in &config.literals {
            dispatch(&mut out, literal, &config)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("numscan: {err}");
            err.exit_code()
        }
    }
}
