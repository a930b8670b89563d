use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::{debug, error};

use fsname_core::config::Config;
use fsname_core::is_valid_file_name;

#[derive(Debug, Parser)]
#[command(name = "fsname", author, version, about = "a file name sanitizer and validator")]
struct Cli {
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count, help = "Sets the level of verbosity")]
    verbose: u8,

    #[arg(short = 'c', long = "config", global = true, help = "read settings from a TOML [file]")]
    config: Option<String>,

    #[arg(short = 'm', long = "max-length", global = true, help = "truncate sanitized names to [n] bytes")]
    max_length: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        name = "sanitize",
        about = "output a safe version of each [name]. names are read from stdin when none are given"
    )]
    Sanitize { names: Vec<String> },

    #[command(
        name = "validate",
        about = "output whether each [name] is already safe. fails if any name is not"
    )]
    Validate { names: Vec<String> },

    #[command(name = "check", about = "output the verdict and the sanitized form of each [name]")]
    Check { names: Vec<String> },
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let mut config = match cli.config {
        Some(ref path) => Config::new(path)?,
        None => Config::default(),
    };

    if cli.max_length.is_some() {
        config.sanitize.max_length = cli.max_length;
    }

    Ok(config)
}

fn read_names<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    let mut names = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        names.push(line);
    }
    Ok(names)
}

fn input_names(names: &[String]) -> io::Result<Vec<Vec<u8>>> {
    if !names.is_empty() {
        return Ok(names.iter().map(|name| name.clone().into_bytes()).collect());
    }

    debug!("reading names from stdin");
    let stdin = io::stdin();
    let lines = read_names(stdin.lock())?;
    Ok(lines)
}

fn sanitize<W: Write>(out: &mut W, config: &Config, names: &[Vec<u8>]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", config.sanitize(name))?;
    }
    Ok(())
}

fn verdict(name: &[u8]) -> &'static str {
    if is_valid_file_name(name) {
        "valid"
    } else {
        "invalid"
    }
}

fn validate<W: Write>(out: &mut W, names: &[Vec<u8>]) -> io::Result<bool> {
    let mut all_valid = true;
    for name in names {
        all_valid &= is_valid_file_name(name);
        writeln!(out, "{}\t{}", String::from_utf8_lossy(name), verdict(name))?;
    }
    Ok(all_valid)
}

fn check<W: Write>(out: &mut W, config: &Config, names: &[Vec<u8>]) -> io::Result<()> {
    for name in names {
        writeln!(
            out,
            "{}\t{}\t{}",
            String::from_utf8_lossy(name),
            verdict(name),
            config.sanitize(name)
        )?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let config = load_config(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Sanitize { names } => {
            sanitize(&mut out, &config, &input_names(names)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { names } => {
            if validate(&mut out, &input_names(names)?)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Check { names } => {
            check(&mut out, &config, &input_names(names)?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let min_log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(min_log_level));
    builder.init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("an unexpected error occurred ({})", e);
            ExitCode::FAILURE
        }
    }
}
