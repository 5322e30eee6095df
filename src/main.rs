//! CLI entry point for pantry

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use termcolor::ColorChoice;

use pantry::logger::{FileSink, Logger};
use pantry::{
    checksum_of_file, dir_size, dir_size_parallel, format_size, list_all_files, run_process,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Everyday filesystem, process, and checksum helpers")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log operations to the console as they run
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Mirror log output to an append-mode file
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every regular file under a directory, one per line
    List {
        /// Directory to walk
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Strip this leading directory from each result
        #[arg(long = "strip-prefix", value_name = "DIR")]
        strip_prefix: Option<String>,

        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Total size in bytes of every file under a directory
    Size {
        /// Directory to measure
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Human-readable output (1.5M instead of 1572864)
        #[arg(long)]
        human: bool,

        /// Stat files in parallel with N workers (0 = auto-detect)
        #[arg(short = 'j', long = "jobs", value_name = "N")]
        jobs: Option<usize>,
    },

    /// SHA-1 checksum of one or more files
    Checksum {
        /// Files to digest
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Run a program, streaming its output; exits with the child's code
    Run {
        /// Program to execute
        program: String,

        /// Arguments passed through to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();

    let logger = build_logger(&args).unwrap_or_else(|e| {
        eprintln!("pantry: cannot open log file: {}", e);
        process::exit(1);
    });

    if let Err(code) = dispatch(&args, logger.as_ref()) {
        process::exit(code);
    }
}

/// Wire up the logger lifecycle from the global flags.
///
/// The file sink, when requested, is opened once here and lives for the rest
/// of the process; console logging is tied to --verbose so machine-readable
/// stdout stays clean.
fn build_logger(args: &Args) -> io::Result<Option<Logger>> {
    if !args.verbose && args.log_file.is_none() {
        return Ok(None);
    }

    let color = if should_use_color(args.color) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut logger = Logger::new("pantry")
        .with_color(color)
        .with_console(args.verbose);
    if let Some(ref path) = args.log_file {
        logger = logger.with_sink(FileSink::open(path)?);
    }
    Ok(Some(logger))
}

fn dispatch(args: &Args, logger: Option<&Logger>) -> Result<(), i32> {
    match &args.command {
        Command::List {
            path,
            strip_prefix,
            json,
        } => {
            if let Some(log) = logger {
                log.info(format_args!("listing files under {}", path.display()));
            }
            let files = list_all_files(path, strip_prefix.as_deref()).map_err(|e| {
                fail(logger, &format!("cannot walk '{}': {}", path.display(), e))
            })?;
            if *json {
                let paths: Vec<String> = files
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect();
                match serde_json::to_string_pretty(&paths) {
                    Ok(out) => println!("{}", out),
                    Err(e) => return Err(fail(logger, &format!("cannot encode JSON: {}", e))),
                }
            } else {
                for file in &files {
                    println!("{}", file.display());
                }
            }
            if let Some(log) = logger {
                log.info(format_args!("found {} files", files.len()));
            }
            Ok(())
        }

        Command::Size { path, human, jobs } => {
            if let Some(log) = logger {
                log.info(format_args!("measuring {}", path.display()));
            }
            let total = measure(path, *jobs).map_err(|e| {
                fail(logger, &format!("cannot measure '{}': {}", path.display(), e))
            })?;
            if *human {
                println!("{}", format_size(total));
            } else {
                println!("{}", total);
            }
            Ok(())
        }

        Command::Checksum { files } => {
            for file in files {
                let digest = checksum_of_file(file).map_err(|e| {
                    fail(logger, &format!("cannot read '{}': {}", file.display(), e))
                })?;
                println!("{}  {}", digest, file.display());
            }
            Ok(())
        }

        Command::Run { program, args: child_args } => {
            if let Some(log) = logger {
                log.info(format_args!("running {} {}", program, child_args.join(" ")));
            }
            let argv: Vec<&str> = child_args.iter().map(String::as_str).collect();
            match run_process(program, &argv, io::stdout(), io::stderr()) {
                Ok(_) => Ok(()),
                // A non-zero child exit already reported itself on stderr;
                // only spawn/IO failures get a message here
                Err(pantry::Error::ProcessFailed { code }) => Err(code.unwrap_or(1)),
                Err(e) => Err(fail(logger, &format!("cannot run '{}': {}", program, e))),
            }
        }
    }
}

/// Compute a directory size with the requested parallelism.
fn measure(path: &std::path::Path, jobs: Option<usize>) -> io::Result<u64> {
    match jobs {
        None => dir_size(path),
        Some(0) => dir_size_parallel(path),
        Some(workers) => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| dir_size_parallel(path)),
            // Fall back to the global pool if custom pool creation fails
            Err(_) => dir_size_parallel(path),
        },
    }
}

fn fail(logger: Option<&Logger>, message: &str) -> i32 {
    if let Some(log) = logger {
        log.error(message);
    }
    eprintln!("pantry: {}", message);
    1
}
