//! Timestamped, module-tagged logging
//!
//! A `Logger` writes `YYYY-MM-DD HH:MM:SS LEVEL module message` lines to
//! stdout (errors also to stderr) and optionally mirrors every line to a
//! shared append-only [`FileSink`]. There is no global state: the sink is
//! opened explicitly at startup and handed to each logger that should use
//! it.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Level::Trace => None,
            Level::Info => Some(Color::Green),
            Level::Warn => Some(Color::Yellow),
            Level::Error => Some(Color::Red),
        }
    }
}

/// Shared handle to an append-mode log file.
///
/// Cloning is cheap; all clones write to the same file. Each line is flushed
/// as it is written so a crash loses at most the line in progress. The file
/// closes when the last clone drops.
#[derive(Clone)]
pub struct FileSink {
    file: Arc<Mutex<File>>,
}

impl FileSink {
    /// Open (or create) a log file for appending.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }

    fn write_line(&self, line: &str) {
        // A failing log mirror must not take down the operation being logged
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// A module-tagged logger.
pub struct Logger {
    module: String,
    sink: Option<FileSink>,
    color: ColorChoice,
    console: bool,
}

impl Logger {
    /// Create a logger tagged with `module`.
    ///
    /// Path-like names are reduced to their last segment, so a logger can be
    /// created with `file!()` and still produce a short tag.
    pub fn new(module: &str) -> Self {
        let module = module
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(module)
            .to_string();
        Self {
            module,
            sink: None,
            color: ColorChoice::Auto,
            console: true,
        }
    }

    /// Mirror every line to the given file sink.
    pub fn with_sink(mut self, sink: FileSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Override console color behavior (default: auto-detect).
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable console output (default: enabled).
    ///
    /// With the console off and a sink attached, the logger writes to the
    /// file alone - useful when stdout carries machine-readable output.
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    /// Log an error together with its chain of causes.
    pub fn error_cause(&self, err: &dyn std::error::Error) {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        self.log(Level::Error, message);
    }

    fn log(&self, level: Level, message: impl Display) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} {} {} {}\n", timestamp, level.as_str(), self.module, message);

        if self.console {
            self.print_console(level, &line);
            if level == Level::Error {
                let _ = std::io::stderr().write_all(line.as_bytes());
            }
        }
        if let Some(ref sink) = self.sink {
            sink.write_line(&line);
        }
    }

    fn print_console(&self, level: Level, line: &str) {
        let mut stdout = StandardStream::stdout(self.color);
        // Color just the level token; timestamp and message stay plain
        if let Some((timestamp, rest)) = line.split_once(level.as_str()) {
            let _ = write!(stdout, "{}", timestamp);
            let _ = stdout.set_color(ColorSpec::new().set_fg(level.color()));
            let _ = write!(stdout, "{}", level.as_str());
            let _ = stdout.reset();
            let _ = write!(stdout, "{}", rest);
        } else {
            let _ = write!(stdout, "{}", line);
        }
    }
}
