//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `elog!` macro for errors and warnings, written to stderr
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! # Example
//!
//! ```ignore
//! log!("sass"; "{}", output.display());
//!
//! let progress = ProgressLine::new(&[("sass", 3), ("minify", 3)]);
//! progress.inc("sass");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{self, Write, stderr, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix to stderr
///
/// # Usage
/// ```ignore
/// elog!("error"; "{:#}", err);
/// ```
#[macro_export]
macro_rules! elog {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::elog($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stdout);

    let mut stdout = stdout().lock();
    clear_progress(&mut stdout);
    write_line(&mut stdout, &prefix, message).ok();
}

/// Log a message with a colored module prefix to stderr
pub fn elog(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stderr);

    clear_progress(&mut stdout().lock());
    write_line(&mut stderr().lock(), &prefix, message).ok();
}

/// Clear the progress line, which sits on the current row without a newline
fn clear_progress(stdout: &mut impl Write) {
    if BAR_COUNT.load(Ordering::SeqCst) > 0 {
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

fn write_line(out: &mut impl Write, prefix: &str, message: &str) -> io::Result<()> {
    writeln!(out, "{prefix} {message}")?;
    out.flush()
}

/// Apply color to a module prefix based on module type
///
/// Honors the `--color` override set through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module.to_ascii_lowercase().as_str() {
        "sass" => Style::new().bright_magenta().bold(),
        "minify" => Style::new().bright_blue().bold(),
        "done" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    prefix
        .if_supports_color(stream, |p| p.style(style))
        .to_string()
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[build] sass(2/3) minify(1/3)`
///
/// `log!` clears the line before printing, the next `inc` redraws it below
/// the notice.
pub struct ProgressLine {
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new build progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        BAR_COUNT.store(1, Ordering::SeqCst);

        let progress = Self {
            counters,
            lock: Mutex::new(()),
        };
        progress.display(false);
        progress
    }

    /// Increment the counter with the given name and redraw.
    pub fn inc(&self, name: &str) {
        if let Some(counter) = self.counters.iter().find(|c| c.name == name) {
            counter.current.fetch_add(1, Ordering::Relaxed);
            self.display(false);
        }
    }

    /// Render counters as `name(current/total)` joined by spaces.
    fn render(&self) -> String {
        self.counters
            .iter()
            .map(|c| {
                format!(
                    "{}({}/{})",
                    c.name,
                    c.current.load(Ordering::Relaxed),
                    c.total
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Overwrite the current line with the progress counters.
    fn display(&self, newline: bool) {
        let _guard = self.lock.lock();
        let line = self.render();
        let prefix = colorize_prefix("build", Stream::Stdout);

        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        if newline {
            writeln!(stdout, "{prefix} {line}").ok();
        } else {
            write!(stdout, "{prefix} {line}").ok();
        }
        stdout.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);
        self.display(true);
        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        // Clear the line on drop (error path, not finished properly)
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_counters() {
        let progress = ProgressLine {
            counters: vec![
                Counter {
                    name: "sass",
                    total: 3,
                    current: AtomicUsize::new(2),
                },
                Counter {
                    name: "minify",
                    total: 3,
                    current: AtomicUsize::new(1),
                },
            ],
            lock: Mutex::new(()),
        };
        assert_eq!(progress.render(), "sass(2/3) minify(1/3)");
        std::mem::forget(progress);
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("sass", Stream::Stdout), "[sass]");
        assert_eq!(colorize_prefix("Error", Stream::Stderr), "[Error]");
    }

    #[test]
    fn test_write_line() {
        owo_colors::set_override(false);
        let mut out = Vec::new();
        let prefix = colorize_prefix("error", Stream::Stderr);
        write_line(&mut out, &prefix, "entry `a.scss` not found").unwrap();
        assert_eq!(out, b"[error] entry `a.scss` not found\n");
    }
}
