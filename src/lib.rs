/*
 * Shared plumbing for the puzzle binaries: input loading, answer reporting and
 * debug tracing. The puzzle logic itself lives in [`signal`].
 */

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod helpers;
pub mod options;
pub mod signal;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

static TRACE: AtomicBool = AtomicBool::new(false);

/// Turns the [`debugln!`] output on or off. Has no visible
/// effect in release builds, where the trace is compiled out.
pub fn set_trace(enabled: bool) {
    TRACE.store(enabled, Ordering::Relaxed);
}

#[doc(hidden)]
#[inline]
pub fn trace_enabled() -> bool {
    cfg!(debug_assertions) && TRACE.load(Ordering::Relaxed)
}

/// Like `println!`, but only in debug builds with tracing switched on.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => {
        if $crate::trace_enabled() {
            println!($($arg)*);
        }
    };
}

/// Runs `$solver` on `$input`, then prints the answer (or the error) together
/// with the time it took.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:path, $input:expr) => {{
        use std::time::Instant;
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);

        let timer = Instant::now();
        let result = $solver($input);
        let elapsed = timer.elapsed();

        match result {
            Ok(answer) => {
                println!("{} {}(elapsed: {:.2?}){}", answer, ANSI_ITALIC, elapsed, ANSI_RESET)
            }
            Err(err) => println!("not solved: {err}"),
        }
    }};
}

/// Path of the text file for `day` inside `src/<folder>/`, e.g.
/// `src/examples/13.txt`.
pub fn puzzle_file(folder: &str, day: u8) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join(folder)
        .join(format!("{day:02}.txt"))
}

pub fn read_file(folder: &str, day: u8) -> io::Result<String> {
    std::fs::read_to_string(puzzle_file(folder, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_file_pads_day() {
        let path = puzzle_file("examples", 3);
        assert!(path.ends_with("src/examples/03.txt"), "{path:?}");
    }

    #[test]
    fn reads_example() {
        let input = read_file("examples", 13).unwrap();
        assert!(input.starts_with("[1,1,3,1,1]"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_file("examples", 99).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
