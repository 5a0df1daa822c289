use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Which half of a puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            _ => Err(format!("expected 1 or 2, found {s:?}")),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

/// Command line options shared by the binaries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// `-h`, `--help`
    pub help: bool,
    /// `--input PATH`: read the puzzle input from `PATH` instead of
    /// `src/inputs/`.
    pub input: Option<PathBuf>,
    /// `--day N`: only run one day.
    pub day: Option<u8>,
    /// `--part 1|2`: only run one part.
    pub part: Option<Part>,
    /// `--trace`: print the step-by-step trace (debug builds only).
    pub trace: bool,
}

pub const USAGE: &str = "\
OPTIONS:
  -h, --help      Print this help
  --input PATH    Read the puzzle input from PATH
  --day N         Only run day N
  --part 1|2      Only run one part
  --trace         Print a step-by-step trace (debug builds only)
";

impl Options {
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_args(
        args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Result<Self, OptionsError> {
        let args = args.into_iter().map(Into::into).collect();
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self, OptionsError> {
        let options = Self {
            help: args.contains(["-h", "--help"]),
            input: args.opt_value_from_str("--input")?,
            day: args.opt_value_from_str("--day")?,
            part: args.opt_value_from_str("--part")?,
            trace: args.contains("--trace"),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(OptionsError::Unexpected(rest));
        }

        crate::set_trace(options.trace);
        Ok(options)
    }

    /// Where to read the input for `day` from: the `--input` path if one was
    /// given, `src/inputs/<day>.txt` otherwise.
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| crate::puzzle_file("inputs", day))
    }

    /// Whether `part` should run.
    pub fn wants(&self, part: Part) -> bool {
        self.part.map_or(true, |only| only == part)
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error("unexpected arguments: {0:?}")]
    Unexpected(Vec<OsString>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
        assert!(options.wants(Part::One));
        assert!(options.wants(Part::Two));
        assert!(options.input_path(13).ends_with("src/inputs/13.txt"));
    }

    #[test]
    fn all_flags() {
        let options =
            Options::from_args(["--input", "packets.txt", "--day", "13", "--part", "2", "-h"])
                .unwrap();
        assert_eq!(
            options,
            Options {
                help: true,
                input: Some(PathBuf::from("packets.txt")),
                day: Some(13),
                part: Some(Part::Two),
                trace: false,
            }
        );
        assert!(!options.wants(Part::One));
        assert!(options.wants(Part::Two));
        assert_eq!(options.input_path(13), PathBuf::from("packets.txt"));
    }

    #[test]
    fn bad_part() {
        let err = Options::from_args(["--part", "3"]).unwrap_err();
        assert!(matches!(err, OptionsError::Args(_)));
        assert!(err.to_string().contains("expected 1 or 2"), "{err}");
    }

    #[test]
    fn bad_day() {
        assert!(Options::from_args(["--day", "x"]).is_err());
        assert!(Options::from_args(["--day"]).is_err());
    }

    #[test]
    fn leftover_arguments() {
        let Err(OptionsError::Unexpected(rest)) = Options::from_args(["--verbose"]) else {
            panic!("expected leftover arguments");
        };
        assert_eq!(rest, vec![OsString::from("--verbose")]);

        let err = OptionsError::Unexpected(rest);
        assert_eq!(err.to_string(), r#"unexpected arguments: ["--verbose"]"#);
    }

    #[test]
    fn part_round_trip() {
        for part in [Part::One, Part::Two] {
            assert_eq!(part.to_string().parse::<Part>(), Ok(part));
        }
    }
}
