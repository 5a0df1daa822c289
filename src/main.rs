/*
 * Runs every puzzle that has a solution and prints the answers as a table.
 * Use `cargo run --bin <day>` to run a single day with its own output.
 */

use std::fmt::Display;
use std::fs;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use prettytable::{format, row, Table};

use distress_signal::{
    options::{Options, Part, USAGE},
    signal, ANSI_BOLD, ANSI_RESET,
};

type Solver = fn(&str) -> Result<usize, signal::LoadError>;

struct Puzzle {
    day: u8,
    title: &'static str,
    part_one: Solver,
    part_two: Solver,
}

const PUZZLES: &[Puzzle] = &[Puzzle {
    day: 13,
    title: "Distress Signal",
    part_one: signal::part_one,
    part_two: signal::part_two,
}];

fn main() -> Result<()> {
    let options = Options::from_env()?;
    if options.help {
        println!("Runs every solved puzzle.\n\nUSAGE:\n  distress_signal [OPTIONS]\n\n{USAGE}");
        return Ok(());
    }
    if options.input.is_some() && options.day.is_none() {
        bail!("--input needs --day to say which puzzle it is for");
    }

    let puzzles: Vec<&Puzzle> = PUZZLES
        .iter()
        .filter(|puzzle| options.day.map_or(true, |day| day == puzzle.day))
        .collect();
    if let (Some(day), true) = (options.day, puzzles.is_empty()) {
        bail!("no solution for day {day}");
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Day", "Puzzle", "Part 1", "Part 2", "Elapsed"]);

    let mut total = Duration::default();
    for puzzle in puzzles {
        let path = options.input_path(puzzle.day);
        let input = fs::read_to_string(&path)
            .with_context(|| format!("could not read input file {}", path.display()))?;

        let (part_one, one_elapsed) = run_part(&options, Part::One, puzzle.part_one, &input);
        let (part_two, two_elapsed) = run_part(&options, Part::Two, puzzle.part_two, &input);
        let elapsed = one_elapsed + two_elapsed;
        total += elapsed;

        table.add_row(row![
            puzzle.day,
            puzzle.title,
            part_one,
            part_two,
            format!("{elapsed:.2?}")
        ]);
    }

    table.printstd();
    println!("{ANSI_BOLD}Total:{ANSI_RESET} {total:.2?}");
    Ok(())
}

/// Runs one part if the options ask for it. Returns the text for its table
/// cell and the time it took.
fn run_part(options: &Options, part: Part, solver: Solver, input: &str) -> (String, Duration) {
    if !options.wants(part) {
        return ("-".to_owned(), Duration::ZERO);
    }

    let timer = Instant::now();
    let result = solver(input);
    let elapsed = timer.elapsed();

    (cell(result), elapsed)
}

fn cell<T: Display, E: Display>(result: Result<T, E>) -> String {
    match result {
        Ok(answer) => answer.to_string(),
        Err(err) => format!("error: {err}"),
    }
}
