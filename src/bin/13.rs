#![doc = include_str!("../puzzles/13.md")]

use anyhow::{Context, Result};

use distress_signal::{
    options::{Options, Part, USAGE},
    signal, solve,
};

const DAY: u8 = 13;

fn main() -> Result<()> {
    let options = Options::from_env()?;
    if options.help {
        println!("Solves day {DAY}.\n\nUSAGE:\n  13 [OPTIONS]\n\n{USAGE}");
        return Ok(());
    }

    let path = options.input_path(DAY);
    let input = &std::fs::read_to_string(&path)
        .with_context(|| format!("could not read input file {}", path.display()))?;

    if options.wants(Part::One) {
        solve!(Part::One, signal::part_one, input);
    }
    if options.wants(Part::Two) {
        solve!(Part::Two, signal::part_two, input);
    }
    Ok(())
}
