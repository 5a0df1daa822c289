/*
 * Input-shaping helpers shared by the puzzle solutions.
 * Example import: `use distress_signal::helpers::{blocks, parse};`.
 */

mod block;
pub mod parse;

pub use block::{blocks, Block, Blocks};
