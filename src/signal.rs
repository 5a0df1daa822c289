//! Distress signal packets: parsing, ordering, and the two puzzle answers.
//!
//! Each packet is an integer or a (possibly nested) list of packets. Packets
//! come in pairs in the input, and [`compare`] decides whether a pair is in
//! the right order.

use thiserror::Error;

use crate::helpers::parse::ParseError;

mod compare;
mod packets;
mod pairs;
mod parse;
mod value;

pub use compare::{compare, is_in_order, ordering, Verdict};
pub use packets::{dividers, PacketCollection};
pub use pairs::{in_order_index_sum, load_pairs, Pair};
pub use parse::MAX_DEPTH;
pub use value::SignalValue;

/// Why an input could not be turned into pairs of packets.
#[derive(Debug, PartialEq, Error)]
pub enum LoadError {
    /// A line is not a valid packet.
    #[error("invalid packet on line {line}: {source}")]
    Packet {
        /// 1-based line number in the input.
        line: usize,
        #[source]
        source: ParseError,
    },
    /// A blank-line separated block does not hold exactly two packets.
    #[error("pair {pair} (starting on line {line}) has {count} packets, expected 2")]
    PairSize {
        /// 1-based index of the pair.
        pair: usize,
        /// 1-based line number the block starts at.
        line: usize,
        /// Number of lines found in the block.
        count: usize,
    },
}

/// Sum of the indices of the pairs in `input` that are in the right order.
pub fn part_one(input: &str) -> Result<usize, LoadError> {
    let pairs = load_pairs(input)?;
    Ok(in_order_index_sum(&pairs))
}

/// The decoder key: the product of the divider positions once every packet
/// in `input`, plus the dividers, is sorted.
pub fn part_two(input: &str) -> Result<usize, LoadError> {
    let pairs = load_pairs(input)?;
    let mut packets = PacketCollection::from_pairs(&pairs);

    Ok(packets.decoder_key())
}
