use crate::debugln;

use super::{ordering, Pair, SignalValue};

/// The two extra packets added before sorting: `[[2]]` and `[[6]]`.
pub fn dividers() -> [SignalValue; 2] {
    [SignalValue::divider(2), SignalValue::divider(6)]
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    packet: SignalValue,
    /// Added by [`PacketCollection::from_pairs`], as opposed to read from the
    /// input. An input packet that happens to equal a divider stays `false`.
    is_divider: bool,
}

/// Every packet from a list of pairs, plus the [`dividers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketCollection {
    entries: Vec<Entry>,
}

impl PacketCollection {
    pub fn from_pairs(pairs: &[Pair]) -> Self {
        let from_input = pairs
            .iter()
            .flat_map(Pair::packets)
            .map(|packet| Entry {
                packet: packet.clone(),
                is_divider: false,
            });
        let injected = dividers().map(|packet| Entry {
            packet,
            is_divider: true,
        });
        let entries: Vec<Entry> = from_input.chain(injected).collect();

        debugln!("Collected {} packets (including dividers)", entries.len());
        Self { entries }
    }

    /// The packets in their current order.
    pub fn packets(&self) -> impl Iterator<Item = &SignalValue> + '_ {
        self.entries.iter().map(|entry| &entry.packet)
    }

    /// Sorts the packets into the right order. Packets that compare equal end
    /// up in unspecified relative order.
    pub fn sort(&mut self) {
        self.entries
            .sort_unstable_by(|a, b| ordering(&a.packet, &b.packet));
    }

    /// 1-based positions of the two dividers, in the current order.
    pub fn divider_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..)
            .zip(&self.entries)
            .filter(|(_, entry)| entry.is_divider)
            .map(|(position, _)| position)
    }

    /// Sorts the collection, then multiplies the positions of the dividers.
    pub fn decoder_key(&mut self) -> usize {
        self.sort();

        if crate::trace_enabled() {
            for (position, packet) in (1..).zip(self.packets()) {
                debugln!("{position:>4}: {packet}");
            }
        }

        self.divider_positions().product()
    }
}
