use std::cmp::Ordering;
use std::slice;

use crate::debugln;

use super::SignalValue;

/// The outcome of comparing two signal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LessThan,
    Equal,
    GreaterThan,
}

impl Verdict {
    /// Whether a pair with this verdict is in the right order. Only
    /// [`Verdict::GreaterThan`] is out of order.
    #[inline]
    pub fn is_in_order(self) -> bool {
        self != Self::GreaterThan
    }
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::LessThan,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::GreaterThan,
        }
    }
}

impl From<Verdict> for Ordering {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::LessThan => Ordering::Less,
            Verdict::Equal => Ordering::Equal,
            Verdict::GreaterThan => Ordering::Greater,
        }
    }
}

/// Compares two signal values.
///
/// Integers compare numerically. Lists compare element by element, and the
/// first element that differs decides; if one list runs out first, it is the
/// lesser one. An integer facing a list is compared as if it were a list
/// holding only that integer.
pub fn compare(left: &SignalValue, right: &SignalValue) -> Verdict {
    compare_at(left, right, 0)
}

/// [`compare`] mapped to [`Ordering`], for use with `sort_by` and friends.
#[inline]
pub fn ordering(left: &SignalValue, right: &SignalValue) -> Ordering {
    compare(left, right).into()
}

/// Whether `left` and `right` are in the right order.
#[inline]
pub fn is_in_order(left: &SignalValue, right: &SignalValue) -> bool {
    compare(left, right).is_in_order()
}

fn compare_at(left: &SignalValue, right: &SignalValue, depth: usize) -> Verdict {
    use SignalValue::{Integer, List};

    let indent = Indent(depth);
    debugln!("{indent}- Compare {left} vs {right}");

    match (left, right) {
        (Integer(l), Integer(r)) => {
            let verdict = Verdict::from(l.cmp(r));
            match verdict {
                Verdict::LessThan => debugln!("{indent}  - Left side is smaller"),
                Verdict::GreaterThan => debugln!("{indent}  - Right side is smaller"),
                Verdict::Equal => {}
            }
            verdict
        }
        (List(l), List(r)) => compare_lists(l, r, depth),
        // A lone integer borrowed as a one-element slice is exactly the
        // promoted `[n]`, without building it.
        (Integer(_), List(r)) => {
            debugln!("{indent}  - Mixed types; convert left to [{left}] and retry comparison");
            compare_lists(slice::from_ref(left), r, depth)
        }
        (List(l), Integer(_)) => {
            debugln!("{indent}  - Mixed types; convert right to [{right}] and retry comparison");
            compare_lists(l, slice::from_ref(right), depth)
        }
    }
}

fn compare_lists(left: &[SignalValue], right: &[SignalValue], depth: usize) -> Verdict {
    for (l, r) in left.iter().zip(right) {
        match compare_at(l, r, depth + 1) {
            Verdict::Equal => continue,
            decided => return decided,
        }
    }

    let verdict = Verdict::from(left.len().cmp(&right.len()));
    let indent = Indent(depth);
    match verdict {
        Verdict::LessThan => debugln!("{indent}  - Left side ran out of items"),
        Verdict::GreaterThan => debugln!("{indent}  - Right side ran out of items"),
        Verdict::Equal => {}
    }
    verdict
}

/// Two spaces per level of recursion, for the trace output.
struct Indent(usize);

impl std::fmt::Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:width$}", "", width = self.0 * 2)
    }
}
