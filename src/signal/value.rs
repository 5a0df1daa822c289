use std::fmt;

/// A packet, or one of the pieces a packet is made of.
#[derive(Clone, PartialEq, Eq)]
pub enum SignalValue {
    Integer(i64),
    List(Vec<SignalValue>),
}

impl SignalValue {
    /// `[n]`
    pub fn singleton(n: i64) -> Self {
        Self::List(vec![Self::Integer(n)])
    }

    /// `[[n]]`, the shape of the divider packets.
    pub fn divider(n: i64) -> Self {
        Self::List(vec![Self::singleton(n)])
    }
}

impl fmt::Debug for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Compact bracket notation, the same form the puzzle input uses.
impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Builds a [`SignalValue`] from bracket notation written as Rust tokens.
/// Only non-negative integers are supported.
///
/// ```
/// use distress_signal::{signal, signal::SignalValue};
///
/// let value = signal!([[1], [2, 3, 4], []]);
/// assert_eq!(value.to_string(), "[[1],[2,3,4],[]]");
/// assert_eq!(signal!(5), SignalValue::Integer(5));
/// ```
#[macro_export]
macro_rules! signal {
    ([ $($item:tt),* $(,)? ]) => {
        $crate::signal::SignalValue::List(vec![$($crate::signal!($item)),*])
    };
    ($n:literal) => {
        $crate::signal::SignalValue::Integer($n)
    };
}
