//! Finger labels used by the event table.
//!
//! Labels run 1..=5 (thumb to pinky). Row `label - 1` of every ERP matrix
//! belongs to that finger.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 1,
    Index = 2,
    Middle = 3,
    Ring = 4,
    Pinky = 5,
}

impl Finger {
    /// All fingers in row order.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Map an event-table label to a finger. Anything outside 1..=5 is `None`.
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            1 => Some(Finger::Thumb),
            2 => Some(Finger::Index),
            3 => Some(Finger::Middle),
            4 => Some(Finger::Ring),
            5 => Some(Finger::Pinky),
            _ => None,
        }
    }

    pub fn label(self) -> i64 {
        self as i64
    }

    /// Row of the ERP matrix holding this finger's average.
    pub fn row(self) -> usize {
        self as usize - 1
    }

    /// Display name, e.g. `"Index (2)"`.
    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb (1)",
            Finger::Index => "Index (2)",
            Finger::Middle => "Middle (3)",
            Finger::Ring => "Ring (4)",
            Finger::Pinky => "Pinky (5)",
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
