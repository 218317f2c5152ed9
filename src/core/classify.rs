use colored::{ColoredString, Colorize};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Insufficient,
    OutOfDanger,
    Good,
    VeryGood,
    Legendary,
    EliteMind,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Self::Insufficient => "Insufficient",
            Self::OutOfDanger => "Out of Danger",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Legendary => "Legendary",
            Self::EliteMind => "Elite Mind",
        }
    }

    /// Display color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Self::Insufficient => "#ff4757",
            Self::OutOfDanger => "#ffa502",
            Self::Good => "#3742fa",
            Self::VeryGood => "#5352ed",
            Self::Legendary => "#7b2cbf",
            Self::EliteMind => "#ffd32a",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    pub fn colored(self) -> ColoredString {
        let (r, g, b) = self.rgb();
        self.label().truecolor(r, g, b).bold()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr {
            label: &'static str,
            color: &'static str,
        }

        Repr {
            label: self.label(),
            color: self.color(),
        }
        .serialize(serializer)
    }
}

/// Bands are lower-bound inclusive, checked in ascending order.
pub fn classify(average: f64) -> Classification {
    if average < 10.0 {
        Classification::Insufficient
    } else if average < 11.0 {
        Classification::OutOfDanger
    } else if average < 14.0 {
        Classification::Good
    } else if average < 16.0 {
        Classification::VeryGood
    } else if average < 18.0 {
        Classification::Legendary
    } else {
        Classification::EliteMind
    }
}
