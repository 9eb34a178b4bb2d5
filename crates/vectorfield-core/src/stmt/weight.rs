use crate::Error;

use std::{fmt, str::FromStr};

/// Rank label of a text-search vector term, `A` being the most important.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weight {
    A,
    B,
    C,
    #[default]
    D,
}

impl Weight {
    pub const ALL: [Weight; 4] = [Weight::A, Weight::B, Weight::C, Weight::D];

    pub fn as_char(self) -> char {
        match self {
            Weight::A => 'A',
            Weight::B => 'B',
            Weight::C => 'C',
            Weight::D => 'D',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weight::A => "A",
            Weight::B => "B",
            Weight::C => "C",
            Weight::D => "D",
        }
    }
}

impl TryFrom<char> for Weight {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Weight::A),
            'B' => Ok(Weight::B),
            'C' => Ok(Weight::C),
            'D' => Ok(Weight::D),
            _ => Err(Error::invalid_weight(value)),
        }
    }
}

impl FromStr for Weight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Weight::try_from(c),
            _ => Err(Error::invalid_weight(s)),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
