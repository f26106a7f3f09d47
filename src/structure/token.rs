use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// The set of characters a single BBAN position may hold. Each class is written as one
/// letter in a structure string.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// `A`: digits, upper and lower letters
    Alphanumeric,
    /// `B`: digits and upper letters
    UpperAlphanumeric,
    /// `C`: upper and lower letters
    Alpha,
    /// `F`: digits only
    Digit,
    /// `L`: lower letters only
    LowerAlpha,
    /// `U`: upper letters only
    UpperAlpha,
    /// `W`: digits and lower letters
    LowerAlphanumeric,
}

impl CharacterClass {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::Alphanumeric),
            'B' => Some(Self::UpperAlphanumeric),
            'C' => Some(Self::Alpha),
            'F' => Some(Self::Digit),
            'L' => Some(Self::LowerAlpha),
            'U' => Some(Self::UpperAlpha),
            'W' => Some(Self::LowerAlphanumeric),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::Alphanumeric => 'A',
            Self::UpperAlphanumeric => 'B',
            Self::Alpha => 'C',
            Self::Digit => 'F',
            Self::LowerAlpha => 'L',
            Self::UpperAlpha => 'U',
            Self::LowerAlphanumeric => 'W',
        }
    }

    /// The body of a bracketed regex class (without the brackets).
    pub(crate) fn regex_set(&self) -> &'static str {
        match self {
            Self::Alphanumeric => "0-9A-Za-z",
            Self::UpperAlphanumeric => "0-9A-Z",
            Self::Alpha => "A-Za-z",
            Self::Digit => "0-9",
            Self::LowerAlpha => "a-z",
            Self::UpperAlpha => "A-Z",
            Self::LowerAlphanumeric => "0-9a-z",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
            Self::UpperAlphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
            Self::Alpha => c.is_ascii_alphabetic(),
            Self::Digit => c.is_ascii_digit(),
            Self::LowerAlpha => c.is_ascii_lowercase(),
            Self::UpperAlpha => c.is_ascii_uppercase(),
            Self::LowerAlphanumeric => c.is_ascii_digit() || c.is_ascii_lowercase(),
        }
    }
}

/// One triplet of a structure string: a class and how many characters of it follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureToken {
    pub class: CharacterClass,
    pub repeat_count: usize,
}

impl StructureToken {
    pub fn new(class: CharacterClass, repeat_count: usize) -> Self {
        Self {
            class,
            repeat_count,
        }
    }

    pub(crate) fn to_regex(self) -> String {
        format!("[{}]{{{}}}", self.class.regex_set(), self.repeat_count)
    }
}
