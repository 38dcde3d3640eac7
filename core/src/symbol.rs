//! Standard DTMF keypad symbols
//!
//! Frequency design (ITU-T Q.23):
//! - Row (low) frequencies: 697, 770, 852, 941 Hz
//! - Column (high) frequencies: 1209, 1336, 1477, 1633 Hz
//!
//! Discriminants follow `DTMF_ALPHABET`, so `value()` doubles as the 4-bit checksum digit.

use crate::{DECIMAL_POINT_SYMBOL, MINUS_SYMBOL};

/// Low frequency band (keypad rows)
pub const DTMF_LOW_FREQS: [f32; 4] = [697.0, 770.0, 852.0, 941.0];

/// High frequency band (keypad columns)
pub const DTMF_HIGH_FREQS: [f32; 4] = [1209.0, 1336.0, 1477.0, 1633.0];

/// Total number of symbols (4 × 4 = 16)
pub const DTMF_NUM_SYMBOLS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DtmfSymbol {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Star,
    Pound,
    A,
    B,
    C,
    D,
}

const ALL_SYMBOLS: [DtmfSymbol; 16] = [
    DtmfSymbol::Zero,
    DtmfSymbol::One,
    DtmfSymbol::Two,
    DtmfSymbol::Three,
    DtmfSymbol::Four,
    DtmfSymbol::Five,
    DtmfSymbol::Six,
    DtmfSymbol::Seven,
    DtmfSymbol::Eight,
    DtmfSymbol::Nine,
    DtmfSymbol::Star,
    DtmfSymbol::Pound,
    DtmfSymbol::A,
    DtmfSymbol::B,
    DtmfSymbol::C,
    DtmfSymbol::D,
];

impl DtmfSymbol {
    pub fn all() -> &'static [DtmfSymbol; 16] {
        &ALL_SYMBOLS
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Self::from_value(c as u8 - b'0'),
            '*' => Some(Self::Star),
            '#' => Some(Self::Pound),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Symbol for a 4-bit value (0-15)
    pub fn from_value(value: u8) -> Option<Self> {
        ALL_SYMBOLS.get(value as usize).copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Star => '*',
            Self::Pound => '#',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            digit => (b'0' + digit.value()) as char,
        }
    }

    /// (row, column) position on the 4×4 keypad
    pub fn keypad_position(self) -> (usize, usize) {
        match self {
            Self::One => (0, 0),
            Self::Two => (0, 1),
            Self::Three => (0, 2),
            Self::A => (0, 3),
            Self::Four => (1, 0),
            Self::Five => (1, 1),
            Self::Six => (1, 2),
            Self::B => (1, 3),
            Self::Seven => (2, 0),
            Self::Eight => (2, 1),
            Self::Nine => (2, 2),
            Self::C => (2, 3),
            Self::Star => (3, 0),
            Self::Zero => (3, 1),
            Self::Pound => (3, 2),
            Self::D => (3, 3),
        }
    }

    /// (low, high) tone frequencies in Hz
    pub fn tone_pair(self) -> (f32, f32) {
        let (row, col) = self.keypad_position();
        (DTMF_LOW_FREQS[row], DTMF_HIGH_FREQS[col])
    }
}

impl std::fmt::Display for DtmfSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for DtmfSymbol {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        Self::from_char(c).ok_or(c)
    }
}

/// True when every character is a DTMF keypad symbol
pub fn is_dtmf_sequence(s: &str) -> bool {
    s.chars().all(|c| DtmfSymbol::from_char(c).is_some())
}

/// Map one character of decimal text onto the keypad: `.` → `*`, `-` → `D`
pub(crate) fn map_decimal_char(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '.' => Some(DECIMAL_POINT_SYMBOL),
        '-' => Some(MINUS_SYMBOL),
        _ => None,
    }
}

/// Reverse of `map_decimal_char`; unmapped symbols pass through for the parser to reject
pub(crate) fn unmap_symbol(c: char) -> char {
    match c {
        DECIMAL_POINT_SYMBOL => '.',
        MINUS_SYMBOL => '-',
        other => other,
    }
}
