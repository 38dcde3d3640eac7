//! Coordinate codec for DTMF signaling channels
//!
//! Encodes a latitude/longitude pair into a string over the 16-key DTMF alphabet
//! (`0-9`, `*`, `#`, `A-D`) with a trailing CRC-derived checksum, and decodes it back.

pub mod error;
pub mod symbol;
pub mod checksum;
pub mod coordinate;
pub mod encoder;
pub mod decoder;

pub use checksum::{checksum, verify_checksum};
pub use coordinate::{Coordinate, CoordinateInput, CoordinateText};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, Result};
pub use symbol::{is_dtmf_sequence, DtmfSymbol};

// Alphabet configuration
/// Keypad symbols in checksum value order (index = 4-bit value)
pub const DTMF_ALPHABET: &str = "0123456789*#ABCD";
pub const FIELD_SEPARATOR: char = '#';
pub const DECIMAL_POINT_SYMBOL: char = '*';
pub const MINUS_SYMBOL: char = 'D';

// Checksum configuration
pub const DEFAULT_CHECKSUM_LENGTH: usize = 3;
pub const MAX_CHECKSUM_LENGTH: usize = 16;

// Coordinate configuration
/// Fractional digits used when rendering numeric input
pub const COORDINATE_PRECISION: usize = 5;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Encode a coordinate pair into a DTMF payload.
pub fn encode(input: impl Into<CoordinateInput>, checksum_length: usize) -> Result<String> {
    Encoder::new(checksum_length)?.encode(input)
}

/// Decode a DTMF payload produced with the same `checksum_length`.
pub fn decode(payload: &str, checksum_length: usize) -> Result<Coordinate> {
    Decoder::new(checksum_length)?.decode(payload)
}
