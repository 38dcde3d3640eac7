use log::warn;

use crate::error::{CodecError, Result};
use crate::{DTMF_ALPHABET, MAX_CHECKSUM_LENGTH};

/// Symbols produced per CRC-16 block (one per nibble)
const SYMBOLS_PER_BLOCK: usize = 4;

const CRC16_POLYNOMIAL: u16 = 0x1021;
const CRC16_INIT: u16 = 0xFFFF;

/// Keypad symbol for the low 4 bits of `nibble`
fn nibble_symbol(nibble: u8) -> char {
    DTMF_ALPHABET.as_bytes()[(nibble & 0x0F) as usize] as char
}

/// Continue a CRC-16-CCITT (MSB first, no reflection, no final XOR) over `data`
fn crc16_update(mut crc: u16, data: &[u8]) -> u16 {
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-16-CCITT (init 0xFFFF) over the payload body
pub fn crc16(data: &[u8]) -> u16 {
    crc16_update(CRC16_INIT, data)
}

pub(crate) fn validate_length(checksum_length: usize) -> Result<()> {
    if checksum_length > MAX_CHECKSUM_LENGTH {
        return Err(CodecError::InvalidConfig(format!(
            "checksum length {} exceeds maximum of {}",
            checksum_length, MAX_CHECKSUM_LENGTH
        )));
    }
    Ok(())
}

/// Compute the keypad checksum of `body`.
///
/// Each CRC-16 block is rendered as four symbols, most significant nibble first, using the
/// `DTMF_ALPHABET` order. Block 0 is the CRC of the body; each following block is the CRC of
/// the body seeded with the previous block. The result is the first `checksum_length` symbols.
pub fn checksum(body: &str, checksum_length: usize) -> Result<String> {
    validate_length(checksum_length)?;

    let bytes = body.as_bytes();
    let mut out = String::with_capacity(checksum_length);
    let mut block = crc16(bytes);

    while out.len() < checksum_length {
        for shift in (0..SYMBOLS_PER_BLOCK).rev() {
            if out.len() == checksum_length {
                break;
            }
            out.push(nibble_symbol((block >> (shift * 4)) as u8));
        }
        block = crc16_update(block, bytes);
    }

    Ok(out)
}

/// Compare a received checksum against the one recomputed over `body`.
///
/// A zero `checksum_length` disables the check. A `received` of any other length never matches.
pub fn verify_checksum(body: &str, received: &str, checksum_length: usize) -> Result<()> {
    validate_length(checksum_length)?;
    if checksum_length == 0 {
        return Ok(());
    }

    let expected = checksum(body, checksum_length)?;
    if expected != received {
        warn!(
            "Checksum mismatch over {:?}: expected {}, received {}",
            body, expected, received
        );
        return Err(CodecError::ChecksumMismatch {
            expected,
            received: received.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{is_dtmf_sequence, DtmfSymbol};

    #[test]
    fn test_crc16_check_value() {
        // CRC-16/CCITT-FALSE check value
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_checksum_uses_keypad_alphabet() {
        let body = "40*7128#D74*0060";
        for len in 0..=MAX_CHECKSUM_LENGTH {
            let sum = checksum(body, len).unwrap();
            assert_eq!(sum.len(), len);
            assert!(is_dtmf_sequence(&sum), "non-keypad checksum {sum:?}");
        }
    }

    #[test]
    fn test_checksum_nibble_rendering() {
        // 0x29B1 -> 2, 9, B (11 = '#'), 1
        assert_eq!(checksum("123456789", 4).unwrap(), "29#1");
        assert_eq!(checksum("123456789", 3).unwrap(), "29#");
    }

    #[test]
    fn test_longer_checksum_extends_shorter() {
        let body = "D33*86785#151*20945";
        let long = checksum(body, MAX_CHECKSUM_LENGTH).unwrap();
        for len in 0..MAX_CHECKSUM_LENGTH {
            assert_eq!(checksum(body, len).unwrap(), long[..len]);
        }
    }

    #[test]
    fn test_checksum_length_limit() {
        match checksum("0#0", MAX_CHECKSUM_LENGTH + 1) {
            Err(CodecError::InvalidConfig(_)) => {} // Expected
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_checksum() {
        let body = "40*7128#D74*0060";
        let sum = checksum(body, 3).unwrap();
        assert!(verify_checksum(body, &sum, 3).is_ok());
        assert!(verify_checksum(body, "", 0).is_ok());

        match verify_checksum("40*7128#D74*0061", &sum, 3) {
            Err(CodecError::ChecksumMismatch { expected, received }) => {
                assert_eq!(received, sum);
                assert_ne!(expected, sum);
            }
            other => panic!("Expected ChecksumMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_received_checksum_is_a_mismatch() {
        let body = "40*7128#D74*0060";
        let received = "0".repeat(MAX_CHECKSUM_LENGTH + 4);
        match verify_checksum(body, &received, 3) {
            Err(CodecError::ChecksumMismatch { expected, received: got }) => {
                assert_eq!(expected.len(), 3);
                assert_eq!(got, received);
            }
            other => panic!("Expected ChecksumMismatch, got {:?}", other),
        }

        let short = checksum(body, 3).unwrap();
        assert!(verify_checksum(body, &short[..2], 3).is_err());
    }

    #[test]
    fn test_nibble_lookup_covers_every_value() {
        for value in 0..16u8 {
            let expected = DtmfSymbol::from_value(value).unwrap().as_char();
            assert_eq!(nibble_symbol(value), expected);
            // High bits are masked off
            assert_eq!(nibble_symbol(value | 0xF0), expected);
        }
    }
}
