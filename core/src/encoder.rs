use log::debug;

use crate::checksum::{checksum, validate_length};
use crate::coordinate::{CoordinateInput, CoordinateText};
use crate::error::{CodecError, Result};
use crate::symbol::map_decimal_char;
use crate::{DEFAULT_CHECKSUM_LENGTH, FIELD_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    checksum_length: usize,
}

impl Encoder {
    pub fn new(checksum_length: usize) -> Result<Self> {
        validate_length(checksum_length)?;
        Ok(Self { checksum_length })
    }

    pub fn checksum_length(&self) -> usize {
        self.checksum_length
    }

    /// Encode a coordinate pair into a keypad payload
    /// Returns: `<lat>#<lon>` with `.`→`*`, `-`→`D`, followed by the checksum
    pub fn encode(&self, input: impl Into<CoordinateInput>) -> Result<String> {
        let text = CoordinateText::canonicalize(&input.into())?;
        let mut payload = Self::body(&text)?;

        let sum = checksum(&payload, self.checksum_length)?;
        payload.push_str(&sum);

        debug!(
            "Encoded ({}, {}) as {} (checksum length {})",
            text.latitude, text.longitude, payload, self.checksum_length
        );
        Ok(payload)
    }

    /// Payload body without checksum
    pub fn body(text: &CoordinateText) -> Result<String> {
        let mut body = String::with_capacity(text.latitude.len() + text.longitude.len() + 1);
        map_field(&text.latitude, &mut body)?;
        body.push(FIELD_SEPARATOR);
        map_field(&text.longitude, &mut body)?;
        Ok(body)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            checksum_length: DEFAULT_CHECKSUM_LENGTH,
        }
    }
}

fn map_field(field: &str, out: &mut String) -> Result<()> {
    for c in field.chars() {
        let mapped = map_decimal_char(c).ok_or_else(|| {
            CodecError::InvalidCoordinate(format!("unexpected character {:?} in {:?}", c, field))
        })?;
        out.push(mapped);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::is_dtmf_sequence;
    use crate::MAX_CHECKSUM_LENGTH;

    #[test]
    fn test_body_mapping() {
        let text = CoordinateText::canonicalize(&("40.7128", "-74.0060").into()).unwrap();
        assert_eq!(Encoder::body(&text).unwrap(), "40*7128#D74*0060");
    }

    #[test]
    fn test_encode_appends_checksum() {
        let encoder = Encoder::default();
        let payload = encoder.encode(("40.7128", "-74.0060")).unwrap();
        assert_eq!(payload, "40*7128#D74*0060C#9");
        assert!(is_dtmf_sequence(&payload));
    }

    #[test]
    fn test_encode_numeric() {
        let encoder = Encoder::new(0).unwrap();
        let payload = encoder.encode((40.7128, -74.006)).unwrap();
        assert_eq!(payload, "40*71280#D74*00600");
    }

    #[test]
    fn test_body_rejects_unmapped_characters() {
        let text = CoordinateText {
            latitude: "1e5".to_string(),
            longitude: "0".to_string(),
        };
        match Encoder::body(&text) {
            Err(CodecError::InvalidCoordinate(_)) => {} // Expected
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_checksum_length() {
        match Encoder::new(MAX_CHECKSUM_LENGTH + 1) {
            Err(CodecError::InvalidConfig(_)) => {} // Expected
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
