use log::debug;

use crate::checksum::{validate_length, verify_checksum};
use crate::coordinate::{Coordinate, CoordinateText};
use crate::error::{CodecError, Result};
use crate::symbol::{unmap_symbol, DtmfSymbol};
use crate::{DEFAULT_CHECKSUM_LENGTH, FIELD_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    checksum_length: usize,
}

impl Decoder {
    pub fn new(checksum_length: usize) -> Result<Self> {
        validate_length(checksum_length)?;
        Ok(Self { checksum_length })
    }

    pub fn checksum_length(&self) -> usize {
        self.checksum_length
    }

    /// Decode a keypad payload back to a coordinate pair
    pub fn decode(&self, payload: &str) -> Result<Coordinate> {
        let coordinate = self.decode_text(payload)?.to_coordinate()?;
        debug!(
            "Decoded {} as ({}, {})",
            payload, coordinate.latitude, coordinate.longitude
        );
        Ok(coordinate)
    }

    /// Decode to the decimal text that was transmitted, validated but not converted
    pub fn decode_text(&self, payload: &str) -> Result<CoordinateText> {
        if let Some(c) = payload.chars().find(|&c| DtmfSymbol::from_char(c).is_none()) {
            return Err(CodecError::MalformedInput(format!(
                "{:?} is not a DTMF symbol",
                c
            )));
        }

        // Keypad symbols are ASCII, so byte offsets are char offsets
        if payload.len() < self.checksum_length + 1 {
            return Err(CodecError::MalformedInput(format!(
                "payload of {} symbols is too short for a {}-symbol checksum",
                payload.len(),
                self.checksum_length
            )));
        }

        let (body, received) = payload.split_at(payload.len() - self.checksum_length);
        verify_checksum(body, received, self.checksum_length)?;

        let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
        let [latitude, longitude] = fields.as_slice() else {
            return Err(CodecError::MalformedInput(format!(
                "expected 2 fields separated by '{}', found {}",
                FIELD_SEPARATOR,
                fields.len()
            )));
        };

        let text = CoordinateText {
            latitude: latitude.chars().map(unmap_symbol).collect(),
            longitude: longitude.chars().map(unmap_symbol).collect(),
        };
        // Parse once here so text-only callers get the same validation
        text.to_coordinate()?;
        Ok(text)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            checksum_length: DEFAULT_CHECKSUM_LENGTH,
        }
    }
}
