use std::cmp::Ordering;

use crate::error::{CodecError, Result};
use crate::{COORDINATE_PRECISION, MAX_LATITUDE, MAX_LONGITUDE};

/// A decoded latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Encoder input: either raw numbers or caller-formatted decimal text
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateInput {
    /// Rendered with `COORDINATE_PRECISION` fractional digits
    Numeric { latitude: f64, longitude: f64 },
    /// Kept verbatim once validated
    Text { latitude: String, longitude: String },
}

impl From<(f64, f64)> for CoordinateInput {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        CoordinateInput::Numeric { latitude, longitude }
    }
}

impl From<Coordinate> for CoordinateInput {
    fn from(c: Coordinate) -> Self {
        CoordinateInput::Numeric {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

impl From<(&str, &str)> for CoordinateInput {
    fn from((latitude, longitude): (&str, &str)) -> Self {
        CoordinateInput::Text {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }
}

impl From<(String, String)> for CoordinateInput {
    fn from((latitude, longitude): (String, String)) -> Self {
        CoordinateInput::Text { latitude, longitude }
    }
}

/// Canonical decimal text of a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateText {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }

    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => MAX_LATITUDE,
            Axis::Longitude => MAX_LONGITUDE,
        }
    }

    fn check_range(self, value: f64) -> Result<f64> {
        if !value.is_finite() || value.abs() > self.limit() {
            return Err(CodecError::InvalidCoordinate(format!(
                "{} {} outside [-{limit}, {limit}]",
                self.name(),
                value,
                limit = self.limit()
            )));
        }
        Ok(value)
    }

    /// Compare the decimal digits against the limit, so text too fine for `f64` cannot
    /// round back inside the range.
    fn exceeds_limit(self, unsigned: &str) -> bool {
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let integer = integer.trim_start_matches('0');
        let limit = format!("{}", self.limit() as u32);

        match integer
            .len()
            .cmp(&limit.len())
            .then_with(|| integer.cmp(limit.as_str()))
        {
            Ordering::Greater => true,
            Ordering::Equal => fraction.bytes().any(|b| b != b'0'),
            Ordering::Less => false,
        }
    }

    fn render(self, value: f64) -> Result<String> {
        let value = self.check_range(value)?;
        Ok(format!("{:.*}", COORDINATE_PRECISION, value))
    }

    /// Parse `-?digits[.digits]`; signs elsewhere, exponents and words are rejected.
    fn parse(self, text: &str) -> Result<f64> {
        let invalid = || {
            CodecError::InvalidCoordinate(format!("{} {:?} is not a decimal number", self.name(), text))
        };

        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let mut digits = 0;
        let mut points = 0;
        for c in unsigned.chars() {
            match c {
                '0'..='9' => digits += 1,
                '.' => points += 1,
                _ => return Err(invalid()),
            }
        }
        if digits == 0 || points > 1 {
            return Err(invalid());
        }
        if self.exceeds_limit(unsigned) {
            return Err(CodecError::InvalidCoordinate(format!(
                "{} {} outside [-{limit}, {limit}]",
                self.name(),
                text,
                limit = self.limit()
            )));
        }

        let value = text.parse::<f64>().map_err(|_| invalid())?;
        self.check_range(value)
    }
}

impl CoordinateText {
    /// Resolve encoder input into validated decimal text.
    pub fn canonicalize(input: &CoordinateInput) -> Result<Self> {
        match input {
            CoordinateInput::Numeric { latitude, longitude } => Ok(Self {
                latitude: Axis::Latitude.render(*latitude)?,
                longitude: Axis::Longitude.render(*longitude)?,
            }),
            CoordinateInput::Text { latitude, longitude } => {
                Axis::Latitude.parse(latitude)?;
                Axis::Longitude.parse(longitude)?;
                Ok(Self {
                    latitude: latitude.clone(),
                    longitude: longitude.clone(),
                })
            }
        }
    }

    pub fn to_coordinate(&self) -> Result<Coordinate> {
        Ok(Coordinate {
            latitude: Axis::Latitude.parse(&self.latitude)?,
            longitude: Axis::Longitude.parse(&self.longitude)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lat: &str, lon: &str) -> Result<CoordinateText> {
        CoordinateText::canonicalize(&(lat, lon).into())
    }

    #[test]
    fn test_numeric_fixed_precision() {
        let t = CoordinateText::canonicalize(&(40.7128, -74.006).into()).unwrap();
        assert_eq!(t.latitude, "40.71280");
        assert_eq!(t.longitude, "-74.00600");

        let t = CoordinateText::canonicalize(&(90.0, -180.0).into()).unwrap();
        assert_eq!(t.latitude, "90.00000");
        assert_eq!(t.longitude, "-180.00000");
    }

    #[test]
    fn test_text_kept_verbatim() {
        let t = text("40.7128", "-74.0060").unwrap();
        assert_eq!(t.latitude, "40.7128");
        assert_eq!(t.longitude, "-74.0060");
        assert_eq!(t.to_coordinate().unwrap(), Coordinate::new(40.7128, -74.006));
    }

    #[test]
    fn test_text_grammar() {
        for ok in ["0", "-0", "5.", ".5", "-.5", "007.250"] {
            assert!(text(ok, "0").is_ok(), "{ok:?} rejected");
        }
        for bad in ["", "-", ".", "+1", "1e3", "1.2.3", " 1", "1-", "--1", "nan", "inf", "1,5"] {
            match text(bad, "0") {
                Err(CodecError::InvalidCoordinate(_)) => {}
                other => panic!("{bad:?} gave {:?}", other),
            }
        }
    }

    #[test]
    fn test_geodetic_range() {
        assert!(text("90", "180").is_ok());
        assert!(text("-90", "-180").is_ok());
        assert!(text("90.00001", "0").is_err());
        assert!(text("0", "-180.5").is_err());
        // Rounds to the bound as f64 but is past it
        assert!(text("90.0000000000000001", "0").is_err());
        assert!(text("-90.0000000000000001", "0").is_err());
        assert!(text("0", "180.00000000000001").is_err());
        assert!(text("0090.000", "-0180").is_ok());
        assert!(text("0", "99.99999999999999999").is_ok());
        assert!(CoordinateText::canonicalize(&(91.0, 0.0).into()).is_err());
        assert!(CoordinateText::canonicalize(&(0.0, 180.0001).into()).is_err());
        assert!(CoordinateText::canonicalize(&(f64::NAN, 0.0).into()).is_err());
        assert!(CoordinateText::canonicalize(&(0.0, f64::INFINITY).into()).is_err());
    }
}
