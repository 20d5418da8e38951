// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Validation;

lazy_static! {
    static ref DMS: Regex =
        Regex::new(r#"^([0-9]{2,3})°([0-9]{2})'([0-9]{2}(?:\.[0-9]+)?)"([NSEW])$"#).unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^([+-]?[0-9]{1,3}(?:\.[0-9]+)?)$").unwrap();
    static ref ICAO: Regex = Regex::new(
        r"^([0-9]{2})([0-9]{2})([0-9]{2})([NS])([0-9]{3})([0-9]{2})([0-9]{2})([EW])$"
    )
    .unwrap();
}

const INVALID_NUMBER: &str = "Invalid numeric value in coordinate";

/// Decimal places required to resolve a position to about one meter.
const REQUIRED_PRECISION: usize = 5;

/// The notation in which a coordinate was written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CoordinateFormat {
    /// Degrees, minutes and seconds like `40°26'46"N`.
    Dms,
    /// Signed decimal degrees like `-45.12345`.
    Decimal,
    /// Fixed width latitude and longitude like `533750N0095917E`.
    Icao,
}

/// A position on the WGS84 ellipsoid.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Position> for geo::Point<f64> {
    fn from(p: Position) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Point<f64>> for Position {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

/// The value of a parsed coordinate in decimal degrees.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Coordinate {
    /// A latitude given with its hemisphere.
    Latitude(f64),
    /// A longitude given with its hemisphere.
    Longitude(f64),
    /// A value that may be either latitude or longitude.
    Degrees(f64),
    /// A latitude and longitude pair.
    Position(Position),
}

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCoordinate {
    pub format: CoordinateFormat,
    pub coordinate: Coordinate,
}

impl ParsedCoordinate {
    /// Returns the value of a single latitude or longitude.
    pub fn degrees(&self) -> Option<f64> {
        match self.coordinate {
            Coordinate::Latitude(v) | Coordinate::Longitude(v) | Coordinate::Degrees(v) => Some(v),
            Coordinate::Position(_) => None,
        }
    }

    /// Returns the position if latitude and longitude were given.
    pub fn position(&self) -> Option<Position> {
        match self.coordinate {
            Coordinate::Position(p) => Some(p),
            _ => None,
        }
    }
}

/// Validates a coordinate.
///
/// The formats are tried in the order DMS, decimal degrees and ICAO where
/// the first matching format wins. Decimal degrees with less than five
/// decimal places get a precision warning.
///
/// # Examples
///
/// ```
/// use eaip::validate::{validate_coordinates, CoordinateFormat};
///
/// let result = validate_coordinates("40°26'46\"N");
/// let parsed = result.value.unwrap();
/// assert_eq!(parsed.format, CoordinateFormat::Dms);
/// assert!((parsed.degrees().unwrap() - 40.4461).abs() < 1e-4);
/// ```
pub fn validate_coordinates(s: &str) -> Validation<ParsedCoordinate> {
    let s = s.trim();

    if let Some(caps) = DMS.captures(s) {
        let is_latitude = matches!(&caps[4], "N" | "S");
        let max_degrees = if is_latitude { 90.0 } else { 180.0 };
        let Some((degrees, errors)) = dms(&caps, 1, max_degrees) else {
            return Validation::invalid(INVALID_NUMBER);
        };
        let coordinate = if is_latitude {
            Coordinate::Latitude(degrees)
        } else {
            Coordinate::Longitude(degrees)
        };

        Validation::from_errors(
            ParsedCoordinate {
                format: CoordinateFormat::Dms,
                coordinate,
            },
            errors,
        )
    } else if DECIMAL.is_match(s) {
        let Ok(value) = s.parse::<f64>() else {
            return Validation::invalid(INVALID_NUMBER);
        };
        if value.abs() > 180.0 {
            return Validation::invalid("Decimal degrees value out of range (-180 to 180)");
        }

        let mut result = Validation::valid(ParsedCoordinate {
            format: CoordinateFormat::Decimal,
            coordinate: Coordinate::Degrees(value),
        });
        if precision(s) < REQUIRED_PRECISION {
            result.warn("Coordinate precision may not meet ICAO requirements (±1m)");
        }
        result
    } else if let Some(caps) = ICAO.captures(s) {
        let (Some((latitude, mut errors)), Some((longitude, lon_errors))) =
            (dms(&caps, 1, 90.0), dms(&caps, 5, 180.0))
        else {
            return Validation::invalid(INVALID_NUMBER);
        };
        errors.extend(lon_errors);

        Validation::from_errors(
            ParsedCoordinate {
                format: CoordinateFormat::Icao,
                coordinate: Coordinate::Position(Position::new(latitude, longitude)),
            },
            errors,
        )
    } else {
        Validation::invalid("Coordinate format not recognized")
    }
}

/// Returns the signed decimal degrees and the range errors of the DMS value
/// captured from group `first` on, or `None` if a number doesn't parse.
fn dms(caps: &Captures, first: usize, max_degrees: f64) -> Option<(f64, Vec<String>)> {
    let degrees = number(caps, first)?;
    let minutes = number(caps, first + 1)?;
    let seconds = number(caps, first + 2)?;
    let hemisphere = caps.get(first + 3)?.as_str();

    let mut errors = Vec::new();
    if degrees > max_degrees {
        errors.push("Degrees value out of range".to_string());
    }
    if minutes >= 60.0 {
        errors.push("Minutes value must be less than 60".to_string());
    }
    if seconds >= 60.0 {
        errors.push("Seconds value must be less than 60".to_string());
    }

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    let sign = if hemisphere == "S" || hemisphere == "W" {
        -1.0
    } else {
        1.0
    };

    Some((sign * decimal, errors))
}

fn number(caps: &Captures, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse().ok()
}

/// Number of decimal places.
fn precision(s: &str) -> usize {
    s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms_latitude_and_longitude() {
        let lat = validate_coordinates("40°26'46\"N").value.unwrap();
        assert_eq!(lat.format, CoordinateFormat::Dms);
        assert!(matches!(lat.coordinate, Coordinate::Latitude(v) if (v - 40.446111).abs() < 1e-6));

        let lon = validate_coordinates("079°58'56\"W").value.unwrap();
        assert!(matches!(lon.coordinate, Coordinate::Longitude(v) if (v + 79.982222).abs() < 1e-6));
    }

    #[test]
    fn dms_out_of_range() {
        let result = validate_coordinates("200°00'00\"N");
        assert!(!result.is_valid);
        assert_eq!(result.value, None);
        assert_eq!(result.errors, vec!["Degrees value out of range"]);

        // longitudes may exceed 90°
        assert!(validate_coordinates("120°00'00\"E").is_valid);

        let result = validate_coordinates("45°60'61\"N");
        assert_eq!(
            result.errors,
            vec![
                "Minutes value must be less than 60",
                "Seconds value must be less than 60"
            ]
        );
    }

    #[test]
    fn decimal_precision() {
        let precise = validate_coordinates("45.12345");
        assert!(precise.is_valid);
        assert!(precise.warnings.is_empty());
        assert_eq!(precise.value.unwrap().format, CoordinateFormat::Decimal);

        let coarse = validate_coordinates("45.1");
        assert!(coarse.is_valid);
        assert_eq!(
            coarse.warnings,
            vec!["Coordinate precision may not meet ICAO requirements (±1m)"]
        );

        let out_of_range = validate_coordinates("-180.5");
        assert!(!out_of_range.is_valid);
    }

    #[test]
    fn icao_position() {
        let parsed = validate_coordinates(" 533750N0095917E ").value.unwrap();
        assert_eq!(parsed.format, CoordinateFormat::Icao);

        let position = parsed.position().unwrap();
        assert!((position.latitude - 53.630556).abs() < 1e-6);
        assert!((position.longitude - 9.988056).abs() < 1e-6);

        let point: geo::Point<f64> = position.into();
        assert_eq!(point.x(), position.longitude);
    }

    #[test]
    fn only_ascii_digits() {
        for s in ["٤٥.١٢٣٤٥", "٤٠°٢٦'٤٦\"N", "٥٣٣٧٥٠N٠٠٩٥٩١٧E"] {
            let result = validate_coordinates(s);
            assert!(!result.is_valid, "{s} should be rejected");
            assert_eq!(result.value, None);
            assert_eq!(result.errors, vec!["Coordinate format not recognized"]);
        }
    }

    #[test]
    fn unknown_format() {
        let result = validate_coordinates("N53 37.8");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Coordinate format not recognized"]);
    }
}
