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

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Validation;
use crate::error::Error;

lazy_static! {
    static ref AIRPORT: Regex = Regex::new(r"^[A-Z]{4}$").unwrap();
    static ref NAVAID: Regex = Regex::new(r"^[A-Z]{2,3}$").unwrap();
    static ref WAYPOINT: Regex = Regex::new(r"^[A-Z0-9]{5}$").unwrap();
}

/// First letters of location indicators assigned to ICAO regions.
const ICAO_REGIONS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'L', 'M', 'N', 'O', 'P', 'R', 'S', 'T', 'U',
    'V', 'W', 'Y', 'Z',
];

/// The kind of object an identifier refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum IdentifierKind {
    /// Four letter location indicator like `EDDH`.
    Airport,
    /// Two or three letter navaid identifier like `HAM`.
    Navaid,
    /// Five character name-code designator like `ABGAS`.
    Waypoint,
}

impl FromStr for IdentifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AIRPORT" => Ok(Self::Airport),
            "NAVAID" => Ok(Self::Navaid),
            "WAYPOINT" => Ok(Self::Waypoint),
            _ => Err(Error::UnknownIdentifierKind(s.to_string())),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Airport => write!(f, "AIRPORT"),
            Self::Navaid => write!(f, "NAVAID"),
            Self::Waypoint => write!(f, "WAYPOINT"),
        }
    }
}

/// Validates an ICAO identifier of the given kind.
///
/// Identifiers must be upper case. The value of the validation is the
/// identifier.
pub fn validate_icao_identifier(s: &str, kind: IdentifierKind) -> Validation<String> {
    let pattern: &Regex = match kind {
        IdentifierKind::Airport => &*AIRPORT,
        IdentifierKind::Navaid => &*NAVAID,
        IdentifierKind::Waypoint => &*WAYPOINT,
    };

    if !pattern.is_match(s) {
        return Validation::invalid(format!("Invalid {kind} identifier format"));
    }

    let mut result = Validation::valid(s.to_string());
    if kind == IdentifierKind::Airport
        && !s.chars().next().is_some_and(|c| ICAO_REGIONS.contains(&c))
    {
        result.warn("Unknown ICAO region code");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind() {
        assert_eq!("NAVAID".parse::<IdentifierKind>(), Ok(IdentifierKind::Navaid));
        assert_eq!(
            "VOR".parse::<IdentifierKind>(),
            Err(Error::UnknownIdentifierKind("VOR".to_string()))
        );
    }

    #[test]
    fn validates_airports() {
        let result = validate_icao_identifier("EDDH", IdentifierKind::Airport);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert_eq!(result.value.as_deref(), Some("EDDH"));

        let result = validate_icao_identifier("QDDH", IdentifierKind::Airport);
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["Unknown ICAO region code"]);

        let result = validate_icao_identifier("eddh", IdentifierKind::Airport);
        assert_eq!(result.errors, vec!["Invalid AIRPORT identifier format"]);
    }

    #[test]
    fn validates_navaids_and_waypoints() {
        assert!(validate_icao_identifier("HAM", IdentifierKind::Navaid).is_valid);
        assert!(validate_icao_identifier("DH", IdentifierKind::Navaid).is_valid);
        assert!(!validate_icao_identifier("HAMB", IdentifierKind::Navaid).is_valid);

        assert!(validate_icao_identifier("ABGAS", IdentifierKind::Waypoint).is_valid);
        assert!(validate_icao_identifier("DH401", IdentifierKind::Waypoint).is_valid);
        assert!(!validate_icao_identifier("ABGA", IdentifierKind::Waypoint).is_valid);
    }
}
