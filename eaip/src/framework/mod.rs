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

//! Regulatory frameworks a document is validated against.
//!
//! Each framework validates a whole [`AipDocument`] and returns its own
//! report. The validators only read the document.
//!
//! [`AipDocument`]: aip::AipDocument

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod eurocontrol;
pub mod icao;
pub mod sniff;

/// A compliance framework.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Framework {
    /// ICAO Annex 15 - Aeronautical Information Services.
    #[cfg_attr(feature = "serde", serde(rename = "ICAO_ANNEX_15"))]
    IcaoAnnex15,
    /// EUROCONTROL Specification for Electronic AIP v3.0.
    #[cfg_attr(feature = "serde", serde(rename = "EUROCONTROL_SPEC_3"))]
    EurocontrolSpec3,
    /// Validation of the data embedded in the content.
    #[cfg_attr(feature = "serde", serde(rename = "DATA_QUALITY"))]
    DataQuality,
}

impl Framework {
    /// Returns the framework's identifier like `ICAO_ANNEX_15`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IcaoAnnex15 => "ICAO_ANNEX_15",
            Self::EurocontrolSpec3 => "EUROCONTROL_SPEC_3",
            Self::DataQuality => "DATA_QUALITY",
        }
    }

    /// Returns the name of the regulation.
    pub fn title(&self) -> &'static str {
        match self {
            Self::IcaoAnnex15 => "ICAO Annex 15 - Aeronautical Information Services",
            Self::EurocontrolSpec3 => "EUROCONTROL Specification for Electronic AIP v3.0",
            Self::DataQuality => "Aeronautical data quality",
        }
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ICAO_ANNEX_15" => Ok(Self::IcaoAnnex15),
            "EUROCONTROL_SPEC_3" => Ok(Self::EurocontrolSpec3),
            "DATA_QUALITY" => Ok(Self::DataQuality),
            _ => Err(Error::UnsupportedFramework(s.to_string())),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses a list of framework codes like `ICAO_ANNEX_15`.
///
/// # Errors
///
/// Returns an error for the first code that isn't a supported framework.
pub fn parse_frameworks<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Framework>> {
    codes.iter().map(|code| code.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frameworks() {
        assert_eq!("ICAO_ANNEX_15".parse(), Ok(Framework::IcaoAnnex15));
        assert_eq!(
            "EUROCONTROL_SPEC_3".parse::<Framework>().map(|f| f.to_string()),
            Ok("EUROCONTROL_SPEC_3".to_string())
        );
        assert_eq!(
            "FAA_ORDERS".parse::<Framework>(),
            Err(Error::UnsupportedFramework("FAA_ORDERS".to_string()))
        );
    }

    #[test]
    fn parses_framework_lists() {
        assert_eq!(
            parse_frameworks(&["ICAO_ANNEX_15", "DATA_QUALITY"]),
            Ok(vec![Framework::IcaoAnnex15, Framework::DataQuality])
        );
        assert_eq!(
            parse_frameworks(&["ICAO_ANNEX_15", "CUSTOM"]),
            Err(Error::UnsupportedFramework("CUSTOM".to_string()))
        );
    }
}
