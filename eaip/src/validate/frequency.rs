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

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Validation;

lazy_static! {
    // 108.000 - 136.975 MHz
    static ref VHF: Regex = Regex::new(r"^1[0-3][0-9]\.[0-9]{2,3}$").unwrap();
    // 225.000 - 399.975 MHz
    static ref UHF: Regex = Regex::new(r"^[2-4][0-9]{2}\.[0-9]{2,3}$").unwrap();
    // 2000 - 29999.99 kHz
    static ref HF: Regex = Regex::new(r"^[2-9][0-9]{3}(?:\.[0-9]{1,2})?$").unwrap();
}

/// Radio frequency band.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Band {
    Vhf,
    Uhf,
    Hf,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vhf => write!(f, "VHF"),
            Self::Uhf => write!(f, "UHF"),
            Self::Hf => write!(f, "HF"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Frequency {
    pub band: Band,
    pub mhz: f64,
}

impl Frequency {
    /// Returns `true` if the frequency is in the VHF navigation band
    /// (108 - 118 MHz).
    pub fn is_nav(&self) -> bool {
        self.band == Band::Vhf && (108.0..118.0).contains(&self.mhz)
    }

    /// Returns `true` if the frequency is in the VHF communication band
    /// (118 - 136.975 MHz).
    pub fn is_com(&self) -> bool {
        self.band == Band::Vhf && (118.0..=136.975).contains(&self.mhz)
    }
}

/// Validates a radio frequency.
///
/// VHF and UHF frequencies are given in MHz with two or three decimal
/// places, HF frequencies in kHz. The value of the validation is always in
/// MHz.
pub fn validate_frequency(s: &str) -> Validation<Frequency> {
    let s = s.trim();

    let Ok(value) = s.parse::<f64>() else {
        return Validation::invalid("Invalid frequency format");
    };

    let frequency = if VHF.is_match(s) {
        Frequency {
            band: Band::Vhf,
            mhz: value,
        }
    } else if UHF.is_match(s) {
        Frequency {
            band: Band::Uhf,
            mhz: value,
        }
    } else if HF.is_match(s) {
        Frequency {
            band: Band::Hf,
            mhz: value / 1000.0,
        }
    } else {
        return Validation::invalid("Frequency outside aviation bands or invalid format");
    };

    let mut result = Validation::valid(frequency);
    if frequency.band == Band::Vhf {
        if frequency.is_nav() {
            result.warn("Frequency in NAV band (108-118 MHz)");
        } else if !frequency.is_com() {
            result.warn("Frequency outside standard aviation VHF bands");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vhf_com_frequency() {
        let result = validate_frequency("125.500");
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());

        let frequency = result.value.unwrap();
        assert_eq!(frequency.band, Band::Vhf);
        assert!(frequency.is_com());
    }

    #[test]
    fn vhf_nav_frequency() {
        let result = validate_frequency("109.500");
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["Frequency in NAV band (108-118 MHz)"]);
    }

    #[test]
    fn vhf_outside_standard_bands() {
        let result = validate_frequency("137.000");
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["Frequency outside standard aviation VHF bands"]
        );
    }

    #[test]
    fn uhf_and_hf() {
        let uhf = validate_frequency("243.000").value.unwrap();
        assert_eq!(uhf.band, Band::Uhf);

        let hf = validate_frequency("5680").value.unwrap();
        assert_eq!(hf.band, Band::Hf);
        assert!((hf.mhz - 5.68).abs() < 1e-9);
    }

    #[test]
    fn invalid_frequencies() {
        assert_eq!(
            validate_frequency("99.000").errors,
            vec!["Frequency outside aviation bands or invalid format"]
        );
        assert_eq!(
            validate_frequency("TWR").errors,
            vec!["Invalid frequency format"]
        );
    }
}
