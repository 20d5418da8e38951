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

//! Validators of single aeronautical data fields.
//!
//! Each validator takes the field as it was typed into the AIP and returns a
//! [`Validation`]. A validator never fails on malformed input but reports it
//! as error of the validation:
//!
//! ```
//! use eaip::validate::{validate_elevation, validate_frequency, Band};
//!
//! let elevation = validate_elevation("1000 ft");
//! assert!(elevation.is_valid);
//! assert!((elevation.value.unwrap().meters() - 304.8).abs() < 1e-9);
//!
//! let frequency = validate_frequency("99.000");
//! assert!(!frequency.is_valid);
//! assert_eq!(frequency.errors, vec!["Frequency outside aviation bands or invalid format"]);
//!
//! let frequency = validate_frequency("125.500");
//! assert_eq!(frequency.value.map(|f| f.band), Some(Band::Vhf));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod aerodrome;
mod coordinate;
mod elevation;
mod frequency;
mod ident;
mod mag_var;
mod runway;

pub use aerodrome::*;
pub use coordinate::*;
pub use elevation::*;
pub use frequency::*;
pub use ident::*;
pub use mag_var::*;
pub use runway::*;

/// The outcome of validating a field.
///
/// A validation is valid if it has no errors. Its value is the field parsed
/// into `T` and is only present for valid fields.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Validation<T> {
    pub is_valid: bool,
    pub value: Option<T>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl<T> Default for Validation<T> {
    fn default() -> Self {
        Self {
            is_valid: false,
            value: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> Validation<T> {
    /// Returns a valid validation of the value.
    pub(crate) fn valid(value: T) -> Self {
        Self {
            is_valid: true,
            value: Some(value),
            ..Default::default()
        }
    }

    /// Returns an invalid validation with the error.
    pub(crate) fn invalid(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
            ..Default::default()
        }
    }

    /// Returns an invalid validation with the errors or a valid validation
    /// of the value if there are no errors.
    pub(crate) fn from_errors(value: T, errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::valid(value)
        } else {
            Self {
                errors,
                ..Default::default()
            }
        }
    }

    pub(crate) fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns `true` if there are warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
