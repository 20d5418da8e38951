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
    static ref RUNWAY: Regex = Regex::new(r"^([0-9]{2})([LCR])?$").unwrap();
}

/// Position of a runway among parallel runways.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parallel {
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Left,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    Center,
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Right,
}

/// A runway designator like `09L`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayDesignation {
    /// The magnetic direction in tens of degrees.
    pub direction: u8,
    pub parallel: Option<Parallel>,
}

impl fmt::Display for RunwayDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.direction)?;
        match self.parallel {
            Some(Parallel::Left) => write!(f, "L"),
            Some(Parallel::Center) => write!(f, "C"),
            Some(Parallel::Right) => write!(f, "R"),
            None => Ok(()),
        }
    }
}

/// Validates a runway designator.
///
/// The designator is case insensitive and has a direction from `01` to `36`
/// optionally followed by `L`, `C` or `R`.
pub fn validate_runway_designation(s: &str) -> Validation<RunwayDesignation> {
    let s = s.trim().to_uppercase();

    let Some(caps) = RUNWAY.captures(&s) else {
        return Validation::invalid(
            "Invalid runway designation format. Expected: 01-36 optionally followed by L, C, or R",
        );
    };

    let Ok(direction) = caps[1].parse::<u8>() else {
        return Validation::invalid("Invalid numeric value for runway direction");
    };
    if !(1..=36).contains(&direction) {
        return Validation::invalid("Runway direction must be between 01 and 36");
    }

    let parallel = caps.get(2).map(|m| match m.as_str() {
        "L" => Parallel::Left,
        "C" => Parallel::Center,
        _ => Parallel::Right,
    });

    Validation::valid(RunwayDesignation {
        direction,
        parallel,
    })
}
