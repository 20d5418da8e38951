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

use std::error;
use std::fmt;

/// Errors raised for invalid arguments.
///
/// Problems with the content of a document are never returned as error but
/// reported by the validation results and the audit report.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The compliance framework is not implemented.
    UnsupportedFramework(String),
    /// The identifier kind is neither AIRPORT, NAVAID nor WAYPOINT.
    UnknownIdentifierKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFramework(s) => write!(
                f,
                "unsupported compliance framework \"{s}\", expected ICAO_ANNEX_15, EUROCONTROL_SPEC_3 or DATA_QUALITY"
            ),
            Self::UnknownIdentifierKind(s) => write!(
                f,
                "found \"{s}\" as identifier kind but should be AIRPORT, NAVAID or WAYPOINT"
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
