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

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The section type is neither GEN, ENR nor AD.
    UnknownSectionType(String),
    /// The document type is neither AIP, SUPPLEMENT nor NOTAM.
    UnknownDocumentType(String),
    /// The document status is not part of the publication lifecycle.
    UnknownDocumentStatus(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSectionType(s) => {
                write!(f, "found \"{s}\" as section type but should be GEN, ENR or AD")
            }
            Self::UnknownDocumentType(s) => {
                write!(
                    f,
                    "found \"{s}\" as document type but should be AIP, SUPPLEMENT or NOTAM"
                )
            }
            Self::UnknownDocumentStatus(s) => write!(f, "unknown document status \"{s}\""),
        }
    }
}

impl error::Error for Error {}
