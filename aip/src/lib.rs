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

//! Aeronautical Information Publication (AIP) document model.
//!
//! This crate provides the [document] as it is authored in an eAIP editor
//! together with the [structure] of an AIP as required by ICAO Annex 15. A
//! document is split into the three parts GEN, ENR and AD, each holding
//! subsections like `GEN 1.1` whose rich text is stored as a [content] tree.
//!
//! # Examples
//!
//! Lets build a minimal document and look up which subsections of the GEN
//! part are mandatory:
//!
//! ```
//! use aip::{structure, AipDocument, Section, SectionType, Subsection};
//!
//! let mut doc = AipDocument::new("Germany AIP", "DE", "2612");
//! doc.sections.push(Section::new(SectionType::Gen, "General"));
//!
//! let mandatory = structure::mandatory_subsections()
//!     .iter()
//!     .filter(|entry| entry.part == SectionType::Gen)
//!     .count();
//!
//! assert!(mandatory > 0);
//! assert!(doc.section(SectionType::Gen).is_some());
//! ```
//!
//! [document]: crate::AipDocument
//! [structure]: crate::structure
//! [content]: crate::content

mod document;
mod error;

pub mod content;
pub mod structure;

pub use content::Node;
pub use document::*;
pub use error::Error;
