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

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::content::Node;
use crate::error::Error;

/// The kind of publication a document represents.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DocumentType {
    #[default]
    Aip,
    Supplement,
    Notam,
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AIP" => Ok(Self::Aip),
            "SUPPLEMENT" => Ok(Self::Supplement),
            "NOTAM" => Ok(Self::Notam),
            _ => Err(Error::UnknownDocumentType(s.to_string())),
        }
    }
}

/// Lifecycle state of a document.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DocumentStatus {
    #[default]
    Draft,
    Review,
    Approved,
    Published,
    Archived,
}

impl FromStr for DocumentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "review" => Ok(Self::Review),
            "approved" => Ok(Self::Approved),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(Error::UnknownDocumentStatus(s.to_string())),
        }
    }
}

/// One of the three parts of an AIP.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SectionType {
    /// Part 1 - General.
    Gen,
    /// Part 2 - En-route.
    Enr,
    /// Part 3 - Aerodromes.
    Ad,
}

impl SectionType {
    /// Returns the part's code as used in the AIP e.g. `ENR`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gen => "GEN",
            Self::Enr => "ENR",
            Self::Ad => "AD",
        }
    }
}

impl FromStr for SectionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GEN" => Ok(Self::Gen),
            "ENR" => Ok(Self::Enr),
            "AD" => Ok(Self::Ad),
            _ => Err(Error::UnknownSectionType(s.to_string())),
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Document metadata as required by the publishing authority.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Metadata {
    pub authority: Option<String>,
    pub contact: Option<String>,
    /// ISO 639-1 language code e.g. `en`.
    pub language: Option<String>,
    pub compliance_standard: Option<String>,
    pub last_review: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Returns the authority if it's present and not blank.
    pub fn authority(&self) -> Option<&str> {
        non_blank(&self.authority)
    }

    /// Returns the contact if it's present and not blank.
    pub fn contact(&self) -> Option<&str> {
        non_blank(&self.contact)
    }

    /// Returns the language if it's present and not blank.
    pub fn language(&self) -> Option<&str> {
        non_blank(&self.language)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// An image uploaded to a subsection.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Image {
    /// The name under which the image is stored.
    pub filename: String,
    /// The name of the uploaded file, used as descriptive text.
    pub original_name: String,
    /// Size in bytes.
    pub size: u64,
}

/// A subsection like `GEN 1.1` with its content.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Subsection {
    /// The code within the part e.g. `1.1`.
    pub code: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Node,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_mandatory: bool,
    pub last_modified: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<Image>,
}

impl Subsection {
    /// Creates an empty subsection that was modified just now.
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            content: Node::default(),
            is_mandatory: false,
            last_modified: Utc::now(),
            images: Vec::new(),
        }
    }

    /// Replaces the content.
    pub fn with_content(mut self, content: Node) -> Self {
        self.content = content;
        self
    }

    /// Sets the time of the last modification.
    pub fn modified_at(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Adds an image.
    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Returns the plain text of the content.
    pub fn text(&self) -> String {
        self.content.text()
    }
}

/// A part of the document.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Section {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub section_type: SectionType,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn new(section_type: SectionType, title: impl Into<String>) -> Self {
        Self {
            section_type,
            title: title.into(),
            description: String::new(),
            subsections: Vec::new(),
        }
    }

    /// Appends a subsection.
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// Searches for a subsection by its code e.g. `1.1`.
    pub fn subsection(&self, code: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|s| s.code == code)
    }
}

/// An AIP, AIP supplement or NOTAM as authored in the editor.
///
/// The document is a snapshot handed over by the persistence layer. Nothing
/// in this workspace mutates it after creation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AipDocument {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub document_type: DocumentType,
    /// ISO 3166 alpha-2 country code e.g. `DE`.
    pub country: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub airport: Option<String>,
    /// AIRAC cycle identifier as `YYMM` or `YYYYMM`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub airac_cycle: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effective_date: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: DocumentStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Metadata,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl AipDocument {
    /// Creates an empty draft AIP.
    pub fn new(
        title: impl Into<String>,
        country: impl Into<String>,
        airac_cycle: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            document_type: DocumentType::Aip,
            country: country.into(),
            airport: None,
            airac_cycle: airac_cycle.into(),
            effective_date: None,
            status: DocumentStatus::Draft,
            metadata: Metadata::default(),
            sections: Vec::new(),
        }
    }

    /// Returns the first section of the given type.
    pub fn section(&self, section_type: SectionType) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.section_type == section_type)
    }

    /// Returns `true` if the document contains a section of the given type.
    pub fn has_section(&self, section_type: SectionType) -> bool {
        self.section(section_type).is_some()
    }

    /// Iterates over all subsections in document order along with their
    /// section.
    pub fn subsections(&self) -> impl Iterator<Item = (&Section, &Subsection)> {
        self.sections
            .iter()
            .flat_map(|section| section.subsections.iter().map(move |sub| (section, sub)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_type_from_str() {
        assert_eq!("ENR".parse::<SectionType>(), Ok(SectionType::Enr));
        assert_eq!(
            "enr".parse::<SectionType>(),
            Err(Error::UnknownSectionType("enr".to_string()))
        );
    }

    #[test]
    fn blank_metadata_is_missing() {
        let metadata = Metadata {
            authority: Some("  ".to_string()),
            contact: Some("ais@example.org".to_string()),
            ..Default::default()
        };

        assert_eq!(metadata.authority(), None);
        assert_eq!(metadata.contact(), Some("ais@example.org"));
        assert_eq!(metadata.language(), None);
    }

    #[test]
    fn iterates_subsections_in_order() {
        let mut doc = AipDocument::new("AIP", "DE", "2612");
        doc.sections.push(
            Section::new(SectionType::Gen, "General")
                .with_subsection(Subsection::new("1.1", "Designated authorities"))
                .with_subsection(Subsection::new("1.2", "Entry of aircraft")),
        );
        doc.sections.push(
            Section::new(SectionType::Ad, "Aerodromes")
                .with_subsection(Subsection::new("2.1", "Location indicator")),
        );

        let codes: Vec<_> = doc
            .subsections()
            .map(|(section, sub)| format!("{} {}", section.section_type, sub.code))
            .collect();

        assert_eq!(codes, vec!["GEN 1.1", "GEN 1.2", "AD 2.1"]);
        assert!(doc.has_section(SectionType::Ad));
        assert!(!doc.has_section(SectionType::Enr));
    }
}
