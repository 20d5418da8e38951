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

//! EUROCONTROL Specification for Electronic AIP v3.0 compliance.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use aip::{AipDocument, DocumentStatus, SectionType};

use super::sniff;

/// The version of the specification the validator implements.
pub const SPECIFICATION_VERSION: &str = "3.0";

/// Maximum size of an image in bytes.
const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// Days after which a published document needs to be reviewed again.
const MAX_REVIEW_AGE_DAYS: i64 = 365;

const ISO_639_1: &[&str] = &[
    "en", "fr", "de", "es", "it", "pt", "nl", "sv", "da", "no", "fi", "pl", "cs", "hu", "ro", "bg",
    "hr", "sl", "sk", "et", "lv", "lt", "mt", "el", "cy",
];

/// Data quality level required for the content of a subsection.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualityLevel {
    /// Critical data like aerodrome data or navigation aids.
    A,
    /// Essential data like routes or restricted areas.
    B,
    /// Routine data.
    C,
}

impl QualityLevel {
    /// Returns the level required for a subsection.
    pub fn required_for(section: SectionType, subsection: &str) -> Self {
        match section {
            SectionType::Ad if subsection.starts_with("2.") => Self::A,
            SectionType::Enr if subsection == "4.1" => Self::A,
            SectionType::Enr if subsection.starts_with("3.") || subsection.starts_with("5.") => {
                Self::B
            }
            _ => Self::C,
        }
    }

    /// Returns the time after which data of this level is outdated.
    pub fn max_age(&self) -> TimeDelta {
        match self {
            Self::A => TimeDelta::days(7),
            Self::B => TimeDelta::days(28),
            Self::C => TimeDelta::days(365),
        }
    }

    pub fn traceability(&self) -> &'static str {
        match self {
            Self::A => "Full audit trail required",
            Self::B => "Source documentation required",
            Self::C => "General validation required",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// An image that doesn't meet the presentation standards.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PresentationIssue {
    pub location: String,
    pub image: Option<String>,
    pub issue: String,
    pub requirement: String,
}

/// Content that doesn't meet its required quality level.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QualityIssue {
    pub location: String,
    pub required_level: QualityLevel,
    pub issue: String,
    pub recommendation: String,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EurocontrolReport {
    pub is_compliant: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub presentation_issues: Vec<PresentationIssue>,
    pub quality_issues: Vec<QualityIssue>,
    pub timestamp: DateTime<Utc>,
    pub specification_version: String,
}

impl EurocontrolReport {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            is_compliant: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            presentation_issues: Vec::new(),
            quality_issues: Vec::new(),
            timestamp: now,
            specification_version: SPECIFICATION_VERSION.to_string(),
        }
    }

    fn error(&mut self, error: String) {
        self.errors.push(error);
        self.is_compliant = false;
    }

    fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    fn recommend(&mut self, recommendation: impl Into<String>) {
        self.recommendations.push(recommendation.into());
    }
}

/// Validates the document against the EUROCONTROL eAIP specification.
pub fn validate_document(document: &AipDocument) -> EurocontrolReport {
    validate_document_at(document, Utc::now())
}

/// Validates the document against the EUROCONTROL eAIP specification at the
/// given time.
///
/// Quality and presentation issues don't affect the compliance of the
/// document, only missing metadata does.
pub fn validate_document_at(document: &AipDocument, now: DateTime<Utc>) -> EurocontrolReport {
    let mut report = EurocontrolReport::new(now);

    validate_metadata(document, &mut report);
    validate_presentation(document, &mut report);
    validate_quality_levels(document, now, &mut report);
    validate_accessibility(document, &mut report);
    validate_multilingual_support(document, &mut report);
    validate_digital_signature(document, now, &mut report);

    debug!(
        "EUROCONTROL Spec {} validation of \"{}\" finished (errors={}, warnings={}, quality issues={})",
        SPECIFICATION_VERSION,
        document.title,
        report.errors.len(),
        report.warnings.len(),
        report.quality_issues.len()
    );

    report
}

fn validate_metadata(document: &AipDocument, report: &mut EurocontrolReport) {
    let metadata = &document.metadata;

    let required = [
        ("authority", metadata.authority()),
        ("contact", metadata.contact()),
        ("language", metadata.language()),
    ];
    for (field, value) in required {
        if value.is_none() {
            report.error(format!("Missing required metadata field: {field}"));
        }
    }

    if let Some(language) = metadata.language() {
        if !ISO_639_1.contains(&language.to_lowercase().as_str()) {
            report.warn("Language code should comply with ISO 639-1 standard");
        }
    }

    if let Some(authority) = metadata.authority() {
        if authority.chars().count() < 10 || !authority.chars().any(|c| c.is_ascii_uppercase()) {
            report.warn("Authority should follow ICAO State designation format");
        }
    }

    if let Some(contact) = metadata.contact() {
        if !contact.contains('@') || contact.chars().count() < 10 {
            report.warn("Contact information should include valid email and phone number");
        }
    }

    let dublin_core = [
        ("title", !document.title.trim().is_empty()),
        ("creator", metadata.authority().is_some()),
        ("publisher", metadata.authority().is_some()),
        ("date", document.effective_date.is_some()),
        ("language", metadata.language().is_some()),
    ];
    let missing: Vec<_> = dublin_core
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        report.recommend(format!(
            "Consider adding Dublin Core metadata fields: {}",
            missing.join(", ")
        ));
    }
}

fn validate_presentation(document: &AipDocument, report: &mut EurocontrolReport) {
    for (section, subsection) in document.subsections() {
        let text = subsection.text();
        let location = format!("{} {}", section.section_type, subsection.code);

        if sniff::contains_coordinates(&text) && !sniff::declares_reference_system(&text) {
            report.warn(format!(
                "Subsection {location}: Coordinates should use decimal degrees with WGS84 datum"
            ));
        }

        for image in subsection.images.iter().filter(|i| i.size > MAX_IMAGE_SIZE) {
            report.presentation_issues.push(PresentationIssue {
                location: location.clone(),
                image: Some(image.filename.clone()),
                issue: "Image quality does not meet EUROCONTROL standards".to_string(),
                requirement: "Minimum 300 DPI, RGB color mode, max 10MB".to_string(),
            });
        }
    }
}

fn validate_quality_levels(
    document: &AipDocument,
    now: DateTime<Utc>,
    report: &mut EurocontrolReport,
) {
    for (section, subsection) in document.subsections() {
        let level = QualityLevel::required_for(section.section_type, &subsection.code);
        let location = format!("{} {}", section.section_type, subsection.code);

        if now - subsection.last_modified > level.max_age() {
            report.quality_issues.push(QualityIssue {
                location,
                required_level: level,
                issue: format!("Data does not meet quality level {level} requirements"),
                recommendation: level.traceability().to_string(),
            });
        }
    }
}

fn validate_accessibility(document: &AipDocument, report: &mut EurocontrolReport) {
    for (section, subsection) in document.subsections() {
        let location = format!("{} {}", section.section_type, subsection.code);

        for image in &subsection.images {
            if image.original_name.trim().is_empty() || image.original_name == image.filename {
                report.recommend(format!("Add descriptive alt text for image in {location}"));
            }
        }

        if subsection.content.contains_table() && !subsection.content.has_table_headers() {
            report.recommend(format!(
                "Add proper table headers in {location} for accessibility"
            ));
        }
    }
}

fn validate_multilingual_support(document: &AipDocument, report: &mut EurocontrolReport) {
    if document.metadata.language() == Some("en")
        && document.country != "GB"
        && document.country != "US"
    {
        report.recommend("Consider providing local language version in addition to English");
    }
}

fn validate_digital_signature(
    document: &AipDocument,
    now: DateTime<Utc>,
    report: &mut EurocontrolReport,
) {
    if document.status != DocumentStatus::Published {
        return;
    }

    let reviewed = document
        .metadata
        .last_review
        .is_some_and(|review| now - review <= TimeDelta::days(MAX_REVIEW_AGE_DAYS));

    if !reviewed {
        report.warn(
            "Published documents should have digital signature or authority validation within the last year",
        );
    }
}

#[cfg(test)]
mod tests {
    use aip::{Image, Metadata, Node, Section, Subsection};
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn document() -> AipDocument {
        let mut doc = AipDocument::new("Germany AIP", "DE", "2612");
        doc.effective_date = Some(Utc.with_ymd_and_hms(2026, 11, 5, 0, 0, 0).unwrap());
        doc.metadata = Metadata {
            authority: Some("Deutsche Flugsicherung GmbH".to_string()),
            contact: Some("ais@dfs.de".to_string()),
            language: Some("de".to_string()),
            ..Default::default()
        };
        doc
    }

    #[test]
    fn complete_metadata() {
        let report = validate_document_at(&document(), now());

        assert!(report.is_compliant);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.specification_version, "3.0");
    }

    #[test]
    fn missing_and_malformed_metadata() {
        let mut doc = document();
        doc.effective_date = None;
        doc.metadata = Metadata {
            authority: Some("dfs".to_string()),
            contact: None,
            language: Some("german".to_string()),
            ..Default::default()
        };

        let report = validate_document_at(&doc, now());
        assert!(!report.is_compliant);
        assert_eq!(report.errors, vec!["Missing required metadata field: contact"]);
        assert_eq!(
            report.warnings,
            vec![
                "Language code should comply with ISO 639-1 standard",
                "Authority should follow ICAO State designation format"
            ]
        );
        assert_eq!(
            report.recommendations,
            vec!["Consider adding Dublin Core metadata fields: date"]
        );
    }

    #[test]
    fn quality_levels() {
        assert_eq!(QualityLevel::required_for(SectionType::Ad, "2.2"), QualityLevel::A);
        assert_eq!(QualityLevel::required_for(SectionType::Enr, "4.1"), QualityLevel::A);
        assert_eq!(QualityLevel::required_for(SectionType::Enr, "4.2"), QualityLevel::C);
        assert_eq!(QualityLevel::required_for(SectionType::Enr, "3.1"), QualityLevel::B);
        assert_eq!(QualityLevel::required_for(SectionType::Enr, "5.1"), QualityLevel::B);
        assert_eq!(QualityLevel::required_for(SectionType::Gen, "2.1"), QualityLevel::C);

        let mut doc = document();
        doc.sections.push(
            Section::new(SectionType::Ad, "Aerodromes")
                .with_subsection(
                    Subsection::new("2.2", "Geographical data")
                        .modified_at(now() - TimeDelta::days(8)),
                )
                .with_subsection(
                    Subsection::new("1.1", "Aerodrome availability")
                        .modified_at(now() - TimeDelta::days(8)),
                ),
        );

        let report = validate_document_at(&doc, now());
        assert_eq!(report.quality_issues.len(), 1);
        assert_eq!(report.quality_issues[0].location, "AD 2.2");
        assert_eq!(
            report.quality_issues[0].issue,
            "Data does not meet quality level A requirements"
        );
        assert_eq!(report.quality_issues[0].recommendation, "Full audit trail required");
        assert!(report.is_compliant);
    }

    #[test]
    fn presentation_and_accessibility() {
        let mut doc = document();
        doc.metadata.language = Some("en".to_string());
        doc.sections.push(
            Section::new(SectionType::Enr, "En-route").with_subsection(
                Subsection::new("4.1", "Radio navigation aids")
                    .with_content(Node::doc(vec![
                        Node::paragraph("HAM 53.6847 10.2047"),
                        Node::table(&[&["HAM", "113.100"]], false),
                    ]))
                    .with_image(Image {
                        filename: "enr41.png".to_string(),
                        original_name: "enr41.png".to_string(),
                        size: 12 * 1024 * 1024,
                    })
                    .modified_at(now()),
            ),
        );

        let report = validate_document_at(&doc, now());
        assert_eq!(
            report.warnings,
            vec!["Subsection ENR 4.1: Coordinates should use decimal degrees with WGS84 datum"]
        );
        assert_eq!(report.presentation_issues.len(), 1);
        assert_eq!(report.presentation_issues[0].image.as_deref(), Some("enr41.png"));
        assert_eq!(
            report.recommendations,
            vec![
                "Add descriptive alt text for image in ENR 4.1",
                "Add proper table headers in ENR 4.1 for accessibility",
                "Consider providing local language version in addition to English"
            ]
        );
    }

    #[test]
    fn published_documents_need_review() {
        let mut doc = document();
        doc.status = DocumentStatus::Published;

        let warning =
            "Published documents should have digital signature or authority validation within the last year";

        let report = validate_document_at(&doc, now());
        assert_eq!(report.warnings, vec![warning]);

        doc.metadata.last_review = Some(now() - TimeDelta::days(30));
        let report = validate_document_at(&doc, now());
        assert!(report.warnings.is_empty());

        doc.metadata.last_review = Some(now() - TimeDelta::days(400));
        let report = validate_document_at(&doc, now());
        assert_eq!(report.warnings, vec![warning]);
    }
}
