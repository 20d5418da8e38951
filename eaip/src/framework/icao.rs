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

//! ICAO Annex 15 compliance.
//!
//! The validator checks that a document contains all mandatory subsections
//! of the [AIP structure], that its AIRAC information and metadata are
//! complete and nudges to verify the accuracy of published coordinates and
//! elevations.
//!
//! [AIP structure]: aip::structure

use chrono::{DateTime, Datelike, Months, TimeDelta, Utc, Weekday};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use aip::structure::mandatory_subsections;
use aip::{AipDocument, Section, SectionType, Subsection};

use super::sniff;

lazy_static! {
    static ref AIRAC_ID: Regex = Regex::new(r"^[0-9]{4}$|^[0-9]{6}$").unwrap();
}

/// Time-sensitive data should be reviewed every AIRAC cycle.
const MAX_TIME_SENSITIVE_AGE_DAYS: i64 = 28;

/// A mandatory subsection that is missing in the document.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MissingSection {
    pub section: SectionType,
    pub subsection: String,
    pub title: String,
    pub mandatory: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataQualitySeverity {
    Error,
    Warning,
}

/// Data of a subsection that needs to be verified against the ICAO data
/// quality requirements.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DataQualityIssue {
    pub section: SectionType,
    pub subsection: String,
    pub issue: String,
    pub severity: DataQualitySeverity,
    pub requirement: String,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IcaoReport {
    pub is_compliant: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub missing_mandatory_sections: Vec<MissingSection>,
    pub data_quality_issues: Vec<DataQualityIssue>,
    pub timestamp: DateTime<Utc>,
}

impl IcaoReport {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            is_compliant: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            missing_mandatory_sections: Vec::new(),
            data_quality_issues: Vec::new(),
            timestamp: now,
        }
    }

    fn error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_compliant = false;
    }

    fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    fn data_quality(
        &mut self,
        section: &Section,
        subsection: &Subsection,
        issue: String,
        requirement: &str,
    ) {
        self.warn(issue.clone());
        self.data_quality_issues.push(DataQualityIssue {
            section: section.section_type,
            subsection: subsection.code.clone(),
            issue,
            severity: DataQualitySeverity::Warning,
            requirement: requirement.to_string(),
        });
    }
}

/// Validates the document against ICAO Annex 15.
pub fn validate_document(document: &AipDocument) -> IcaoReport {
    validate_document_at(document, Utc::now())
}

/// Validates the document against ICAO Annex 15 at the given time.
pub fn validate_document_at(document: &AipDocument, now: DateTime<Utc>) -> IcaoReport {
    let mut report = IcaoReport::new(now);

    validate_mandatory_sections(document, &mut report);
    validate_data_quality(document, now, &mut report);
    validate_airac(document, now, &mut report);
    validate_metadata(document, &mut report);

    debug!(
        "ICAO Annex 15 validation of \"{}\" finished (errors={}, warnings={}, missing={})",
        document.title,
        report.errors.len(),
        report.warnings.len(),
        report.missing_mandatory_sections.len()
    );

    report
}

fn validate_mandatory_sections(document: &AipDocument, report: &mut IcaoReport) {
    let mut missing_parts: Vec<SectionType> = Vec::new();

    for entry in mandatory_subsections() {
        let sections: Vec<_> = document
            .sections
            .iter()
            .filter(|s| s.section_type == entry.part)
            .collect();

        if sections.is_empty() && !missing_parts.contains(&entry.part) {
            report.error(format!("Missing mandatory section: {}", entry.part));
            missing_parts.push(entry.part);
        }

        if !sections.iter().any(|s| s.subsection(entry.code).is_some()) {
            report.is_compliant = false;
            report.missing_mandatory_sections.push(MissingSection {
                section: entry.part,
                subsection: entry.code.to_string(),
                title: entry.title.to_string(),
                mandatory: true,
            });
        }
    }
}

fn validate_data_quality(document: &AipDocument, now: DateTime<Utc>, report: &mut IcaoReport) {
    for (section, subsection) in document.subsections() {
        let text = subsection.text();
        let location = format!("{} {}", section.section_type, subsection.code);

        if sniff::contains_coordinates(&text) {
            report.data_quality(
                section,
                subsection,
                format!("Verify coordinate accuracy in {location} meets ICAO requirements (±1m)"),
                "Latitude and longitude accuracy of 1 metre (3 ft)",
            );
        }

        if sniff::contains_elevations(&text) {
            report.data_quality(
                section,
                subsection,
                format!("Verify elevation accuracy in {location} meets ICAO requirements (±0.5m)"),
                "Elevation accuracy of 0.5 metre (1.5 ft)",
            );
        }

        if sniff::is_time_sensitive(&text) {
            let age = now - subsection.last_modified;
            if age > TimeDelta::days(MAX_TIME_SENSITIVE_AGE_DAYS) {
                report.data_quality(
                    section,
                    subsection,
                    format!(
                        "Time-sensitive data in {location} may be outdated (last modified {} days ago)",
                        age.num_days()
                    ),
                    "Time-sensitive data is reviewed every AIRAC cycle (28 days)",
                );
            } else {
                trace!("time-sensitive data in {location} is up to date");
            }
        }
    }
}

fn validate_airac(document: &AipDocument, now: DateTime<Utc>, report: &mut IcaoReport) {
    if document.airac_cycle.trim().is_empty() {
        report.error("Missing AIRAC cycle information");
        return;
    }

    if !AIRAC_ID.is_match(&document.airac_cycle) {
        report.error(
            "Invalid AIRAC cycle format. Must be YYMM (e.g., 2501) or YYYYMM (e.g., 202501)",
        );
    }

    let Some(effective_date) = document.effective_date else {
        report.error("Missing effective date");
        return;
    };

    if effective_date.weekday() != Weekday::Thu {
        report.warn("AIRAC effective date should be a Thursday");
    }

    let one_year_ahead = now.checked_add_months(Months::new(12)).unwrap_or(now);
    if effective_date > one_year_ahead {
        report.warn("Effective date is more than one year in the future");
    }
}

fn validate_metadata(document: &AipDocument, report: &mut IcaoReport) {
    let metadata = &document.metadata;

    if metadata.authority().is_none() {
        report.error("Missing authority information");
    }
    if metadata.contact().is_none() {
        report.error("Missing contact information");
    }
    if metadata.language().is_none() {
        report.warn("Missing language specification");
    }
}
