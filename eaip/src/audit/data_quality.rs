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

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, trace};

use aip::{AipDocument, Section, Subsection};

use super::{ComplianceIssue, FrameworkAuditResult, FrameworkDetails, IssueCategory, Severity};
use crate::airac::validate_airac_cycle_at;
use crate::framework::sniff::{self, TokenKind};
use crate::framework::Framework;
use crate::validate::{validate_coordinates, validate_elevation};

const DATA_QUALITY: &str = "Data Quality Standards";
const DATA_CURRENCY: &str = "Data Currency Requirements";
const AIRAC_STANDARDS: &str = "AIRAC Standards";

/// Content unmodified for longer is considered stale.
const MAX_CONTENT_AGE_DAYS: i64 = 365;

/// Validates the data embedded in the document's content and its AIRAC
/// cycle.
pub(super) fn audit_data_quality(
    document: &AipDocument,
    now: DateTime<Utc>,
) -> FrameworkAuditResult {
    let mut result =
        FrameworkAuditResult::new(Framework::DataQuality, FrameworkDetails::DataQuality);

    for (position, section) in (1..).zip(&document.sections) {
        for subsection in &section.subsections {
            audit_subsection(position, section, subsection, now, &mut result);
        }
    }

    audit_airac_cycle(document, now, &mut result);

    result.is_compliant = result.failed_checks == 0;
    debug!(
        "data quality audit finished (checks={}, failed={})",
        result.total_checks, result.failed_checks
    );

    result
}

/// Issue ids carry the 1-based `position` of the section in the document
/// since a part may be split into several sections.
fn audit_subsection(
    position: usize,
    section: &Section,
    subsection: &Subsection,
    now: DateTime<Utc>,
    result: &mut FrameworkAuditResult,
) {
    let text = subsection.text();
    let scope = format!("{position}-{}-{}", section.section_type, subsection.code);
    let location = format!("{} {}", section.section_type, subsection.code);

    let mut coordinates = 0;
    let mut elevations = 0;

    for token in sniff::tokens(&text) {
        result.total_checks += 1;

        match token.kind {
            TokenKind::Coordinate => {
                coordinates += 1;
                let validation = validate_coordinates(&token.compact());

                if !validation.is_valid {
                    result.failed_checks += 1;
                    result.issues.push(ComplianceIssue {
                        id: format!("DQ-COORD-{scope}-{coordinates}"),
                        severity: Severity::High,
                        category: IssueCategory::DataQuality,
                        description: format!(
                            "Invalid coordinates in {location}: {}",
                            validation.errors.join(", ")
                        ),
                        requirement: DATA_QUALITY.to_string(),
                        location: location.clone(),
                        remediation: "Correct coordinate format and validate accuracy".to_string(),
                    });
                    continue;
                }

                result.passed_checks += 1;
                for warning in validation.warnings {
                    result.warning_checks += 1;
                    result.issues.push(ComplianceIssue {
                        id: format!("DQ-COORD-W-{scope}-{coordinates}"),
                        severity: Severity::Low,
                        category: IssueCategory::DataQuality,
                        description: warning,
                        requirement: DATA_QUALITY.to_string(),
                        location: location.clone(),
                        remediation: "Review coordinate precision and format".to_string(),
                    });
                }
            }
            TokenKind::Elevation => {
                elevations += 1;
                let validation = validate_elevation(token.text);

                if !validation.is_valid {
                    result.failed_checks += 1;
                    result.issues.push(ComplianceIssue {
                        id: format!("DQ-ELEV-{scope}-{elevations}"),
                        severity: Severity::High,
                        category: IssueCategory::DataQuality,
                        description: format!(
                            "Invalid elevation in {location}: {}",
                            validation.errors.join(", ")
                        ),
                        requirement: DATA_QUALITY.to_string(),
                        location: location.clone(),
                        remediation: "Correct elevation format and unit".to_string(),
                    });
                    continue;
                }

                result.passed_checks += 1;
                for warning in validation.warnings {
                    result.warning_checks += 1;
                    result.issues.push(ComplianceIssue {
                        id: format!("DQ-ELEV-W-{scope}-{elevations}"),
                        severity: Severity::Low,
                        category: IssueCategory::DataQuality,
                        description: warning,
                        requirement: DATA_QUALITY.to_string(),
                        location: location.clone(),
                        remediation: "Review elevation value and unit".to_string(),
                    });
                }
            }
            TokenKind::Frequency => {
                trace!("frequency {} in {location}", token.text);
                result.passed_checks += 1;
            }
        }
    }

    result.total_checks += 1;
    let age = now - subsection.last_modified;
    if age > TimeDelta::days(MAX_CONTENT_AGE_DAYS) {
        result.failed_checks += 1;
        result.issues.push(ComplianceIssue {
            id: format!("DQ-FRESH-{scope}"),
            severity: Severity::Medium,
            category: IssueCategory::DataFreshness,
            description: format!(
                "Content in {location} hasn't been updated for {} days",
                age.num_days()
            ),
            requirement: DATA_CURRENCY.to_string(),
            location,
            remediation: "Review and update content if necessary".to_string(),
        });
    } else {
        result.passed_checks += 1;
    }
}

fn audit_airac_cycle(
    document: &AipDocument,
    now: DateTime<Utc>,
    result: &mut FrameworkAuditResult,
) {
    let validation = validate_airac_cycle_at(&document.airac_cycle, now);
    result.total_checks += 1;

    if !validation.is_valid {
        result.failed_checks += 1;
        result.issues.push(ComplianceIssue {
            id: "DQ-AIRAC".to_string(),
            severity: Severity::Critical,
            category: IssueCategory::AiracCompliance,
            description: format!("Invalid AIRAC cycle: {}", validation.errors.join(", ")),
            requirement: AIRAC_STANDARDS.to_string(),
            location: "document metadata".to_string(),
            remediation: "Use valid AIRAC cycle format and date".to_string(),
        });
        return;
    }

    result.passed_checks += 1;
    for (i, warning) in validation.warnings.into_iter().enumerate() {
        result.warning_checks += 1;
        result.issues.push(ComplianceIssue {
            id: format!("DQ-AIRAC-W-{}", i + 1),
            severity: Severity::Low,
            category: IssueCategory::AiracCompliance,
            description: warning,
            requirement: AIRAC_STANDARDS.to_string(),
            location: "document metadata".to_string(),
            remediation: "Review AIRAC cycle selection".to_string(),
        });
    }
}
