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

//! Compliance audit of a document.
//!
//! The [`ComplianceAuditor`] runs the requested [frameworks] and a data
//! quality pass over a document and joins their findings into one scored
//! [`ComplianceAuditReport`]. Problems with the document's content never
//! make the audit fail, they are reported as [issues](ComplianceIssue).
//!
//! ```
//! use aip::AipDocument;
//! use chrono::{TimeZone, Utc};
//! use eaip::audit::{ComplianceAuditor, OverallCompliance};
//! use eaip::framework::Framework;
//!
//! let doc = AipDocument::new("Germany AIP", "DE", "2612");
//! let report = ComplianceAuditor::new()
//!     .frameworks(&[Framework::IcaoAnnex15])
//!     .now(Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap())
//!     .audit(&doc);
//!
//! assert_eq!(report.overall_compliance, OverallCompliance::NonCompliant);
//! assert!(report.metrics.failed_checks > 0);
//! ```
//!
//! [frameworks]: crate::framework::Framework

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Months, Utc};
use log::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use aip::{AipDocument, SectionType};

use crate::framework::eurocontrol::{self, EurocontrolReport};
use crate::framework::icao::{self, IcaoReport};
use crate::framework::Framework;

mod data_quality;
mod issue;
mod printer;
mod remediation;

pub use issue::*;
pub use printer::generate_compliance_report;
pub use remediation::*;

const ICAO_ANNEX_15: &str = "ICAO Annex 15";
const EUROCONTROL_SPEC_3: &str = "EUROCONTROL Specification 3.0";

/// The frameworks a document is audited against by default.
pub const DEFAULT_FRAMEWORKS: [Framework; 2] =
    [Framework::IcaoAnnex15, Framework::EurocontrolSpec3];

/// Verdict of an audit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverallCompliance {
    Compliant,
    NonCompliant,
    /// Nothing failed but too few checks passed to be compliant.
    Pending,
}

impl fmt::Display for OverallCompliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compliant => write!(f, "compliant"),
            Self::NonCompliant => write!(f, "non_compliant"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComplianceMetrics {
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub warning_checks: usize,
    /// Percentage of passed checks, `0` if nothing was checked.
    pub compliance_score: f64,
}

impl ComplianceMetrics {
    fn add(&mut self, result: &FrameworkAuditResult) {
        self.total_checks += result.total_checks;
        self.passed_checks += result.passed_checks;
        self.failed_checks += result.failed_checks;
        self.warning_checks += result.warning_checks;
    }

    fn score(&mut self) {
        self.compliance_score = if self.total_checks == 0 {
            0.0
        } else {
            self.passed_checks as f64 * 100.0 / self.total_checks as f64
        };
    }
}

/// The report a framework's audit is based on.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FrameworkDetails {
    Icao(IcaoReport),
    Eurocontrol(EurocontrolReport),
    /// The data quality pass has no report of its own.
    DataQuality,
}

/// The findings for one framework.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameworkAuditResult {
    pub framework: Framework,
    pub is_compliant: bool,
    pub issues: Vec<ComplianceIssue>,
    pub recommendations: Vec<String>,
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub warning_checks: usize,
    pub details: FrameworkDetails,
}

impl FrameworkAuditResult {
    fn new(framework: Framework, details: FrameworkDetails) -> Self {
        Self {
            framework,
            is_compliant: true,
            issues: Vec::new(),
            recommendations: Vec::new(),
            total_checks: 0,
            passed_checks: 0,
            failed_checks: 0,
            warning_checks: 0,
            details,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComplianceAuditReport {
    pub document_id: String,
    pub document_title: String,
    pub audit_date: DateTime<Utc>,
    /// The requested frameworks.
    pub frameworks: Vec<Framework>,
    pub overall_compliance: OverallCompliance,
    /// Results of the requested frameworks and the data quality pass.
    pub framework_results: BTreeMap<Framework, FrameworkAuditResult>,
    pub critical_issues: Vec<ComplianceIssue>,
    pub recommendations: Vec<String>,
    pub metrics: ComplianceMetrics,
    pub remediation_plan: Vec<RemediationAction>,
    pub next_audit_date: DateTime<Utc>,
    pub auditor: String,
    pub version: String,
}

impl ComplianceAuditReport {
    /// Iterates over the issues of all framework results.
    pub fn issues(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.framework_results.values().flat_map(|r| r.issues.iter())
    }
}

/// Compliance auditor, which is used to audit documents.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ComplianceAuditor {
    frameworks: Option<Vec<Framework>>,
    now: Option<DateTime<Utc>>,
}

impl ComplianceAuditor {
    /// Creates a new auditor.
    pub fn new() -> ComplianceAuditor {
        Self::default()
    }

    /// Sets the frameworks to audit against. Duplicates are ignored.
    pub fn frameworks(&mut self, frameworks: &[Framework]) -> &mut Self {
        let mut unique: Vec<Framework> = Vec::with_capacity(frameworks.len());
        for framework in frameworks {
            if !unique.contains(framework) {
                unique.push(*framework);
            }
        }
        self.frameworks = Some(unique);
        self
    }

    /// Pins the time of the audit.
    pub fn now(&mut self, now: DateTime<Utc>) -> &mut Self {
        self.now = Some(now);
        self
    }

    /// Audits the document.
    pub fn audit(&self, document: &AipDocument) -> ComplianceAuditReport {
        let now = self.now.unwrap_or_else(Utc::now);
        let frameworks = self
            .frameworks
            .clone()
            .unwrap_or_else(|| DEFAULT_FRAMEWORKS.to_vec());

        info!(
            "auditing \"{}\" (frameworks={:?})",
            document.title, frameworks
        );

        let mut framework_results = BTreeMap::new();
        for framework in &frameworks {
            let result = match framework {
                Framework::IcaoAnnex15 => audit_icao(document, now),
                Framework::EurocontrolSpec3 => audit_eurocontrol(document, now),
                Framework::DataQuality => continue,
            };
            debug!(
                "{} audited (checks={}, failed={}, warnings={})",
                framework, result.total_checks, result.failed_checks, result.warning_checks
            );
            framework_results.insert(*framework, result);
        }
        framework_results.insert(
            Framework::DataQuality,
            data_quality::audit_data_quality(document, now),
        );

        let mut metrics = ComplianceMetrics::default();
        for result in framework_results.values() {
            metrics.add(result);
        }
        metrics.score();

        let overall_compliance = determine_overall_compliance(&metrics);
        debug!(
            "compliance score {:.1}% is {}",
            metrics.compliance_score, overall_compliance
        );

        let critical_issues: Vec<ComplianceIssue> = framework_results
            .values()
            .flat_map(|r| r.issues.iter())
            .filter(|issue| issue.severity == Severity::Critical)
            .cloned()
            .collect();
        if !critical_issues.is_empty() {
            warn!(
                "\"{}\" has {} critical issue(s)",
                document.title,
                critical_issues.len()
            );
        }

        let recommendations = recommendations(&metrics, &critical_issues, &framework_results);
        let remediation_plan = remediation::remediation_plan(
            &critical_issues,
            framework_results.values().flat_map(|r| r.issues.iter()),
            now,
        );

        let report = ComplianceAuditReport {
            document_id: document.id.clone(),
            document_title: document.title.clone(),
            audit_date: now,
            frameworks,
            overall_compliance,
            framework_results,
            critical_issues,
            recommendations,
            metrics,
            remediation_plan,
            next_audit_date: next_audit_date(document, now),
            auditor: "system".to_string(),
            version: "1.0".to_string(),
        };

        info!(
            "audit of \"{}\" finished: {} ({:.1}%)",
            report.document_title, report.overall_compliance, report.metrics.compliance_score
        );

        report
    }
}

/// Audits the document against the frameworks.
///
/// This is a shorthand for the [`ComplianceAuditor`] at the current time.
pub fn perform_comprehensive_audit(
    document: &AipDocument,
    frameworks: &[Framework],
) -> ComplianceAuditReport {
    ComplianceAuditor::new().frameworks(frameworks).audit(document)
}

/// Returns the verdict for the metrics.
///
/// A document is compliant if at least 95% of the checks passed and none
/// failed. It's non-compliant if any check failed or less than 70% passed.
/// Anything in between is pending.
pub fn determine_overall_compliance(metrics: &ComplianceMetrics) -> OverallCompliance {
    if metrics.compliance_score >= 95.0 && metrics.failed_checks == 0 {
        OverallCompliance::Compliant
    } else if metrics.compliance_score < 70.0 || metrics.failed_checks > 0 {
        OverallCompliance::NonCompliant
    } else {
        OverallCompliance::Pending
    }
}

fn audit_icao(document: &AipDocument, now: DateTime<Utc>) -> FrameworkAuditResult {
    let report = icao::validate_document_at(document, now);
    let mut issues = Vec::new();

    for (i, error) in report.errors.iter().enumerate() {
        issues.push(ComplianceIssue {
            id: format!("ICAO-E-{:03}", i + 1),
            severity: Severity::Critical,
            category: IssueCategory::Compliance,
            description: error.clone(),
            requirement: ICAO_ANNEX_15.to_string(),
            location: "document".to_string(),
            remediation: "Address ICAO compliance requirement".to_string(),
        });
    }

    for (i, warning) in report.warnings.iter().enumerate() {
        issues.push(ComplianceIssue {
            id: format!("ICAO-W-{:03}", i + 1),
            severity: Severity::Medium,
            category: IssueCategory::Compliance,
            description: warning.clone(),
            requirement: ICAO_ANNEX_15.to_string(),
            location: "document".to_string(),
            remediation: "Consider addressing ICAO recommendation".to_string(),
        });
    }

    for (i, missing) in report.missing_mandatory_sections.iter().enumerate() {
        issues.push(ComplianceIssue {
            id: format!("ICAO-M-{:03}", i + 1),
            severity: Severity::High,
            category: IssueCategory::MandatoryContent,
            description: format!(
                "Missing mandatory section: {} {} - {}",
                missing.section, missing.subsection, missing.title
            ),
            requirement: ICAO_ANNEX_15.to_string(),
            location: missing.section.to_string(),
            remediation: format!(
                "Add mandatory section {} {}",
                missing.section, missing.subsection
            ),
        });
    }

    let failed_checks = report.errors.len() + report.missing_mandatory_sections.len();
    let warning_checks = report.warnings.len();

    FrameworkAuditResult {
        framework: Framework::IcaoAnnex15,
        is_compliant: report.is_compliant,
        issues,
        recommendations: Vec::new(),
        total_checks: failed_checks + warning_checks,
        passed_checks: 0,
        failed_checks,
        warning_checks,
        details: FrameworkDetails::Icao(report),
    }
}

fn audit_eurocontrol(document: &AipDocument, now: DateTime<Utc>) -> FrameworkAuditResult {
    let report = eurocontrol::validate_document_at(document, now);
    let mut issues = Vec::new();

    for (i, error) in report.errors.iter().enumerate() {
        issues.push(ComplianceIssue {
            id: format!("EC-E-{:03}", i + 1),
            severity: Severity::Critical,
            category: IssueCategory::Compliance,
            description: error.clone(),
            requirement: EUROCONTROL_SPEC_3.to_string(),
            location: "document".to_string(),
            remediation: "Address EUROCONTROL specification requirement".to_string(),
        });
    }

    for (i, warning) in report.warnings.iter().enumerate() {
        issues.push(ComplianceIssue {
            id: format!("EC-W-{:03}", i + 1),
            severity: Severity::Medium,
            category: IssueCategory::Compliance,
            description: warning.clone(),
            requirement: EUROCONTROL_SPEC_3.to_string(),
            location: "document".to_string(),
            remediation: "Consider addressing EUROCONTROL recommendation".to_string(),
        });
    }

    let failed_checks = report.errors.len();
    let warning_checks = report.warnings.len();

    FrameworkAuditResult {
        framework: Framework::EurocontrolSpec3,
        is_compliant: report.is_compliant,
        issues,
        recommendations: report.recommendations.clone(),
        total_checks: failed_checks + warning_checks,
        passed_checks: 0,
        failed_checks,
        warning_checks,
        details: FrameworkDetails::Eurocontrol(report),
    }
}

fn recommendations(
    metrics: &ComplianceMetrics,
    critical_issues: &[ComplianceIssue],
    framework_results: &BTreeMap<Framework, FrameworkAuditResult>,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if metrics.compliance_score < 80.0 {
        recommendations.push("Conduct comprehensive review of all document sections".to_string());
        recommendations.push("Implement automated compliance checking in workflow".to_string());
    }

    if !critical_issues.is_empty() {
        recommendations
            .push("Address all critical compliance issues before publication".to_string());
        recommendations.push("Implement quality gates to prevent critical issues".to_string());
    }

    for recommendation in framework_results.values().flat_map(|r| &r.recommendations) {
        if !recommendations.contains(recommendation) {
            recommendations.push(recommendation.clone());
        }
    }

    recommendations
}

/// Aerodrome data is audited monthly, everything else quarterly.
fn next_audit_date(document: &AipDocument, now: DateTime<Utc>) -> DateTime<Utc> {
    let months = if document.has_section(SectionType::Ad) {
        1
    } else {
        3
    };
    now.checked_add_months(Months::new(months)).unwrap_or(now)
}
