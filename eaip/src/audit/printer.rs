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

use std::fmt::{Result, Write};

use super::ComplianceAuditReport;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders the report as plain text.
///
/// The text lists the verdict, a summary of the checks, the critical issues
/// and the recommendations. Sections without entries are left out.
pub fn generate_compliance_report(report: &ComplianceAuditReport) -> String {
    let mut out = String::new();
    write_report(&mut out, report)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_report(out: &mut String, report: &ComplianceAuditReport) -> Result {
    writeln!(out, "COMPLIANCE AUDIT REPORT")?;
    writeln!(out, "======================")?;
    writeln!(out)?;
    writeln!(out, "Document: {}", report.document_title)?;
    writeln!(out, "Audit Date: {}", report.audit_date.format(DATE_FORMAT))?;
    writeln!(
        out,
        "Overall Compliance: {}",
        report.overall_compliance.to_string().to_uppercase()
    )?;
    writeln!(
        out,
        "Compliance Score: {:.1}%",
        report.metrics.compliance_score
    )?;
    writeln!(out)?;

    writeln!(out, "SUMMARY")?;
    writeln!(out, "-------")?;
    writeln!(out, "Total Checks: {}", report.metrics.total_checks)?;
    writeln!(out, "Passed: {}", report.metrics.passed_checks)?;
    writeln!(out, "Failed: {}", report.metrics.failed_checks)?;
    writeln!(out, "Warnings: {}", report.metrics.warning_checks)?;
    writeln!(out)?;

    if !report.critical_issues.is_empty() {
        writeln!(out, "CRITICAL ISSUES")?;
        writeln!(out, "---------------")?;
        for issue in &report.critical_issues {
            writeln!(out, "- {}", issue.description)?;
            writeln!(out, "  Location: {}", issue.location)?;
            writeln!(out, "  Remediation: {}", issue.remediation)?;
            writeln!(out)?;
        }
    }

    if !report.recommendations.is_empty() {
        writeln!(out, "RECOMMENDATIONS")?;
        writeln!(out, "---------------")?;
        for recommendation in &report.recommendations {
            writeln!(out, "- {recommendation}")?;
        }
        writeln!(out)?;
    }

    write!(
        out,
        "Next Audit Date: {}",
        report.next_audit_date.format(DATE_FORMAT)
    )
}
