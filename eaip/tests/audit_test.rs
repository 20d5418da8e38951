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

use aip::structure::mandatory_subsections;
use aip::{AipDocument, Metadata, Node, Section, SectionType, Subsection};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use eaip::audit::{
    determine_overall_compliance, generate_compliance_report, ComplianceAuditReport,
    ComplianceAuditor, ComplianceMetrics, OverallCompliance, Severity,
};
use eaip::framework::Framework;
use pretty_assertions::assert_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn metadata() -> Metadata {
    Metadata {
        authority: Some("Deutsche Flugsicherung GmbH".to_string()),
        contact: Some("ais@dfs.de".to_string()),
        language: Some("de".to_string()),
        ..Default::default()
    }
}

/// A document with all mandatory subsections that were modified yesterday.
fn complete_document() -> AipDocument {
    let mut doc = AipDocument::new("Germany AIP", "DE", "2612");
    doc.id = "aip-de".to_string();
    doc.effective_date = Some(Utc.with_ymd_and_hms(2026, 11, 5, 0, 0, 0).unwrap());
    doc.metadata = metadata();

    for (part, title) in [
        (SectionType::Gen, "General"),
        (SectionType::Enr, "En-route"),
        (SectionType::Ad, "Aerodromes"),
    ] {
        let mut section = Section::new(part, title);
        for entry in mandatory_subsections().iter().filter(|e| e.part == part) {
            section = section.with_subsection(
                Subsection::new(entry.code, entry.title).modified_at(now() - TimeDelta::days(1)),
            );
        }
        doc.sections.push(section);
    }

    doc
}

fn audit(doc: &AipDocument, frameworks: &[Framework]) -> ComplianceAuditReport {
    ComplianceAuditor::new()
        .frameworks(frameworks)
        .now(now())
        .audit(doc)
}

#[test]
fn empty_document_is_non_compliant() {
    let mut doc = AipDocument::new("Germany AIP", "DE", "2501");
    doc.metadata = metadata();

    let report = audit(&doc, &[Framework::IcaoAnnex15]);
    let icao = &report.framework_results[&Framework::IcaoAnnex15];
    let eaip::audit::FrameworkDetails::Icao(details) = &icao.details else {
        panic!("ICAO result should carry the ICAO report");
    };

    assert_eq!(
        details.missing_mandatory_sections.len(),
        mandatory_subsections().len()
    );
    for entry in mandatory_subsections() {
        assert!(details
            .missing_mandatory_sections
            .iter()
            .any(|m| m.section == entry.part && m.subsection == entry.code));
    }

    assert_eq!(report.overall_compliance, OverallCompliance::NonCompliant);
    assert!(report.metrics.failed_checks > 0);
    assert_eq!(report.next_audit_date, Utc.with_ymd_and_hms(2027, 1, 19, 12, 0, 0).unwrap());
}

#[test]
fn complete_document_is_compliant() {
    let report = audit(
        &complete_document(),
        &[Framework::IcaoAnnex15, Framework::EurocontrolSpec3],
    );

    assert_eq!(report.metrics.failed_checks, 0);
    assert_eq!(report.metrics.warning_checks, 0);
    assert_eq!(report.metrics.compliance_score, 100.0);
    assert_eq!(report.overall_compliance, OverallCompliance::Compliant);
    assert!(report.critical_issues.is_empty());
    assert!(report.recommendations.is_empty());
    assert!(report.remediation_plan.is_empty());
    assert_eq!(report.document_id, "aip-de");
    assert_eq!(report.auditor, "system");
    assert_eq!(report.version, "1.0");
    assert_eq!(
        report.next_audit_date,
        Utc.with_ymd_and_hms(2026, 11, 19, 12, 0, 0).unwrap()
    );
}

#[test]
fn missing_subsection_never_improves_the_score() {
    let complete = complete_document();
    let before = audit(&complete, &[Framework::IcaoAnnex15]);

    let mut doc = complete.clone();
    let gen = doc
        .sections
        .iter_mut()
        .find(|s| s.section_type == SectionType::Gen)
        .expect("GEN part");
    gen.subsections.retain(|s| s.code != "1.1");
    let after = audit(&doc, &[Framework::IcaoAnnex15]);

    assert!(
        after.metrics.passed_checks < before.metrics.passed_checks
            || after.metrics.failed_checks > before.metrics.failed_checks
    );
    assert!(after.metrics.compliance_score <= before.metrics.compliance_score);
    assert_eq!(after.overall_compliance, OverallCompliance::NonCompliant);
    assert!(after
        .issues()
        .any(|i| i.severity == Severity::High
            && i.description
                == "Missing mandatory section: GEN 1.1 - Designated authorities"));
}

#[test]
fn compliance_boundary() {
    let mut metrics = ComplianceMetrics {
        total_checks: 1000,
        passed_checks: 950,
        failed_checks: 0,
        warning_checks: 50,
        compliance_score: 95.0,
    };
    assert_eq!(
        determine_overall_compliance(&metrics),
        OverallCompliance::Compliant
    );

    metrics.passed_checks = 949;
    metrics.warning_checks = 51;
    metrics.compliance_score = 94.9;
    assert_eq!(
        determine_overall_compliance(&metrics),
        OverallCompliance::Pending
    );
}

#[test]
fn audits_are_idempotent() {
    let mut doc = complete_document();
    doc.sections[0].subsections[0] = doc.sections[0].subsections[0]
        .clone()
        .with_content(Node::doc(vec![
            Node::paragraph("ARP 53.63 N"),
            Node::paragraph("ELEV 53 ft"),
        ]))
        .modified_at(now() - TimeDelta::days(500));

    let first = audit(&doc, &[Framework::IcaoAnnex15, Framework::EurocontrolSpec3]);
    let second = audit(&doc, &[Framework::IcaoAnnex15, Framework::EurocontrolSpec3]);

    assert_eq!(first, second);
    assert_eq!(
        generate_compliance_report(&first),
        generate_compliance_report(&second)
    );
}

#[test]
fn plain_text_report() {
    let mut doc = complete_document();
    doc.metadata.contact = None;

    let report = audit(&doc, &[Framework::IcaoAnnex15]);
    let text = generate_compliance_report(&report);

    assert!(text.starts_with("COMPLIANCE AUDIT REPORT\n======================\n\nDocument: Germany AIP\n"));
    assert!(text.contains("Overall Compliance: NON_COMPLIANT\n"));
    assert!(text.contains("CRITICAL ISSUES\n---------------\n- Missing contact information\n  Location: document\n"));
    assert!(text.ends_with("Next Audit Date: 2026-11-19"));
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_to_json() {
    let report = audit(&complete_document(), &[Framework::IcaoAnnex15]);
    let json = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(json["overallCompliance"], "compliant");
    assert_eq!(json["frameworks"][0], "ICAO_ANNEX_15");
    assert_eq!(json["metrics"]["failedChecks"], 0);
    assert!(json["frameworkResults"]["DATA_QUALITY"]["details"].is_null());
    assert!(json["frameworkResults"]["ICAO_ANNEX_15"]["details"]["missingMandatorySections"]
        .as_array()
        .is_some_and(|a| a.is_empty()));

    let back: ComplianceAuditReport =
        serde_json::from_value(json).expect("report should deserialize");
    assert_eq!(back, report);
}
