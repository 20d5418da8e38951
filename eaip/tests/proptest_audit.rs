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
use aip::{AipDocument, Node, Section, SectionType, Subsection};
use chrono::{Datelike, TimeDelta, TimeZone, Utc, Weekday};
use eaip::airac::{generate_airac_cycles, validate_airac_cycle};
use eaip::audit::ComplianceAuditor;
use eaip::framework::Framework;
use proptest::prelude::*;
use proptest::test_runner::Config;

#[test]
fn airac_round_trip() {
    let cycles = generate_airac_cycles(2023, 2026);
    assert_eq!(cycles.len(), 13 + 13 + 13 + 14);

    for cycle in cycles {
        assert_eq!(cycle.effective_date.weekday(), Weekday::Thu);

        let validation = validate_airac_cycle(&cycle.id);
        let validated = validation.value.expect("generated cycle should be valid");
        assert_eq!(validated.effective_date, cycle.effective_date);
    }
}

proptest! {
    #![proptest_config(Config::with_cases(64))]
    #[test]
    fn score_is_a_percentage(
        present in proptest::collection::vec(any::<bool>(), mandatory_subsections().len()),
        age_days in 0_i64..800,
        airac in "[0-9]{2,6}",
        text in "(ARP|ELEV|TWR|RWY) [0-9]{1,7}(\\.[0-9]{1,6})? ?(ft|m|N|E)?",
    ) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut doc = AipDocument::new("Generated AIP", "DE", airac);

        for part in [SectionType::Gen, SectionType::Enr, SectionType::Ad] {
            let mut section = Section::new(part, part.code());
            for (entry, _) in mandatory_subsections()
                .iter()
                .zip(&present)
                .filter(|(entry, present)| entry.part == part && **present)
            {
                section = section.with_subsection(
                    Subsection::new(entry.code, entry.title)
                        .with_content(Node::doc(vec![Node::paragraph(text.clone())]))
                        .modified_at(now - TimeDelta::days(age_days)),
                );
            }
            doc.sections.push(section);
        }

        let report = ComplianceAuditor::new()
            .frameworks(&[Framework::IcaoAnnex15, Framework::EurocontrolSpec3])
            .now(now)
            .audit(&doc);
        let metrics = &report.metrics;

        prop_assert!(metrics.compliance_score >= 0.0);
        prop_assert!(metrics.compliance_score <= 100.0);
        prop_assert!(metrics.passed_checks <= metrics.total_checks);
        if metrics.total_checks == 0 {
            prop_assert_eq!(metrics.compliance_score, 0.0);
        }
    }
}
