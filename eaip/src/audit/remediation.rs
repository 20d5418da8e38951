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

use chrono::{DateTime, Days, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ComplianceIssue, Severity};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// An action to resolve an issue.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RemediationAction {
    /// The identifier like `REM-CRIT-1`.
    pub id: String,
    pub priority: Severity,
    pub description: String,
    pub action: String,
    pub assignee: String,
    pub due_date: DateTime<Utc>,
    pub estimated_hours: u32,
    /// Identifiers of the issues this action resolves.
    pub related_issues: Vec<String>,
    pub status: ActionStatus,
}

impl RemediationAction {
    fn new(
        id: String,
        issue: &ComplianceIssue,
        assignee: &str,
        due_date: DateTime<Utc>,
        estimated_hours: u32,
    ) -> Self {
        Self {
            id,
            priority: issue.severity,
            description: issue.description.clone(),
            action: issue.remediation.clone(),
            assignee: assignee.to_string(),
            due_date,
            estimated_hours,
            related_issues: vec![issue.id.clone()],
            status: ActionStatus::Pending,
        }
    }
}

/// Plans one action per critical and high severity issue.
///
/// Critical issues are due in three days, high severity issues in a week.
/// Issues of lower severity are not planned.
pub(super) fn remediation_plan<'a, I>(
    critical_issues: &[ComplianceIssue],
    all_issues: I,
    now: DateTime<Utc>,
) -> Vec<RemediationAction>
where
    I: IntoIterator<Item = &'a ComplianceIssue>,
{
    let critical_due = now + Days::new(3);
    let high_due = now + Days::new(7);

    let critical = critical_issues.iter().enumerate().map(|(i, issue)| {
        RemediationAction::new(
            format!("REM-CRIT-{}", i + 1),
            issue,
            "compliance_team",
            critical_due,
            4,
        )
    });

    let high = all_issues
        .into_iter()
        .filter(|issue| issue.severity == Severity::High)
        .enumerate()
        .map(|(i, issue)| {
            RemediationAction::new(
                format!("REM-HIGH-{}", i + 1),
                issue,
                "content_team",
                high_due,
                2,
            )
        });

    critical.chain(high).collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::audit::IssueCategory;

    fn issue(id: &str, severity: Severity) -> ComplianceIssue {
        ComplianceIssue {
            id: id.to_string(),
            severity,
            category: IssueCategory::Compliance,
            description: format!("issue {id}"),
            requirement: "ICAO Annex 15".to_string(),
            location: "document".to_string(),
            remediation: format!("fix {id}"),
        }
    }

    #[test]
    fn plans_critical_and_high_issues() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let critical = vec![issue("ICAO-E-001", Severity::Critical)];
        let all = vec![
            issue("ICAO-E-001", Severity::Critical),
            issue("ICAO-W-001", Severity::Medium),
            issue("ICAO-M-001", Severity::High),
            issue("DQ-COORD-W-1-AD-2.2-1", Severity::Low),
        ];

        let plan = remediation_plan(&critical, &all, now);
        assert_eq!(plan.len(), 2);

        assert_eq!(plan[0].id, "REM-CRIT-1");
        assert_eq!(plan[0].priority, Severity::Critical);
        assert_eq!(plan[0].assignee, "compliance_team");
        assert_eq!(plan[0].estimated_hours, 4);
        assert_eq!(plan[0].due_date, Utc.with_ymd_and_hms(2026, 10, 22, 12, 0, 0).unwrap());
        assert_eq!(plan[0].related_issues, vec!["ICAO-E-001"]);
        assert_eq!(plan[0].action, "fix ICAO-E-001");

        assert_eq!(plan[1].id, "REM-HIGH-1");
        assert_eq!(plan[1].assignee, "content_team");
        assert_eq!(plan[1].estimated_hours, 2);
        assert_eq!(plan[1].due_date, Utc.with_ymd_and_hms(2026, 10, 26, 12, 0, 0).unwrap());
        assert_eq!(plan[1].status, ActionStatus::Pending);
    }
}
