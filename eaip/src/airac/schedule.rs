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

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{midnight, AiracCycle};

/// Days before the publication date at which the initial submission is due.
const INITIAL_SUBMISSION_DAYS: u64 = 21;
/// Days before the publication date at which the final submission is due.
const FINAL_SUBMISSION_DAYS: u64 = 14;
/// Days before the publication date at which the review is due.
const REVIEW_DAYS: u64 = 7;
/// Notice in days for amendments.
const AMENDMENT_NOTICE_DAYS: i64 = 14;

/// Stage of a cycle's publication process.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PublicationStatus {
    /// Before the initial submission.
    Planning,
    /// Between the initial and final submission.
    Submission,
    /// Between the final submission and the publication.
    Review,
    /// Published but not yet effective.
    Published,
    Effective,
    /// Superseded by the next cycle.
    Expired,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Deadlines {
    pub initial_submission: NaiveDate,
    pub final_submission: NaiveDate,
    pub review: NaiveDate,
    pub publication: NaiveDate,
    pub effective: NaiveDate,
}

/// The deadlines to publish a cycle.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PublicationSchedule {
    pub cycle: AiracCycle,
    pub deadlines: Deadlines,
    pub status: PublicationStatus,
}

/// Returns the publication schedule of the cycle with its current status.
pub fn publication_schedule(cycle: &AiracCycle) -> PublicationSchedule {
    publication_schedule_at(cycle, Utc::now())
}

/// Returns the publication schedule of the cycle with its status at the
/// given time.
///
/// The status is derived from the deadlines on every call.
pub fn publication_schedule_at(cycle: &AiracCycle, now: DateTime<Utc>) -> PublicationSchedule {
    let publication = cycle.publication_date;
    let deadlines = Deadlines {
        initial_submission: publication - Days::new(INITIAL_SUBMISSION_DAYS),
        final_submission: publication - Days::new(FINAL_SUBMISSION_DAYS),
        review: publication - Days::new(REVIEW_DAYS),
        publication,
        effective: cycle.effective_date,
    };

    let status = if now < midnight(deadlines.initial_submission) {
        PublicationStatus::Planning
    } else if now < midnight(deadlines.final_submission) {
        PublicationStatus::Submission
    } else if now < midnight(deadlines.publication) {
        PublicationStatus::Review
    } else if now < midnight(deadlines.effective) {
        PublicationStatus::Published
    } else if now < midnight(cycle.next_cycle) {
        PublicationStatus::Effective
    } else {
        PublicationStatus::Expired
    };

    PublicationSchedule {
        cycle: cycle.clone(),
        deadlines,
        status,
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Urgency {
    Routine,
    /// Effective with less than the regular notice.
    Urgent,
}

/// An amendment to the data of a cycle.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AiracAmendment {
    /// The identifier like `2612-AMD1`.
    pub id: String,
    pub base_cycle: String,
    pub amendment_number: u32,
    pub effective_date: DateTime<Utc>,
    /// Two weeks before the effective date.
    pub publication_date: DateTime<Utc>,
    pub urgency: Urgency,
}

/// Creates an amendment to the cycle.
pub fn create_amendment(
    base_cycle: &AiracCycle,
    amendment_number: u32,
    effective_date: DateTime<Utc>,
) -> AiracAmendment {
    create_amendment_at(base_cycle, amendment_number, effective_date, Utc::now())
}

/// Creates an amendment to the cycle at the given time.
///
/// The amendment is urgent if it becomes effective in less than two weeks.
pub fn create_amendment_at(
    base_cycle: &AiracCycle,
    amendment_number: u32,
    effective_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AiracAmendment {
    let notice = TimeDelta::days(AMENDMENT_NOTICE_DAYS);

    AiracAmendment {
        id: format!("{}-AMD{amendment_number}", base_cycle.id),
        base_cycle: base_cycle.id.clone(),
        amendment_number,
        effective_date,
        publication_date: effective_date - notice,
        urgency: if effective_date - now < notice {
            Urgency::Urgent
        } else {
            Urgency::Routine
        },
    }
}
