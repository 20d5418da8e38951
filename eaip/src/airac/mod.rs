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

//! AIRAC cycle calendar.
//!
//! Aeronautical information is changed at common effective dates which are
//! 28 days apart. Each cycle is identified by the last two digits of the year
//! and the number of the cycle within the year e.g. `2612` for the twelfth
//! cycle of 2026. Cycles are numbered from the first effective date on or
//! after the first of January.
//!
//! ```
//! use chrono::NaiveDate;
//! use eaip::airac::{cycles_for_year, validate_airac_cycle};
//!
//! let cycles = cycles_for_year(2026);
//! assert_eq!(cycles.len(), 14);
//! assert_eq!(cycles[11].id, "2612");
//! assert_eq!(cycles[11].effective_date, NaiveDate::from_ymd_opt(2026, 11, 5).unwrap());
//!
//! let result = validate_airac_cycle("202613");
//! assert!(result.is_valid);
//! ```

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validate::Validation;

mod schedule;

pub use schedule::*;

lazy_static! {
    static ref YYMM: Regex = Regex::new(r"^([0-9]{2})([0-9]{2})$").unwrap();
    static ref YYYYMM: Regex = Regex::new(r"^([0-9]{4})([0-9]{2})$").unwrap();
}

/// Length of a cycle in days.
pub const CYCLE_DAYS: i64 = 28;

/// Days from the publication to the effective date of a cycle.
pub const PUBLICATION_LEAD_DAYS: u64 = 56;

/// The effective date of a cycle from which all cycles are derived.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 5).unwrap_or_default()
}

/// An AIRAC cycle.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AiracCycle {
    /// The cycle's identifier as `YYMM`.
    pub id: String,
    pub effective_date: NaiveDate,
    pub publication_date: NaiveDate,
    /// Number of the cycle within its year starting at 1.
    pub cycle_number: u8,
    pub year: i32,
    /// Effective date of the next cycle.
    pub next_cycle: NaiveDate,
    /// Effective date of the previous cycle.
    pub previous_cycle: NaiveDate,
}

impl AiracCycle {
    fn new(effective_date: NaiveDate, year: i32, cycle_number: u8) -> Self {
        let cycle = Days::new(CYCLE_DAYS as u64);
        Self {
            id: format!("{:02}{:02}", year.rem_euclid(100), cycle_number),
            effective_date,
            publication_date: effective_date - Days::new(PUBLICATION_LEAD_DAYS),
            cycle_number,
            year,
            next_cycle: effective_date + cycle,
            previous_cycle: effective_date - cycle,
        }
    }

    /// Returns the cycle that is effective on the date.
    pub fn containing(date: NaiveDate) -> Self {
        let index = (date - epoch()).num_days().div_euclid(CYCLE_DAYS);
        let effective_date = epoch() + TimeDelta::days(index * CYCLE_DAYS);

        // the first cycle of a year is within its first 28 days
        let cycle_number = (effective_date.ordinal0() as i64 / CYCLE_DAYS) as u8 + 1;
        Self::new(effective_date, effective_date.year(), cycle_number)
    }

    /// Returns the time at which the cycle becomes effective.
    pub fn effective_at(&self) -> DateTime<Utc> {
        midnight(self.effective_date)
    }

    /// Returns the cycle following this one.
    pub fn next(&self) -> Self {
        Self::containing(self.next_cycle)
    }

    /// Returns the cycle preceding this one.
    pub fn previous(&self) -> Self {
        Self::containing(self.previous_cycle)
    }

    /// Returns `true` if the cycle is effective at the time.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        self.effective_date <= today && today < self.next_cycle
    }

    /// Returns `true` if the cycle is currently effective.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}

pub(crate) fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Returns the effective date of the first cycle on or after the first of
/// January.
fn first_effective_date(year: i32) -> Option<NaiveDate> {
    let first_thursday = NaiveDate::from_weekday_of_month_opt(year, 1, Weekday::Thu, 1)?;
    let index = (first_thursday - epoch()).num_days().div_euclid(CYCLE_DAYS);
    Some(epoch() + TimeDelta::days(index * CYCLE_DAYS))
}

/// Returns all cycles that become effective in the year.
///
/// The cycles are found by walking in steps of 28 days through the year, so
/// that the numbering is exact for every year.
pub fn cycles_for_year(year: i32) -> Vec<AiracCycle> {
    let (Some(mut date), Some(year_start), Some(year_end)) = (
        first_effective_date(year),
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year + 1, 1, 1),
    ) else {
        return Vec::new();
    };

    let mut cycles = Vec::new();
    let mut cycle_number = 1;

    while date < year_end {
        if date >= year_start {
            cycles.push(AiracCycle::new(date, year, cycle_number));
            cycle_number += 1;
        }
        date = date + Days::new(CYCLE_DAYS as u64);
    }

    cycles
}

/// Returns all cycles of the years from `start_year` to `end_year`
/// (inclusive) sorted by their effective date.
pub fn generate_airac_cycles(start_year: i32, end_year: i32) -> Vec<AiracCycle> {
    let mut cycles: Vec<_> = (start_year..=end_year).flat_map(cycles_for_year).collect();
    cycles.sort_by_key(|c| c.effective_date);
    cycles
}

/// Returns the cycle that is currently effective.
pub fn current_airac_cycle() -> AiracCycle {
    current_airac_cycle_at(Utc::now())
}

/// Returns the cycle that is effective at the time.
pub fn current_airac_cycle_at(now: DateTime<Utc>) -> AiracCycle {
    AiracCycle::containing(now.date_naive())
}

/// Returns the cycle following the current cycle.
pub fn next_airac_cycle() -> AiracCycle {
    current_airac_cycle().next()
}

/// Returns the cycle preceding the current cycle.
pub fn previous_airac_cycle() -> AiracCycle {
    current_airac_cycle().previous()
}

/// Validates a cycle identifier given as `YYMM` or `YYYYMM`.
///
/// The identifier is valid if the cycle exists in its year. The validation
/// warns if the cycle is already effective, more than two years ahead or of a
/// year other than the last, current or the next two years.
pub fn validate_airac_cycle(id: &str) -> Validation<AiracCycle> {
    validate_airac_cycle_at(id, Utc::now())
}

/// Validates a cycle identifier at the given time.
pub fn validate_airac_cycle_at(id: &str, now: DateTime<Utc>) -> Validation<AiracCycle> {
    let Some((year, cycle_number)) = parse_id(id) else {
        return Validation::invalid(
            "AIRAC cycle must be in YYMM format (e.g., 2501) or YYYYMM format (e.g., 202501)",
        );
    };

    let mut warnings = Vec::new();
    let current_year = now.year();
    if year < current_year - 1 || year > current_year + 2 {
        warnings.push("AIRAC cycle year is outside typical range".to_string());
    }

    let Some(cycle) = cycles_for_year(year)
        .into_iter()
        .find(|c| u32::from(c.cycle_number) == cycle_number)
    else {
        return Validation {
            errors: vec![format!(
                "Invalid cycle number {cycle_number} for year {year}"
            )],
            warnings,
            ..Default::default()
        };
    };

    if cycle.effective_at() < now {
        warnings.push("AIRAC cycle is in the past".to_string());
    }

    let two_years_ahead = now.checked_add_months(Months::new(24)).unwrap_or(now);
    if cycle.effective_at() > two_years_ahead {
        warnings.push("AIRAC cycle is more than 2 years in the future".to_string());
    }

    Validation {
        warnings,
        ..Validation::valid(cycle)
    }
}

fn parse_id(id: &str) -> Option<(i32, u32)> {
    if let Some(caps) = YYYYMM.captures(id) {
        Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
    } else if let Some(caps) = YYMM.captures(id) {
        Some((2000 + caps[1].parse::<i32>().ok()?, caps[2].parse().ok()?))
    } else {
        None
    }
}

/// Returns the cycle with the identifier or `None` if it's not a valid
/// cycle.
pub fn cycle_by_id(id: &str) -> Option<AiracCycle> {
    validate_airac_cycle(id).value
}

/// Returns `true` if the date is the effective date of a cycle.
pub fn is_valid_airac_date(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Thu && (date - epoch()).num_days().rem_euclid(CYCLE_DAYS) == 0
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_airac_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        midnight(date(y, m, d))
    }

    #[test]
    fn first_cycles_of_years() {
        let cycles = cycles_for_year(2023);
        assert_eq!(cycles[0].id, "2301");
        assert_eq!(cycles[0].effective_date, epoch());
        assert_eq!(cycles.len(), 13);

        let cycles = cycles_for_year(2026);
        assert_eq!(cycles[0].id, "2601");
        assert_eq!(cycles[0].effective_date, date(2026, 1, 1));
        assert_eq!(cycles[13].id, "2614");
        assert_eq!(cycles[13].effective_date, date(2026, 12, 31));
    }

    #[test]
    fn cycle_dates() {
        let cycle = &cycles_for_year(2025)[0];
        assert_eq!(cycle.effective_date, date(2025, 1, 2));
        assert_eq!(cycle.publication_date, date(2024, 11, 7));
        assert_eq!(cycle.next_cycle, date(2025, 1, 30));
        assert_eq!(cycle.previous_cycle, date(2024, 12, 5));
    }

    #[test]
    fn current_next_and_previous() {
        let now = at(2026, 10, 19);
        let current = current_airac_cycle_at(now);
        assert_eq!(current.id, "2611");
        assert_eq!(current.effective_date, date(2026, 10, 8));
        assert!(current.is_active_at(now));

        assert_eq!(current.next().id, "2612");
        assert_eq!(current.previous().id, "2610");
        assert!(!current.next().is_active_at(now));
    }

    #[test]
    fn numbering_restarts_each_year() {
        let last = cycles_for_year(2025).pop().unwrap();
        assert_eq!(last.next().id, "2601");
        assert_eq!(AiracCycle::containing(last.next_cycle).cycle_number, 1);
    }

    #[test]
    fn validates_identifiers() {
        let now = at(2026, 10, 19);

        let result = validate_airac_cycle_at("2612", now);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());

        let result = validate_airac_cycle_at("202612", now);
        assert_eq!(result.value.unwrap().effective_date, date(2026, 11, 5));

        let result = validate_airac_cycle_at("2501", now);
        assert!(result.is_valid);
        assert_eq!(result.warnings, vec!["AIRAC cycle is in the past"]);

        let result = validate_airac_cycle_at("2615", now);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Invalid cycle number 15 for year 2026"]);

        let result = validate_airac_cycle_at("26-01", now);
        assert!(!result.is_valid);
    }

    #[test]
    fn warns_about_distant_cycles() {
        let now = at(2026, 10, 19);

        let result = validate_airac_cycle_at("2001", now);
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![
                "AIRAC cycle year is outside typical range",
                "AIRAC cycle is in the past"
            ]
        );

        let result = validate_airac_cycle_at("2812", now);
        assert_eq!(
            result.warnings,
            vec!["AIRAC cycle is more than 2 years in the future"]
        );
    }

    #[test]
    fn airac_dates() {
        assert!(is_valid_airac_date(epoch()));
        assert!(is_valid_airac_date(date(2026, 11, 5)));
        // a Thursday between two cycles
        assert!(!is_valid_airac_date(date(2026, 11, 12)));
        assert!(!is_valid_airac_date(date(2026, 11, 6)));
        assert_eq!(format_airac_date(date(2026, 1, 1)), "2026-01-01");
    }
}
