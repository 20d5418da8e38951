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

//! Compliance auditing of electronic Aeronautical Information Publications.
//!
//! This crate audits an [`AipDocument`] against ICAO Annex 15 and the
//! EUROCONTROL Specification for Electronic AIP. The building blocks are
//! usable on their own:
//!
//! - [validate] checks single data fields like coordinates, elevations or
//!   radio frequencies.
//! - [airac] computes the AIRAC cycle calendar and publication schedules.
//! - [framework] validates a document against one regulation.
//! - [audit] combines the frameworks into a scored report.
//!
//! # Examples
//!
//! Lets audit a document that has only its GEN part and print the result:
//!
//! ```
//! use aip::{AipDocument, Section, SectionType, Subsection};
//! use eaip::audit::{generate_compliance_report, ComplianceAuditor, OverallCompliance};
//!
//! let mut doc = AipDocument::new("Germany AIP", "DE", "2612");
//! doc.metadata.authority = Some("Deutsche Flugsicherung GmbH".to_string());
//! doc.metadata.contact = Some("ais@dfs.de".to_string());
//! doc.sections.push(
//!     Section::new(SectionType::Gen, "General")
//!         .with_subsection(Subsection::new("1.1", "Designated authorities")),
//! );
//!
//! let report = ComplianceAuditor::new().audit(&doc);
//!
//! // the ENR and AD parts are missing
//! assert_eq!(report.overall_compliance, OverallCompliance::NonCompliant);
//! println!("{}", generate_compliance_report(&report));
//! ```
//!
//! [`AipDocument`]: aip::AipDocument

mod error;

pub mod airac;
pub mod audit;
pub mod framework;
pub mod validate;

pub use error::{Error, Result};

/// Re-export of the document model.
pub use aip;

pub mod prelude {
    pub use crate::airac::{validate_airac_cycle, AiracCycle};
    pub use crate::audit::{
        generate_compliance_report, perform_comprehensive_audit, ComplianceAuditReport,
        ComplianceAuditor, OverallCompliance, Severity,
    };
    pub use crate::framework::Framework;
    pub use aip::{AipDocument, Section, SectionType, Subsection};
}
