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

//! ICAO Annex 15 structure of an AIP.
//!
//! The structure is a static tree of [`AipSection`]s with the three parts
//! GEN, ENR and AD at its root. Each part is divided into sections (e.g.
//! `GEN 1`) which are divided into subsections (e.g. `GEN 1.1`). The tree
//! defines which subsections a state must publish. Use
//! [`mandatory_subsections`] to get the index of those.

use lazy_static::lazy_static;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::SectionType;

/// Depth of an entry within the AIP structure.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum Level {
    /// A part like `GEN`.
    Part = 1,
    /// A section like `GEN 1`.
    Section = 2,
    /// A subsection like `GEN 1.1`.
    Subsection = 3,
}

/// An entry of the AIP structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AipSection {
    /// The full code e.g. `GEN 1.1`.
    pub code: &'static str,
    pub title: &'static str,
    pub order: u8,
    pub level: Level,
    pub is_mandatory: bool,
    pub icao_reference: &'static str,
    pub children: &'static [AipSection],
}

impl AipSection {
    /// Returns the part this entry belongs to.
    pub fn part(&self) -> Option<SectionType> {
        self.code.split(' ').next().and_then(|p| p.parse().ok())
    }

    /// Returns the code without the part e.g. `1.1` for `GEN 1.1`.
    pub fn local_code(&self) -> &'static str {
        self.code
            .split_once(' ')
            .map(|(_, local)| local)
            .unwrap_or(self.code)
    }
}

/// A subsection that must be published.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MandatorySubsection {
    pub part: SectionType,
    /// The code within the part e.g. `1.1`.
    pub code: &'static str,
    pub title: &'static str,
    pub icao_reference: &'static str,
}

const fn part(
    code: &'static str,
    title: &'static str,
    order: u8,
    icao_reference: &'static str,
    children: &'static [AipSection],
) -> AipSection {
    AipSection {
        code,
        title,
        order,
        level: Level::Part,
        is_mandatory: true,
        icao_reference,
        children,
    }
}

const fn section(
    code: &'static str,
    title: &'static str,
    order: u8,
    is_mandatory: bool,
    icao_reference: &'static str,
    children: &'static [AipSection],
) -> AipSection {
    AipSection {
        code,
        title,
        order,
        level: Level::Section,
        is_mandatory,
        icao_reference,
        children,
    }
}

const fn sub(
    code: &'static str,
    title: &'static str,
    order: u8,
    is_mandatory: bool,
    icao_reference: &'static str,
) -> AipSection {
    AipSection {
        code,
        title,
        order,
        level: Level::Subsection,
        is_mandatory,
        icao_reference,
        children: &[],
    }
}

/////////////////////////////////////////////////////////////////////////////
// Part 1 - General (GEN)
/////////////////////////////////////////////////////////////////////////////

const GEN_0: &[AipSection] = &[
    sub("GEN 0.1", "Applicable AIRAC system", 1, true, "Annex 15, 3.2.2.1"),
    sub("GEN 0.2", "Record of AIP Amendments", 2, true, "Annex 15, 3.2.2.2"),
    sub("GEN 0.3", "Record of AIP Supplements", 3, true, "Annex 15, 3.2.2.3"),
    sub("GEN 0.4", "Checklist of AIP pages", 4, true, "Annex 15, 3.2.2.4"),
    sub("GEN 0.5", "List of hand amendments to the AIP", 5, false, "Annex 15, 3.2.2.5"),
    sub("GEN 0.6", "Table of contents to Part 1", 6, true, "Annex 15, 3.2.2.6"),
];

const GEN_1: &[AipSection] = &[
    sub("GEN 1.1", "Designated authorities", 1, true, "Annex 15, 3.2.3.1"),
    sub("GEN 1.2", "Entry, transit and departure of aircraft", 2, true, "Annex 15, 3.2.3.2"),
    sub("GEN 1.3", "Entry, transit and departure of passengers", 3, true, "Annex 15, 3.2.3.3"),
    sub("GEN 1.4", "Entry, transit and departure of crew", 4, true, "Annex 15, 3.2.3.4"),
    sub("GEN 1.5", "Aircraft instruments, equipment and flight documents", 5, true, "Annex 15, 3.2.3.5"),
    sub("GEN 1.6", "Summary of national regulations and requirements", 6, true, "Annex 15, 3.2.3.6"),
    sub("GEN 1.7", "Differences from ICAO Standards, Recommended Practices and Procedures", 7, true, "Annex 15, 3.2.3.7"),
];

const GEN_2: &[AipSection] = &[
    sub("GEN 2.1", "Measuring system, aircraft markings, holidays", 1, true, "Annex 15, 3.2.4.1"),
    sub("GEN 2.2", "Abbreviations", 2, true, "Annex 15, 3.2.4.2"),
    sub("GEN 2.3", "Chart symbols", 3, true, "Annex 15, 3.2.4.3"),
    sub("GEN 2.4", "Location indicators", 4, true, "Annex 15, 3.2.4.4"),
    sub("GEN 2.5", "List of radio navigation aids", 5, true, "Annex 15, 3.2.4.5"),
    sub("GEN 2.6", "Conversion tables", 6, false, "Annex 15, 3.2.4.6"),
    sub("GEN 2.7", "Sunrise/sunset tables", 7, false, "Annex 15, 3.2.4.7"),
];

const GEN_3: &[AipSection] = &[
    sub("GEN 3.1", "Aeronautical information services", 1, true, "Annex 15, 3.2.5.1"),
    sub("GEN 3.2", "Aeronautical charts", 2, true, "Annex 15, 3.2.5.2"),
    sub("GEN 3.3", "Air traffic services", 3, true, "Annex 15, 3.2.5.3"),
    sub("GEN 3.4", "Communication services", 4, true, "Annex 15, 3.2.5.4"),
    sub("GEN 3.5", "Meteorological services", 5, true, "Annex 15, 3.2.5.5"),
    sub("GEN 3.6", "Search and rescue", 6, true, "Annex 15, 3.2.5.6"),
];

const GEN_4: &[AipSection] = &[
    sub("GEN 4.1", "Aerodrome/heliport charges", 1, true, "Annex 15, 3.2.6.1"),
    sub("GEN 4.2", "Air navigation services charges", 2, true, "Annex 15, 3.2.6.2"),
];

const GEN: &[AipSection] = &[
    section("GEN 0", "Preface", 0, true, "Annex 15, 3.2.2", GEN_0),
    section("GEN 1", "National Regulations and Requirements", 1, true, "Annex 15, 3.2.3", GEN_1),
    section("GEN 2", "Tables and Codes", 2, true, "Annex 15, 3.2.4", GEN_2),
    section("GEN 3", "Services", 3, true, "Annex 15, 3.2.5", GEN_3),
    section("GEN 4", "Charges for aerodromes/heliports and air navigation services", 4, true, "Annex 15, 3.2.6", GEN_4),
];

/////////////////////////////////////////////////////////////////////////////
// Part 2 - En-route (ENR)
/////////////////////////////////////////////////////////////////////////////

const ENR_1: &[AipSection] = &[
    sub("ENR 1.1", "General rules", 1, true, "Annex 15, 3.3.2.1"),
    sub("ENR 1.2", "Visual flight rules", 2, true, "Annex 15, 3.3.2.2"),
    sub("ENR 1.3", "Instrument flight rules", 3, true, "Annex 15, 3.3.2.3"),
    sub("ENR 1.4", "ATS airspace classification and description", 4, true, "Annex 15, 3.3.2.4"),
    sub("ENR 1.5", "Holding, approach and departure procedures", 5, true, "Annex 15, 3.3.2.5"),
    sub("ENR 1.6", "ATS surveillance services and procedures", 6, true, "Annex 15, 3.3.2.6"),
    sub("ENR 1.7", "Altimeter setting procedures", 7, true, "Annex 15, 3.3.2.7"),
    sub("ENR 1.8", "Regional supplementary procedures", 8, true, "Annex 15, 3.3.2.8"),
    sub("ENR 1.9", "Air traffic flow management and airspace management", 9, true, "Annex 15, 3.3.2.9"),
    sub("ENR 1.10", "Flight planning", 10, true, "Annex 15, 3.3.2.10"),
    sub("ENR 1.11", "Addressing of flight plan messages", 11, true, "Annex 15, 3.3.2.11"),
    sub("ENR 1.12", "Interception of civil aircraft", 12, true, "Annex 15, 3.3.2.12"),
    sub("ENR 1.13", "Unlawful interference", 13, true, "Annex 15, 3.3.2.13"),
    sub("ENR 1.14", "Air traffic incidents", 14, true, "Annex 15, 3.3.2.14"),
];

const ENR_2: &[AipSection] = &[
    sub("ENR 2.1", "FIR, UIR, TMA and CTA", 1, true, "Annex 15, 3.3.3.1"),
    sub("ENR 2.2", "Other regulated airspace", 2, true, "Annex 15, 3.3.3.2"),
];

const ENR_3: &[AipSection] = &[
    sub("ENR 3.1", "Lower ATS routes", 1, true, "Annex 15, 3.3.4.1"),
    sub("ENR 3.2", "Upper ATS routes", 2, true, "Annex 15, 3.3.4.2"),
    sub("ENR 3.3", "Area navigation routes", 3, true, "Annex 15, 3.3.4.3"),
    sub("ENR 3.4", "Helicopter routes", 4, false, "Annex 15, 3.3.4.4"),
    sub("ENR 3.5", "Other routes", 5, true, "Annex 15, 3.3.4.5"),
    sub("ENR 3.6", "En-route holding", 6, true, "Annex 15, 3.3.4.6"),
];

const ENR_4: &[AipSection] = &[
    sub("ENR 4.1", "Radio navigation aids - en-route", 1, true, "Annex 15, 3.3.5.1"),
    sub("ENR 4.2", "Special navigation systems", 2, true, "Annex 15, 3.3.5.2"),
    sub("ENR 4.3", "Global navigation satellite system (GNSS)", 3, true, "Annex 15, 3.3.5.3"),
    sub("ENR 4.4", "Name-code designators for significant points", 4, true, "Annex 15, 3.3.5.4"),
    sub("ENR 4.5", "Aeronautical ground lights - en-route", 5, true, "Annex 15, 3.3.5.5"),
];

const ENR_5: &[AipSection] = &[
    sub("ENR 5.1", "Prohibited, restricted and danger areas", 1, true, "Annex 15, 3.3.6.1"),
    sub("ENR 5.2", "Military exercise and training areas and air defence identification zone", 2, true, "Annex 15, 3.3.6.2"),
    sub("ENR 5.3", "Other activities of a dangerous nature and other potential hazards", 3, true, "Annex 15, 3.3.6.3"),
    sub("ENR 5.4", "Air navigation obstacles", 4, true, "Annex 15, 3.3.6.4"),
    sub("ENR 5.5", "Aerial sporting and recreational activities", 5, true, "Annex 15, 3.3.6.5"),
    sub("ENR 5.6", "Bird migration and areas with sensitive fauna", 6, true, "Annex 15, 3.3.6.6"),
];

const ENR_6: &[AipSection] = &[sub("ENR 6.1", "En-route charts - ICAO", 1, true, "Annex 15, 3.3.7.1")];

const ENR: &[AipSection] = &[
    section("ENR 1", "General rules and procedures", 1, true, "Annex 15, 3.3.2", ENR_1),
    section("ENR 2", "Air traffic services airspace", 2, true, "Annex 15, 3.3.3", ENR_2),
    section("ENR 3", "ATS routes", 3, true, "Annex 15, 3.3.4", ENR_3),
    section("ENR 4", "Radio navigation aids/systems", 4, true, "Annex 15, 3.3.5", ENR_4),
    section("ENR 5", "Navigation warnings", 5, true, "Annex 15, 3.3.6", ENR_5),
    section("ENR 6", "En-route charts", 6, true, "Annex 15, 3.3.7", ENR_6),
];

/////////////////////////////////////////////////////////////////////////////
// Part 3 - Aerodromes (AD)
/////////////////////////////////////////////////////////////////////////////

const AD_1: &[AipSection] = &[
    sub("AD 1.1", "Aerodrome/heliport availability and conditions of use", 1, true, "Annex 15, 3.4.2.1"),
    sub("AD 1.2", "Rescue and firefighting services and snow plan", 2, true, "Annex 15, 3.4.2.2"),
    sub("AD 1.3", "Index to aerodromes and heliports", 3, true, "Annex 15, 3.4.2.3"),
    sub("AD 1.4", "Grouping of aerodromes/heliports", 4, false, "Annex 15, 3.4.2.4"),
    sub("AD 1.5", "Status of certification of aerodromes", 5, false, "Annex 15, 3.4.2.5"),
];

const AD_2: &[AipSection] = &[
    sub("AD 2.1", "Aerodrome location indicator and name", 1, true, "Annex 15, 3.4.3.1"),
    sub("AD 2.2", "Aerodrome geographical and administrative data", 2, true, "Annex 15, 3.4.3.2"),
    sub("AD 2.3", "Operational hours", 3, true, "Annex 15, 3.4.3.3"),
    sub("AD 2.4", "Handling services and facilities", 4, true, "Annex 15, 3.4.3.4"),
    sub("AD 2.5", "Passenger facilities", 5, true, "Annex 15, 3.4.3.5"),
    sub("AD 2.6", "Rescue and firefighting services", 6, true, "Annex 15, 3.4.3.6"),
    sub("AD 2.7", "Seasonal availability - clearing", 7, true, "Annex 15, 3.4.3.7"),
    sub("AD 2.8", "Aprons, taxiways and check locations data", 8, true, "Annex 15, 3.4.3.8"),
    sub("AD 2.9", "Surface movement guidance and control system and markings", 9, true, "Annex 15, 3.4.3.9"),
    sub("AD 2.10", "Aerodrome obstacles", 10, true, "Annex 15, 3.4.3.10"),
    sub("AD 2.11", "Meteorological information provided", 11, true, "Annex 15, 3.4.3.11"),
    sub("AD 2.12", "Runway physical characteristics", 12, true, "Annex 15, 3.4.3.12"),
    sub("AD 2.13", "Declared distances", 13, true, "Annex 15, 3.4.3.13"),
    sub("AD 2.14", "Approach and runway lighting", 14, true, "Annex 15, 3.4.3.14"),
    sub("AD 2.15", "Other lighting, secondary power supply", 15, true, "Annex 15, 3.4.3.15"),
    sub("AD 2.16", "Helicopter landing area", 16, false, "Annex 15, 3.4.3.16"),
    sub("AD 2.17", "Air traffic services airspace", 17, true, "Annex 15, 3.4.3.17"),
    sub("AD 2.18", "Air traffic services communication facilities", 18, true, "Annex 15, 3.4.3.18"),
    sub("AD 2.19", "Radio navigation and landing aids", 19, true, "Annex 15, 3.4.3.19"),
    sub("AD 2.20", "Local aerodrome regulations", 20, true, "Annex 15, 3.4.3.20"),
    sub("AD 2.21", "Noise abatement procedures", 21, true, "Annex 15, 3.4.3.21"),
    sub("AD 2.22", "Flight procedures", 22, true, "Annex 15, 3.4.3.22"),
    sub("AD 2.23", "Additional information", 23, false, "Annex 15, 3.4.3.23"),
    sub("AD 2.24", "Charts related to an aerodrome", 24, true, "Annex 15, 3.4.3.24"),
];

const AD_3: &[AipSection] = &[
    sub("AD 3.1", "Heliport location indicator and name", 1, true, "Annex 15, 3.4.4.1"),
    sub("AD 3.2", "Heliport geographical and administrative data", 2, true, "Annex 15, 3.4.4.2"),
    sub("AD 3.3", "Operational hours", 3, true, "Annex 15, 3.4.4.3"),
];

const AD: &[AipSection] = &[
    section("AD 1", "Aerodromes/Heliports - Introduction", 1, true, "Annex 15, 3.4.2", AD_1),
    section("AD 2", "Aerodromes", 2, true, "Annex 15, 3.4.3", AD_2),
    // heliports are published only by states operating them
    section("AD 3", "Heliports", 3, false, "Annex 15, 3.4.4", AD_3),
];

/// The complete AIP structure as required by ICAO Annex 15.
pub static ICAO_AIP_STRUCTURE: &[AipSection] = &[
    part("GEN", "General (GEN)", 1, "Annex 15, Part 1", GEN),
    part("ENR", "En-route (ENR)", 2, "Annex 15, Part 2", ENR),
    part("AD", "Aerodromes (AD)", 3, "Annex 15, Part 3", AD),
];

lazy_static! {
    static ref FLATTENED: Vec<&'static AipSection> = {
        fn traverse(entry: &'static AipSection, result: &mut Vec<&'static AipSection>) {
            result.push(entry);
            for child in entry.children {
                traverse(child, result);
            }
        }

        let mut result = Vec::new();
        for entry in ICAO_AIP_STRUCTURE {
            traverse(entry, &mut result);
        }
        result
    };

    static ref MANDATORY: Vec<MandatorySubsection> = ICAO_AIP_STRUCTURE
        .iter()
        .filter_map(|p| p.part().map(|part| (part, p)))
        .flat_map(|(part, p)| {
            p.children
                .iter()
                .filter(|section| section.is_mandatory)
                .flat_map(|section| section.children.iter())
                .filter(|subsection| subsection.is_mandatory)
                .map(move |subsection| MandatorySubsection {
                    part,
                    code: subsection.local_code(),
                    title: subsection.title,
                    icao_reference: subsection.icao_reference,
                })
        })
        .collect();
}

/// Returns all entries of the structure in depth-first order.
pub fn flattened() -> &'static [&'static AipSection] {
    FLATTENED.as_slice()
}

/// Returns the mandatory subsections of mandatory sections in document
/// order.
///
/// The index is built only once.
pub fn mandatory_subsections() -> &'static [MandatorySubsection] {
    MANDATORY.as_slice()
}

/// Searches for an entry by its full code e.g. `ENR 4.1`.
pub fn find(code: &str) -> Option<&'static AipSection> {
    flattened().iter().copied().find(|entry| entry.code == code)
}

/// Returns the children of an entry or an empty slice if there is no entry
/// with this code.
pub fn children(code: &str) -> &'static [AipSection] {
    find(code).map(|entry| entry.children).unwrap_or(&[])
}

/// Returns the path from the part down to the entry with the code.
///
/// The path is empty if there is no entry with this code.
pub fn path(code: &str) -> Vec<&'static AipSection> {
    fn search(
        entries: &'static [AipSection],
        code: &str,
        path: &mut Vec<&'static AipSection>,
    ) -> bool {
        for entry in entries {
            path.push(entry);
            if entry.code == code || search(entry.children, code, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    search(ICAO_AIP_STRUCTURE, code, &mut path);
    path
}
