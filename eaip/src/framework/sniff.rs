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

//! Detection of aeronautical data in free text.
//!
//! The predicates and the tokenizer are best-effort heuristics. They work on
//! the plain text of a subsection and miss data that is written in an unusual
//! way, which is acceptable since they only decide which checks to run.
//!
//! ```
//! use eaip::framework::sniff::{tokens, TokenKind};
//!
//! let text = "ARP 533750N 0095917E, ELEV 53 ft, TWR 121.275";
//! let kinds: Vec<_> = tokens(text).iter().map(|t| t.kind).collect();
//!
//! assert_eq!(kinds, vec![TokenKind::Coordinate, TokenKind::Elevation, TokenKind::Frequency]);
//! ```

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DMS: Regex =
        Regex::new(r#"[0-9]{2,3}°[0-9]{2}'[0-9]{2}(?:\.[0-9]+)?"[NSEW]"#).unwrap();
    static ref DECIMAL_WITH_HEMISPHERE: Regex = Regex::new(r"[0-9]{2}\.[0-9]+°[NS]").unwrap();
    static ref ICAO_POSITION: Regex = Regex::new(r"\b[0-9]{6}[NS]\s?[0-9]{7}[EW]\b").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"[+-]?\b[0-9]{1,3}\.[0-9]+\b").unwrap();
    static ref ELEVATION: Regex =
        Regex::new(r"(?i)[+-]?\b[0-9]+(?:\.[0-9]+)?\s*(?:ft|feet|m|meter|metre)\b").unwrap();
    static ref FREQUENCY_MHZ: Regex = Regex::new(r"\b[0-9]{3}\.[0-9]{2,3}\b").unwrap();
    static ref FREQUENCY_KHZ: Regex = Regex::new(r"(?i)\b[0-9]{4,5}\s*(?:khz|mhz)\b").unwrap();
    static ref TIME_SENSITIVE: Regex =
        Regex::new(r"(?i)\b(?:hours|NOTAM|temporary|until|expires|valid)\b").unwrap();
    static ref REFERENCE_SYSTEM: Regex = Regex::new(r"(?i)WGS.?84|decimal.?degree").unwrap();
}

/// Returns `true` if the text seems to contain a coordinate.
pub fn contains_coordinates(text: &str) -> bool {
    DMS.is_match(text)
        || DECIMAL_WITH_HEMISPHERE.is_match(text)
        || ICAO_POSITION.is_match(text)
        || DECIMAL.is_match(text)
}

/// Returns `true` if the text seems to contain an elevation.
pub fn contains_elevations(text: &str) -> bool {
    ELEVATION.is_match(text)
}

/// Returns `true` if the text seems to contain a radio frequency.
pub fn contains_frequencies(text: &str) -> bool {
    FREQUENCY_MHZ.is_match(text) || FREQUENCY_KHZ.is_match(text)
}

/// Returns `true` if the text mentions operating hours, NOTAM or temporary
/// data.
pub fn is_time_sensitive(text: &str) -> bool {
    TIME_SENSITIVE.is_match(text)
}

/// Returns `true` if the text declares WGS84 or decimal degrees as
/// reference.
pub fn declares_reference_system(text: &str) -> bool {
    REFERENCE_SYSTEM.is_match(text)
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Coordinate,
    Elevation,
    Frequency,
}

/// A piece of data found in a text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte range within the text.
    pub span: Range<usize>,
}

impl Token<'_> {
    /// Returns the text without whitespace.
    pub fn compact(&self) -> String {
        self.text.split_whitespace().collect()
    }
}

/// Extracts coordinates, elevations and frequencies from the text.
///
/// Tokens don't overlap. A number that is part of an elevation or frequency
/// is not taken as decimal coordinate and a hemisphere after decimal degrees
/// is dropped. The tokens are ordered by their position in the text.
pub fn tokens(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    let patterns: [(&Regex, TokenKind); 6] = [
        (&*DMS, TokenKind::Coordinate),
        (&*ICAO_POSITION, TokenKind::Coordinate),
        (&*FREQUENCY_MHZ, TokenKind::Frequency),
        (&*FREQUENCY_KHZ, TokenKind::Frequency),
        (&*ELEVATION, TokenKind::Elevation),
        (&*DECIMAL, TokenKind::Coordinate),
    ];

    for (pattern, kind) in patterns {
        for m in pattern.find_iter(text) {
            let span = m.range();
            if !tokens.iter().any(|t: &Token| overlaps(&t.span, &span)) {
                tokens.push(Token {
                    kind,
                    text: m.as_str(),
                    span,
                });
            }
        }
    }

    tokens.sort_by_key(|t| t.span.start);
    tokens
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(contains_coordinates("ARP 53°37'50\"N"));
        assert!(contains_coordinates("53.630556"));
        assert!(!contains_coordinates("RWY 05/23"));

        assert!(contains_elevations("ELEV 53 FT"));
        assert!(!contains_elevations("5 mins"));

        assert!(contains_frequencies("TWR 121.275"));
        assert!(contains_frequencies("HF 5680 kHz"));
        assert!(!contains_frequencies("RWY 05"));

        assert!(is_time_sensitive("Operating hours: H24"));
        assert!(is_time_sensitive("valid until further notice"));
        assert!(!is_time_sensitive("validation"));

        assert!(declares_reference_system("All coordinates refer to WGS-84."));
        assert!(!declares_reference_system("ETRS89"));
    }

    #[test]
    fn numbers_of_data_are_not_coordinates() {
        let tokens = tokens("TWR 118.480, ELEV 16.2 m, ARP 53.63055");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Frequency);
        assert_eq!(tokens[0].text, "118.480");
        assert_eq!(tokens[1].kind, TokenKind::Elevation);
        assert_eq!(tokens[1].text, "16.2 m");
        assert_eq!(tokens[2].kind, TokenKind::Coordinate);
        assert_eq!(tokens[2].text, "53.63055");
    }

    #[test]
    fn decimal_degrees_with_hemisphere() {
        let tokens = tokens("ARP 53.630556°N");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "53.630556");
    }

    #[test]
    fn compact_icao_position() {
        let tokens = tokens("ARP 533750N 0095917E");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].compact(), "533750N0095917E");
    }
}
