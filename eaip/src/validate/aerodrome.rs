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

use chrono::{DateTime, Datelike, Utc};
use log::trace;
use world_magnetic_model::uom::si::angle::degree;
use world_magnetic_model::uom::si::f32::{Angle, Length};
use world_magnetic_model::uom::si::length::meter;
use world_magnetic_model::GeomagneticField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

/// Maximum deviation in degrees of a declared magnetic variation from the
/// World Magnetic Model.
const MAX_DECLINATION_DEVIATION: f64 = 5.0;

/// The fields of an aerodrome as published in AD 2.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AerodromeData {
    pub icao_code: Option<String>,
    /// The aerodrome reference point.
    pub coordinates: Option<String>,
    pub elevation: Option<String>,
    pub runways: Vec<String>,
    pub frequencies: Vec<String>,
    pub magnetic_variation: Option<String>,
}

/// Validations of the single fields of an aerodrome.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidatedFields {
    pub icao_code: Option<Validation<String>>,
    pub coordinates: Option<Validation<ParsedCoordinate>>,
    pub elevation: Option<Validation<Elevation>>,
    pub magnetic_variation: Option<Validation<MagneticVariation>>,
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AerodromeValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub validated_fields: ValidatedFields,
}

impl AerodromeValidation {
    fn merge<T>(&mut self, validation: &Validation<T>) {
        self.is_valid &= validation.is_valid;
        self.errors.extend(validation.errors.iter().cloned());
        self.warnings.extend(validation.warnings.iter().cloned());
    }

    fn merge_indexed<T>(&mut self, label: &str, index: usize, validation: &Validation<T>) {
        if !validation.is_valid {
            self.is_valid = false;
            self.errors.push(format!(
                "{label} {}: {}",
                index + 1,
                validation.errors.join(", ")
            ));
        }
        self.warnings.extend(
            validation
                .warnings
                .iter()
                .map(|w| format!("{label} {}: {w}", index + 1)),
        );
    }
}

/// Validates all fields of an aerodrome.
///
/// The aerodrome is valid if all present fields are valid. Errors of
/// runways and frequencies are prefixed with their position in the list.
pub fn validate_aerodrome_data(data: &AerodromeData) -> AerodromeValidation {
    validate_aerodrome_data_at(data, Utc::now())
}

/// Validates all fields of an aerodrome at the given time.
///
/// If the reference point is given in ICAO format together with a magnetic
/// variation, the variation is compared with the declination of the World
/// Magnetic Model at the reference point and time.
pub fn validate_aerodrome_data_at(data: &AerodromeData, now: DateTime<Utc>) -> AerodromeValidation {
    let mut result = AerodromeValidation {
        is_valid: true,
        ..Default::default()
    };

    if let Some(icao_code) = data.icao_code.as_deref() {
        let validation = validate_icao_identifier(icao_code, IdentifierKind::Airport);
        result.merge(&validation);
        result.validated_fields.icao_code = Some(validation);
    }

    if let Some(coordinates) = data.coordinates.as_deref() {
        let validation = validate_coordinates(coordinates);
        result.merge(&validation);
        result.validated_fields.coordinates = Some(validation);
    }

    if let Some(elevation) = data.elevation.as_deref() {
        let validation = validate_elevation(elevation);
        result.merge(&validation);
        result.validated_fields.elevation = Some(validation);
    }

    for (i, runway) in data.runways.iter().enumerate() {
        result.merge_indexed("Runway", i, &validate_runway_designation(runway));
    }

    for (i, frequency) in data.frequencies.iter().enumerate() {
        result.merge_indexed("Frequency", i, &validate_frequency(frequency));
    }

    if let Some(magnetic_variation) = data.magnetic_variation.as_deref() {
        let validation = validate_magnetic_variation(magnetic_variation);
        result.merge(&validation);
        result.validated_fields.magnetic_variation = Some(validation);
    }

    if let Some(warning) = check_declination(&result.validated_fields, now) {
        result.warnings.push(warning);
    }

    result
}

/// Compares the declared magnetic variation with the World Magnetic Model.
fn check_declination(fields: &ValidatedFields, now: DateTime<Utc>) -> Option<String> {
    let position = fields
        .coordinates
        .as_ref()
        .and_then(|v| v.value)
        .and_then(|c| c.position())?;
    let variation = fields.magnetic_variation.as_ref().and_then(|v| v.value)?;
    let height = fields
        .elevation
        .as_ref()
        .and_then(|v| v.value)
        .map(|e| e.meters())
        .unwrap_or_default();

    let date = now.date_naive();
    let Some(date) = time::Month::try_from(date.month() as u8)
        .ok()
        .and_then(|month| time::Date::from_calendar_date(date.year(), month, date.day() as u8).ok())
    else {
        trace!("declination check skipped: date {date} is not representable");
        return None;
    };

    let field = match GeomagneticField::new(
        Length::new::<meter>(height as f32),
        Angle::new::<degree>(position.latitude as f32),
        Angle::new::<degree>(position.longitude as f32),
        date,
    ) {
        Ok(field) => field,
        Err(_) => {
            trace!("declination check skipped: {date} is outside the model's validity");
            return None;
        }
    };

    let declination = field.declination().get::<degree>() as f64;
    let deviation = (variation.signed() - declination).abs();

    (deviation > MAX_DECLINATION_DEVIATION).then(|| {
        format!(
            "Magnetic variation {variation} deviates from the World Magnetic Model declination of {:.1}° by {deviation:.1}°",
            declination
        )
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn eddh() -> AerodromeData {
        AerodromeData {
            icao_code: Some("EDDH".to_string()),
            coordinates: Some("533750N0095917E".to_string()),
            elevation: Some("53 ft".to_string()),
            runways: vec!["05".to_string(), "23".to_string(), "15".to_string(), "33".to_string()],
            frequencies: vec!["121.275".to_string(), "118.480".to_string()],
            magnetic_variation: Some("3°E".to_string()),
        }
    }

    #[test]
    fn valid_aerodrome() {
        let result = validate_aerodrome_data(&eddh());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.validated_fields.coordinates.is_some());
    }

    #[test]
    fn prefixes_list_errors() {
        let mut data = eddh();
        data.runways.push("39".to_string());
        data.frequencies.push("99.000".to_string());

        let result = validate_aerodrome_data(&data);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Runway 5: Runway direction must be between 01 and 36",
                "Frequency 3: Frequency outside aviation bands or invalid format"
            ]
        );
    }

    #[test]
    fn collects_field_errors() {
        let data = AerodromeData {
            icao_code: Some("EDD".to_string()),
            elevation: Some("high".to_string()),
            ..Default::default()
        };

        let result = validate_aerodrome_data(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.validated_fields.coordinates.is_none());
    }

    #[test]
    fn declination_needs_a_position() {
        let data = AerodromeData {
            coordinates: Some("53.63055".to_string()),
            magnetic_variation: Some("25W".to_string()),
            ..Default::default()
        };

        let result = validate_aerodrome_data(&data);
        assert!(result.is_valid);
        assert!(result.warnings.iter().all(|w| !w.contains("World Magnetic Model")));
    }

    #[test]
    fn declination_deviates_from_model() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

        let result = validate_aerodrome_data_at(&eddh(), now);
        assert!(result.warnings.is_empty());

        let mut data = eddh();
        data.magnetic_variation = Some("25W".to_string());

        let result = validate_aerodrome_data_at(&data, now);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0]
            .starts_with("Magnetic variation 25°W deviates from the World Magnetic Model"));
    }
}
