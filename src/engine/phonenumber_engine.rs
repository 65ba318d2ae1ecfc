// Copyright (C) 2025 The Phonemoji Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use phonenumber::{metadata, Mode};

use crate::interfaces::{ParseNumberError, ParsedNumber, PhoneNumberEngine, PhoneNumberFormat};

/// Default [`PhoneNumberEngine`] backed by the `phonenumber` crate, which
/// carries the compiled libphonenumber metadata.
#[derive(Debug, Default)]
pub struct PhonenumberEngine;

impl PhonenumberEngine {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberEngine for PhonenumberEngine {
    fn parse(&self, text: &str) -> Result<ParsedNumber, ParseNumberError> {
        // No default region: the field always carries a leading '+', so the
        // country code must come from the text itself.
        match phonenumber::parse(None, text) {
            Ok(number) => Ok(ParsedNumber(number)),
            Err(err) => Err(ParseNumberError::Library(err.to_string())),
        }
    }

    fn is_valid(&self, number: &ParsedNumber) -> bool {
        phonenumber::is_valid(&number.0)
    }

    fn format(&self, number: &ParsedNumber, format: PhoneNumberFormat) -> String {
        let mode = match format {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::Rfc3966 => Mode::Rfc3966,
        };
        number.0.format().mode(mode).to_string()
    }

    fn country_code_for_region(&self, region_code: &str) -> i32 {
        metadata::DATABASE
            .by_id(region_code.to_uppercase().as_str())
            .map(|metadata| i32::from(metadata.country_code()))
            .unwrap_or(0)
    }

    fn region_code_for_number(&self, number: &ParsedNumber) -> Option<String> {
        number.0.country().id().map(|id| id.as_ref().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::RegionCode;
    use crate::interfaces::{PhoneNumberEngine, PhoneNumberFormat};

    use super::PhonenumberEngine;

    #[test]
    fn country_code_lookup() {
        let engine = PhonenumberEngine::new();
        assert_eq!(engine.country_code_for_region(RegionCode::us()), 1);
        assert_eq!(engine.country_code_for_region(RegionCode::de()), 49);
        // Lookup is case-normalized.
        assert_eq!(engine.country_code_for_region("ch"), 41);
        assert_eq!(engine.country_code_for_region(RegionCode::get_unknown()), 0);
        assert_eq!(engine.country_code_for_region(""), 0);
    }

    #[test]
    fn parse_and_format_international() {
        let engine = PhonenumberEngine::new();
        let number = engine.parse("+16505551234").unwrap();
        assert!(engine.is_valid(&number));
        assert_eq!(
            engine.format(&number, PhoneNumberFormat::International),
            "+1 650-555-1234"
        );
        assert_eq!(
            engine.format(&number, PhoneNumberFormat::E164),
            "+16505551234"
        );
        assert_eq!(
            engine.region_code_for_number(&number).as_deref(),
            Some(RegionCode::us())
        );
    }

    #[test]
    fn parse_rejects_non_numbers() {
        let engine = PhonenumberEngine::new();
        assert!(engine.parse("+not a number").is_err());
        assert!(engine.parse("").is_err());
    }
}
