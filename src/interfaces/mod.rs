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

use thiserror::Error;

/// Phone number parsing API used to isolate the underlying implementation
/// of the engine and allow different implementations to be swapped in
/// easily. The default implementation is backed by the `phonenumber` crate;
/// a custom one can be installed process-wide with [`crate::set_engine`] or
/// per field with [`crate::PhoneNumberField::with_engine`].
pub trait PhoneNumberEngine: Send + Sync {
    /// Parses `text` as an international phone number. Partial inputs fail
    /// often and cheaply; callers are expected to recover locally.
    fn parse(&self, text: &str) -> Result<ParsedNumber, ParseNumberError>;

    /// Returns whether the parsed number is a valid number for its region.
    fn is_valid(&self, number: &ParsedNumber) -> bool;

    /// Formats the parsed number in the requested format.
    fn format(&self, number: &ParsedNumber, format: PhoneNumberFormat) -> String;

    /// Returns the country calling code for a two-letter region code
    /// (e.g. `1` for "US", `49` for "DE"), or `0` when the region is unknown.
    fn country_code_for_region(&self, region_code: &str) -> i32;

    /// Returns the two-letter region code the parsed number belongs to,
    /// when one can be derived.
    fn region_code_for_number(&self, number: &ParsedNumber) -> Option<String>;
}

/// Opaque parse result. Transient by design: it is recomputed on every text
/// change and never persisted beyond the current text state.
#[derive(Debug, Clone)]
pub struct ParsedNumber(pub(crate) phonenumber::PhoneNumber);

/// Standardized output formats for a parsed phone number.
///
/// The live formatter always works with `International`; the others are
/// available for hosts that render numbers elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneNumberFormat {
    /// `+41446681800` (no separators, always starts with a `+`).
    E164,
    /// `+41 44 668 1800` (the canonical form shown in the input field).
    #[default]
    International,
    /// `044 668 1800` (for dialing within the number's own country).
    National,
    /// `tel:+41-44-668-1800`.
    Rfc3966,
}

/// Failure to parse a text as a phone number. Expected and frequent while a
/// number is being typed, so these never escape the formatting pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseNumberError {
    /// The backing library rejected the text.
    #[error("{0}")]
    Library(String),

    /// Escape hatch for custom [`PhoneNumberEngine`] implementations.
    #[error("{0}")]
    Other(String),
}
