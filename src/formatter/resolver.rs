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

use log::trace;

use crate::interfaces::PhoneNumberEngine;

/// Sentinel for "no country calling code available".
pub const UNSET_COUNTRY_CODE: i32 = -1;

/// Resolves the initial country calling code for a field from an ordered
/// fallback chain, first success wins:
///
/// 1. `explicit_code`, when positive, is used verbatim.
/// 2. `explicit_region`, when non-empty, is looked up (case-normalized).
/// 3. `network_region` (e.g. from the telephony stack), skipped when the
///    lookup yields the library's "unknown" sentinel (0).
/// 4. `locale_region` (the default locale's country).
///
/// Never fails: a chain that resolves to no positive code yields
/// [`UNSET_COUNTRY_CODE`], which callers must treat as "no country code
/// available" rather than an error.
pub fn resolve_initial_country_code(
    engine: &dyn PhoneNumberEngine,
    explicit_code: i32,
    explicit_region: &str,
    network_region: &str,
    locale_region: &str,
) -> i32 {
    let code = if explicit_code > 0 {
        explicit_code
    } else if !explicit_region.is_empty() {
        engine.country_code_for_region(&explicit_region.to_uppercase())
    } else {
        match engine.country_code_for_region(&network_region.to_uppercase()) {
            0 => engine.country_code_for_region(&locale_region.to_uppercase()),
            code => code,
        }
    };
    if code > 0 {
        code
    } else {
        trace!("initial country code did not resolve, leaving it unset");
        UNSET_COUNTRY_CODE
    }
}
