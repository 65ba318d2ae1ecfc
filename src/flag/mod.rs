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

mod errors;
mod notifier;
mod registry;

pub use errors::AttachError;
pub use notifier::{FlagListener, SubscriptionId};
pub use registry::{FieldRegistry, FlagLabel, FlagSubscription, UiComponent};

pub(crate) use notifier::FlagNotifier;

const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Maps a two-letter region code to its emoji flag by composing two regional
/// indicator symbols (e.g. "US" -> 🇺🇸). Case-insensitive. Returns `None` for
/// anything that is not exactly two ASCII letters.
pub fn flag_for_region(region_code: &str) -> Option<String> {
    let mut letters = region_code.chars();
    let (first, second) = (letters.next()?, letters.next()?);
    if letters.next().is_some() {
        return None;
    }
    let mut flag = String::with_capacity(8);
    for letter in [first, second] {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let symbol =
            char::from_u32(REGIONAL_INDICATOR_OFFSET + letter.to_ascii_uppercase() as u32)?;
        flag.push(symbol);
    }
    Some(flag)
}

#[cfg(test)]
mod tests {
    use super::flag_for_region;

    #[test]
    fn maps_known_regions() {
        assert_eq!(flag_for_region("US").as_deref(), Some("\u{1F1FA}\u{1F1F8}"));
        assert_eq!(flag_for_region("DE").as_deref(), Some("\u{1F1E9}\u{1F1EA}"));
        assert_eq!(flag_for_region("br").as_deref(), Some("\u{1F1E7}\u{1F1F7}"));
    }

    #[test]
    fn rejects_non_regions() {
        assert_eq!(flag_for_region(""), None);
        assert_eq!(flag_for_region("U"), None);
        assert_eq!(flag_for_region("USA"), None);
        assert_eq!(flag_for_region("U1"), None);
        assert_eq!(flag_for_region("++"), None);
    }
}
