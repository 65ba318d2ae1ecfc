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

/// Reformatting state of a field. `reformatting` is the re-entrancy guard:
/// it is raised around the programmatic text replacement so the resulting
/// change event is not mistaken for a user edit, which would otherwise
/// reformat forever.
pub(crate) struct LiveFormatter {
    reformatting: bool,
}

impl LiveFormatter {
    pub fn new() -> Self {
        Self {
            reformatting: false,
        }
    }

    pub fn is_reformatting(&self) -> bool {
        self.reformatting
    }

    pub fn begin_reformat(&mut self) {
        self.reformatting = true;
    }

    pub fn end_reformat(&mut self) {
        self.reformatting = false;
    }
}

/// Converts a caret position recorded as "characters from the end" back into
/// an absolute offset against the replacement text, clamped to `[0, len]`.
///
/// Offset-from-end survives reformatting because digits are typically typed
/// or deleted near the caret while separators are inserted and removed in
/// front of it. It is a heuristic: a caret in the middle of the number may
/// land next to a shifted separator rather than on the exact same digit.
pub(crate) fn restore_caret_from_end(new_text: &str, chars_from_end: usize) -> usize {
    let len = new_text.chars().count();
    len.saturating_sub(chars_from_end)
}
