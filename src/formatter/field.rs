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

use std::borrow::Cow;
use std::sync::Arc;

use log::trace;

use super::resolver::{resolve_initial_country_code, UNSET_COUNTRY_CODE};
use super::watcher::{restore_caret_from_end, LiveFormatter};
use crate::engine;
use crate::flag::{flag_for_region, FlagListener, FlagNotifier, SubscriptionId};
use crate::interfaces::{ParsedNumber, PhoneNumberEngine, PhoneNumberFormat};

const PLUS_SIGN: &str = "+";

/// Default size hint for region indicators, in points. Display targets are
/// free to interpret it for whatever medium they render to.
pub const DEFAULT_FLAG_SIZE: f32 = 16.0;

/// Initial configuration of a [`PhoneNumberField`], the analogue of the
/// declarative attribute set of a UI toolkit.
///
/// `network_region` and `locale_region` are supplied by the host (telephony
/// stack and default locale respectively); both may be left empty.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Explicit initial country calling code; takes precedence over every
    /// region below. [`UNSET_COUNTRY_CODE`] when not configured.
    pub initial_country_code: i32,
    /// Explicit initial region code (e.g. "US"); empty when not configured.
    pub initial_region_code: String,
    /// Region reported by the network, if any.
    pub network_region: String,
    /// Region of the default locale, if any.
    pub locale_region: String,
    /// Whether the host should render a region indicator for this field.
    pub show_flag: bool,
    /// Size hint for the rendered region indicator.
    pub flag_size: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            initial_country_code: UNSET_COUNTRY_CODE,
            initial_region_code: String::new(),
            network_region: String::new(),
            locale_region: String::new(),
            show_flag: true,
            flag_size: DEFAULT_FLAG_SIZE,
        }
    }
}

/// A phone-number input field model that keeps its text formatted as an
/// international phone number while it is being edited.
///
/// The host UI owns the real text widget and forwards every text change
/// through [`edit`](Self::edit); the field reparses the text, rewrites it to
/// the canonical international format, repositions the caret, and notifies
/// subscribed display targets of the current region indicator.
///
/// The caret is measured in characters before it. Caret restoration after a
/// reformat preserves the offset from the *end* of the text, which is exact
/// for edits at the end (the common case) but only approximate for edits in
/// the middle of the number.
pub struct PhoneNumberField {
    engine: Arc<dyn PhoneNumberEngine>,
    formatter: LiveFormatter,
    notifier: FlagNotifier,
    text: String,
    caret: usize,
    initial_country_code: i32,
    show_flag: bool,
    flag_size: f32,
}

impl PhoneNumberField {
    /// Creates a field using the process-wide engine (see [`crate::engine`]).
    pub fn new(config: FieldConfig) -> Self {
        Self::with_engine(engine::engine(), config)
    }

    /// Creates a field with an explicit engine instance.
    pub fn with_engine(engine: Arc<dyn PhoneNumberEngine>, config: FieldConfig) -> Self {
        let initial_country_code = resolve_initial_country_code(
            engine.as_ref(),
            config.initial_country_code,
            &config.initial_region_code,
            &config.network_region,
            &config.locale_region,
        );
        let mut field = Self {
            engine,
            formatter: LiveFormatter::new(),
            notifier: FlagNotifier::new(),
            text: String::new(),
            caret: 0,
            initial_country_code,
            show_flag: config.show_flag,
            flag_size: config.flag_size,
        };
        // An unresolved chain leaves the field empty rather than seeding it
        // with a bogus "+-1" prefix.
        if initial_country_code != UNSET_COUNTRY_CODE {
            field.set_country_code(initial_country_code);
        }
        field
    }

    /// The country calling code the field was initialized with, or
    /// [`UNSET_COUNTRY_CODE`] when the fallback chain did not resolve.
    pub fn initial_country_code(&self) -> i32 {
        self.initial_country_code
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret offset, counted in characters before the caret.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Whether the host should render a region indicator for this field.
    pub fn shows_flag(&self) -> bool {
        self.show_flag
    }

    pub fn flag_size(&self) -> f32 {
        self.flag_size
    }

    /// Entry point for user edits: the host UI calls this with the full new
    /// text and caret position after every keystroke.
    pub fn edit(&mut self, text: impl Into<String>, caret: usize) {
        self.commit_text(text.into(), caret);
    }

    /// Clears the text and sets it to `"+<country_code>"` with the caret at
    /// the end. Accepts any integer; a code with no assigned region is still
    /// usable as a dialing prefix.
    pub fn set_country_code(&mut self, country_code: i32) {
        let mut buf = itoa::Buffer::new();
        let text = fast_cat::concat_str!(PLUS_SIGN, buf.format(country_code));
        let caret = text.chars().count();
        self.commit_text(text, caret);
    }

    /// Clears the text and sets it to `"+<code>"`, where `<code>` is the
    /// country calling code for the given region (case-insensitive).
    pub fn set_region_code(&mut self, region_code: &str) {
        let code = self
            .engine
            .country_code_for_region(&region_code.to_uppercase());
        self.set_country_code(code);
    }

    /// Returns whether the current text is a valid international phone
    /// number. Parse failures are treated as "not valid", never propagated.
    pub fn is_valid_international_number(&self) -> bool {
        self.engine
            .parse(&self.text)
            .map(|number| self.engine.is_valid(&number))
            .unwrap_or(false)
    }

    /// Parses and formats `number` as an international phone number and sets
    /// it as the text. A missing leading `+` is added before parsing.
    ///
    /// Returns `true` when the number was parsed and the canonical format
    /// was set, `false` when parsing failed and the normalized input was set
    /// as-is. The text is updated exactly once on both paths; callers branch
    /// on the return value rather than catching an error.
    pub fn set_text_and_format_as_international(&mut self, number: &str) -> bool {
        let normalized = if number.starts_with(PLUS_SIGN) {
            Cow::Borrowed(number)
        } else {
            Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, number))
        };
        let attempt = self
            .engine
            .parse(&normalized)
            .map(|parsed| self.engine.format(&parsed, PhoneNumberFormat::International));
        let succeeded = attempt.is_ok();
        let text = attempt.unwrap_or_else(|_| normalized.into_owned());
        let caret = text.chars().count();
        self.commit_text(text, caret);
        succeeded
    }

    /// Recomputes the region indicator for the current text. Absent when the
    /// text does not parse or its region has no two-letter code.
    pub fn current_flag(&self) -> Option<String> {
        let parsed = self.engine.parse(&self.text).ok()?;
        let region = self.engine.region_code_for_number(&parsed)?;
        flag_for_region(&region)
    }

    /// Subscribes a display target to region-indicator updates. The listener
    /// is immediately invoked with the current indicator so a freshly
    /// attached target never shows stale state.
    pub fn subscribe_flag(&mut self, mut listener: FlagListener) -> SubscriptionId {
        let current = self.current_flag();
        listener(current.as_deref());
        self.notifier.add(listener)
    }

    /// Removes a subscription. Returns `false` when the id is not active.
    pub fn unsubscribe_flag(&mut self, id: SubscriptionId) -> bool {
        self.notifier.remove(id)
    }

    #[cfg(test)]
    pub(crate) fn flag_listener_count(&self) -> usize {
        self.notifier.len()
    }

    /// Programmatic text replacement. Every path that sets text goes through
    /// here so the change handling below runs exactly as it would for a
    /// host-UI text-change event.
    fn commit_text(&mut self, text: String, caret: usize) {
        self.text = text;
        self.caret = caret.min(self.text.chars().count());
        self.on_text_changed();
    }

    fn on_text_changed(&mut self) {
        if self.formatter.is_reformatting() {
            trace!("ignoring text change caused by our own reformat");
            return;
        }
        let parsed = match self.engine.parse(&self.text) {
            Ok(parsed) => {
                let formatted = self.engine.format(&parsed, PhoneNumberFormat::International);
                if formatted != self.text {
                    let chars_from_end = self.text.chars().count() - self.caret;
                    let caret = restore_caret_from_end(&formatted, chars_from_end);
                    trace!("reformatting {:?} -> {:?}", self.text, formatted);
                    self.formatter.begin_reformat();
                    self.commit_text(formatted, caret);
                    self.formatter.end_reformat();
                }
                Some(parsed)
            }
            Err(err) => {
                trace!("leaving text unformatted: {}", err);
                None
            }
        };
        self.publish_flag(parsed.as_ref());
    }

    fn publish_flag(&mut self, parsed: Option<&ParsedNumber>) {
        let flag = parsed
            .and_then(|number| self.engine.region_code_for_number(number))
            .and_then(|region| flag_for_region(&region));
        self.notifier.publish(flag.as_deref());
    }
}
