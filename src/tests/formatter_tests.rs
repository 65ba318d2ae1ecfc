use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::i18n::RegionCode;
use crate::interfaces::{ParseNumberError, ParsedNumber, PhoneNumberEngine, PhoneNumberFormat};
use crate::{FieldConfig, PhoneNumberField, PhonenumberEngine, UNSET_COUNTRY_CODE};

use super::{field_for_region, field_with, init_logging};

#[test]
fn initial_text_comes_from_region_code() {
    let field = field_for_region(RegionCode::ch());
    assert_eq!(field.text(), "+41");
    assert_eq!(field.caret(), 3);
    assert_eq!(field.initial_country_code(), 41);
}

#[test]
fn explicit_initial_code_takes_precedence() {
    let field = field_with(FieldConfig {
        initial_country_code: 49,
        initial_region_code: RegionCode::us().to_owned(),
        ..FieldConfig::default()
    });
    assert_eq!(field.text(), "+49");
    assert_eq!(field.initial_country_code(), 49);
}

#[test]
fn unresolved_initial_code_leaves_field_empty() {
    let field = field_with(FieldConfig::default());
    assert_eq!(field.text(), "");
    assert_eq!(field.caret(), 0);
    assert_eq!(field.initial_country_code(), UNSET_COUNTRY_CODE);
}

#[test]
fn set_country_code_accepts_any_integer() {
    let mut field = field_with(FieldConfig::default());
    field.set_country_code(999);
    assert_eq!(field.text(), "+999");
    assert_eq!(field.caret(), 4);
}

#[test]
fn set_region_code_resolves_through_the_engine() {
    let mut field = field_with(FieldConfig::default());
    field.set_region_code("de");
    assert_eq!(field.text(), "+49");
    assert_eq!(field.caret(), 3);
}

#[test]
fn format_as_international_round_trip() {
    let mut field = field_with(FieldConfig::default());
    assert!(field.set_text_and_format_as_international("16505551234"));
    assert_eq!(field.text(), "+1 650-555-1234");
    assert_eq!(field.caret(), field.text().chars().count());
}

#[test]
fn format_as_international_keeps_unparseable_input() {
    let mut field = field_with(FieldConfig::default());
    assert!(!field.set_text_and_format_as_international("not a number"));
    assert_eq!(field.text(), "+not a number");
}

#[test]
fn format_as_international_keeps_existing_plus_sign() {
    let mut field = field_with(FieldConfig::default());
    assert!(field.set_text_and_format_as_international("+16505551234"));
    assert_eq!(field.text(), "+1 650-555-1234");
}

#[test]
fn reformatting_is_idempotent() {
    let mut field = field_with(FieldConfig::default());
    assert!(field.set_text_and_format_as_international("16505551234"));
    let formatted = field.text().to_owned();
    field.edit(formatted.clone(), formatted.chars().count());
    assert_eq!(field.text(), formatted);
}

#[test]
fn caret_stays_at_end_when_typing_at_end() {
    let mut field = field_with(FieldConfig::default());
    field.edit("+1 650", 6);
    assert_eq!(field.caret(), field.text().chars().count());

    // Type one more digit at the end; separators the reformat inserts must
    // not push the caret away from the end.
    let typed = format!("{}5", field.text());
    let caret = typed.chars().count();
    field.edit(typed, caret);
    assert!(field.text().ends_with('5'));
    assert_eq!(field.caret(), field.text().chars().count());
}

#[test]
fn full_number_is_reformatted_with_caret_at_end() {
    let mut field = field_with(FieldConfig::default());
    field.edit("+16505551234", 12);
    assert_eq!(field.text(), "+1 650-555-1234");
    assert_eq!(field.caret(), 15);
}

#[test]
fn validity_follows_the_current_text() {
    let mut field = field_with(FieldConfig::default());
    assert!(!field.is_valid_international_number());

    assert!(field.set_text_and_format_as_international("16505551234"));
    assert!(field.is_valid_international_number());

    field.edit("+1 650", 6);
    assert!(!field.is_valid_international_number());

    // Unparseable text is "not valid", never an error.
    field.edit("garbage", 7);
    assert!(!field.is_valid_international_number());
}

/// Engine whose canonical format is different on every call. Without the
/// re-entrancy guard this would reformat forever on the first keystroke.
struct CascadingEngine {
    template: ParsedNumber,
    formats: AtomicUsize,
}

impl CascadingEngine {
    fn new() -> Self {
        let template = PhonenumberEngine::new().parse("+16505551234").unwrap();
        Self {
            template,
            formats: AtomicUsize::new(0),
        }
    }
}

impl PhoneNumberEngine for CascadingEngine {
    fn parse(&self, _text: &str) -> Result<ParsedNumber, ParseNumberError> {
        Ok(self.template.clone())
    }

    fn is_valid(&self, _number: &ParsedNumber) -> bool {
        true
    }

    fn format(&self, _number: &ParsedNumber, _format: PhoneNumberFormat) -> String {
        format!("format {}", self.formats.fetch_add(1, Ordering::SeqCst))
    }

    fn country_code_for_region(&self, _region_code: &str) -> i32 {
        0
    }

    fn region_code_for_number(&self, _number: &ParsedNumber) -> Option<String> {
        None
    }
}

#[test]
fn one_keystroke_triggers_at_most_one_replacement() {
    init_logging();
    let engine = Arc::new(CascadingEngine::new());
    let mut field = PhoneNumberField::with_engine(engine.clone(), FieldConfig::default());

    field.edit("123", 3);

    assert_eq!(field.text(), "format 0");
    assert_eq!(engine.formats.load(Ordering::SeqCst), 1);
}
