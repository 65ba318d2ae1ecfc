mod formatter_tests;

use std::sync::{Arc, Once};

use crate::{FieldConfig, PhoneNumberField, PhonenumberEngine};

static ONCE: Once = Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

pub(crate) fn field_with(config: FieldConfig) -> PhoneNumberField {
    init_logging();
    PhoneNumberField::with_engine(Arc::new(PhonenumberEngine::new()), config)
}

pub(crate) fn field_for_region(region: &str) -> PhoneNumberField {
    field_with(FieldConfig {
        initial_region_code: region.to_owned(),
        ..FieldConfig::default()
    })
}
