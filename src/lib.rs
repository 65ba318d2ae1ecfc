mod engine;
mod flag;
mod formatter;
mod interfaces;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use engine::{engine, set_engine, PhonenumberEngine};
pub use flag::{
    flag_for_region, AttachError, FieldRegistry, FlagLabel, FlagListener, FlagSubscription,
    SubscriptionId, UiComponent,
};
pub use formatter::{
    resolve_initial_country_code, FieldConfig, PhoneNumberField, DEFAULT_FLAG_SIZE,
    UNSET_COUNTRY_CODE,
};
pub use interfaces::{
    ParseNumberError, ParsedNumber, PhoneNumberEngine, PhoneNumberFormat,
};
