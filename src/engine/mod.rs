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

mod phonenumber_engine;

pub use phonenumber_engine::PhonenumberEngine;

use std::sync::{Arc, OnceLock};

use crate::interfaces::PhoneNumberEngine;

static ENGINE: OnceLock<Arc<dyn PhoneNumberEngine>> = OnceLock::new();

/// Installs a custom [`PhoneNumberEngine`] as the process-wide instance.
///
/// Must be called before the first call to [`engine`]. Once the engine has
/// been accessed it is treated as immutable, so a late override is a no-op
/// (logged as a warning). Fields capture the engine at construction time and
/// never observe overrides that happen afterwards.
pub fn set_engine(engine: Arc<dyn PhoneNumberEngine>) {
    if ENGINE.set(engine).is_err() {
        log::warn!("engine override ignored: the phone number engine is already in use");
    }
}

/// Returns the process-wide [`PhoneNumberEngine`], lazily installing the
/// default [`PhonenumberEngine`] on first access.
pub fn engine() -> Arc<dyn PhoneNumberEngine> {
    ENGINE
        .get_or_init(|| Arc::new(PhonenumberEngine::new()))
        .clone()
}
