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

/// Misconfigured display-target wiring. These are programmer errors: they
/// surface loudly at attach time and are not meant to be recovered from at
/// runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    #[error("no component is registered under id `{0}`")]
    SourceNotFound(String),

    #[error("component `{0}` is not a watchable phone number field")]
    NotWatchable(String),
}
