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

pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    pub fn br() -> &'static str {
        "BR"
    }

    pub fn ch() -> &'static str {
        "CH"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn us() -> &'static str {
        "US"
    }
}
