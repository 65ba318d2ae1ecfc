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

/// Callback a display target supplies at subscription time. Receives the
/// current region indicator, or `None` when the text no longer yields one.
pub type FlagListener = Box<dyn FnMut(Option<&str>)>;

/// Identifies one active subscription on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Pushes region-indicator updates to the listeners subscribed to a field.
/// Runs on the UI thread; delivery is synchronous and in subscription order.
pub(crate) struct FlagNotifier {
    listeners: Vec<(SubscriptionId, FlagListener)>,
    next_id: u64,
}

impl FlagNotifier {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, listener: FlagListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, flag: Option<&str>) {
        for (_, listener) in &mut self.listeners {
            listener(flag);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
