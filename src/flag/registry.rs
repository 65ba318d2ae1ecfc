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

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::error;

use super::errors::AttachError;
use super::notifier::{FlagListener, SubscriptionId};
use crate::formatter::PhoneNumberField;

/// A component that can live in a [`FieldRegistry`]. The single method is a
/// capability check: display targets resolve the component they watch
/// through it instead of probing concrete types.
pub trait UiComponent {
    /// Returns the watchable phone-number-field capability of this
    /// component, when it has one.
    fn as_phone_field(&mut self) -> Option<&mut PhoneNumberField> {
        None
    }
}

impl UiComponent for PhoneNumberField {
    fn as_phone_field(&mut self) -> Option<&mut PhoneNumberField> {
        Some(self)
    }
}

/// Handle for one display-target subscription, returned by
/// [`FieldRegistry::attach_flag_target`] and consumed by
/// [`FieldRegistry::detach`].
#[derive(Debug)]
pub struct FlagSubscription {
    source: String,
    id: SubscriptionId,
}

impl FlagSubscription {
    /// Id of the field this subscription is attached to.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Registry of realized components, keyed by logical id. This is the
/// late-binding seam between input fields and the display targets that
/// declared an interest in them: targets name a source id up front and the
/// binding is resolved here at attach time.
#[derive(Default)]
pub struct FieldRegistry {
    components: HashMap<String, Rc<RefCell<dyn UiComponent>>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under a logical id, replacing any previous
    /// component with the same id.
    pub fn register(&mut self, id: impl Into<String>, component: Rc<RefCell<dyn UiComponent>>) {
        self.components.insert(id.into(), component);
    }

    /// Removes a component. Subscriptions already attached to it keep
    /// working; tearing them down is the owner's responsibility.
    pub fn unregister(&mut self, id: &str) -> Option<Rc<RefCell<dyn UiComponent>>> {
        self.components.remove(id)
    }

    /// Attaches a display-target listener to the field registered under
    /// `source_id`. The listener immediately receives the field's current
    /// region indicator.
    ///
    /// Fails when no component is registered under the id or the component
    /// is not a watchable phone number field. Both indicate broken wiring on
    /// the caller's side and should be treated as fatal.
    pub fn attach_flag_target(
        &self,
        source_id: &str,
        listener: FlagListener,
    ) -> Result<FlagSubscription, AttachError> {
        let mut component = self.resolve(source_id)?.borrow_mut();
        let field = component
            .as_phone_field()
            .ok_or_else(|| AttachError::NotWatchable(source_id.to_owned()))?;
        let id = field.subscribe_flag(listener);
        Ok(FlagSubscription {
            source: source_id.to_owned(),
            id,
        })
    }

    /// Tears down a subscription created by
    /// [`attach_flag_target`](Self::attach_flag_target).
    pub fn detach(&self, subscription: FlagSubscription) -> Result<(), AttachError> {
        let mut component = self.resolve(&subscription.source)?.borrow_mut();
        let field = component
            .as_phone_field()
            .ok_or_else(|| AttachError::NotWatchable(subscription.source.clone()))?;
        field.unsubscribe_flag(subscription.id);
        Ok(())
    }

    fn resolve(&self, id: &str) -> Result<&Rc<RefCell<dyn UiComponent>>, AttachError> {
        self.components.get(id).ok_or_else(|| {
            error!("no component registered under id `{}`", id);
            AttachError::SourceNotFound(id.to_owned())
        })
    }
}

/// Minimal display target: renders the emoji flag of the field it watches
/// as its text. The watched field is named by id at construction and
/// resolved against the registry when the label is attached, mirroring the
/// attach/detach lifecycle of a UI component.
pub struct FlagLabel {
    watched_field: String,
    current: Rc<RefCell<Option<String>>>,
    subscription: Option<FlagSubscription>,
}

impl FlagLabel {
    pub fn new(watched_field: impl Into<String>) -> Self {
        Self {
            watched_field: watched_field.into(),
            current: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    /// Starts watching the named field. Re-attaching first drops the
    /// previous subscription, so at most one is active per label.
    pub fn on_attached(&mut self, registry: &FieldRegistry) -> Result<(), AttachError> {
        self.on_detached(registry);
        let slot = Rc::clone(&self.current);
        let subscription = registry.attach_flag_target(
            &self.watched_field,
            Box::new(move |flag| {
                *slot.borrow_mut() = flag.map(str::to_owned);
            }),
        )?;
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Stops watching. Safe to call when not attached; a source that has
    /// already been unregistered is ignored.
    pub fn on_detached(&mut self, registry: &FieldRegistry) {
        if let Some(subscription) = self.subscription.take() {
            let _ = registry.detach(subscription);
        }
    }

    /// The last region indicator this label received, if any.
    pub fn flag(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

impl UiComponent for FlagLabel {}
