// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Capability-gated listener registration.
//!
//! The moderation subsystem is an optional collaborator: a deployment may
//! run workspaces without content moderation at all. Instead of probing for
//! the subsystem at runtime, the host process declares its capabilities at
//! startup and listener registration consults that declaration. Without the
//! [`Capability::ModerationTransitions`] capability, registration is a
//! logged no-op and the dispatcher stays empty.
//!
//! The [`TransitionDispatcher`] is deliberately minimal: it is the wiring
//! surface between the moderation subsystem's notifications and registered
//! listeners, not a general event bus.

use crate::engine::Replicator;
use crate::error::Result;
use crate::listener::{TransitionEvent, TransitionListener, TransitionOutcome};
use std::collections::HashSet;
use tracing::{debug, info};

/// A capability the host process may declare at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The moderation subsystem is present and delivers transition
    /// notifications.
    ModerationTransitions,
}

/// The set of capabilities declared by the host process.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    enabled: HashSet<Capability>,
}

impl Capabilities {
    /// No capabilities declared.
    pub fn none() -> Self {
        Self::default()
    }

    /// A set containing a single capability.
    pub fn with(capability: Capability) -> Self {
        let mut caps = Self::default();
        caps.enable(capability);
        caps
    }

    /// Declare a capability.
    pub fn enable(&mut self, capability: Capability) {
        self.enabled.insert(capability);
    }

    /// Check whether a capability was declared.
    pub fn has(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }
}

/// Dispatches moderation-transition notifications to registered listeners.
///
/// Dispatch is sequential within one notification: listeners run one after
/// another in registration order, each as a single awaited call. The
/// per-listener outcomes are returned to the caller (the workflow that
/// initiated the transition), which consumes any revert directives.
pub struct TransitionDispatcher<R: Replicator> {
    listeners: Vec<TransitionListener<R>>,
}

impl<R: Replicator> TransitionDispatcher<R> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn subscribe(&mut self, listener: TransitionListener<R>) {
        self.listeners.push(listener);
    }

    /// Deliver one transition notification to every registered listener.
    ///
    /// Returns the outcomes in registration order. An error from one
    /// listener aborts dispatch; listeners registered after it do not see
    /// the event.
    pub async fn dispatch(&self, event: &TransitionEvent) -> Result<Vec<TransitionOutcome>> {
        debug!(
            entity_kind = event.entity.kind(),
            before = %event.state_before,
            after = %event.state_after,
            listeners = self.listeners.len(),
            "Dispatching moderation transition"
        );

        let mut outcomes = Vec::with_capacity(self.listeners.len());
        for listener in &self.listeners {
            outcomes.push(listener.handle_transition(event).await?);
        }
        Ok(outcomes)
    }
}

impl<R: Replicator> Default for TransitionDispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Replicator> TransitionListener<R> {
    /// Register this listener with `dispatcher` if the moderation subsystem
    /// is available.
    ///
    /// Returns whether the listener was registered. Without the
    /// [`Capability::ModerationTransitions`] capability the listener is
    /// dropped and nothing is wired.
    pub fn register(self, dispatcher: &mut TransitionDispatcher<R>, caps: &Capabilities) -> bool {
        if !caps.has(Capability::ModerationTransitions) {
            info!("Moderation transitions unavailable, workspace merge listener not registered");
            return false;
        }
        dispatcher.subscribe(self);
        debug!("Workspace merge listener registered for moderation transitions");
        true
    }
}
