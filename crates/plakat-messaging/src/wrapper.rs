// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Null-safe forwarding shim between the presentation engine and the
// host-supplied messaging delegate.
//
// Calls through the wrapper are safe no matter whether a delegate exists,
// whether it is still alive, and whichever subset of the optional callbacks
// it declares. Forwarders return a bool so the engine can tell "nobody was
// listening" from "the delegate handled it"; neither case is an error.

use std::sync::{Arc, Weak};

use tracing::trace;

use plakat_core::{InAppMessage, MessageAction};

use crate::delegate::{DelegateEvent, MessagingDelegate};
use crate::surface::PresentingSurface;

/// Wraps the host's optional `MessagingDelegate` behind a weak handle.
///
/// The handle never extends the delegate's lifetime: the host owns the
/// delegate, and once it drops the owning `Arc` every forwarding call
/// quietly returns `false`. The wrapper itself is stateless beyond that
/// single reference — calls are independent and impose no ordering or
/// deduplication of repeated events.
pub struct DelegateWrapper {
    delegate: Option<Weak<dyn MessagingDelegate>>,
}

impl DelegateWrapper {
    /// Construction never fails; `None` yields a wrapper whose every call
    /// is a safe no-op.
    pub fn new(delegate: Option<Weak<dyn MessagingDelegate>>) -> Self {
        Self { delegate }
    }

    /// Whether a delegate is currently reachable through the weak handle.
    pub fn has_delegate(&self) -> bool {
        self.resolve().is_some()
    }

    fn resolve(&self) -> Option<Arc<dyn MessagingDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Upgrade, check the declared capability set, invoke. Returns whether
    /// the call actually reached the delegate.
    fn forward(&self, event: DelegateEvent, invoke: impl FnOnce(&dyn MessagingDelegate)) -> bool {
        let Some(delegate) = self.resolve() else {
            trace!(?event, "no messaging delegate, event dropped");
            return false;
        };
        if !delegate.handled_events().contains(&event) {
            trace!(?event, "delegate does not handle event, dropped");
            return false;
        }
        invoke(delegate.as_ref());
        true
    }

    pub fn message_appeared(&self, message_identifier: Option<&str>) -> bool {
        self.forward(DelegateEvent::MessageAppeared, |d| {
            d.on_message_appeared(message_identifier)
        })
    }

    pub fn message_cancelled_by_user(&self, message_identifier: Option<&str>) -> bool {
        self.forward(DelegateEvent::MessageCancelledByUser, |d| {
            d.on_message_cancelled_by_user(message_identifier)
        })
    }

    pub fn message_cancelled_by_autoclose(&self, message_identifier: Option<&str>) -> bool {
        self.forward(DelegateEvent::MessageCancelledByAutoclose, |d| {
            d.on_message_cancelled_by_autoclose(message_identifier)
        })
    }

    pub fn message_action_triggered(
        &self,
        action: &MessageAction,
        message_identifier: Option<&str>,
        action_index: i64,
    ) -> bool {
        self.forward(DelegateEvent::MessageActionTriggered, |d| {
            d.on_message_action_triggered(action, message_identifier, action_index)
        })
    }

    pub fn message_disappeared(&self, message_identifier: Option<&str>) -> bool {
        self.forward(DelegateEvent::MessageDisappeared, |d| {
            d.on_message_disappeared(message_identifier)
        })
    }

    pub fn in_app_message_ready(&self, message: InAppMessage) -> bool {
        self.forward(DelegateEvent::InAppMessageReady, |d| {
            d.on_in_app_message_ready(message)
        })
    }

    pub fn message_cancelled_by_error(&self, message_identifier: Option<&str>) -> bool {
        self.forward(DelegateEvent::MessageCancelledByError, |d| {
            d.on_message_cancelled_by_error(message_identifier)
        })
    }

    pub fn web_view_action_triggered(
        &self,
        action: Option<&MessageAction>,
        message_identifier: Option<&str>,
        analytics_identifier: Option<&str>,
    ) -> bool {
        self.forward(DelegateEvent::WebViewActionTriggered, |d| {
            d.on_web_view_action_triggered(action, message_identifier, analytics_identifier)
        })
    }

    /// Ask the delegate for a surface to present messaging UI on. Absent
    /// when there is no delegate, when it does not declare the capability,
    /// or when it declines by returning None itself.
    pub fn presenting_surface(&self) -> Option<Arc<dyn PresentingSurface>> {
        let Some(delegate) = self.resolve() else {
            trace!("no messaging delegate, surface request dropped");
            return None;
        };
        if !delegate
            .handled_events()
            .contains(&DelegateEvent::PresentingSurfaceRequested)
        {
            trace!("delegate does not provide a presenting surface");
            return None;
        }
        delegate.presenting_surface()
    }
}
