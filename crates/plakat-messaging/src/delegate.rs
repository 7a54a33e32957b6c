// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability-set delegate interface for messaging lifecycle events.
//
// Every callback is optional: all methods have no-op defaults, and a
// delegate opts into the events it actually wants via `handled_events`.
// An event missing from that set is never forwarded, so implementing a
// callback without declaring it is the same as not implementing it.

use std::sync::Arc;

use plakat_core::{InAppMessage, MessageAction};

use crate::surface::PresentingSurface;

/// The optional capabilities a messaging delegate can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateEvent {
    MessageAppeared,
    MessageCancelledByUser,
    MessageCancelledByAutoclose,
    MessageActionTriggered,
    MessageDisappeared,
    InAppMessageReady,
    MessageCancelledByError,
    WebViewActionTriggered,
    PresentingSurfaceRequested,
}

/// Observer for message UI lifecycle events, supplied by the host app.
///
/// The SDK holds the delegate weakly — the host owns it and may drop it at
/// any time, after which all forwarding silently stops. Message identifiers
/// are passed through exactly as the campaign carries them, including when
/// absent.
pub trait MessagingDelegate: Send + Sync {
    /// The events this delegate handles. Callbacks whose event is not
    /// listed here are never invoked.
    fn handled_events(&self) -> &[DelegateEvent] {
        &[]
    }

    /// A message was shown on screen.
    fn on_message_appeared(&self, _message_identifier: Option<&str>) {}

    /// The user closed the message (close button or tap outside).
    fn on_message_cancelled_by_user(&self, _message_identifier: Option<&str>) {}

    /// The message closed itself after its auto-close delay elapsed.
    fn on_message_cancelled_by_autoclose(&self, _message_identifier: Option<&str>) {}

    /// A CTA or the global tap action fired. `action_index` is the CTA
    /// position, or -1 for the global tap.
    fn on_message_action_triggered(
        &self,
        _action: &MessageAction,
        _message_identifier: Option<&str>,
        _action_index: i64,
    ) {
    }

    /// The message left the screen.
    fn on_message_disappeared(&self, _message_identifier: Option<&str>) {}

    /// An in-app message arrived while automatic display is off; the host
    /// now owns the decision to show it.
    fn on_in_app_message_ready(&self, _message: InAppMessage) {}

    /// The message was torn down because of an internal error (e.g. its
    /// content failed to load).
    fn on_message_cancelled_by_error(&self, _message_identifier: Option<&str>) {}

    /// A webview message dispatched an action through the JS bridge.
    fn on_web_view_action_triggered(
        &self,
        _action: Option<&MessageAction>,
        _message_identifier: Option<&str>,
        _analytics_identifier: Option<&str>,
    ) {
    }

    /// Surface the engine should present messaging UI on. Return None to
    /// let the engine pick its own.
    fn presenting_surface(&self) -> Option<Arc<dyn PresentingSurface>> {
        None
    }
}
