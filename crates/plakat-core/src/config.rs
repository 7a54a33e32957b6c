// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Messaging module configuration.

use serde::{Deserialize, Serialize};

/// Host-adjustable settings for the messaging module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// When true the SDK presents messages itself as they arrive; when
    /// false they are handed to the delegate via `on_in_app_message_ready`.
    pub automatic_mode: bool,
    /// Suppress display entirely (messages queue until lifted).
    pub do_not_disturb: bool,
    /// Emit verbose per-event trace logging.
    pub enriched_logging: bool,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            automatic_mode: true,
            do_not_disturb: false,
            enriched_logging: false,
        }
    }
}

impl MessagingConfig {
    /// Whether an incoming message may be shown right away.
    pub fn allows_immediate_display(&self) -> bool {
        self.automatic_mode && !self.do_not_disturb
    }
}
