// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Plakat messaging module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{PlakatError, Result};

/// Locally assigned identifier for one delivered message instance.
///
/// A campaign may be shown more than once; the delivery id distinguishes
/// repeated displays of the same `message_identifier` so the host can
/// deduplicate lifecycle events if it cares to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(pub Uuid);

impl DeliveryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeliveryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Action attached to a message CTA or global tap.
///
/// An absent identifier is a plain dismiss: the message closes and nothing
/// else runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAction {
    /// Registered action identifier (e.g. "deeplink", "rating"). None for
    /// a plain dismiss.
    pub identifier: Option<String>,
    /// Arbitrary JSON arguments forwarded to the action runner.
    pub args: Map<String, Value>,
}

impl MessageAction {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            args: Map::new(),
        }
    }

    /// Action that only closes the message.
    pub fn dismiss() -> Self {
        Self {
            identifier: None,
            args: Map::new(),
        }
    }

    pub fn is_dismiss(&self) -> bool {
        self.identifier.is_none()
    }
}

/// An in-app campaign message handed to the host application.
///
/// When automatic display is disabled the engine delivers these through the
/// delegate instead of presenting them itself; the host decides when (and
/// whether) to show the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InAppMessage {
    pub delivery_id: DeliveryId,
    /// Developer-facing tracking identifier, if the campaign carries one.
    pub message_identifier: Option<String>,
    /// Server-side campaign token, if any.
    pub campaign_token: Option<String>,
    /// Developer-supplied payload attached to the campaign.
    pub custom_payload: Map<String, Value>,
    pub received_at: DateTime<Utc>,
}

impl InAppMessage {
    pub fn new(message_identifier: Option<String>, campaign_token: Option<String>) -> Self {
        Self {
            delivery_id: DeliveryId::new(),
            message_identifier,
            campaign_token,
            custom_payload: Map::new(),
            received_at: Utc::now(),
        }
    }

    /// Build a message from a raw campaign payload.
    ///
    /// The payload must be a JSON object. The optional `identifier` and
    /// `campaignToken` string fields are lifted out; everything else stays
    /// in `custom_payload` untouched.
    pub fn from_payload(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        let Value::Object(mut fields) = value else {
            return Err(PlakatError::InvalidPayload(
                "campaign payload root must be a JSON object".into(),
            ));
        };

        let message_identifier = take_string(&mut fields, "identifier");
        let campaign_token = take_string(&mut fields, "campaignToken");

        Ok(Self {
            delivery_id: DeliveryId::new(),
            message_identifier,
            campaign_token,
            custom_payload: fields,
            received_at: Utc::now(),
        })
    }
}

/// Remove `key` from the map if it holds a string; non-string values are
/// left in place for the custom payload.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            fields.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}
