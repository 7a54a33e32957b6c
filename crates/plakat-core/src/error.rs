// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Plakat.

use thiserror::Error;

/// Top-level error type for all Plakat operations.
///
/// Delegate forwarding itself never fails — "nobody was listening" is a
/// normal outcome, not an error. These variants cover the surrounding data
/// model: payload parsing and serialization.
#[derive(Debug, Error)]
pub enum PlakatError {
    #[error("invalid message payload: {0}")]
    InvalidPayload(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PlakatError>;
