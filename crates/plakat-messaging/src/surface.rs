// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presenting-surface abstraction.

/// A host UI container the engine can present messaging overlays on — a
/// view controller, activity, window, whatever the platform calls it. The
/// engine treats the handle as opaque and hands it back to the platform
/// layer unmodified.
pub trait PresentingSurface: Send + Sync {
    /// Human-readable name of the surface (e.g. "RootViewController",
    /// "MainActivity"). Used for trace logging only.
    fn surface_name(&self) -> &str;
}
