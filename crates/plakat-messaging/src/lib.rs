// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plakat — Host-app delegate layer.
//
// The host application may supply a `MessagingDelegate` to observe message
// UI lifecycle events (shown, dismissed, tapped, cancelled, ready, error)
// and to lend the engine a surface to present on. The presentation engine
// never talks to the delegate directly; it goes through `DelegateWrapper`,
// which makes every call safe whether or not a delegate exists and
// whichever subset of the optional callbacks it implements.

pub mod delegate;
pub mod surface;
pub mod wrapper;

pub use delegate::{DelegateEvent, MessagingDelegate};
pub use surface::PresentingSurface;
pub use wrapper::DelegateWrapper;
