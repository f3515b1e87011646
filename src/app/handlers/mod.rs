// SPDX-License-Identifier: GPL-3.0-only

//! Message handler modules
//!
//! This module organizes message handlers by functional domain,
//! keeping related functionality together for easier maintenance.

pub mod capture;
pub mod effects;
pub mod flow;
pub mod music;
pub mod slideshow;
pub mod system;
