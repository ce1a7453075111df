// SPDX-License-Identifier: MPL-2.0
//! `wipedeck` is a multi-layer wipe comparison viewer built with the Iced
//! GUI framework.
//!
//! Two or more renders of the same shot are stacked as ordered layers;
//! draggable vertical dividers (and matching numeric controls) reveal each
//! layer for side-by-side inspection. The divider constraint solver, clip
//! computation, and comparison widget live here, along with the supporting
//! configuration, localization, and diagnostics plumbing.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
