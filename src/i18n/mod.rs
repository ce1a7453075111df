// SPDX-License-Identifier: MPL-2.0
//! Internationalization with embedded Fluent bundles.

pub mod fluent;
