// SPDX-License-Identifier: MPL-2.0
//! UI modules: the comparator component, shared components, styling.

pub mod comparator;
pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod theme;
pub mod theming;
