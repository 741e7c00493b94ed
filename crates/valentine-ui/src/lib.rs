//! Valentine Card UI Components
//!
//! Dioxus building blocks for the proposal card. Motions come from
//! `valentine_core::animation::presets`; the components here only attach
//! the class names and inline declarations that play them.
//!
//! - **Rose (#ff4d6d)**: the accept action, titles
//! - **Blush (#ffd6e0)**: backgrounds, the decline action
//! - **Wine (#7a1c3a)**: body text

pub mod components;

pub use components::*;
