//! Shared layout helpers for floating widgets

pub mod popup;
