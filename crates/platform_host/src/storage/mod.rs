//! Preference storage contracts.

pub mod prefs;
