//! Error triage and reporting for the Thrustr fitness tracker.
//!
//! [`triage`] holds the service every part of the app reports failures into.
//! [`storage`], [`config`] and [`logging`] are its ambient collaborators, and
//! [`tui`] is a terminal console that observes the service the way the app's
//! alert surface does.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod storage;
pub mod triage;
pub mod tui;
