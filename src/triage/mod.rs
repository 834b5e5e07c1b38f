//! Error triage: classify, record, and surface failures reported by the app.
//!
//! A [`TriageService`] owns a bounded newest-first [`History`] and a single
//! current-error slot. Each [`Report`] is classified into an [`ErrorKind`],
//! logged, recorded, and then dispatched by [`Severity`]: low is logged only,
//! medium shows an alert, high adds a haptic cue, and critical adds an
//! emergency dump plus the [`EmergencyHook`]. Presentation layers observe
//! changes through [`TriageEvent`]s.

mod alert;
mod classify;
mod collaborators;
mod error;
mod events;
mod history;
mod kind;
mod presentation;
mod record;
mod service;
mod severity;

pub use alert::Alert;
pub use classify::classify;
pub use collaborators::{EmergencyHook, Haptics, Localizer, NoHaptics, Strings};
pub use error::CollaboratorError;
pub use events::{SubscriptionId, TriageEvent};
pub use history::{DEFAULT_HISTORY_CAPACITY, History};
pub use kind::{Cause, ErrorCategory, ErrorKind};
pub use presentation::Presentation;
pub use record::{ErrorRecord, Metadata, Report, emergency_lines, log_lines};
pub use service::TriageService;
pub use severity::{HapticPattern, Response, Severity};
