//! Canned failures the console can inject into the triage service.

use std::io;

use crate::triage::{Report, Severity};

/// A representative failure from one corner of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sample {
    #[default]
    Database,
    Network,
    HealthSync,
    DataCorruption,
    Unknown,
}

static ALL_SAMPLES: &[Sample] = &[
    Sample::Database,
    Sample::Network,
    Sample::HealthSync,
    Sample::DataCorruption,
    Sample::Unknown,
];

impl Sample {
    /// Returns all samples in key order (`1`..`5`).
    pub fn all() -> &'static [Sample] {
        ALL_SAMPLES
    }

    /// Returns the sample bound to digit key `c`, if any.
    pub fn from_key(c: char) -> Option<Sample> {
        let index = c.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| ALL_SAMPLES.get(i)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Sample::Database => "Database",
            Sample::Network => "Network",
            Sample::HealthSync => "Health Sync",
            Sample::DataCorruption => "Data Corruption",
            Sample::Unknown => "Unknown",
        }
    }

    /// Builds the report for this sample at `severity`.
    pub fn report(self, severity: Severity) -> Report {
        let report = match self {
            Sample::Database => Report::new(
                io::Error::other("SQLite error 19: UNIQUE constraint failed: workout_sets.id"),
                "WorkoutStore",
            )
            .user_action("Saving strength workout")
            .metadata("exercise", "Back Squat")
            .metadata("set_count", 5),
            Sample::Network => Report::new(
                io::Error::other("The network connection was lost."),
                "CardioSync",
            )
            .user_action("Uploading cardio session")
            .metadata("distance_km", 5.2),
            Sample::HealthSync => Report::new(
                io::Error::other("HealthKit authorization was denied for workout samples."),
                "HealthSync",
            )
            .user_action("Importing workouts"),
            Sample::DataCorruption => {
                Report::corruption("Cardio session has a negative duration", "CardioStore")
                    .metadata("session_id", "c-1042")
            }
            Sample::Unknown => Report::new(
                io::Error::other("Summary image could not be rendered"),
                "ShareComposer",
            ),
        };
        report.severity(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{ErrorCategory, TriageService};

    #[test]
    fn digit_keys_map_in_order() {
        assert_eq!(Sample::from_key('1'), Some(Sample::Database));
        assert_eq!(Sample::from_key('5'), Some(Sample::Unknown));
    }

    #[test]
    fn other_keys_map_to_none() {
        assert_eq!(Sample::from_key('0'), None);
        assert_eq!(Sample::from_key('6'), None);
        assert_eq!(Sample::from_key('a'), None);
    }

    #[test]
    fn each_sample_classifies_as_its_category() {
        let expected = [
            (Sample::Database, ErrorCategory::Database),
            (Sample::Network, ErrorCategory::Network),
            (Sample::HealthSync, ErrorCategory::HealthSync),
            (Sample::DataCorruption, ErrorCategory::DataCorruption),
            (Sample::Unknown, ErrorCategory::Unknown),
        ];
        for (sample, category) in expected {
            let mut service = TriageService::default();
            service.handle(sample.report(Severity::Low));
            assert_eq!(
                service.recent_errors(1)[0].kind().category(),
                category,
                "{sample:?} misclassified"
            );
        }
    }

    #[test]
    fn report_uses_given_severity() {
        let mut service = TriageService::default();
        service.handle(Sample::Network.report(Severity::Critical));
        assert_eq!(service.recent_errors(1)[0].severity(), Severity::Critical);
    }
}
