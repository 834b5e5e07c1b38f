//! Terminal stand-in for a haptic engine.

use std::io::{self, Write};

use crate::triage::{CollaboratorError, HapticPattern, Haptics};

/// Rings the terminal bell: once for a warning, twice for an error.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Haptics for TerminalBell<W> {
    fn failure_cue(&mut self, pattern: HapticPattern) -> Result<(), CollaboratorError> {
        let rings = match pattern {
            HapticPattern::Warning => 1,
            HapticPattern::Error => 2,
        };
        for _ in 0..rings {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
