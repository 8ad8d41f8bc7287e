//! Route-change progress indicator bookkeeping.
//!
//! Each path change bumps a generation counter and hands out a ticket. Timers
//! scheduled for an older ticket are ignored, so a quick second navigation
//! cannot finish the bar early.

/// Delay between a path change and the finish signal.
pub const FINISH_DELAY_MS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBarStyle {
    pub size_px: u32,
    pub color: &'static str,
    pub class_name: &'static str,
    /// The bar stays hidden for this long after a start.
    pub delay_ms: u32,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            size_px: 4,
            color: "#FE595E",
            class_name: "bar-of-progress",
            delay_ms: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressPhase {
    #[default]
    Idle,
    /// Started but still inside the appearance delay.
    Starting,
    Visible,
}

/// Identifies the navigation a scheduled callback belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationProgress {
    previous_path: Option<String>,
    generation: u64,
    phase: ProgressPhase,
}

impl NavigationProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> ProgressPhase {
        self.phase
    }

    #[must_use]
    pub fn previous_path(&self) -> Option<&str> {
        self.previous_path.as_deref()
    }

    /// Record the current path. Returns a ticket when it differs from the
    /// last one seen, which also starts the indicator.
    pub fn observe(&mut self, path: &str) -> Option<ProgressTicket> {
        if self.previous_path.as_deref() == Some(path) {
            return None;
        }
        self.previous_path = Some(path.to_string());
        self.generation = self.generation.wrapping_add(1);
        self.phase = ProgressPhase::Starting;
        log::debug!("navigation to {path} started (generation {})", self.generation);
        Some(ProgressTicket(self.generation))
    }

    #[must_use]
    pub const fn is_current(&self, ticket: ProgressTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Show the bar once the appearance delay passed. Returns whether the
    /// ticket was still current.
    pub fn reveal(&mut self, ticket: ProgressTicket) -> bool {
        if !self.is_current(ticket) || self.phase != ProgressPhase::Starting {
            return false;
        }
        self.phase = ProgressPhase::Visible;
        true
    }

    /// Finish the bar for `ticket`. Stale tickets leave the state untouched.
    pub fn finish(&mut self, ticket: ProgressTicket) -> bool {
        if !self.is_current(ticket) {
            log::debug!("ignoring stale progress finish");
            return false;
        }
        self.phase = ProgressPhase::Idle;
        true
    }
}
