//! Simulated turn-by-turn navigation
//!
//! Progress is counted in ticks so it reaches exactly 100% after the
//! configured number of ticks; the step thresholds then read off the
//! fraction.

use std::time::Duration;

use crate::i18n::Key;

/// Interval between progress ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Simulated walk duration
pub const TOTAL_DURATION: Duration = Duration::from_secs(60);

/// Pause between arriving and asking the user to confirm arrival
pub const ARRIVAL_PROMPT_DELAY: Duration = Duration::from_millis(500);

/// Minutes the ETA starts from
const ETA_MINUTES: f32 = 5.0;

/// Upper bounds (exclusive) of each step's progress band
const STEP_THRESHOLDS: [f32; 5] = [0.15, 0.30, 0.50, 0.70, 0.85];

/// Instruction and location label for each step
pub const STEPS: [RouteStep; 6] = [
    RouteStep {
        instruction: Key::RouteStepExitMain,
        location: Key::RouteLocationMainEntrance,
    },
    RouteStep {
        instruction: Key::RouteStepTurnLeft,
        location: Key::RouteLocationMainCorridor,
    },
    RouteStep {
        instruction: Key::RouteStepTowardsCampus,
        location: Key::RouteLocationKiryaCampus,
    },
    RouteStep {
        instruction: Key::RouteStepTurnRight,
        location: Key::RouteLocationCampus,
    },
    RouteStep {
        instruction: Key::RouteStepElevator,
        location: Key::RouteLocationElevator,
    },
    RouteStep {
        instruction: Key::RouteStepToClassroom,
        location: Key::RouteLocationClassroom,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStep {
    /// May contain `{campus}` and `{classroom}` placeholders
    pub instruction: Key,
    pub location: Key,
}

/// Step index for a progress fraction in `[0, 1]`
pub fn step_for(progress: f32) -> usize {
    STEP_THRESHOLDS
        .iter()
        .position(|&limit| progress < limit)
        .unwrap_or(STEP_THRESHOLDS.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSimulation {
    ticks: u32,
    total_ticks: u32,
}

impl Default for RouteSimulation {
    fn default() -> Self {
        Self::new(TOTAL_DURATION, TICK_INTERVAL)
    }
}

impl RouteSimulation {
    pub fn new(total: Duration, tick: Duration) -> Self {
        let total_ticks = (total.as_millis() / tick.as_millis().max(1)).max(1) as u32;
        Self {
            ticks: 0,
            total_ticks,
        }
    }

    /// Advance one tick. Returns true on the tick that completes the route.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.ticks += 1;
        self.is_complete()
    }

    /// Fraction walked, clamped to `[0, 1]`
    pub fn progress(&self) -> f32 {
        (self.ticks as f32 / self.total_ticks as f32).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.ticks >= self.total_ticks
    }

    pub fn current_step(&self) -> usize {
        step_for(self.progress())
    }

    pub fn step(&self) -> &'static RouteStep {
        &STEPS[self.current_step()]
    }

    /// Whole minutes left, rounded down
    pub fn eta_minutes(&self) -> u32 {
        (ETA_MINUTES * (1.0 - self.progress())) as u32
    }

    /// Whole percent walked, rounded down
    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_thresholds() {
        assert_eq!(step_for(0.0), 0);
        assert_eq!(step_for(0.149), 0);
        assert_eq!(step_for(0.15), 1);
        assert_eq!(step_for(0.3), 2);
        assert_eq!(step_for(0.5), 3);
        assert_eq!(step_for(0.7), 4);
        assert_eq!(step_for(0.85), 5);
        assert_eq!(step_for(1.0), 5);
        assert_eq!(STEPS.len(), STEP_THRESHOLDS.len() + 1);
    }

    #[test]
    fn test_completes_after_sixty_seconds_of_ticks() {
        let mut sim = RouteSimulation::default();
        let mut completed_at = None;
        for tick in 1..=700 {
            if sim.tick() {
                completed_at = Some(tick);
            }
        }
        assert_eq!(completed_at, Some(600));
        assert!(sim.is_complete());
        assert_eq!(sim.progress(), 1.0);
        assert_eq!(sim.percent(), 100);
        assert_eq!(sim.eta_minutes(), 0);
        assert_eq!(sim.current_step(), 5);
    }

    #[test]
    fn test_eta_and_percent_round_down() {
        let mut sim = RouteSimulation::default();
        assert_eq!(sim.eta_minutes(), 5);
        assert_eq!(sim.percent(), 0);

        for _ in 0..90 {
            sim.tick();
        }
        // 15% walked
        assert_eq!(sim.percent(), 15);
        assert_eq!(sim.eta_minutes(), 4);
        assert_eq!(sim.current_step(), 1);
    }
}
