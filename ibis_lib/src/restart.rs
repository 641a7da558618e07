//! The restart controller.
//!
//! Converts a count of conflicts into restart requests, under either a geometric or a luby schedule.
//! A restart is a backjump to level zero --- unit assignments, activity, phase, and learnt clauses all survive.

use crate::{
    config::{Config, RestartPolicy},
    generic::luby::Luby,
};

pub struct Restarts {
    policy: RestartPolicy,
    counter: usize,
    threshold: usize,
    multiplier: usize,
    luby_base: usize,
    luby: Luby,
}

impl Restarts {
    pub fn from_config(config: &Config) -> Self {
        let mut luby = Luby::default();
        let threshold = match config.restarts {
            RestartPolicy::None => 0,
            RestartPolicy::Geometric => config.geometric_start,
            RestartPolicy::Luby => config.luby_base * luby.next_term(),
        };

        Restarts {
            policy: config.restarts,
            counter: 0,
            threshold,
            multiplier: config.geometric_multiplier,
            luby_base: config.luby_base,
            luby,
        }
    }

    /// Notes a conflict, and reports whether the schedule calls for a restart.
    /// On a restart the counter is cleared and the threshold advances.
    pub fn note_conflict(&mut self) -> bool {
        if let RestartPolicy::None = self.policy {
            return false;
        }

        self.counter += 1;
        if self.counter < self.threshold {
            return false;
        }

        self.counter = 0;
        self.threshold = match self.policy {
            RestartPolicy::None => self.threshold,
            RestartPolicy::Geometric => self.threshold * self.multiplier,
            RestartPolicy::Luby => self.luby_base * self.luby.next_term(),
        };
        true
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn geometric_thresholds_double() {
        let config = Config {
            restarts: RestartPolicy::Geometric,
            geometric_start: 2,
            ..Config::default()
        };
        let mut restarts = Restarts::from_config(&config);

        assert!(!restarts.note_conflict());
        assert!(restarts.note_conflict());
        assert_eq!(restarts.threshold(), 4);

        for _ in 0..3 {
            assert!(!restarts.note_conflict());
        }
        assert!(restarts.note_conflict());
        assert_eq!(restarts.threshold(), 8);
    }

    #[test]
    fn luby_thresholds_follow_the_sequence() {
        let config = Config {
            restarts: RestartPolicy::Luby,
            luby_base: 2,
            ..Config::default()
        };
        let mut restarts = Restarts::from_config(&config);

        // luby: 1, 1, 2, 1, …
        assert_eq!(restarts.threshold(), 2);
        assert!(!restarts.note_conflict());
        assert!(restarts.note_conflict());
        assert_eq!(restarts.threshold(), 2);
        assert!(!restarts.note_conflict());
        assert!(restarts.note_conflict());
        assert_eq!(restarts.threshold(), 4);
    }

    #[test]
    fn none_never_restarts() {
        let mut restarts = Restarts::from_config(&Config::default());
        for _ in 0..4096 {
            assert!(!restarts.note_conflict());
        }
    }
}
