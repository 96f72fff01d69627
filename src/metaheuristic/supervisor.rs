use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

pub trait Supervisor<MessageType: Message> {}

pub trait Message {
    fn get_info(&self) -> MessageInfo;
}

/// Aggregatable slice of what one or more ants reported for an iteration.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub ants: usize,
    pub arrived: usize,
    pub steps: usize,
    pub cpu_time_micros: u64,
    pub best_distance: Option<f64>,
}

impl MessageInfo {
    pub fn new(
        ants: usize,
        arrived: usize,
        steps: usize,
        cpu_time_micros: u64,
        best_distance: Option<f64>,
    ) -> Self {
        Self {
            ants,
            arrived,
            steps,
            cpu_time_micros,
            best_distance,
        }
    }
}

impl Add for MessageInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let best_distance = match (self.best_distance, other.best_distance) {
            (Some(mine), Some(theirs)) => Some(mine.min(theirs)),
            (mine, theirs) => mine.or(theirs),
        };

        Self {
            ants: self.ants + other.ants,
            arrived: self.arrived + other.arrived,
            steps: self.steps + other.steps,
            cpu_time_micros: self.cpu_time_micros + other.cpu_time_micros,
            best_distance,
        }
    }
}

impl AddAssign for MessageInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_counters_and_keeps_lowest_distance() {
        let first = MessageInfo::new(1, 1, 4, 10, Some(3.5));
        let second = MessageInfo::new(1, 0, 2, 5, None);
        let third = MessageInfo::new(1, 1, 3, 7, Some(2.0));

        let combined = first + second + third;

        assert_eq!(combined.ants, 3);
        assert_eq!(combined.arrived, 2);
        assert_eq!(combined.steps, 9);
        assert_eq!(combined.cpu_time_micros, 22);
        assert_eq!(combined.best_distance, Some(2.0));
    }

    #[test]
    fn add_without_distances_stays_empty() {
        let combined = MessageInfo::new(1, 0, 2, 5, None) + MessageInfo::default();

        assert_eq!(combined.best_distance, None);
    }
}
