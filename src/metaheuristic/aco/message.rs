use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::MessageInfo;

use std::time::Duration;

/// What a single ant reports back after finishing its walk.
#[derive(Debug, Clone)]
pub struct Message {
    pub ant_id: usize,
    pub iteration: usize,
    pub steps: usize,
    pub cpu_time: Duration,
    pub distance: f64,
    pub arrived: bool,
}

impl Message {
    pub fn new(
        ant_id: usize,
        iteration: usize,
        steps: usize,
        cpu_time: Duration,
        distance: f64,
        arrived: bool,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            steps,
            cpu_time,
            distance,
            arrived,
        }
    }

    pub fn id(&self) -> usize {
        self.ant_id
    }
}

impl supervisor::Message for Message {
    fn get_info(&self) -> MessageInfo {
        MessageInfo::new(
            1,
            self.arrived as usize,
            self.steps,
            self.cpu_time.as_micros() as u64,
            if self.arrived {
                Some(self.distance)
            } else {
                None
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::supervisor::Message as _;

    #[test]
    fn arrived_messages_carry_their_distance() {
        let info = Message::new(3, 0, 5, Duration::from_micros(42), 7.5, true).get_info();

        assert_eq!(info.ants, 1);
        assert_eq!(info.arrived, 1);
        assert_eq!(info.steps, 5);
        assert_eq!(info.cpu_time_micros, 42);
        assert_eq!(info.best_distance, Some(7.5));
    }

    #[test]
    fn stuck_messages_report_no_distance() {
        let info = Message::new(1, 2, 3, Duration::from_micros(1), 4.0, false).get_info();

        assert_eq!(info.arrived, 0);
        assert_eq!(info.best_distance, None);
    }
}
