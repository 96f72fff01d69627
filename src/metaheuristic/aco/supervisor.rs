use crate::metaheuristic::aco;
use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::{Message, MessageInfo};

use csv::Writer;
use serde::Serialize;
use std::io::{stderr, Stderr, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// Collects the walk reports of one colony's ants and writes one
/// aggregated csv row per iteration.
pub struct Supervisor<W: Write> {
    pub sender: Sender<aco::Message>,
    receiver: Receiver<aco::Message>,
    ants: usize,
    writer: Writer<W>,
}

#[derive(Serialize)]
struct IterationRecord {
    iteration: usize,
    ants: usize,
    arrived: usize,
    steps: usize,
    cpu_time_micros: u64,
    best_distance: Option<f64>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(writer: Writer<W>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            ants: 0,
            writer,
        }
    }

    pub fn new_ant(&mut self) -> (Sender<aco::Message>, usize) {
        self.ants += 1;
        let id = self.ants;

        (self.sender.clone(), id)
    }

    /// Drains every report the finished iteration produced, writes the
    /// aggregate as one csv row and returns it.
    pub fn aggregate_receive(&mut self, iteration: usize) -> MessageInfo {
        let mut info = MessageInfo::default();
        while let Ok(message) = self.receiver.try_recv() {
            info += message.get_info();
        }

        let _res = self.writer.serialize(IterationRecord {
            iteration,
            ants: info.ants,
            arrived: info.arrived,
            steps: info.steps,
            cpu_time_micros: info.cpu_time_micros,
            best_distance: info.best_distance,
        });
        let _res = self.writer.flush();

        info
    }

    pub fn reset(&mut self) {
        self.ants = 0;
        let (tx, rx) = mpsc::channel();
        self.sender = tx;
        self.receiver = rx;
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_writer(self) -> Result<W, csv::IntoInnerError<Writer<W>>> {
        self.writer.into_inner()
    }
}

impl<W: Write> supervisor::Supervisor<aco::Message> for Supervisor<W> {}

impl Default for Supervisor<Stderr> {
    fn default() -> Self {
        Supervisor::new(Writer::from_writer(stderr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn aggregate_receive_combines_all_pending_reports() {
        let mut supervisor: Supervisor<Vec<u8>> = Supervisor::new(Writer::from_writer(Vec::new()));
        let (sender, _id) = supervisor.new_ant();
        sender
            .send(aco::Message::new(1, 0, 3, Duration::from_micros(5), 4.0, true))
            .unwrap();
        sender
            .send(aco::Message::new(2, 0, 2, Duration::from_micros(5), 9.0, false))
            .unwrap();

        let info = supervisor.aggregate_receive(0);

        assert_eq!(info.ants, 2);
        assert_eq!(info.arrived, 1);
        assert_eq!(info.steps, 5);
        assert_eq!(info.best_distance, Some(4.0));
    }

    #[test]
    fn iterations_write_csv_rows() {
        let mut supervisor: Supervisor<Vec<u8>> = Supervisor::new(Writer::from_writer(Vec::new()));
        let (sender, _id) = supervisor.new_ant();
        sender
            .send(aco::Message::new(1, 0, 2, Duration::from_micros(7), 2.5, true))
            .unwrap();

        supervisor.aggregate_receive(0);

        let raw = supervisor.into_writer().ok().unwrap();
        let written = String::from_utf8(raw).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("iteration,ants,arrived,steps,cpu_time_micros,best_distance")
        );
        assert_eq!(lines.next(), Some("0,1,1,2,7,2.5"));
    }

    #[test]
    fn new_ant_hands_out_consecutive_ids() {
        let mut supervisor: Supervisor<Vec<u8>> = Supervisor::new(Writer::from_writer(Vec::new()));

        let (_s1, first) = supervisor.new_ant();
        let (_s2, second) = supervisor.new_ant();
        supervisor.reset();
        let (_s3, after_reset) = supervisor.new_ant();

        assert_eq!((first, second, after_reset), (1, 2, 1));
    }
}
