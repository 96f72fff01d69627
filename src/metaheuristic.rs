pub mod aco;
mod fleet;
mod solution;
mod supervisor;

pub use aco::{Aco, Route};
pub use fleet::{Fleet, RouteRequest};
pub use solution::Solution;
pub use supervisor::{Message, MessageInfo, Supervisor};
