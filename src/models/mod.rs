pub mod deadline;

pub use deadline::{Deadline, DeadlineRequest, DeadlineType, EnrichedDeadline, NewDeadline};
