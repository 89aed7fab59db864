pub mod habits;
pub mod stats;
