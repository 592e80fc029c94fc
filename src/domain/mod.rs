pub mod application;
pub mod format;
pub mod state;
pub mod stats;

pub use application::{ApplicationFields, ApplicationRecord, JobType, RecordId, Status};
pub use state::PageState;
pub use stats::Statistics;
