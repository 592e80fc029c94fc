pub mod applications;
pub mod connection;

pub use connection::{init_db, Database};
