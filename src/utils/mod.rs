pub mod query;
pub mod timer;
