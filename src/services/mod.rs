pub mod submission_service;
pub mod timer;

pub use submission_service::{init_host, submit_lead};
