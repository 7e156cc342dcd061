//! Resume ranker library
//!
//! Turns resume documents into structured candidate records and ranks them
//! against caller-supplied criteria.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod store;

pub use config::Config;
pub use error::{RankerError, Result};
pub use processing::{CandidateRecord, Criteria, Ranker, RecordBuilder, Scorer};
