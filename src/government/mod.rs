//! Executive branch: the government, its ministries and the president

pub mod election;
pub mod lifecycle;
pub mod ministry;
pub mod president;

pub use election::{ExamResult, ExamType, PresidentialCandidate, PresidentialElection};
pub use lifecycle::{Government, GovernmentStatus};
pub use ministry::{Advisor, Ministry, MinistryType};
pub use president::President;
