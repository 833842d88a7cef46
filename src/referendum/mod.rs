//! National, regional and local referenda
//!
//! A referendum goes Proposed -> Active -> Completed | Failed. Thresholds
//! are fixed from the legislature's seat count when it opens. Completion
//! certifies turnout only; `Referendum::approved` gives the substantive
//! result.

pub mod measure;
pub mod system;

pub use measure::{Referendum, ReferendumStatus, ReferendumThresholds, ReferendumType};
pub use system::{ExpertOrganization, ReferendumMonitor, ReferendumSystem};
