//! Bicameral legislature
//!
//! Members, legislative proposals, and the quorum-gated decision protocol
//! shared with government ratification and referenda.

pub mod chamber;
pub mod decision;
pub mod member;
pub mod proposal;

pub use chamber::Legislature;
pub use decision::{
    conduct_vote, quorum_gate, Ballot, BallotRule, LegislativeBallot, PassRule, RatificationBallot,
    Rejection, SeatMajority, SimpleMajority, VoteOutcome, VoteTally,
};
pub use member::{ActivityScore, Chamber, ChamberMember, GovernmentRole, MemberStatus};
pub use proposal::{Legislation, LegislationStatus};
