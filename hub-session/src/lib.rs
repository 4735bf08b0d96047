//! # Hub Session
//!
//! One user's session over the badge catalog: the state they see and the
//! controller that feeds gateway results into it.

mod hub;
mod session;

pub use hub::{
    Hub, ASK_FAILED, CONCEPT_READY, IMAGE_EMPTY, IMAGE_FAILED, SEARCH_FAILED,
    STRATEGY_FAILED,
};
pub use session::{
    ChatTurn, ConceptOutcome, LookupOutcome, Role, Session, Slot,
    StrategyView, Ticket,
};
