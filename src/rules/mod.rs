//! Claim rules.
//!
//! Decides whether a claim is legal and which cards pay for it:
//! - `check_claim` / `can_claim`: ownership, once-per-turn, resources
//! - `can_continue_playing`: could a route of a given length still be paid
//! - `select_cards_to_spend`: deterministic least-waste payment
//!
//! These are pure functions; `game::Player` applies their decisions.

pub mod claim;

pub use claim::{
    can_claim, can_continue_playing, check_claim, check_resources, max_payable_length,
    select_cards_to_spend, CardSpend, ClaimRejection,
};
