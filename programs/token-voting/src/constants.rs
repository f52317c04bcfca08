use anchor_lang::prelude::*;

#[constant]
pub const CONFIG_SEED: &[u8] = b"config";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTER_SEED: &[u8] = b"voter";
pub const VOTE_SEED: &[u8] = b"vote";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Point budget granted to every voter at initialization. Votes debit the
/// point cost of the proposal; the budget is never replenished.
pub const INITIAL_VOTER_POINTS: u64 = 100;

pub const MIN_TITLE_LEN: usize = 3;
