use anchor_lang::prelude::*;

/// One record per (voter, proposal) pair. Its existence is the guard against
/// voting twice; fields are fixed at cast time and never recomputed.
#[account]
#[derive(InitSpace)]
pub struct Vote {
    pub voter: Pubkey,
    pub proposal: Pubkey,
    pub option: u8,
    pub weight: u64,
    pub timestamp: i64,
    pub bump: u8,
}
