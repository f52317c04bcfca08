use anchor_lang::prelude::*;

// program-wide parameters and counters, singleton PDA
#[account]
#[derive(InitSpace)]
pub struct Config {
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
    /// Seconds a pending unstake must wait before withdrawal.
    pub unstake_period: i64,
    /// Sum of staked_amount over all voters. Tokens pending unstake still
    /// count until the withdrawal completes.
    pub total_staked: u64,
    pub next_proposal_id: u16,
    pub bump: u8,
}
