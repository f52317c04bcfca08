use anchor_lang::prelude::*;

/// Per-holder stake ledger. `staked_amount` includes tokens that are pending
/// unstake; they stop counting only when `withdraw_stake` completes.
#[account]
#[derive(InitSpace)]
pub struct Voter {
    pub authority: Pubkey,
    pub staked_amount: u64,
    /// Portion of staked_amount in the unstake cooldown.
    pub amount_unstaking: u64,
    /// 0 when no unstake is pending.
    pub unstake_complete_ts: i64,
    /// Remaining voting-point budget, debited by each vote.
    pub points: u64,
    pub bump: u8,
}

impl Voter {
    /// Stake not reserved for unstaking; the weight applied when voting.
    pub fn effective_weight(&self) -> u64 {
        self.staked_amount.saturating_sub(self.amount_unstaking)
    }

    pub fn set_unstaking(&mut self, unstake_complete_ts: i64, amount_unstaking: u64) {
        self.unstake_complete_ts = unstake_complete_ts;
        self.amount_unstaking = amount_unstaking;
    }

    pub fn reset_unstaking(&mut self) {
        self.unstake_complete_ts = 0;
        self.amount_unstaking = 0;
    }
}
