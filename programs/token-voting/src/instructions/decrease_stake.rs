use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::{Config, Voter};

#[derive(Accounts)]
pub struct DecreaseStake<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump = voter.bump,
        has_one = authority,
    )]
    pub voter: Account<'info, Voter>,
}

impl<'info> DecreaseStake<'info> {
    /// Marks `amount` of the unlocked stake as pending unstake and starts
    /// the cooldown. Adding to an already-pending amount restarts the
    /// cooldown for the combined total; tokens stay in the vault until
    /// `withdraw_stake`.
    pub fn decrease_stake(&mut self, amount: u64) -> Result<()> {
        let voter = &mut self.voter;

        require!(
            amount > 0 && amount <= voter.effective_weight(),
            VotingError::InvalidStakeAmount
        );

        let now = Clock::get()?.unix_timestamp;
        let pending = voter
            .amount_unstaking
            .checked_add(amount)
            .ok_or(VotingError::MathOverflow)?;
        let complete_ts = now
            .checked_add(self.config.unstake_period)
            .ok_or(VotingError::MathOverflow)?;

        voter.set_unstaking(complete_ts, pending);

        Ok(())
    }
}
