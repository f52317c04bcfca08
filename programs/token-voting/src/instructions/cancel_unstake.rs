use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::Voter;

#[derive(Accounts)]
pub struct CancelUnstake<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump = voter.bump,
        has_one = authority,
    )]
    pub voter: Account<'info, Voter>,
}

impl<'info> CancelUnstake<'info> {
    /// Returns `amount` of the pending unstake to the active stake. A full
    /// cancel clears the cooldown; a partial cancel leaves the running
    /// timer untouched for the remainder.
    pub fn cancel_unstake(&mut self, amount: u64) -> Result<()> {
        let voter = &mut self.voter;

        require!(
            amount > 0 && amount <= voter.amount_unstaking,
            VotingError::InvalidStakeAmount
        );

        let remaining = voter.amount_unstaking - amount;

        if remaining == 0 {
            voter.reset_unstaking();
        } else {
            voter.amount_unstaking = remaining;
        }

        Ok(())
    }
}
