use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::Voter;

#[derive(Accounts)]
pub struct InitializeVoter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump,
    )]
    pub voter: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVoter<'info> {
    pub fn initialize_voter(&mut self, bumps: &InitializeVoterBumps) -> Result<()> {
        self.voter.set_inner(Voter {
            authority: self.authority.key(),
            staked_amount: 0,
            amount_unstaking: 0,
            unstake_complete_ts: 0,
            points: INITIAL_VOTER_POINTS,
            bump: bumps.voter,
        });

        Ok(())
    }
}
