use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::Config;

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Singleton; a second call fails on the init constraint.
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    // Fungible token accepted as stake
    pub stake_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeConfig<'info> {
    pub fn initialize_config(
        &mut self,
        unstake_period: i64,
        bumps: &InitializeConfigBumps,
    ) -> Result<()> {
        // A negative period would make every cooldown instantly withdrawable.
        require!(unstake_period >= 0, VotingError::InvalidUnstakePeriod);

        self.config.set_inner(Config {
            authority: self.authority.key(),
            stake_mint: self.stake_mint.key(),
            unstake_period,
            total_staked: 0,
            next_proposal_id: 0,
            bump: bumps.config,
        });

        Ok(())
    }
}
