use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::{Config, Voter};

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = stake_mint,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump = voter.bump,
        has_one = authority,
    )]
    pub voter: Account<'info, Voter>,

    pub stake_mint: Account<'info, Mint>,

    // Destination; recreated if the holder closed it since staking
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = stake_mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = stake_mint,
        associated_token::authority = voter,
    )]
    pub voter_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawStake<'info> {
    /// Moves the pending unstake amount back to the holder's wallet once the
    /// cooldown has elapsed. The voter PDA signs the vault transfer.
    pub fn withdraw_stake(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let amount = self.voter.amount_unstaking;

        require!(
            amount > 0 && now >= self.voter.unstake_complete_ts,
            VotingError::UnstakingNotComplete
        );

        let authority_key = self.authority.key();
        let voter_seeds = &[VOTER_SEED, authority_key.as_ref(), &[self.voter.bump]];
        let signer_seeds = &[&voter_seeds[..]];

        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.voter_token_account.to_account_info(),
                to: self.authority_token_account.to_account_info(),
                authority: self.voter.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;

        let voter = &mut self.voter;
        voter.staked_amount = voter
            .staked_amount
            .checked_sub(amount)
            .ok_or(VotingError::MathOverflow)?;
        voter.reset_unstaking();

        self.config.total_staked = self
            .config
            .total_staked
            .checked_sub(amount)
            .ok_or(VotingError::MathOverflow)?;

        Ok(())
    }
}
