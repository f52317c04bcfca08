use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::{Config, Voter};

#[derive(Accounts)]
pub struct IncreaseStake<'info> {
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

    // Source of the staked tokens
    #[account(
        mut,
        associated_token::mint = stake_mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    // Program vault for this voter; the voter PDA is its authority
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = stake_mint,
        associated_token::authority = voter,
    )]
    pub voter_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> IncreaseStake<'info> {
    pub fn increase_stake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VotingError::InvalidStakeAmount);

        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.authority_token_account.to_account_info(),
                to: self.voter_token_account.to_account_info(),
                authority: self.authority.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, amount)?;

        self.voter.staked_amount = self
            .voter
            .staked_amount
            .checked_add(amount)
            .ok_or(VotingError::MathOverflow)?;

        self.config.total_staked = self
            .config
            .total_staked
            .checked_add(amount)
            .ok_or(VotingError::MathOverflow)?;

        Ok(())
    }
}
