// Token-weighted governance program
//
// Holders lock a fungible token to obtain voting power, vote on time-bounded
// proposals against a per-voter point budget, and unlock their tokens after a
// cooldown.
//
// Instructions:
// - initialize_config: Create the singleton config (authority, mint, cooldown)
// - initialize_voter: Create a holder's stake ledger with its point budget
// - increase_stake: Move tokens into the program vault, gaining weight
// - decrease_stake: Reserve stake for unstaking and start the cooldown
// - cancel_unstake: Return pending stake to the active balance
// - withdraw_stake: Move cooled-down tokens back to the holder's wallet
// - create_proposal: Authority-gated proposal creation with sequential ids
// - cast_vote: Record a one-shot, stake-weighted vote on an open proposal

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("H1UfBY6MZjyzss3psGQ4E84Aq5A5k2Zm4puuAaNY9iVR");

#[program]
pub mod token_voting {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, unstake_period: i64) -> Result<()> {
        ctx.accounts.initialize_config(unstake_period, &ctx.bumps)
    }

    pub fn initialize_voter(ctx: Context<InitializeVoter>) -> Result<()> {
        ctx.accounts.initialize_voter(&ctx.bumps)
    }

    pub fn increase_stake(ctx: Context<IncreaseStake>, amount: u64) -> Result<()> {
        ctx.accounts.increase_stake(amount)
    }

    pub fn decrease_stake(ctx: Context<DecreaseStake>, amount: u64) -> Result<()> {
        ctx.accounts.decrease_stake(amount)
    }

    pub fn cancel_unstake(ctx: Context<CancelUnstake>, amount: u64) -> Result<()> {
        ctx.accounts.cancel_unstake(amount)
    }

    pub fn withdraw_stake(ctx: Context<WithdrawStake>) -> Result<()> {
        ctx.accounts.withdraw_stake()
    }

    pub fn create_proposal(ctx: Context<CreateProposal>, args: CreateProposalArgs) -> Result<()> {
        ctx.accounts.create_proposal(args, &ctx.bumps)
    }

    pub fn cast_vote(ctx: Context<CastVote>, option: u8) -> Result<()> {
        ctx.accounts.cast_vote(option, &ctx.bumps)
    }
}
