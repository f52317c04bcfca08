use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::{Proposal, Vote, Voter};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal.id.to_le_bytes().as_ref()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        seeds = [VOTER_SEED, authority.key().as_ref()],
        bump = voter.bump,
        has_one = authority,
    )]
    pub voter: Account<'info, Voter>,

    // One record per (voter, proposal); init fails on a second vote
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Vote::INIT_SPACE,
        seeds = [VOTE_SEED, voter.key().as_ref(), proposal.key().as_ref()],
        bump,
    )]
    pub vote: Account<'info, Vote>,

    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    pub fn cast_vote(&mut self, option: u8, bumps: &CastVoteBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        require!(
            (option as usize) < self.proposal.options.len() && now < self.proposal.ending_ts,
            VotingError::InvalidOption
        );

        // Tokens reserved for unstaking carry no weight.
        let weight = self.voter.effective_weight();
        require!(weight > 0, VotingError::NoTokensStaked);

        require!(
            self.voter.points >= self.proposal.points,
            VotingError::InsufficientPoints
        );

        self.vote.set_inner(Vote {
            voter: self.voter.key(),
            proposal: self.proposal.key(),
            option,
            weight,
            timestamp: now,
            bump: bumps.vote,
        });

        let proposal = &mut self.proposal;
        proposal.option_votes[option as usize] = proposal.option_votes[option as usize]
            .checked_add(weight)
            .ok_or(VotingError::MathOverflow)?;
        proposal.total_votes = proposal
            .total_votes
            .checked_add(weight)
            .ok_or(VotingError::MathOverflow)?;

        self.voter.points = self
            .voter
            .points
            .checked_sub(proposal.points)
            .ok_or(VotingError::MathOverflow)?;

        Ok(())
    }
}
