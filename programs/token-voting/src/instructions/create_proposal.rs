use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VotingError;
use crate::state::{Config, Proposal};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateProposalArgs {
    pub quorum_votes: u64,
    pub ending_ts: i64,
    pub points: u64,
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
}

#[derive(Accounts)]
#[instruction(args: CreateProposalArgs)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ VotingError::InvalidAuthority,
    )]
    pub config: Account<'info, Config>,

    // Seeded by the counter, so proposal ids are dense and sequential
    #[account(
        init,
        payer = authority,
        space = Proposal::space(&args.title, &args.description, &args.options),
        seeds = [PROPOSAL_SEED, config.next_proposal_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(
        &mut self,
        args: CreateProposalArgs,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        let CreateProposalArgs {
            quorum_votes,
            ending_ts,
            points,
            title,
            description,
            options,
        } = args;

        require!(title.len() >= MIN_TITLE_LEN, VotingError::TitleTooShort);
        require!(!options.is_empty(), VotingError::NotEnoughOptions);

        let config = &mut self.config;
        let options_len = options.len();

        self.proposal.set_inner(Proposal {
            id: config.next_proposal_id,
            quorum_votes,
            total_votes: 0,
            created_ts: Clock::get()?.unix_timestamp,
            ending_ts,
            points,
            bump: bumps.proposal,
            title,
            description,
            options,
            option_votes: vec![0; options_len],
        });

        config.next_proposal_id = config
            .next_proposal_id
            .checked_add(1)
            .ok_or(VotingError::MathOverflow)?;

        Ok(())
    }
}
