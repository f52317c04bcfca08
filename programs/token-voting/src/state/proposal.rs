use anchor_lang::prelude::*;

#[account]
pub struct Proposal {
    pub id: u16,
    /// Minimum aggregate weight for the proposal to be considered passed.
    /// Bookkeeping only; finalization happens off-chain.
    pub quorum_votes: u64,
    /// Aggregate weight cast across all options.
    pub total_votes: u64,
    pub created_ts: i64,
    /// Voting closes at this timestamp.
    pub ending_ts: i64,
    /// Point cost charged to a voter's budget per vote.
    pub points: u64,
    pub bump: u8,
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    /// Weight accumulators, same length and order as `options`.
    pub option_votes: Vec<u64>,
}

impl Proposal {
    /// Account size for the given descriptive text; sized per proposal since
    /// titles, descriptions and options are unbounded at the type level.
    pub fn space(title: &str, description: &str, options: &[String]) -> usize {
        Proposal::DISCRIMINATOR.len()
            + 2 // id
            + 8 // quorum_votes
            + 8 // total_votes
            + 8 // created_ts
            + 8 // ending_ts
            + 8 // points
            + 1 // bump
            + 4 + title.len()
            + 4 + description.len()
            + 4 + options.iter().map(|s| 4 + s.len()).sum::<usize>()
            + 4 + options.len() * 8
    }
}
