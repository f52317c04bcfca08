pub mod cancel_unstake;
pub mod cast_vote;
pub mod create_proposal;
pub mod decrease_stake;
pub mod increase_stake;
pub mod initialize_config;
pub mod initialize_voter;
pub mod withdraw_stake;

pub use cancel_unstake::*;
pub use cast_vote::*;
pub use create_proposal::*;
pub use decrease_stake::*;
pub use increase_stake::*;
pub use initialize_config::*;
pub use initialize_voter::*;
pub use withdraw_stake::*;
