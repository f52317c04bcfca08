use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Title must be at least 3 characters long")]
    TitleTooShort,

    #[msg("A proposal needs at least one option")]
    NotEnoughOptions,

    #[msg("Stake amount must be greater than 0 and within the unlocked balance")]
    InvalidStakeAmount,

    #[msg("Unstake period must be non-negative")]
    InvalidUnstakePeriod,

    #[msg("Authority does not match the one in config")]
    InvalidAuthority,

    #[msg("Effective voting weight is zero")]
    NoTokensStaked,

    #[msg("Voter does not have enough points for this proposal")]
    InsufficientPoints,

    #[msg("Stake can only be withdrawn after the unstake period")]
    UnstakingNotComplete,

    #[msg("Option index out of range or voting window closed")]
    InvalidOption,

    #[msg("Math overflow occurred")]
    MathOverflow,
}
