pub mod config;
pub mod proposal;
pub mod vote;
pub mod voter;

pub use config::*;
pub use proposal::*;
pub use vote::*;
pub use voter::*;
