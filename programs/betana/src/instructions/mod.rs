pub mod get_bet;
pub mod initialize;
pub mod place_bet;

pub use get_bet::*;
pub use initialize::*;
pub use place_bet::*;
