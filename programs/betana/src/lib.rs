use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod store;
pub mod transfer;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod betana {
    use super::*;

    /// Create the caller's bet account at `[b"base-account", user]` with an empty bet.
    ///
    /// Fails with `AccountAlreadyExists` if the account is already in use, and
    /// with `AllocationFailed` if `user` cannot cover the rent-exempt minimum.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Move `amount` lamports from `from` to `to` and record the wager as the
    /// account's current bet. The recorded bettor is always the signer.
    pub fn place_bet(
        ctx: Context<PlaceBet>,
        id_match: String,
        id_team: String,
        amount: u64,
    ) -> Result<()> {
        instructions::place_bet(ctx, id_match, id_team, amount)
    }

    /// Return the current bet of an initialized account.
    pub fn get_bet(ctx: Context<GetBet>) -> Result<Bet> {
        instructions::get_bet(ctx)
    }
}
