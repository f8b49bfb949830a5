use anchor_lang::prelude::*;

use crate::constants::{BASE_ACCOUNT_SEED, MAX_IDENTIFIER_LEN};
use crate::errors::BetanaError;

/// A single wager. `user_address` is copied from the transaction signer.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bet {
    pub id_match: String,
    pub id_team: String,
    pub amount: u64,
    pub user_address: Pubkey,
}

impl Bet {
    /// Borsh size of a bet with both identifiers at their maximum length.
    pub const LEN: usize = (4 + MAX_IDENTIFIER_LEN) // id_match
        + (4 + MAX_IDENTIFIER_LEN) // id_team
        + 8 // amount
        + 32; // user_address

    pub fn new(id_match: String, id_team: String, amount: u64, user_address: Pubkey) -> Self {
        Self {
            id_match,
            id_team,
            amount,
            user_address,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            valid_identifier(&self.id_match) && valid_identifier(&self.id_team),
            BetanaError::InvalidBetParameters
        );
        require!(self.amount > 0, BetanaError::InvalidBetParameters);
        Ok(())
    }

    /// True until the first bet is placed on the account.
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

fn valid_identifier(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_IDENTIFIER_LEN
}

/// Per-bettor account holding the live bet.
///
/// Lives at the PDA `[BASE_ACCOUNT_SEED, authority]` and is sized for the
/// largest valid bet, so overwrites never need a realloc.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct BaseAccount {
    /// Bettor this account is bound to
    pub authority: Pubkey,
    /// Canonical bump of the account PDA
    pub bump: u8,
    pub current_bet: Bet,
}

impl BaseAccount {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        1 + // bump
        Bet::LEN; // current_bet

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            bump,
            current_bet: Bet::default(),
        }
    }

    /// PDA and bump of the bet account owned by `authority`.
    pub fn address(authority: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BASE_ACCOUNT_SEED, authority.as_ref()], &crate::ID)
    }
}
