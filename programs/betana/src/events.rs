use anchor_lang::prelude::*;

/// Emitted when a bettor's account is created.
#[event]
pub struct BaseAccountInitialized {
    pub base_account: Pubkey,
    pub authority: Pubkey,
}

/// Emitted when a bet is recorded and its lamports have moved to the pool.
#[event]
pub struct BetPlaced {
    pub base_account: Pubkey,
    pub user: Pubkey,
    pub to: Pubkey,
    pub id_match: String,
    pub id_team: String,
    pub amount: u64,
}
