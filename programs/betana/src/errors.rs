use anchor_lang::prelude::*;

#[error_code]
pub enum BetanaError {
    #[msg("Bet account already initialized")]
    AccountAlreadyExists,

    #[msg("Bet account not initialized")]
    AccountNotFound,

    #[msg("Bet identifiers must be non-empty and amount positive")]
    InvalidBetParameters,

    #[msg("Signer is not authorized for this bet account")]
    Unauthorized,

    #[msg("Payer balance is lower than the bet amount")]
    InsufficientFunds,

    #[msg("Payee address is not allowed")]
    InvalidPayee,

    #[msg("Payer cannot fund bet account storage")]
    AllocationFailed,
}
