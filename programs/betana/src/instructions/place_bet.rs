use anchor_lang::prelude::*;

use crate::errors::BetanaError;
use crate::events::BetPlaced;
use crate::state::Bet;
use crate::{store, transfer};

/// Escrow `amount` lamports from the bettor to the pool and record the bet.
///
/// Order matters: parameters are validated and the account is loaded before
/// the transfer, and the bet is written only after the transfer succeeded.
/// A failure at any step aborts the whole instruction, transfer included.
pub fn place_bet(
    ctx: Context<PlaceBet>,
    id_match: String,
    id_team: String,
    amount: u64,
) -> Result<()> {
    let from = ctx.accounts.from.to_account_info();
    let to = ctx.accounts.to.to_account_info();
    let base_info = ctx.accounts.base_account.to_account_info();

    let bet = Bet::new(id_match, id_team, amount, from.key());
    bet.validate()?;

    let mut base_account = store::load(&base_info)?;
    require_keys_eq!(base_account.authority, from.key(), BetanaError::Unauthorized);

    transfer::transfer_lamports(
        &ctx.accounts.system_program.to_account_info(),
        &from,
        &to,
        &base_info.key(),
        amount,
    )?;

    base_account.current_bet = bet;
    store::save(&base_info, &base_account)?;

    let bet = &base_account.current_bet;
    emit!(BetPlaced {
        base_account: base_info.key(),
        user: bet.user_address,
        to: to.key(),
        id_match: bet.id_match.clone(),
        id_team: bet.id_team.clone(),
        amount,
    });
    msg!(
        "Bet of {} lamports on match {} team {} sent to {}",
        amount,
        bet.id_match,
        bet.id_team,
        to.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    /// CHECK: owner, discriminator and authority are verified by the handler
    #[account(mut)]
    pub base_account: UncheckedAccount<'info>,

    /// CHECK: must sign; recorded as the bet's `user_address`
    #[account(mut, signer @ BetanaError::Unauthorized)]
    pub from: UncheckedAccount<'info>,

    /// CHECK: pool receiving the stake; vetted by `transfer::check_payee`
    #[account(mut)]
    pub to: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
