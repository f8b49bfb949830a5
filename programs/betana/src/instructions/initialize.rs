use anchor_lang::prelude::*;

use crate::constants::BASE_ACCOUNT_SEED;
use crate::events::BaseAccountInitialized;
use crate::state::BaseAccount;
use crate::store;

/// Create the signer's bet account with an empty bet.
///
/// The account lives at `[BASE_ACCOUNT_SEED, user]`, so every bettor gets
/// their own storage and nobody can initialize an account for someone else.
/// Reinitializing is rejected by the store before any lamports move.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.user.key();
    let bump = ctx.bumps.base_account;
    let base_account = ctx.accounts.base_account.to_account_info();

    let signer_seeds: &[&[&[u8]]] = &[&[BASE_ACCOUNT_SEED, authority.as_ref(), &[bump]]];
    store::allocate(
        &ctx.accounts.user.to_account_info(),
        &base_account,
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
    )?;
    store::save(&base_account, &BaseAccount::new(authority, bump))?;

    emit!(BaseAccountInitialized {
        base_account: base_account.key(),
        authority,
    });
    msg!("Bet account {} initialized for {}", base_account.key(), authority);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: allocated by the handler; must still be vacant, see `store::allocate`
    #[account(
        mut,
        seeds = [BASE_ACCOUNT_SEED, user.key().as_ref()],
        bump
    )]
    pub base_account: UncheckedAccount<'info>,

    /// Bettor the account is bound to; pays the rent
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}
