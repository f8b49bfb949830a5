use anchor_lang::prelude::*;

use crate::state::Bet;
use crate::store;

pub fn get_bet(ctx: Context<GetBet>) -> Result<Bet> {
    let base_account = store::load(&ctx.accounts.base_account.to_account_info())?;
    Ok(base_account.current_bet)
}

#[derive(Accounts)]
pub struct GetBet<'info> {
    /// CHECK: read through `store::load`, which checks owner and discriminator
    pub base_account: UncheckedAccount<'info>,
}
