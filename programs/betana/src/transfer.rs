use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::BetanaError;

/// Payee policy for bet escrow. `base_account` is the bettor's own bet
/// account, which must never receive the stake.
pub fn check_payee(
    payer: &Pubkey,
    payee: &Pubkey,
    base_account: &Pubkey,
    payee_executable: bool,
) -> Result<()> {
    require!(
        payee != payer && payee != base_account && *payee != Pubkey::default(),
        BetanaError::InvalidPayee
    );
    require!(!payee_executable, BetanaError::InvalidPayee);
    Ok(())
}

/// A credited payee must end up rent exempt; the runtime rejects any credit
/// that leaves an account rent-paying.
pub fn check_payee_rent(payee_balance: u64, amount: u64, rent_floor: u64) -> Result<()> {
    let credited = payee_balance
        .checked_add(amount)
        .ok_or(BetanaError::InvalidPayee)?;
    if credited < rent_floor {
        msg!("Payee would hold {} lamports, rent floor is {}", credited, rent_floor);
        return err!(BetanaError::InvalidPayee);
    }
    Ok(())
}

/// Debiting `amount` must leave the payer either empty or rent exempt.
/// Returns `error` otherwise, so each caller keeps its own error kind.
pub fn check_payer_remainder(
    balance: u64,
    amount: u64,
    rent_floor: u64,
    error: BetanaError,
) -> Result<()> {
    let Some(remaining) = balance.checked_sub(amount) else {
        msg!("Payer holds {} lamports, {} needed", balance, amount);
        return Err(error.into());
    };
    if remaining != 0 && remaining < rent_floor {
        msg!("Payer would keep {} lamports, rent floor is {}", remaining, rent_floor);
        return Err(error.into());
    }
    Ok(())
}

/// Move `amount` lamports from `from` to `to` through the System Program.
///
/// All checks run before the CPI; the transfer itself only commits with the
/// calling instruction.
pub fn transfer_lamports<'info>(
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    base_account: &Pubkey,
    amount: u64,
) -> Result<()> {
    require!(from.is_signer, BetanaError::Unauthorized);
    check_payee(from.key, to.key, base_account, to.executable)?;

    let rent = Rent::get()?;
    check_payee_rent(to.lamports(), amount, rent.minimum_balance(to.data_len()))?;
    check_payer_remainder(
        from.lamports(),
        amount,
        rent.minimum_balance(from.data_len()),
        BetanaError::InsufficientFunds,
    )?;

    let cpi_ctx = CpiContext::new(
        system_program.clone(),
        Transfer {
            from: from.clone(),
            to: to.clone(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}
