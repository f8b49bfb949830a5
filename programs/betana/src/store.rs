//! Program-owned storage for [`BaseAccount`].
//!
//! The runtime gives an instruction exclusive write access to every
//! writable account it names, so each helper here is a single pass over
//! the account with no locking of its own.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    self, Allocate, Assign, CreateAccount, Transfer,
};

use crate::errors::BetanaError;
use crate::state::BaseAccount;
use crate::transfer;

/// True when `target` is still an empty, system-owned address.
pub fn is_vacant(target: &AccountInfo) -> bool {
    *target.owner == system_program::ID && target.data_is_empty()
}

/// Create `BaseAccount::LEN` bytes of program-owned, rent-exempt storage at
/// the PDA `target`, paid by `payer`.
///
/// Used instead of Anchor's `init` constraint so an occupied address fails
/// with `AccountAlreadyExists` and an underfunded payer with
/// `AllocationFailed`, rather than a System Program error.
///
/// An address that was pre-funded but never allocated is topped up and
/// claimed instead of created, since `create_account` refuses any address
/// holding lamports.
pub fn allocate<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    require!(is_vacant(target), BetanaError::AccountAlreadyExists);

    let rent = Rent::get()?;
    let required = rent.minimum_balance(BaseAccount::LEN);
    let shortfall = required.saturating_sub(target.lamports());
    transfer::check_payer_remainder(
        payer.lamports(),
        shortfall,
        rent.minimum_balance(payer.data_len()),
        BetanaError::AllocationFailed,
    )?;

    if target.lamports() == 0 {
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.clone(),
            CreateAccount {
                from: payer.clone(),
                to: target.clone(),
            },
            signer_seeds,
        );
        return system_program::create_account(
            cpi_ctx,
            required,
            BaseAccount::LEN as u64,
            &crate::ID,
        );
    }

    if shortfall > 0 {
        let cpi_ctx = CpiContext::new(
            system_program.clone(),
            Transfer {
                from: payer.clone(),
                to: target.clone(),
            },
        );
        system_program::transfer(cpi_ctx, shortfall)?;
    }

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.clone(),
        Allocate {
            account_to_allocate: target.clone(),
        },
        signer_seeds,
    );
    system_program::allocate(cpi_ctx, BaseAccount::LEN as u64)?;

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.clone(),
        Assign {
            account_to_assign: target.clone(),
        },
        signer_seeds,
    );
    system_program::assign(cpi_ctx, &crate::ID)
}

/// Read the bet account stored at `info`.
pub fn load(info: &AccountInfo) -> Result<BaseAccount> {
    if *info.owner != crate::ID || info.data_is_empty() {
        return err!(BetanaError::AccountNotFound);
    }
    let data = info.try_borrow_data()?;
    decode(&data[..])
}

/// Write `account` into the storage at `info`.
pub fn save(info: &AccountInfo, account: &BaseAccount) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    encode(account, &mut data[..])
}

/// Deserialize raw account data, checking the discriminator.
pub fn decode(data: &[u8]) -> Result<BaseAccount> {
    let mut buf = data;
    BaseAccount::try_deserialize(&mut buf)
}

/// Serialize `account` into `dst`, zeroing whatever follows it.
pub fn encode(account: &BaseAccount, dst: &mut [u8]) -> Result<()> {
    let mut buf = Vec::with_capacity(BaseAccount::LEN);
    account.try_serialize(&mut buf)?;
    if buf.len() > dst.len() {
        return Err(anchor_lang::error::ErrorCode::AccountDidNotSerialize.into());
    }

    let (head, tail) = dst.split_at_mut(buf.len());
    head.copy_from_slice(&buf);
    tail.fill(0);
    Ok(())
}
