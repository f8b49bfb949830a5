/// Seed prefix of every bet account PDA: `[BASE_ACCOUNT_SEED, authority]`.
pub const BASE_ACCOUNT_SEED: &[u8] = b"base-account";

/// Upper bound, in bytes, for `id_match` and `id_team`.
pub const MAX_IDENTIFIER_LEN: usize = 32;
