use cosmwasm_std::Env;
use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128PlusPlus;
use sha2::{Digest, Sha256};

/// Draw seed for one exchange. Every input is public chain data, so the result is
/// unpredictable only to parties that cannot see the block before it is built.
pub fn random_seed(env: &Env, certificate_id: &str) -> u64 {
    let tx_index: u32 = if let Some(tx) = &env.transaction {
        tx.index
    } else {
        0
    };
    let sha256 = Sha256::digest(format!(
        "{}{}{}{}",
        env.block.height, env.block.time, tx_index, certificate_id
    ));
    let mut randomness = [0u8; 16];
    randomness.copy_from_slice(&sha256[0..16]);

    let mut rng = Xoshiro128PlusPlus::from_seed(randomness);
    rng.next_u64()
}

pub fn revealed_name(token_name: &str, suffix: u64) -> String {
    format!("{}: {}", token_name, suffix)
}
