use rand::Rng;

/// AND of all eight bytes of `word`. A bit survives only if it is set in
/// every byte, so the result is almost always sparse.
pub fn sparse_byte(word: u64) -> u8 {
    word.to_le_bytes().iter().fold(0xFF, |acc, b| acc & b)
}

/// OR of all eight bytes of `word`. A bit is cleared only if it is clear in
/// every byte, so the result is almost always dense.
pub fn dense_byte(word: u64) -> u8 {
    word.to_le_bytes().iter().fold(0x00, |acc, b| acc | b)
}

/// Nudge one mask: set a few bits, then clear a few bits.
pub fn perturb_mask<R: Rng + ?Sized>(mask: u8, rng: &mut R) -> u8 {
    let set = sparse_byte(rng.gen::<u64>());
    let keep = dense_byte(rng.gen::<u64>());
    (mask | set) & keep
}

/// One draw with probability `1 / rarity`. A rarity of 0 or 1 always fires.
pub fn should_mutate<R: Rng + ?Sized>(rarity: u32, rng: &mut R) -> bool {
    rarity <= 1 || rng.gen_range(0..rarity) == 0
}
