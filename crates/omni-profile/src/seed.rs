//! Seeded index derivation for template selection.

/// Deterministic pseudo-random index in `[0, pool_len)` derived from a name.
///
/// The name is trimmed and lowercased, then folded into an accumulator
/// seeded with `salt * 31`: each character contributes its Unicode scalar
/// value plus its position plus the salt. Characters are iterated as
/// Unicode scalar values (`str::chars`), applied uniformly for all inputs.
///
/// Returns 0 when the normalized name is empty or `pool_len` is 0, so the
/// function is total and the result is always a valid index for a
/// non-empty pool. Distinct salts decorrelate selections across pools for
/// the same name.
pub fn seeded_index(name: &str, pool_len: usize, salt: i64) -> usize {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() || pool_len == 0 {
        return 0;
    }

    let mut acc: i64 = salt.wrapping_mul(31);
    for (i, ch) in normalized.chars().enumerate() {
        acc = acc
            .wrapping_add(ch as i64)
            .wrapping_add(i as i64)
            .wrapping_add(salt);
    }

    (acc.unsigned_abs() % pool_len as u64) as usize
}
