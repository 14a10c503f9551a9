use super::coin_set::Coin;

/// Scores how "friendly" a remainder is for the steps that follow.
///
/// The score is the largest denomination that divides `remainder` evenly, or
/// `0` when none does. A remainder of zero is divisible by everything, so it
/// scores the largest denomination. Zero denominations are skipped.
///
/// # Examples
///
/// ```
/// use greedy_change::remainder_quality;
///
/// assert_eq!(remainder_quality(&[6, 4], 4), 4);
/// assert_eq!(remainder_quality(&[6, 4], 6), 6);
/// assert_eq!(remainder_quality(&[6, 4], 5), 0);
/// assert_eq!(remainder_quality(&[6, 4], 0), 6);
/// ```
pub fn remainder_quality(denominations: &[Coin], remainder: Coin) -> Coin {
    denominations
        .iter()
        .copied()
        .filter(|&d| d != 0 && remainder % d == 0)
        .max()
        .unwrap_or(0)
}
