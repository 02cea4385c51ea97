use rand::seq::SliceRandom;

/// Reshuffle cap before the deterministic fallback kicks in.
const MAX_SHUFFLE_ATTEMPTS: usize = 10;

/// Produce a permutation of `word` that differs from it whenever the word has
/// at least two distinct letters. Words shorter than two letters, and words
/// made of a single repeated letter, come back unchanged since no differing
/// permutation exists for them.
pub fn scramble(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if letters.len() < 2 {
        return word.to_string();
    }

    let mut rng = rand::thread_rng();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(&mut rng);
        let shuffled: String = letters.iter().collect();
        if shuffled != word {
            return shuffled;
        }
    }

    // Every shuffle landed back on the original. Swap the first letter with
    // the first one that differs from it, which keeps the result a
    // permutation while breaking the identity.
    if let Some(i) = letters.iter().position(|&c| c != letters[0]) {
        letters.swap(0, i);
    }
    letters.iter().collect()
}
