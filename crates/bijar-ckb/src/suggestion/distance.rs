// String distance and similarity over characters.

use std::cmp::min;

/// Levenshtein distance between two char slices (insertions, deletions and
/// substitutions, each costing one).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows are enough.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = min(min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Jaro similarity in `[0, 1]`.
pub fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = min(i + window + 1, b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Common prefix length counted by the Winkler boost.
const WINKLER_MAX_PREFIX: usize = 4;
/// Weight of each common prefix character.
const WINKLER_PREFIX_WEIGHT: f64 = 0.1;
/// The boost only applies above this Jaro similarity.
const WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Jaro-Winkler similarity in `[0, 1]`: Jaro similarity boosted by the
/// length of the common prefix.
pub fn jaro_winkler(a: &[char], b: &[char]) -> f64 {
    let sim = jaro(a, b);
    if sim <= WINKLER_BOOST_THRESHOLD {
        return sim;
    }
    let prefix = a
        .iter()
        .zip(b)
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    sim + prefix as f64 * WINKLER_PREFIX_WEIGHT * (1.0 - sim)
}
