//! Outcast detection: the noun least related to the others in a list.

use super::{WordNet, WordNetResult};

/// Finds the *outcast* of a list of nouns: the one maximizing the sum of
/// semantic distances to all the others.
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Outcast { wordnet }
    }

    /// Returns the outcast noun, or `None` for an empty list. Ties break
    /// to the earliest noun in the list. Pairs with no common ancestor
    /// contribute nothing to either sum.
    pub fn outcast<'n>(&self, nouns: &'n [String]) -> WordNetResult<Option<&'n str>> {
        let mut totals = vec![0usize; nouns.len()];

        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                if let Some(d) = self.wordnet.distance(&nouns[i], &nouns[j])? {
                    totals[i] += d;
                    totals[j] += d;
                }
            }
        }

        let mut best: Option<(usize, usize)> = None;
        for (i, &total) in totals.iter().enumerate() {
            if best.map_or(true, |(_, t)| total > t) {
                best = Some((i, total));
            }
        }

        Ok(best.map(|(i, _)| nouns[i].as_str()))
    }
}
