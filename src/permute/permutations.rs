/// All distinct orderings of a string's characters, lazily and in
/// lexicographic order.
///
/// The buffer starts sorted and steps to its successor on each turn:
/// find the rightmost ascent, swap it with the smallest larger character
/// behind it, reverse the tail. Nothing is materialized beyond the one
/// buffer, so "abcdefghij" costs no more to start than "ab". Repeated
/// characters collapse naturally, because equal buffers have equal
/// successors: "aab" yields three orderings, not six.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<char>>,
}

/// str construction; the input's own ordering is not privileged
impl From<&str> for Permutations {
    fn from(word: &str) -> Self {
        let mut chars = word.chars().collect::<Vec<char>>();
        chars.sort_unstable();
        Self { next: Some(chars) }
    }
}

impl Iterator for Permutations {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.as_ref()?.iter().collect::<String>();
        self.advance();
        Some(current)
    }
}

impl Permutations {
    /// step to the lexicographic successor; a fully descending buffer
    /// is the last ordering
    fn advance(&mut self) {
        let Some(buffer) = self.next.as_mut() else {
            return;
        };
        let Some(pivot) = buffer.windows(2).rposition(|pair| pair[0] < pair[1]) else {
            self.next = None;
            return;
        };
        let above = buffer
            .iter()
            .rposition(|c| *c > buffer[pivot])
            .expect("the ascent guarantees a larger tail character");
        buffer.swap(pivot, above);
        buffer[pivot + 1..].reverse();
    }
}
