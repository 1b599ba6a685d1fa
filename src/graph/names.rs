//! Sequential zone names for synthetic graphs.

/// Generates unique names `A`, `B`, …, `Z`, then `AA`, `BB`, …, `ZZ`,
/// then `AAA`, and so on.
///
/// # Examples
///
/// ```
/// use u_relief::graph::NameGenerator;
///
/// let mut names = NameGenerator::new();
/// assert_eq!(names.next_name(), "A");
/// assert_eq!(names.nth(1).as_deref(), Some("C"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    counter: usize,
}

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl NameGenerator {
    /// Starts at `A`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next name in the sequence.
    pub fn next_name(&mut self) -> String {
        let repeat = self.counter / ALPHABET.len() + 1;
        let letter = char::from(ALPHABET[self.counter % ALPHABET.len()]);
        self.counter += 1;
        std::iter::repeat(letter).take(repeat).collect()
    }
}

impl Iterator for NameGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_name())
    }
}
