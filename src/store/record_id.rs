
/// Numbering scheme of one collection: prefix, zero padding and first number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdScheme {
    pub prefix: &'static str,
    pub width: usize,
    pub base: u32,
}

impl IdScheme {
    pub const fn new(prefix: &'static str, width: usize, base: u32) -> Self {
        Self { prefix, width, base }
    }

    pub fn format(&self, number: u32) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }

    /// Numeric suffix of `id`, or `None` if it does not follow this scheme.
    pub fn number(&self, id: &str) -> Option<u32> {
        let digits = id.strip_prefix(self.prefix)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}
