use std::fmt;

/// Case-insensitive, order-independent identity of two drug names.
///
/// Both names are lower-cased and the lexicographically *greater* one becomes
/// the first component, so `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        Self::from_lowercase(&a.to_lowercase(), &b.to_lowercase())
    }

    /// Both inputs must already be lower-cased.
    pub(crate) fn from_lowercase(a: &str, b: &str) -> Self {
        let (first, second) = if a >= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greater_name_comes_first() {
        let key = PairKey::new("Sildenafil", "Echinacea");
        assert_eq!(key.first(), "sildenafil");
        assert_eq!(key.second(), "echinacea");
        assert_eq!(key, PairKey::new("ECHINACEA", "sildenafil"));
    }

    #[test]
    fn identical_names_form_a_key() {
        let key = PairKey::new("Doxepin", "doxepin");
        assert_eq!(key.first(), "doxepin");
        assert_eq!(key.second(), "doxepin");
    }

    #[test]
    fn display_joins_components() {
        assert_eq!(PairKey::new("a", "b").to_string(), "b+a");
    }
}
