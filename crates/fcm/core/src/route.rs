//! Token routing results.

/// Device tokens resolved for one recipient.
///
/// Routing may produce nothing, a single token or a list; [`into_vec`]
/// normalizes all three into an ordered list.
///
/// [`into_vec`]: Tokens::into_vec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tokens {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl Tokens {
    /// Normalize to an ordered token list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Tokens::None => Vec::new(),
            Tokens::Single(token) => vec![token],
            Tokens::Many(tokens) => tokens,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Tokens::None => true,
            Tokens::Single(_) => false,
            Tokens::Many(tokens) => tokens.is_empty(),
        }
    }
}

impl From<String> for Tokens {
    fn from(token: String) -> Self {
        Tokens::Single(token)
    }
}

impl From<&str> for Tokens {
    fn from(token: &str) -> Self {
        Tokens::Single(token.to_owned())
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Tokens::Many(tokens)
    }
}

impl From<Option<String>> for Tokens {
    fn from(token: Option<String>) -> Self {
        match token {
            Some(token) => Tokens::Single(token),
            None => Tokens::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_becomes_one_element_sequence() {
        let tokens: Tokens = "device-1".into();
        assert_eq!(tokens.into_vec(), vec!["device-1".to_owned()]);
    }

    #[test]
    fn test_none_is_empty() {
        assert!(Tokens::None.is_empty());
        assert!(Tokens::Many(Vec::new()).is_empty());
        assert!(Tokens::None.into_vec().is_empty());
    }

    #[test]
    fn test_many_preserves_order() {
        let tokens = Tokens::Many(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(
            tokens.into_vec(),
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
        );
    }
}
