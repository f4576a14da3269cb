use serde::{Deserialize, Serialize};

/// A message override: either one bare string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    One(String),
    Many(Vec<String>),
}

impl Messages {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(msg) => msg.is_empty(),
            Self::Many(list) => list.is_empty(),
        }
    }

    /// Normalize to a sequence.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(msg) => vec![msg.clone()],
            Self::Many(list) => list.clone(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<&str> for Messages {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

impl From<String> for Messages {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl From<Vec<String>> for Messages {
    fn from(list: Vec<String>) -> Self {
        Self::Many(list)
    }
}

impl From<Vec<&str>> for Messages {
    fn from(list: Vec<&str>) -> Self {
        Self::Many(list.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Messages {
    fn from(list: [&str; N]) -> Self {
        Self::Many(list.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_normalizes_to_one_element() {
        let m = Messages::from("bad");
        assert!(!m.is_empty());
        assert_eq!(m.to_vec(), vec!["bad".to_string()]);
    }

    #[test]
    fn test_empty_string_is_empty() {
        assert!(Messages::from("").is_empty());
    }

    #[test]
    fn test_default_is_empty_list() {
        assert!(Messages::default().is_empty());
        assert!(Messages::default().to_vec().is_empty());
    }
}
