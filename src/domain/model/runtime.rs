use serde::{Deserialize, Serialize};
use std::fmt;

/// Movie duration as it appears in the catalog file (e.g. `2h 22m`).
///
/// The raw text is canonical and always kept; `minutes()` is a best-effort reading of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Runtime(String);

impl Runtime {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Total minutes for the shapes `2h 22m`, `2h`, `45m`, `142 min` and `142`.
    pub fn minutes(&self) -> Option<u32> {
        let s = self.0.trim().to_lowercase();
        if s.is_empty() {
            return None;
        }
        if let Ok(n) = s.parse::<u32>() {
            return Some(n);
        }
        if let Some(n) = s.strip_suffix("min").or_else(|| s.strip_suffix("mins")) {
            return n.trim().parse::<u32>().ok();
        }

        let mut total: u32 = 0;
        let mut seen_unit = false;
        for part in s.split_whitespace() {
            let (num, mult) = if let Some(h) = part.strip_suffix('h') {
                (h, 60)
            } else if let Some(m) = part.strip_suffix('m') {
                (m, 1)
            } else {
                return None;
            };
            let n = num.parse::<u32>().ok()?;
            total = total.checked_add(n.checked_mul(mult)?)?;
            seen_unit = true;
        }
        seen_unit.then_some(total)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Runtime {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Runtime;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(Runtime::from("2h 22m").minutes(), Some(142));
        assert_eq!(Runtime::from("3h").minutes(), Some(180));
        assert_eq!(Runtime::from("45m").minutes(), Some(45));
    }

    #[test]
    fn parses_plain_minutes() {
        assert_eq!(Runtime::from("142").minutes(), Some(142));
        assert_eq!(Runtime::from("142 min").minutes(), Some(142));
        assert_eq!(Runtime::from(" 96min ").minutes(), Some(96));
    }

    #[test]
    fn unknown_shapes_keep_raw_text() {
        let r = Runtime::from("about two hours");
        assert_eq!(r.minutes(), None);
        assert_eq!(r.as_str(), "about two hours");
        assert_eq!(Runtime::from("").minutes(), None);
    }
}
