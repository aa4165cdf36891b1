use aho_corasick::AhoCorasick;

use crate::error::Result;

/// Substrings the classifier looks for in a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Opera,
    Gecko,
    Msie,
    Mozilla,
    Win,
    Mac,
    X11,
}

impl Marker {
    /// Pattern order matches the automaton's pattern IDs.
    const ALL: [Marker; 7] = [
        Self::Opera,
        Self::Gecko,
        Self::Msie,
        Self::Mozilla,
        Self::Win,
        Self::Mac,
        Self::X11,
    ];

    fn pattern(&self) -> &'static str {
        match self {
            Self::Opera => "opera",
            Self::Gecko => "gecko",
            Self::Msie => "msie",
            Self::Mozilla => "mozilla",
            Self::Win => "win",
            Self::Mac => "mac",
            Self::X11 => "x11",
        }
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Set of markers found in one user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Markers(u8);

impl Markers {
    pub fn contains(&self, marker: Marker) -> bool {
        self.0 & marker.bit() != 0
    }

    fn insert(&mut self, marker: Marker) {
        self.0 |= marker.bit();
    }

    fn is_complete(&self) -> bool {
        Marker::ALL.iter().all(|m| self.contains(*m))
    }
}

/// Case-insensitive single-pass scanner for all markers.
///
/// Overlapping search is required: `darwin` must still report `win` and a
/// marker inside another marker's match must not be skipped.
pub(crate) struct MarkerScanner {
    automaton: AhoCorasick,
}

impl MarkerScanner {
    pub fn build() -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(Marker::ALL.iter().map(|m| m.pattern()))?;
        Ok(Self { automaton })
    }

    pub fn scan(&self, ua: &str) -> Markers {
        let mut found = Markers::default();
        for m in self.automaton.find_overlapping_iter(ua) {
            found.insert(Marker::ALL[m.pattern().as_usize()]);
            if found.is_complete() {
                break;
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(ua: &str) -> Markers {
        MarkerScanner::build().unwrap().scan(ua)
    }

    #[test]
    fn matches_case_insensitively() {
        let found = scan("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)");
        assert!(found.contains(Marker::Mozilla));
        assert!(found.contains(Marker::Msie));
        assert!(found.contains(Marker::Win));
        assert!(!found.contains(Marker::Gecko));
        assert!(!found.contains(Marker::Mac));
    }

    #[test]
    fn finds_markers_inside_words() {
        let found = scan("Mozilla/5.0 (Macintosh; PPC Mac OS X; Darwin)");
        assert!(found.contains(Marker::Mac));
        assert!(found.contains(Marker::Win));
    }

    #[test]
    fn empty_input_has_no_markers() {
        assert_eq!(scan(""), Markers::default());
    }
}
