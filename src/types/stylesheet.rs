use serde::{Deserialize, Serialize};

/// One of the fixed stylesheets a page can be served with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylesheetChoice {
    WinNs,
    WinIe,
    MacNs,
    MacIe,
    Unix,
    Mozilla,
}

impl StylesheetChoice {
    pub const ALL: [StylesheetChoice; 6] = [
        Self::WinNs,
        Self::WinIe,
        Self::MacNs,
        Self::MacIe,
        Self::Unix,
        Self::Mozilla,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "win_ns" => Some(Self::WinNs),
            "win_ie" => Some(Self::WinIe),
            "mac_ns" => Some(Self::MacNs),
            "mac_ie" => Some(Self::MacIe),
            "unix" => Some(Self::Unix),
            "mozilla" => Some(Self::Mozilla),
            _ => None,
        }
    }

    /// Resource identifier, also the stylesheet's file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WinNs => "win_ns",
            Self::WinIe => "win_ie",
            Self::MacNs => "mac_ns",
            Self::MacIe => "mac_ie",
            Self::Unix => "unix",
            Self::Mozilla => "mozilla",
        }
    }
}

impl std::fmt::Display for StylesheetChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
