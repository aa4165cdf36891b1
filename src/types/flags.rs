/// Browser family bucket. Exactly one holds for any [`ClassificationFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    Opera,
    Mozilla,
    Msie,
    Netscape,
    /// None of the known markers matched; treated like IE.
    Unrecognized,
}

impl BrowserFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opera => "opera",
            Self::Mozilla => "mozilla",
            Self::Msie => "msie",
            Self::Netscape => "netscape",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Platform row of the selection table that applies to a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Unix,
    Unrecognized,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Unix => "unix",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Booleans derived from one user agent and app version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationFlags {
    pub is_opera: bool,
    pub is_opera_v7_plus: bool,
    pub is_mozilla_family: bool,
    pub is_msie: bool,
    pub is_msie_v4_plus: bool,
    pub is_netscape_like: bool,
    pub is_netscape_v4_plus: bool,
    pub is_windows: bool,
    pub is_mac: bool,
    pub is_unix: bool,
}

impl ClassificationFlags {
    /// True when no browser family marker was recognized.
    pub fn is_unrecognized_family(&self) -> bool {
        !self.is_netscape_like && !self.is_msie && !self.is_mozilla_family && !self.is_opera
    }

    /// Whether a stylesheet is selected at all.
    ///
    /// A recognized family below its version threshold fails the gate;
    /// an unrecognized one always passes.
    pub fn passes_gate(&self) -> bool {
        self.is_netscape_v4_plus
            || self.is_msie_v4_plus
            || self.is_mozilla_family
            || self.is_opera_v7_plus
            || self.is_unrecognized_family()
    }

    pub fn browser_family(&self) -> BrowserFamily {
        if self.is_mozilla_family {
            BrowserFamily::Mozilla
        } else if self.is_opera {
            BrowserFamily::Opera
        } else if self.is_msie {
            BrowserFamily::Msie
        } else if self.is_netscape_like {
            BrowserFamily::Netscape
        } else {
            BrowserFamily::Unrecognized
        }
    }

    /// `mac` overrides `win`. The Unix row only applies when neither matched.
    pub fn platform(&self) -> Platform {
        if self.is_mac {
            Platform::Mac
        } else if self.is_windows {
            Platform::Windows
        } else if self.is_unix {
            Platform::Unix
        } else {
            Platform::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flags_are_unrecognized_and_pass_gate() {
        let flags = ClassificationFlags::default();
        assert!(flags.is_unrecognized_family());
        assert!(flags.passes_gate());
        assert_eq!(flags.browser_family(), BrowserFamily::Unrecognized);
        assert_eq!(flags.platform(), Platform::Unrecognized);
    }

    #[test]
    fn old_recognized_family_fails_gate() {
        let flags = ClassificationFlags {
            is_msie: true,
            ..Default::default()
        };
        assert!(!flags.passes_gate());

        let flags = ClassificationFlags {
            is_opera: true,
            ..Default::default()
        };
        assert!(!flags.passes_gate());
    }

    #[test]
    fn platform_precedence() {
        let flags = ClassificationFlags {
            is_windows: true,
            is_mac: true,
            ..Default::default()
        };
        assert_eq!(flags.platform(), Platform::Mac);

        let flags = ClassificationFlags {
            is_mac: true,
            is_unix: true,
            ..Default::default()
        };
        assert_eq!(flags.platform(), Platform::Mac);

        let flags = ClassificationFlags {
            is_windows: true,
            is_unix: true,
            ..Default::default()
        };
        assert_eq!(flags.platform(), Platform::Windows);

        let flags = ClassificationFlags {
            is_unix: true,
            ..Default::default()
        };
        assert_eq!(flags.platform(), Platform::Unix);
    }
}
