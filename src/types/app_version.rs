/// Major version number reported by the host, separate from the User-Agent.
///
/// An absent version fails every threshold test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppVersion(Option<i64>);

impl AppVersion {
    pub const fn new(version: i64) -> Self {
        Self(Some(version))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<i64> {
        self.0
    }

    pub fn at_least(&self, threshold: i64) -> bool {
        self.0.is_some_and(|v| v >= threshold)
    }
}

impl From<i64> for AppVersion {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl From<i32> for AppVersion {
    fn from(v: i32) -> Self {
        Self::new(i64::from(v))
    }
}

impl From<u32> for AppVersion {
    fn from(v: u32) -> Self {
        Self::new(i64::from(v))
    }
}

impl From<Option<i64>> for AppVersion {
    fn from(v: Option<i64>) -> Self {
        Self(v)
    }
}
