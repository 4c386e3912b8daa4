use super::identifier::RouteId;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Class bucket of a route within its system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassKey {
    #[serde(rename = "I-main")]
    InterstateMain,
    #[serde(rename = "I-spur")]
    InterstateSpur,
    #[serde(rename = "US-main")]
    UsMain,
    #[serde(rename = "US-spur")]
    UsSpur,
    #[serde(rename = "other")]
    Other,
}

impl ClassKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClassKey::InterstateMain => "I-main",
            ClassKey::InterstateSpur => "I-spur",
            ClassKey::UsMain => "US-main",
            ClassKey::UsSpur => "US-spur",
            ClassKey::Other => "other",
        }
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a parsed route.
///
/// Interstates below 100 are mainlines. US routes up to and including 101
/// are mainlines (US 101 is the one three-digit exception). Other systems
/// and unparsed codes are [`ClassKey::Other`].
pub fn classify(id: &RouteId) -> ClassKey {
    match (id.sys.as_str(), id.num) {
        ("I", Some(num)) if num < 100 => ClassKey::InterstateMain,
        ("I", Some(_)) => ClassKey::InterstateSpur,
        ("US", Some(num)) if num <= 101 => ClassKey::UsMain,
        ("US", Some(_)) => ClassKey::UsSpur,
        _ => ClassKey::Other,
    }
}

/// Total order over route codes; see [`RouteId`]'s `Ord`.
///
/// ```
/// use county_roster::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("I.20", "I.20A"), Ordering::Less);
/// assert_eq!(compare("I.5", "I.40"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    RouteId::parse(a).cmp(&RouteId::parse(b))
}
