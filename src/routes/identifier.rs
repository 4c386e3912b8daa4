use std::cmp::Ordering;

/// A parsed route code.
///
/// A code whose second segment does not start with digits parses to the
/// degenerate identifier: every field empty and `num == None`. Callers treat
/// it as unparseable (see [`RouteId::is_parsed`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteId {
    pub sys: String,
    /// Saturates at `u32::MAX` for oversized numbers.
    pub num: Option<u32>,
    /// Letters directly after the number (`A` in `US.20A`).
    pub suf1: String,
    /// Standalone suffix segment (`E` in `I.35.E`).
    pub suf2: String,
    /// Two-letter state qualifier.
    pub state: String,
    /// Digits following the state qualifier.
    pub index: String,
}

impl RouteId {
    /// Parse a dotted route code. Never fails.
    ///
    /// ```
    /// use county_roster::RouteId;
    ///
    /// let id = RouteId::parse("US.19E.TN2");
    /// assert_eq!(id.sys, "US");
    /// assert_eq!(id.num, Some(19));
    /// assert_eq!(id.suf1, "E");
    /// assert_eq!((id.state.as_str(), id.index.as_str()), ("TN", "2"));
    ///
    /// assert!(!RouteId::parse("Loop.A").is_parsed());
    /// ```
    pub fn parse(code: &str) -> Self {
        let mut segments = code.split('.');
        let sys = segments.next().unwrap_or_default();

        let Some(caps) = segments.next().and_then(|seg| regex!(r"^(\d+)(.*)$").captures(seg)) else {
            return RouteId::default();
        };
        // Digits only, so the parse can fail only by overflow.
        let num = caps[1].parse::<u32>().unwrap_or(u32::MAX);

        let mut id = RouteId { sys: sys.to_string(), num: Some(num), suf1: caps[2].to_string(), ..RouteId::default() };

        for seg in segments {
            if let Some(caps) = regex!(r"^([A-Z]{2})(\d*)$").captures(seg) {
                id.state = caps[1].to_string();
                id.index = caps[2].to_string();
            } else {
                // Single letters and anything unrecognized both land in suf2;
                // the last such segment wins.
                id.suf2 = seg.to_string();
            }
        }

        id
    }

    /// Whether the code had a numeric second segment.
    pub fn is_parsed(&self) -> bool {
        self.num.is_some()
    }
}

impl PartialOrd for RouteId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// System, then number (numerically, a missing number after any number),
/// then the suffixes, state and index. Empty strings sort before non-empty
/// ones, so degenerate identifiers come first.
impl Ord for RouteId {
    fn cmp(&self, other: &Self) -> Ordering {
        let num = match (self.num, other.num) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        self.sys
            .cmp(&other.sys)
            .then(num)
            .then_with(|| self.suf1.cmp(&other.suf1))
            .then_with(|| self.suf2.cmp(&other.suf2))
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.index.cmp(&other.index))
    }
}
