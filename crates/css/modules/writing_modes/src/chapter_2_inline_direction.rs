//! CSS Writing Modes Level 4 — §2 Inline Direction and Bidirectionality
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/#text-direction>

/// Value of the `direction` property.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextDirection {
    /// Left-to-right inline base direction.
    #[default]
    Ltr,
    /// Right-to-left inline base direction.
    Rtl,
}

impl TextDirection {
    pub const ALL: [Self; 2] = [Self::Ltr, Self::Rtl];

    /// Parse the `direction` keyword (ASCII case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(keyword))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[inline]
    pub const fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if direction keywords do not round-trip.
    #[test]
    fn keywords_round_trip() {
        for direction in TextDirection::ALL {
            assert_eq!(TextDirection::from_keyword(direction.as_str()), Some(direction));
        }
        assert_eq!(TextDirection::from_keyword("RTL"), Some(TextDirection::Rtl));
        assert_eq!(TextDirection::from_keyword("auto"), None);
    }
}
