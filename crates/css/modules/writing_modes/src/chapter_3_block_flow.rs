//! CSS Writing Modes Level 4 — §3 Introduction to Vertical Text (block flow direction)
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/#block-flow>

/// Value of the `writing-mode` property.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WritingMode {
    /// Horizontal-tb: inline direction is horizontal; block direction is top-to-bottom.
    #[default]
    HorizontalTb,
    /// Vertical-rl: inline direction is vertical, block advances to the left.
    VerticalRl,
    /// Vertical-lr: inline direction is vertical, block advances to the right.
    VerticalLr,
    /// Sideways-rl: like vertical-rl, with all glyphs set sideways.
    SidewaysRl,
    /// Sideways-lr: block advances to the right and the inline direction runs bottom-to-top.
    SidewaysLr,
}

impl WritingMode {
    pub const COUNT: usize = 5;
    pub const ALL: [Self; Self::COUNT] = [
        Self::HorizontalTb,
        Self::VerticalRl,
        Self::VerticalLr,
        Self::SidewaysRl,
        Self::SidewaysLr,
    ];

    /// Dense index, matching the order of [`Self::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse the keyword (ASCII case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(keyword))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalTb => "horizontal-tb",
            Self::VerticalRl => "vertical-rl",
            Self::VerticalLr => "vertical-lr",
            Self::SidewaysRl => "sideways-rl",
            Self::SidewaysLr => "sideways-lr",
        }
    }

    /// True when lines are horizontal (the inline axis is the x axis).
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }

    #[inline]
    pub const fn is_sideways(self) -> bool {
        matches!(self, Self::SidewaysRl | Self::SidewaysLr)
    }

    /// True when the block flow runs right-to-left.
    #[inline]
    pub const fn is_flipped_blocks(self) -> bool {
        matches!(self, Self::VerticalRl | Self::SidewaysRl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if keyword round-tripping fails for any writing mode.
    #[test]
    fn keywords_round_trip() {
        for mode in WritingMode::ALL {
            assert_eq!(WritingMode::from_keyword(mode.as_str()), Some(mode));
        }
        assert_eq!(
            WritingMode::from_keyword("Vertical-RL"),
            Some(WritingMode::VerticalRl)
        );
        assert_eq!(WritingMode::from_keyword("tb-rl"), None);
    }

    /// # Panics
    /// Panics if `ALL` disagrees with `index`.
    #[test]
    fn index_matches_all_order() {
        for (position, mode) in WritingMode::ALL.into_iter().enumerate() {
            assert_eq!(mode.index(), position);
        }
    }

    /// # Panics
    /// Panics if sideways or flipped-block classification is wrong.
    #[test]
    fn classification() {
        let sideways: Vec<WritingMode> =
            WritingMode::ALL.into_iter().filter(|mode| mode.is_sideways()).collect();
        assert_eq!(sideways, vec![WritingMode::SidewaysRl, WritingMode::SidewaysLr]);
        assert!(WritingMode::VerticalRl.is_flipped_blocks());
        assert!(!WritingMode::VerticalLr.is_flipped_blocks());
        assert!(!WritingMode::HorizontalTb.is_flipped_blocks());
    }
}
