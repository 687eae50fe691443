use std::str::FromStr;

use thiserror::Error;

use crate::layout::Alignment;

/// Raised when an alignment value falls outside what a setting accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("unsupported {context} alignment: {value}")]
    InvalidAlignment {
        value: String,
        context: &'static str,
    },
}

impl AlignError {
    fn invalid(value: impl Into<String>, context: &'static str) -> Self {
        AlignError::InvalidAlignment {
            value: value.into(),
            context,
        }
    }
}

impl FromStr for Alignment {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" | "top" => Ok(Alignment::Start),
            "center" | "centre" => Ok(Alignment::Center),
            "end" | "right" | "bottom" => Ok(Alignment::End),
            "stretch" => Ok(Alignment::Stretch),
            other => Err(AlignError::invalid(other, "layout")),
        }
    }
}

/// Horizontal placement of the text inside the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlignment {
    Left,
    Right,
    #[default]
    Center,
}

impl TryFrom<Alignment> for TextAlignment {
    type Error = AlignError;

    fn try_from(value: Alignment) -> Result<Self, Self::Error> {
        match value {
            Alignment::Start => Ok(TextAlignment::Left),
            Alignment::Center => Ok(TextAlignment::Center),
            Alignment::End => Ok(TextAlignment::Right),
            Alignment::Stretch => Err(AlignError::invalid("stretch", "horizontal text")),
        }
    }
}

impl FromStr for TextAlignment {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Ok(TextAlignment::Left),
            "right" | "end" => Ok(TextAlignment::Right),
            "center" | "centre" => Ok(TextAlignment::Center),
            other => Err(AlignError::invalid(other, "horizontal text")),
        }
    }
}

/// Vertical placement of the text inside its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl TryFrom<Alignment> for VerticalAlignment {
    type Error = AlignError;

    fn try_from(value: Alignment) -> Result<Self, Self::Error> {
        match value {
            Alignment::Start => Ok(VerticalAlignment::Top),
            Alignment::Center => Ok(VerticalAlignment::Center),
            Alignment::End => Ok(VerticalAlignment::Bottom),
            Alignment::Stretch => Err(AlignError::invalid("stretch", "vertical text")),
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "start" => Ok(VerticalAlignment::Top),
            "center" | "centre" => Ok(VerticalAlignment::Center),
            "bottom" | "end" => Ok(VerticalAlignment::Bottom),
            other => Err(AlignError::invalid(other, "vertical text")),
        }
    }
}

/// Which side of the text (or of the button, when pinned) the icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IconSide {
    #[default]
    Left,
    Right,
}

impl FromStr for IconSide {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Ok(IconSide::Left),
            "right" | "end" => Ok(IconSide::Right),
            other => Err(AlignError::invalid(other, "icon")),
        }
    }
}

/// Where the icon ends up, derived from its side and pin flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IconPlacement {
    #[default]
    RelativeLeftOfText,
    RelativeRightOfText,
    PinnedLeft,
    PinnedRight,
}

impl IconPlacement {
    pub fn new(side: IconSide, pinned: bool) -> Self {
        match (side, pinned) {
            (IconSide::Left, false) => IconPlacement::RelativeLeftOfText,
            (IconSide::Right, false) => IconPlacement::RelativeRightOfText,
            (IconSide::Left, true) => IconPlacement::PinnedLeft,
            (IconSide::Right, true) => IconPlacement::PinnedRight,
        }
    }

    pub fn side(&self) -> IconSide {
        match self {
            IconPlacement::RelativeLeftOfText | IconPlacement::PinnedLeft => IconSide::Left,
            IconPlacement::RelativeRightOfText | IconPlacement::PinnedRight => IconSide::Right,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, IconPlacement::PinnedLeft | IconPlacement::PinnedRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_is_rejected_for_text() {
        let err = TextAlignment::try_from(Alignment::Stretch).unwrap_err();
        assert!(matches!(err, AlignError::InvalidAlignment { .. }));
        assert!(VerticalAlignment::try_from(Alignment::Stretch).is_err());
        assert_eq!(TextAlignment::try_from(Alignment::End), Ok(TextAlignment::Right));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Left".parse::<TextAlignment>(), Ok(TextAlignment::Left));
        assert_eq!(" centre ".parse::<TextAlignment>(), Ok(TextAlignment::Center));
        assert_eq!("bottom".parse::<VerticalAlignment>(), Ok(VerticalAlignment::Bottom));
        assert_eq!("end".parse::<IconSide>(), Ok(IconSide::Right));

        let err = "justify".parse::<TextAlignment>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported horizontal text alignment: justify");
    }

    #[test]
    fn placement_round_trips_side_and_pin() {
        for side in [IconSide::Left, IconSide::Right] {
            for pinned in [false, true] {
                let placement = IconPlacement::new(side, pinned);
                assert_eq!(placement.side(), side);
                assert_eq!(placement.is_pinned(), pinned);
            }
        }
        assert_eq!(IconPlacement::default(), IconPlacement::RelativeLeftOfText);
    }
}
