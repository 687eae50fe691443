//! Ordering of the spacer/icon/text/spacer sequence inside a button row.
//!
//! [`arrange`] is a pure function over slot tags: it never touches a live
//! layout node. Applying the result is a separate step
//! ([`Node::reorder_children`](crate::layout::Node::reorder_children)).

use std::fmt;

use crate::alignment::{IconPlacement, TextAlignment};

/// One element of a button's content row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Stretchable empty space.
    Spacer,
    Icon,
    Text,
}

impl Slot {
    /// Short marker used in layout dumps.
    pub fn marker(&self) -> &'static str {
        match self {
            Slot::Spacer => "[<>]",
            Slot::Icon => "[i]",
            Slot::Text => "[t]",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Spacer => "spacer",
            Slot::Icon => "icon",
            Slot::Text => "text",
        }
    }
}

/// Left-to-right sequence of slots.
///
/// Displays compactly as `[<>][i][t][<>]`; [`SlotOrder::describe`] gives
/// the long form `spacer, icon, text, spacer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOrder(Vec<Slot>);

impl SlotOrder {
    /// The sequence a freshly built button starts from.
    pub fn initial() -> Self {
        SlotOrder(vec![Slot::Spacer, Slot::Icon, Slot::Text, Slot::Spacer])
    }

    pub fn as_slice(&self) -> &[Slot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn index_of(&self, slot: Slot) -> Option<usize> {
        self.0.iter().position(|s| *s == slot)
    }

    pub fn describe(&self) -> String {
        self.0.iter().map(Slot::name).collect::<Vec<_>>().join(", ")
    }

    fn remove_all(&mut self, slot: Slot) {
        self.0.retain(|s| *s != slot);
    }

    fn insert(&mut self, index: usize, slot: Slot) {
        let index = index.min(self.0.len());
        self.0.insert(index, slot);
    }
}

impl fmt::Display for SlotOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            f.write_str(slot.marker())?;
        }
        Ok(())
    }
}

impl FromIterator<Slot> for SlotOrder {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        SlotOrder(iter.into_iter().collect())
    }
}

impl From<Vec<Slot>> for SlotOrder {
    fn from(slots: Vec<Slot>) -> Self {
        SlotOrder(slots)
    }
}

/// Result of the text pass alone; the icon pass runs on top of it.
pub fn place_text(current: &[Slot], text: TextAlignment) -> SlotOrder {
    let mut order: SlotOrder = current.iter().copied().collect();
    order.remove_all(Slot::Icon);
    order.remove_all(Slot::Text);

    let index = match text {
        TextAlignment::Left => 0,
        TextAlignment::Right => order.len(),
        TextAlignment::Center => 1,
    };
    order.insert(index, Slot::Text);
    order
}

/// Places the icon into an order produced by [`place_text`].
pub fn place_icon(mut order: SlotOrder, icon: IconPlacement) -> SlotOrder {
    order.remove_all(Slot::Icon);
    // the text pass always inserts the text slot
    let text_index = order.index_of(Slot::Text).unwrap_or(0);

    let index = match icon {
        IconPlacement::PinnedLeft => 0,
        IconPlacement::PinnedRight => order.len(),
        IconPlacement::RelativeLeftOfText => text_index,
        IconPlacement::RelativeRightOfText => text_index + 1,
    };
    order.insert(index, Slot::Icon);
    order
}

/// Computes the new order of `current` for the given text alignment and
/// icon placement. Spacers keep their count; exactly one text and one icon
/// slot come out regardless of how many went in.
pub fn arrange(current: &[Slot], text: TextAlignment, icon: IconPlacement) -> SlotOrder {
    place_icon(place_text(current, text), icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: [TextAlignment; 3] = [
        TextAlignment::Left,
        TextAlignment::Center,
        TextAlignment::Right,
    ];
    const ICONS: [IconPlacement; 4] = [
        IconPlacement::RelativeLeftOfText,
        IconPlacement::RelativeRightOfText,
        IconPlacement::PinnedLeft,
        IconPlacement::PinnedRight,
    ];

    fn expected(text: TextAlignment, icon: IconPlacement) -> &'static str {
        use IconPlacement::*;
        use TextAlignment::*;
        match (text, icon) {
            (Left, RelativeLeftOfText) => "[i][t][<>][<>]",
            (Left, RelativeRightOfText) => "[t][i][<>][<>]",
            (Left, PinnedLeft) => "[i][t][<>][<>]",
            (Left, PinnedRight) => "[t][<>][<>][i]",
            (Center, RelativeLeftOfText) => "[<>][i][t][<>]",
            (Center, RelativeRightOfText) => "[<>][t][i][<>]",
            (Center, PinnedLeft) => "[i][<>][t][<>]",
            (Center, PinnedRight) => "[<>][t][<>][i]",
            (Right, RelativeLeftOfText) => "[<>][<>][i][t]",
            (Right, RelativeRightOfText) => "[<>][<>][t][i]",
            (Right, PinnedLeft) => "[i][<>][<>][t]",
            (Right, PinnedRight) => "[<>][<>][t][i]",
        }
    }

    #[test]
    fn every_combination_matches_table() {
        let start = SlotOrder::initial();
        for text in TEXTS {
            for icon in ICONS {
                let order = arrange(start.as_slice(), text, icon);
                assert_eq!(order.to_string(), expected(text, icon), "{text:?} / {icon:?}");
            }
        }
    }

    #[test]
    fn result_does_not_depend_on_previous_order() {
        for text in TEXTS {
            for icon in ICONS {
                let shuffled = [Slot::Text, Slot::Spacer, Slot::Spacer, Slot::Icon];
                assert_eq!(
                    arrange(&shuffled, text, icon),
                    arrange(SlotOrder::initial().as_slice(), text, icon)
                );
            }
        }
    }

    #[test]
    fn arranging_twice_is_idempotent() {
        for text in TEXTS {
            for icon in ICONS {
                let once = arrange(SlotOrder::initial().as_slice(), text, icon);
                let twice = arrange(once.as_slice(), text, icon);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn duplicates_collapse_to_single_slots() {
        let messy = [Slot::Icon, Slot::Text, Slot::Spacer, Slot::Icon, Slot::Spacer, Slot::Text];
        let order = arrange(&messy, TextAlignment::Center, IconPlacement::RelativeLeftOfText);
        assert_eq!(order.to_string(), "[<>][i][t][<>]");
    }

    #[test]
    fn text_pass_alone() {
        let start = SlotOrder::initial();
        assert_eq!(place_text(start.as_slice(), TextAlignment::Left).to_string(), "[t][<>][<>]");
        assert_eq!(place_text(start.as_slice(), TextAlignment::Right).to_string(), "[<>][<>][t]");
        assert_eq!(place_text(start.as_slice(), TextAlignment::Center).to_string(), "[<>][t][<>]");
    }

    #[test]
    fn center_without_spacers_clamps() {
        let order = arrange(&[Slot::Icon, Slot::Text], TextAlignment::Center, IconPlacement::PinnedRight);
        assert_eq!(order.to_string(), "[t][i]");
    }

    #[test]
    fn long_form() {
        assert_eq!(SlotOrder::initial().describe(), "spacer, icon, text, spacer");
    }
}
