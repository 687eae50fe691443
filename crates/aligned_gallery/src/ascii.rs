use aligned_button::{AlignedButton, Rect};

/// Column span of `rect` once the button's width is mapped onto `columns`.
fn span(rect: Rect, origin: f32, scale: f32, columns: usize) -> (usize, usize) {
    let start = ((rect.x - origin) * scale).round().max(0.0) as usize;
    let end = ((rect.right() - origin) * scale).round().max(0.0) as usize;
    (start.min(columns), end.min(columns).max(start.min(columns)))
}

/// One-line picture of a laid-out button: `|` borders, the text spelled
/// over the columns it covers and `[i]` where the icon starts.
pub fn render(button: &AlignedButton, columns: usize) -> String {
    let mut line = vec![' '; columns];
    let origin = button.rect.x;
    let scale = if button.rect.width > 0.0 {
        columns as f32 / button.rect.width
    } else {
        0.0
    };

    let (start, end) = span(button.text_rect(), origin, scale, columns);
    for (cell, ch) in line[start..end].iter_mut().zip(button.text().chars()) {
        *cell = ch;
    }

    if !button.icon().is_null() && button.icon_rect().width > 0.0 {
        let (start, _) = span(button.icon_rect(), origin, scale, columns);
        for (cell, ch) in line.iter_mut().skip(start).zip("[i]".chars()) {
            *cell = ch;
        }
    }

    let mut out = String::with_capacity(columns + 2);
    out.push('|');
    out.extend(line);
    out.push('|');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aligned_button::{ButtonStyle, Icon};

    fn button(text: &str) -> AlignedButton {
        // 10 px per glyph, 20 px icon, 200 px wide: 1 column per 10 px
        let style = ButtonStyle::default()
            .with_font_size(10.0)
            .with_glyph_advance(1.0)
            .with_icon_size(glam::Vec2::splat(20.0));
        AlignedButton::new(Icon::arrow_right(), text)
            .with_style(style)
            .with_rect(0.0, 0.0, 200.0, 24.0)
    }

    #[test]
    fn pinned_left_text_right() {
        let mut b = button("abc");
        b.pin_icon_left(None);
        b.align_text_right(None);
        assert_eq!(render(&b, 20), "|[i]              abc|");
    }

    #[test]
    fn centred_relative_icon() {
        let mut b = button("abcd");
        b.align_icon_right();
        // text 40 px + icon 20 px, 140 px of spacers split evenly
        assert_eq!(render(&b, 20), "|       abcd[i]      |");
    }

    #[test]
    fn margin_shows_as_gap() {
        let mut b = button("ab");
        b.pin_icon_right(Some(10.0));
        b.align_text_left(Some(10.0));
        assert_eq!(render(&b, 20), "| ab              [i]|");
    }
}
