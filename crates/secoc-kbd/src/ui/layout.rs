//! Keypad geometry
//!
//! Layout constants live in an immutable `KeypadLayout` value rather than
//! module statics, so tests and alternative front ends can pass their own.

use ratatui::layout::Rect;

use crate::app::TapTarget;

/// Geometry of the two-row on-screen keyboard.
#[derive(Debug, Clone)]
pub struct KeypadLayout {
    /// Digit row, ten keys
    pub first_row: Vec<TapTarget>,

    /// Hex letter row plus backspace, seven keys
    pub second_row: Vec<TapTarget>,

    /// Rendered key height in terminal rows (including borders)
    pub key_height: u16,

    /// Gap between keys and rows
    pub key_padding: u16,

    /// Digits per colored candidate group
    pub group_size: usize,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        let first_row = "1234567890".chars().map(TapTarget::Key).collect();
        let second_row = "abcdef"
            .chars()
            .map(TapTarget::Key)
            .chain(std::iter::once(TapTarget::Backspace))
            .collect();

        Self {
            first_row,
            second_row,
            key_height: 3,
            key_padding: 1,
            group_size: 4,
        }
    }
}

impl KeypadLayout {
    /// Total height of the keyboard block.
    pub fn keyboard_height(&self) -> u16 {
        self.key_height * 2 + self.key_padding
    }

    /// Key rectangles for both rows within `area`, paired with their tap
    /// targets. Rows are laid out independently so the second row's keys
    /// are wider, like the original keypad.
    pub fn key_rects(&self, area: Rect) -> Vec<(TapTarget, Rect)> {
        let mut rects = row_rects(&self.first_row, area, area.y, self.key_height, self.key_padding);
        rects.extend(row_rects(
            &self.second_row,
            area,
            area.y + self.key_height + self.key_padding,
            self.key_height,
            self.key_padding,
        ));
        rects
    }
}

fn row_rects(
    row: &[TapTarget],
    area: Rect,
    y: u16,
    key_height: u16,
    key_padding: u16,
) -> Vec<(TapTarget, Rect)> {
    let count = row.len() as u16;
    if count == 0 || area.width <= (count + 1) * key_padding {
        return Vec::new();
    }

    let key_width = (area.width - (count + 1) * key_padding) / count;
    row.iter()
        .enumerate()
        .map(|(i, &target)| {
            let x = area.x + key_padding + (key_width + key_padding) * i as u16;
            (target, Rect::new(x, y, key_width, key_height))
        })
        .collect()
}

/// Create a fixed-size centered box
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Whether a terminal cell lies inside `rect`
pub fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_has_seventeen_keys() {
        let layout = KeypadLayout::default();
        let area = Rect::new(0, 20, 120, layout.keyboard_height());

        let rects = layout.key_rects(area);
        assert_eq!(rects.len(), 17);
        assert_eq!(
            rects.iter().filter(|(t, _)| *t == TapTarget::Backspace).count(),
            1
        );
    }

    #[test]
    fn test_key_rects_stay_inside_area_and_never_overlap() {
        let layout = KeypadLayout::default();
        let area = Rect::new(2, 10, 100, layout.keyboard_height());
        let rects = layout.key_rects(area);

        for (_, rect) in &rects {
            assert!(rect.x >= area.x);
            assert!(rect.x + rect.width <= area.x + area.width);
            assert!(rect.y + rect.height <= area.y + area.height);
        }

        for (i, (_, a)) in rects.iter().enumerate() {
            for (_, b) in rects.iter().skip(i + 1) {
                assert_eq!(a.intersection(*b).area(), 0, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_second_row_keys_are_wider() {
        let layout = KeypadLayout::default();
        let area = Rect::new(0, 0, 120, layout.keyboard_height());
        let rects = layout.key_rects(area);

        let first_width = rects[0].1.width;
        let second_width = rects[10].1.width;
        assert!(second_width > first_width);
    }

    #[test]
    fn test_tiny_area_yields_no_keys() {
        let layout = KeypadLayout::default();
        let rects = layout.key_rects(Rect::new(0, 0, 5, 7));
        assert!(rects.is_empty());
    }

    #[test]
    fn test_point_in_rect_edges() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(point_in_rect(10, 5, rect));
        assert!(point_in_rect(13, 6, rect));
        assert!(!point_in_rect(14, 5, rect));
        assert!(!point_in_rect(10, 7, rect));
    }
}
