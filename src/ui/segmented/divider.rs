// SPDX-License-Identifier: MPL-2.0
//! Separators between adjacent segments.

/// Thin separator drawn after the segment with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divider {
    visible: bool,
}

impl Divider {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Whether the divider after segment `index` should be drawn.
///
/// It is hidden when it is the trailing divider or when either neighbour is
/// selected, so a selected block merges with its neighbours.
#[must_use]
pub fn is_divider_visible(selected: &[bool], index: usize) -> bool {
    let is_last = index + 1 >= selected.len();
    if is_last {
        return false;
    }
    !selected[index] && !selected[index + 1]
}

/// Recomputes the visibility of every divider from the segments' selection.
pub fn update_visibility(dividers: &mut [Divider], selected: &[bool]) {
    for (index, divider) in dividers.iter_mut().enumerate() {
        divider.set_visible(is_divider_visible(selected, index));
    }
}
