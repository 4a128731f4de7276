//! Virtual stack of viewport-tall sections
//!
//! Section `i` occupies rows `i * h .. (i + 1) * h` where `h` is the body
//! height. The viewport is the scroll host handed to the navigator.

use snapdeck_core::report::VisibilityEntry;
use snapdeck_core::{ScrollConfig, ScrollHost};

use crate::scroll::{ScrollAnimator, ScrollTick};

#[derive(Debug, Clone)]
pub struct Viewport {
    animator: ScrollAnimator,
    section_count: usize,
    section_height: u16,
    /// Set when the last scroll request jumped without animating
    jumped: bool,
}

impl Viewport {
    pub fn new(section_count: usize, config: ScrollConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(config),
            section_count,
            section_height: 1,
            jumped: false,
        }
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn section_height(&self) -> u16 {
        self.section_height
    }

    /// Current scroll offset in rows
    pub fn offset(&self) -> u32 {
        self.animator.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Resize sections to `height` rows, keeping `anchor` at the top
    pub fn resize(&mut self, height: u16, anchor: usize) {
        let height = height.max(1);
        if height == self.section_height {
            return;
        }
        self.section_height = height;
        // A cut-short animation still counts as finished
        self.jumped |= self.animator.is_animating();
        self.animator.set_offset(self.section_top(anchor));
    }

    /// First row of section `index`
    pub fn section_top(&self, index: usize) -> u32 {
        index as u32 * self.section_height as u32
    }

    /// Advance the scroll animation by one frame
    ///
    /// An instant jump reports [`ScrollTick::Finished`] on the next frame so
    /// the navigator hears about completion either way.
    pub fn update(&mut self) -> ScrollTick {
        if std::mem::take(&mut self.jumped) {
            return ScrollTick::Finished;
        }
        self.animator.update()
    }

    /// Visible fraction of every section at the current offset
    pub fn visibility(&self) -> Vec<VisibilityEntry> {
        let height = self.section_height as u32;
        let view_top = self.offset();
        let view_bottom = view_top + height;

        (0..self.section_count)
            .map(|index| {
                let top = self.section_top(index);
                let bottom = top + height;
                let overlap = view_bottom.min(bottom).saturating_sub(view_top.max(top));
                VisibilityEntry {
                    index,
                    ratio: overlap as f64 / height as f64,
                }
            })
            .collect()
    }

    /// Sections intersecting the viewport, with the row at which each starts
    /// relative to the top of the viewport (negative when partially above)
    pub fn visible_sections(&self) -> Vec<(usize, i64)> {
        let view_top = self.offset() as i64;
        let height = self.section_height as i64;
        let first = (view_top / height) as usize;

        (first..self.section_count)
            .map(|index| (index, self.section_top(index) as i64 - view_top))
            .take_while(|&(_, rel)| rel < height)
            .collect()
    }
}

impl ScrollHost for Viewport {
    fn scroll_into_view(&mut self, index: usize) {
        let target = self.section_top(index);
        self.jumped = !self.animator.scroll_to(target);
    }
}
