//! Screen layout and mouse hit testing
//!
//! Rendering and click handling both derive their rectangles from
//! [`DeckLayout`], so what is drawn is what can be clicked.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use snapdeck_core::NavLink;
use unicode_width::UnicodeWidthStr;

/// Gap between nav bar entries
pub const NAV_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckLayout {
    pub nav: Rect,
    pub progress: Rect,
    pub body: Rect,
    pub dots: Option<Rect>,
    pub status: Rect,
}

impl DeckLayout {
    pub fn new(area: Rect, show_dots: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (body, dots) = if show_dots {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(3)])
                .split(rows[2]);
            (columns[0], Some(columns[1]))
        } else {
            (rows[2], None)
        };

        Self {
            nav: rows[0],
            progress: rows[1],
            body,
            dots,
            status: rows[3],
        }
    }
}

/// Areas of the nav bar links, laid out after the deck title
pub fn nav_link_areas(nav: Rect, title: &str, links: &[NavLink]) -> Vec<Rect> {
    let right = nav.x.saturating_add(nav.width);
    let mut x = nav.x.saturating_add(title.width() as u16 + 2);
    let mut areas = Vec::with_capacity(links.len());

    for link in links {
        x = x.saturating_add(NAV_GAP);
        let width = link.label.width() as u16;
        let visible = width.min(right.saturating_sub(x));
        areas.push(Rect::new(x, nav.y, visible, 1));
        x = x.saturating_add(width);
    }
    areas
}

/// One row per dot, vertically centered in the dots column
///
/// When there are more sections than rows, a window of dots scrolls so that
/// `active` stays in view. Each entry carries the section it stands for.
pub fn dot_areas(dots: Rect, count: usize, active: usize) -> Vec<(usize, Rect)> {
    let shown = count.min(dots.height as usize);
    let first = active.saturating_sub(shown / 2).min(count - shown);
    let top = dots.y + (dots.height - shown as u16) / 2;
    (0..shown)
        .map(|row| (first + row, Rect::new(dots.x + 1, top + row as u16, 1, 1)))
        .collect()
}

/// Centered popup for the section menu
pub fn menu_area(area: Rect, links: &[NavLink]) -> Rect {
    let longest = links.iter().map(|l| l.label.width()).max().unwrap_or(0) as u16;
    let width = (longest + 6).max(20).min(area.width);
    let height = (links.len() as u16 + 2).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Rows of the menu entries inside the popup border
pub fn menu_entry_areas(menu: Rect, count: usize) -> Vec<Rect> {
    let inner_height = menu.height.saturating_sub(2);
    (0..(count as u16).min(inner_height))
        .map(|i| Rect::new(menu.x + 1, menu.y + 1 + i, menu.width.saturating_sub(2), 1))
        .collect()
}

/// Something a mouse click can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLink(usize),
    MenuLink(usize),
    Dot(usize),
}

/// Clickable regions from the last drawn frame; later entries sit on top
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    targets: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, target));
        }
    }

    pub fn at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|&(_, target)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str) -> NavLink {
        NavLink {
            label: label.to_string(),
            href: format!("#{}", label.to_lowercase()),
        }
    }

    #[test]
    fn test_layout_rows() {
        let layout = DeckLayout::new(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.nav, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.progress.y, 1);
        assert_eq!(layout.body, Rect::new(0, 2, 77, 21));
        assert_eq!(layout.dots, Some(Rect::new(77, 2, 3, 21)));
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_nav_links_follow_title() {
        let areas = nav_link_areas(Rect::new(0, 0, 40, 1), "Deck", &[link("Intro"), link("End")]);
        // " Deck " is 6 wide, then a gap of 2
        assert_eq!(areas[0], Rect::new(8, 0, 5, 1));
        assert_eq!(areas[1], Rect::new(15, 0, 3, 1));
    }

    #[test]
    fn test_dots_are_centered() {
        let areas = dot_areas(Rect::new(77, 2, 3, 21), 5, 0);
        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0], (0, Rect::new(78, 10, 1, 1)));
        assert_eq!(areas[4].1.y, 14);
    }

    #[test]
    fn test_dot_window_follows_active_section() {
        let column = Rect::new(77, 2, 3, 21);

        let start = dot_areas(column, 30, 0);
        assert_eq!(start.len(), 21);
        assert_eq!(start[0], (0, Rect::new(78, 2, 1, 1)));

        let middle = dot_areas(column, 30, 15);
        assert_eq!(middle.first().map(|d| d.0), Some(5));
        assert!(middle.iter().any(|&(index, _)| index == 15));

        let end = dot_areas(column, 30, 29);
        assert_eq!(end.first().map(|d| d.0), Some(9));
        assert_eq!(end.last(), Some(&(29, Rect::new(78, 22, 1, 1))));
    }

    #[test]
    fn test_hit_map_prefers_topmost() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::NavLink(0));
        hits.push(Rect::new(2, 2, 3, 1), HitTarget::MenuLink(1));
        assert_eq!(hits.at(3, 2), Some(HitTarget::MenuLink(1)));
        assert_eq!(hits.at(0, 0), Some(HitTarget::NavLink(0)));
        assert_eq!(hits.at(20, 20), None);
    }
}
