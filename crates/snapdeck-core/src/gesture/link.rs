use std::collections::HashMap;

use crate::clock::Clock;
use crate::navigator::{Navigator, ScrollHost};

use super::{Disposition, MenuHost};

/// Where a link click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    NavBar,
    /// Inside the mobile menu, which is closed after navigating
    MobileMenu,
}

/// Link-click channel for in-page fragment links (`href="#id"`)
#[derive(Debug, Clone, Default)]
pub struct LinkAdapter {
    targets: HashMap<String, usize>,
}

impl LinkAdapter {
    /// Build the id lookup from the section ids in deck order
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets = HashMap::new();
        for (index, id) in section_ids.into_iter().enumerate() {
            targets.entry(id.into()).or_insert(index);
        }
        Self { targets }
    }

    /// Section index for a fragment href, if it names a known section
    pub fn resolve(&self, href: &str) -> Option<usize> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        self.targets.get(id).copied()
    }

    /// Handle a click on a link with `href`
    ///
    /// Only fragment links are handled; their default navigation is always
    /// suppressed, even when the target is unknown.
    pub fn handle<S, C, M>(
        &self,
        href: &str,
        origin: ClickOrigin,
        navigator: &mut Navigator<S, C>,
        menu: &mut M,
    ) -> Disposition
    where
        S: ScrollHost,
        C: Clock,
        M: MenuHost + ?Sized,
    {
        if !href.starts_with('#') {
            return Disposition::PassThrough;
        }

        if let Some(index) = self.resolve(href) {
            navigator.go_to(index);
            if origin == ClickOrigin::MobileMenu {
                menu.toggle_menu();
            }
        }
        Disposition::Suppress
    }
}
