//! Deck file model
//!
//! A deck is a fixed, ordered list of sections plus the nav bar and menu
//! links that point at them. It is loaded once at startup and never changes.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gesture::LinkAdapter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Fragment id used by links, e.g. `intro` for `#intro`
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Mobile menu links; mirrors `nav` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<NavLink>>,
}

/// A nav or menu link whose fragment does not name any section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedLink {
    pub label: String,
    pub href: String,
}

impl Deck {
    /// Parse and validate a deck from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let deck: Deck = toml::from_str(content).map_err(|e| crate::Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Deck(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the startup preconditions: at least one section, every id
    /// present and unique
    pub fn validate(&self) -> crate::Result<()> {
        if self.sections.is_empty() {
            return Err(crate::Error::Deck("deck has no sections".into()));
        }

        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(crate::Error::Deck(format!("section {} has an empty id", index)));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(crate::Error::Deck(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn menu_links(&self) -> &[NavLink] {
        self.menu.as_deref().unwrap_or(&self.nav)
    }

    /// Link adapter resolving `#id` fragments against this deck
    pub fn link_adapter(&self) -> LinkAdapter {
        LinkAdapter::new(self.sections.iter().map(|s| s.id.clone()))
    }

    /// Fragment links in the nav bar or menu that point nowhere
    pub fn unresolved_links(&self) -> Vec<UnresolvedLink> {
        let links = self.link_adapter();
        self.nav
            .iter()
            .chain(self.menu.iter().flatten())
            .filter(|link| link.href.starts_with('#') && links.resolve(&link.href).is_none())
            .map(|link| UnresolvedLink {
                label: link.label.clone(),
                href: link.href.clone(),
            })
            .collect()
    }

    /// Small deck written by `snapdeck init`
    pub fn sample() -> Self {
        let sections = [
            ("intro", "Welcome", "Scroll, swipe or press Space to move one section at a time."),
            ("keys", "Keyboard", "Arrow keys, Page Up/Down, Home and End all work.\nPress m for the menu."),
            ("links", "Links", "Click an entry in the nav bar to jump straight to a section."),
            ("end", "Thanks", "That's the whole deck."),
        ];
        let sections: Vec<Section> = sections
            .iter()
            .map(|(id, title, body)| Section {
                id: id.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            })
            .collect();
        let nav = sections
            .iter()
            .map(|s| NavLink {
                label: s.title.clone(),
                href: format!("#{}", s.id),
            })
            .collect();

        Self {
            title: "snapdeck".to_string(),
            sections,
            nav,
            menu: None,
        }
    }
}
