// ABOUTME: Accordion menu model for the dashboard sidebar
// At most one section is open; clicking an open title closes it, a closed one opens it alone

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl MenuSection {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
        }
    }
}

/// One rendered sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Title(usize),
    Item { section: usize, item: usize },
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    sections: Vec<MenuSection>,
    open: Option<usize>,
    /// Title under the keyboard cursor
    cursor: usize,
}

impl MenuState {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self {
            sections,
            open: None,
            cursor: 0,
        }
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn open_section(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Click on a section title. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.sections.len() {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn collapse_all(&mut self) {
        self.open = None;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select(&mut self, index: usize) {
        if index < self.sections.len() {
            self.cursor = index;
        }
    }

    pub fn next(&mut self) {
        if !self.sections.is_empty() {
            self.cursor = (self.cursor + 1) % self.sections.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.sections.is_empty() {
            self.cursor = if self.cursor == 0 {
                self.sections.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.cursor);
    }

    /// Rows in render order: every title, with the open section's items under it
    pub fn rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        for (section, menu_section) in self.sections.iter().enumerate() {
            rows.push(MenuRow::Title(section));
            if self.is_open(section) {
                let items = 0..menu_section.items.len();
                rows.extend(items.map(|item| MenuRow::Item { section, item }));
            }
        }
        rows
    }

    /// Section whose title is rendered at `row`
    pub fn title_at(&self, row: usize) -> Option<usize> {
        match self.rows().get(row) {
            Some(MenuRow::Title(section)) => Some(*section),
            _ => None,
        }
    }
}

/// Sidebar sections of the inventory dashboard
pub fn default_sections() -> Vec<MenuSection> {
    vec![
        MenuSection::new(
            "Inventory",
            &["Add product", "Update stock", "Remove product", "List products"],
        ),
        MenuSection::new("Access control", &["Users", "Roles", "Access log"]),
        MenuSection::new("Reports", &["Stock report", "Movements report", "Export"]),
        MenuSection::new("Statistics", &["Stock levels", "Top products"]),
    ]
}
