//! Static site navigation and the Ctrl+K search palette.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub url: &'static str,
    pub active: bool,
    pub is_new: bool,
    /// Drawn as a link in the top bar; everything is reachable from the
    /// palette.
    pub in_bar: bool,
}

macro_rules! site_url {
    ($anchor:literal) => {
        concat!("https://fkvim.netlify.app/", $anchor)
    };
}

pub const SITE_URL: &str = site_url!("");
pub const REPO_URL: &str = "https://github.com/TheFlashCodes/FKvim";

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Home",
        url: SITE_URL,
        active: false,
        is_new: false,
        in_bar: true,
    },
    NavItem {
        label: "Features",
        url: site_url!("#features"),
        active: false,
        is_new: false,
        in_bar: true,
    },
    NavItem {
        label: "Installation",
        url: site_url!("#installation"),
        active: false,
        is_new: false,
        in_bar: true,
    },
    NavItem {
        label: "Docs",
        url: site_url!("#docs"),
        active: false,
        is_new: false,
        in_bar: true,
    },
    NavItem {
        label: "Try FKvim Interactive",
        url: SITE_URL,
        active: true,
        is_new: true,
        in_bar: true,
    },
    NavItem {
        label: "GitHub",
        url: REPO_URL,
        active: false,
        is_new: false,
        in_bar: false,
    },
    NavItem {
        label: "Get Started",
        url: site_url!("#installation"),
        active: false,
        is_new: false,
        in_bar: false,
    },
];

/// Palette overlay state. Filtering is a plain substring match over labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPalette {
    pub query: String,
    pub selected: usize,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> Vec<&'static NavItem> {
        let query = self.query.trim().to_lowercase();
        NAV_ITEMS
            .iter()
            .filter(|item| query.is_empty() || item.label.to_lowercase().contains(&query))
            .collect()
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn selected_item(&self) -> Option<&'static NavItem> {
        self.matches().get(self.selected).copied()
    }
}
