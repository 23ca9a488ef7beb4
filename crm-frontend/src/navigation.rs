use concat_string::concat_string;
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Icon {
    Sun,
    LayoutDashboard,
    UserPlus,
    Users,
    Calendar,
    DollarSign,
    Settings,
    Bell,
    Search,
    Menu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub url: String,
    pub icon: Icon,
}

/// Ordered, immutable table of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    entries: Vec<Entry>,
}

pub fn page_url(page_name: &str) -> String {
    concat_string!("/", page_name.to_lowercase().replace(' ', "-"))
}

impl Icon {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Stroke paths on a 24x24 view box.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 \
                 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            ],
            Self::LayoutDashboard => &[
                "M3 3h7v9H3zM14 3h7v5h-7zM14 12h7v9h-7zM3 16h7v5H3z",
            ],
            Self::UserPlus => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M19 8v6M22 11h-6",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4M8 2v4M3 10h18",
            ],
            Self::DollarSign => &[
                "M12 2v20",
                "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6",
            ],
            Self::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 \
                 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 \
                 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 \
                 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 \
                 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 \
                 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 \
                 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 \
                 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            Self::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Self::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.3-4.3"],
            Self::Menu => &["M4 6h16M4 12h16M4 18h16"],
        }
    }
}

impl Entry {
    pub fn new(title: impl Into<String>, page_name: &str, icon: Icon) -> Self {
        Self { title: title.into(), url: page_url(page_name), icon }
    }

    pub fn is_active(&self, pathname: &str) -> bool {
        self.url == pathname
    }
}

impl Navigation {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn active(&self, pathname: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.is_active(pathname))
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(vec![
            Entry::new("Dashboard", "Dashboard", Icon::LayoutDashboard),
            Entry::new("New Lead", "NewLead", Icon::UserPlus),
            Entry::new("Leads", "Leads", Icon::Users),
            Entry::new("Calendar", "Calendar", Icon::Calendar),
            Entry::new("Commission", "Commission", Icon::DollarSign),
        ])
    }
}
