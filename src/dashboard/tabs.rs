//! Admin dashboard tabs

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Activity,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Activity,
        AdminTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Users => "users",
            AdminTab::Activity => "activity",
            AdminTab::Settings => "settings",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "Users",
            AdminTab::Activity => "Activity",
            AdminTab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminTab::Overview => "📊",
            AdminTab::Users => "👥",
            AdminTab::Activity => "📈",
            AdminTab::Settings => "⚙️",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
