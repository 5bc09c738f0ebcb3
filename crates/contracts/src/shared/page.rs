use serde::{Deserialize, Serialize};

use super::lang::Text;

/// Logical page of the site. `Admin` is the dashboard entry, which shows the
/// login screen until the session is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    PlanVisit,
    Parties,
    SchoolTrips,
    Gallery,
    Contact,
    Cart,
    Admin,
}

impl Page {
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::PlanVisit => "plan-visit",
            Page::Parties => "parties",
            Page::SchoolTrips => "school-trips",
            Page::Gallery => "gallery",
            Page::Contact => "contact",
            Page::Cart => "cart",
            Page::Admin => "admin",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        NAV_ITEMS
            .iter()
            .map(|item| item.page)
            .chain([Page::Cart, Page::Admin])
            .find(|page| page.slug() == slug)
    }
}

/// What the application shell renders for the current session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Page(Page),
    Login,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub page: Page,
    pub label: Text,
}

/// Header navigation, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { page: Page::Home, label: Text::new("Home", "الرئيسية") },
    NavItem { page: Page::PlanVisit, label: Text::new("Plan Your Visit", "خطط لزيارتك") },
    NavItem { page: Page::Parties, label: Text::new("Parties", "الحفلات") },
    NavItem { page: Page::SchoolTrips, label: Text::new("School Trips", "الرحلات المدرسية") },
    NavItem { page: Page::Gallery, label: Text::new("Gallery", "معرض الصور") },
    NavItem { page: Page::Contact, label: Text::new("Contact", "اتصل بنا") },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in [Page::Home, Page::SchoolTrips, Page::Cart, Page::Admin] {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("nowhere"), None);
    }

    #[test]
    fn nav_starts_with_home_and_hides_admin() {
        assert_eq!(NAV_ITEMS[0].page, Page::Home);
        assert!(NAV_ITEMS.iter().all(|item| item.page != Page::Admin));
    }
}
