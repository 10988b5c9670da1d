//! Application state definitions

use super::forms::SupportForm;
use crate::data::DashboardData;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Support,
}

impl View {
    /// Parse a config slug into a view
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "home" => Some(View::Home),
            "support" => Some(View::Support),
            _ => None,
        }
    }

    /// Metadata applied when this view becomes current
    pub fn page_meta(&self) -> PageMeta {
        match self {
            View::Home => PageMeta {
                title: "Ecommerce Dashboard | Storefront",
                description: "Sales, target and order activity at a glance",
            },
            View::Support => PageMeta {
                title: "Support | Storefront",
                description: "Send a support request about a problem you are facing",
            },
        }
    }
}

/// Per-view page metadata. The title goes to the terminal window title;
/// the description only travels with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Top-level application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    /// Views to return to with Esc, most recent last
    pub view_history: Vec<View>,
    pub support_form: SupportForm,
    /// Fixture dataset behind the dashboard panels
    pub dashboard: DashboardData,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            support_form: SupportForm::new(),
            dashboard: DashboardData::demo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_from_slug_known_values() {
            assert_eq!(View::from_slug("home"), Some(View::Home));
            assert_eq!(View::from_slug("support"), Some(View::Support));
        }

        #[test]
        fn test_from_slug_unknown_is_none() {
            assert_eq!(View::from_slug("dashboard"), None);
            assert_eq!(View::from_slug(""), None);
        }

        #[test]
        fn test_page_meta_titles_differ_per_view() {
            let home = View::Home.page_meta();
            let support = View::Support.page_meta();
            assert_ne!(home.title, support.title);
            assert!(!home.description.is_empty());
            assert!(!support.description.is_empty());
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_default_starts_on_home_with_empty_history() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Home);
            assert!(state.view_history.is_empty());
            assert!(!state.support_form.is_submitted());
        }
    }
}
