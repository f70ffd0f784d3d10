use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SaberError;

/// Pages reachable from the navigation bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    MeusQuizzes,
    Turmas,
    Relatorios,
    Forum,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::MeusQuizzes,
        Page::Turmas,
        Page::Relatorios,
        Page::Forum,
    ];

    /// Identifier used on the command line and in the config file
    pub fn name(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::MeusQuizzes => "meusquizzes",
            Page::Turmas => "turmas",
            Page::Relatorios => "relatorios",
            Page::Forum => "forum",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::MeusQuizzes => "Meus Quizzes",
            Page::Turmas => "Turmas",
            Page::Relatorios => "Relatórios",
            Page::Forum => "Fórum",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::MeusQuizzes => "/meusquizzes",
            Page::Turmas => "/turmas",
            Page::Relatorios => "/relatorios",
            Page::Forum => "/forum",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Resolve a route path to a page using its first segment.
    ///
    /// `/`, the empty path and `index.html` map to the dashboard.
    pub fn from_path(path: &str) -> Option<Page> {
        let segment = path
            .trim()
            .trim_start_matches('/')
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("");

        if segment.is_empty() || segment == "index.html" {
            return Some(Page::Dashboard);
        }

        Page::ALL
            .into_iter()
            .find(|page| page.route().trim_start_matches('/') == segment)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = SaberError;

    /// Accepts a page name (`turmas`) or a route (`/turmas`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        let page = if value.starts_with('/') {
            Page::from_path(&value)
        } else {
            Page::ALL.into_iter().find(|page| page.name() == value)
        };
        page.ok_or_else(|| SaberError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Page::Dashboard.route(), "/");
        assert_eq!(Page::MeusQuizzes.route(), "/meusquizzes");
        assert_eq!(Page::Relatorios.route(), "/relatorios");
    }

    #[test]
    fn test_from_path_matches_first_segment() {
        assert_eq!(Page::from_path("/turmas"), Some(Page::Turmas));
        assert_eq!(Page::from_path("/turmas/9a"), Some(Page::Turmas));
        assert_eq!(Page::from_path("/forum?aba=recentes"), Some(Page::Forum));
        assert_eq!(Page::from_path("/meusquizzes/"), Some(Page::MeusQuizzes));
    }

    #[test]
    fn test_from_path_dashboard_aliases() {
        assert_eq!(Page::from_path("/"), Some(Page::Dashboard));
        assert_eq!(Page::from_path(""), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/index.html"), Some(Page::Dashboard));
    }

    #[test]
    fn test_from_path_does_not_substring_match() {
        assert_eq!(Page::from_path("/forumantigo"), None);
        assert_eq!(Page::from_path("/admin/turmas"), None);
    }

    #[test]
    fn test_from_str_names_and_routes() {
        assert_eq!("dashboard".parse::<Page>().unwrap(), Page::Dashboard);
        assert_eq!("MeusQuizzes".parse::<Page>().unwrap(), Page::MeusQuizzes);
        assert_eq!("/relatorios".parse::<Page>().unwrap(), Page::Relatorios);
    }

    #[test]
    fn test_from_str_unknown_page() {
        let err = "biblioteca".parse::<Page>().unwrap_err();
        assert!(matches!(err, SaberError::UnknownPage(ref name) if name == "biblioteca"));
        assert!(err.to_string().starts_with("unknown page: biblioteca"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Page::Forum.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.previous(), Page::Forum);
        assert_eq!(Page::Turmas.next(), Page::Relatorios);
    }

    #[test]
    fn test_index_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(5), None);
    }
}
