//! Navigation shared by header and footer

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            active: false,
        }
    }

    /// `/` only matches itself; other links also match their sub-pages
    fn matches(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

const LINKS: [NavLink; 9] = [
    NavLink::new("Início", "/"),
    NavLink::new("Nossa História", "/nossa-historia"),
    NavLink::new("Pastores", "/pastores"),
    NavLink::new("Ministérios", "/ministerios"),
    NavLink::new("Eventos", "/eventos"),
    NavLink::new("Galeria", "/galeria"),
    NavLink::new("Artigos", "/artigos"),
    NavLink::new("Lives e Podcasts", "/lives-podcasts"),
    NavLink::new("Contato", "/contato"),
];

/// Shown apart from the main links, as a button
pub const MEMBERS_LINK: NavLink = NavLink::new("Área de Membros", "/area-de-membros");

/// Navigation links with the one for `path` marked active
pub fn navigation(path: &str) -> Vec<NavLink> {
    // Sermons live under the articles section; /historia is an alias
    let path = if path.starts_with("/sermoes") {
        "/artigos"
    } else if path == "/historia" {
        "/nossa-historia"
    } else {
        path
    };
    LINKS
        .iter()
        .map(|link| NavLink {
            active: link.matches(path),
            ..*link
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(path: &str) -> Vec<&'static str> {
        navigation(path)
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.href)
            .collect()
    }

    #[test]
    fn test_home_only_matches_root() {
        assert_eq!(active("/"), vec!["/"]);
        assert_eq!(active("/pastores"), vec!["/pastores"]);
    }

    #[test]
    fn test_sub_pages_mark_their_section() {
        assert_eq!(active("/artigos/fe"), vec!["/artigos"]);
        assert_eq!(active("/sermoes/graca"), vec!["/artigos"]);
        assert_eq!(active("/pastores/joao"), vec!["/pastores"]);
        assert_eq!(active("/historia"), vec!["/nossa-historia"]);
    }

    #[test]
    fn test_unknown_path_marks_nothing() {
        assert!(active("/nao-existe").is_empty());
        assert!(active("/galeriax").is_empty());
    }
}
