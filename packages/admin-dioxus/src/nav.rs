//! Navigation model: which menu entries the current user sees, and which
//! entry is active for the current path.
//!
//! Hiding an entry here is a UX convenience only — the `RoleGate` on the
//! target page is what actually blocks direct URL access.

use newsroom_api::types::Role;

#[derive(Debug, PartialEq)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub allowed: &'static [Role],
    pub children: &'static [NavEntry],
}

/// Any authenticated user.
pub const ANY_ROLE: &[Role] = &[Role::Admin, Role::AdManager, Role::Editor, Role::User];

pub const CONTENT_ROLES: &[Role] = &[Role::Editor, Role::AdManager, Role::Admin];
pub const APPROVAL_ROLES: &[Role] = &[Role::AdManager, Role::Admin];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// AI/ML and Time Saver creation: ADMIN is deliberately view-only here.
pub const AI_CREATOR_ROLES: &[Role] = &[Role::Editor, Role::AdManager];

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        name: "Dashboard",
        path: "/",
        allowed: ANY_ROLE,
        children: &[],
    },
    NavEntry {
        name: "Articles",
        path: "/articles",
        allowed: ANY_ROLE,
        children: &[
            NavEntry {
                name: "All Articles",
                path: "/articles",
                allowed: ANY_ROLE,
                children: &[],
            },
            NavEntry {
                name: "New Article",
                path: "/articles/new",
                allowed: CONTENT_ROLES,
                children: &[],
            },
        ],
    },
    NavEntry {
        name: "Categories",
        path: "/categories",
        allowed: ANY_ROLE,
        children: &[],
    },
    NavEntry {
        name: "AI/ML",
        path: "/aiml",
        allowed: ANY_ROLE,
        children: &[
            NavEntry {
                name: "Trending",
                path: "/aiml/trending",
                allowed: ANY_ROLE,
                children: &[],
            },
            NavEntry {
                name: "Categories",
                path: "/aiml/categories",
                allowed: ANY_ROLE,
                children: &[],
            },
            NavEntry {
                name: "Create Article",
                path: "/aiml/new",
                allowed: AI_CREATOR_ROLES,
                children: &[],
            },
        ],
    },
    NavEntry {
        name: "Time Saver",
        path: "/time-saver",
        allowed: ANY_ROLE,
        children: &[
            NavEntry {
                name: "Browse",
                path: "/time-saver",
                allowed: ANY_ROLE,
                children: &[],
            },
            NavEntry {
                name: "New Card",
                path: "/time-saver/new",
                allowed: AI_CREATOR_ROLES,
                children: &[],
            },
        ],
    },
    NavEntry {
        name: "Ads",
        path: "/ads",
        allowed: APPROVAL_ROLES,
        children: &[],
    },
    NavEntry {
        name: "Users",
        path: "/users",
        allowed: ADMIN_ONLY,
        children: &[],
    },
    NavEntry {
        name: "Analytics",
        path: "/analytics",
        allowed: APPROVAL_ROLES,
        children: &[],
    },
];

/// Entries visible to a role. No role (unknown or absent) sees nothing.
pub fn visible(role: Option<Role>, entries: &'static [NavEntry]) -> Vec<&'static NavEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|entry| entry.allowed.contains(&role))
        .collect()
}

impl NavEntry {
    pub fn visible_children(&'static self, role: Option<Role>) -> Vec<&'static NavEntry> {
        visible(role, self.children)
    }

    /// First child the role can actually open; parents link there.
    pub fn landing_path(&'static self, role: Option<Role>) -> &'static str {
        self.visible_children(role)
            .first()
            .map(|child| child.path)
            .unwrap_or(self.path)
    }
}

/// Prefix match on a path-segment boundary: `/articles` is active for
/// `/articles/42/edit` but not for `/articles-archive`.
pub fn is_active(current: &str, entry_path: &str) -> bool {
    if current == entry_path {
        return true;
    }
    if entry_path == "/" {
        return false;
    }
    current
        .strip_prefix(entry_path)
        .map_or(false, |rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_child_paths_are_active() {
        assert!(is_active("/articles", "/articles"));
        assert!(is_active("/articles/42/edit", "/articles"));
        assert!(is_active("/aiml/trending", "/aiml"));
    }

    #[test]
    fn sibling_prefixes_are_not_active() {
        assert!(!is_active("/articles-archive", "/articles"));
        assert!(!is_active("/ad", "/ads"));
    }

    #[test]
    fn root_entry_only_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/articles", "/"));
    }

    #[test]
    fn reader_sees_no_management_entries() {
        let names: Vec<&str> = visible(Some(Role::User), NAV_ENTRIES)
            .iter()
            .map(|e| e.name)
            .collect();
        assert!(names.contains(&"Articles"));
        assert!(!names.contains(&"Ads"));
        assert!(!names.contains(&"Users"));
        assert!(!names.contains(&"Analytics"));
    }

    #[test]
    fn admin_sees_everything_but_cannot_create_ai_content() {
        let entries = visible(Some(Role::Admin), NAV_ENTRIES);
        let aiml = entries.iter().find(|e| e.name == "AI/ML").unwrap();
        let child_names: Vec<&str> = aiml
            .visible_children(Some(Role::Admin))
            .iter()
            .map(|c| c.name)
            .collect();
        // view-only for ADMIN, by design
        assert_eq!(child_names, vec!["Trending", "Categories"]);
    }

    #[test]
    fn editor_gets_the_create_entries() {
        let entries = visible(Some(Role::Editor), NAV_ENTRIES);
        let aiml = entries.iter().find(|e| e.name == "AI/ML").unwrap();
        assert!(aiml
            .visible_children(Some(Role::Editor))
            .iter()
            .any(|c| c.name == "Create Article"));
    }

    #[test]
    fn no_role_sees_nothing() {
        assert!(visible(None, NAV_ENTRIES).is_empty());
    }

    #[test]
    fn parent_links_to_first_visible_child() {
        let aiml = NAV_ENTRIES.iter().find(|e| e.name == "AI/ML").unwrap();
        assert_eq!(aiml.landing_path(Some(Role::Editor)), "/aiml/trending");
        // entries without children land on themselves
        let ads = NAV_ENTRIES.iter().find(|e| e.name == "Ads").unwrap();
        assert_eq!(ads.landing_path(Some(Role::Admin)), "/ads");
    }
}
