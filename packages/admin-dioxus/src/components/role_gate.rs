//! Role-based render gate.

use dioxus::prelude::*;
use newsroom_api::types::Role;

use crate::session::use_session;

/// Pure membership check. A missing or unrecognized role is denied.
pub fn role_permitted(role: Option<Role>, allowed: &[Role]) -> bool {
    role.map_or(false, |role| allowed.contains(&role))
}

/// Renders its children only when the current user's role is in `allowed`;
/// otherwise renders `fallback` or the standard access-denied panel.
///
/// This is the client-side enforcement point for direct URL access — the nav
/// merely hides entries. Both are UX layers; the backend enforces the same
/// rules on every request.
#[component]
pub fn RoleGate(
    allowed: &'static [Role],
    #[props(default)] fallback: Option<Element>,
    children: Element,
) -> Element {
    let session = use_session();

    if role_permitted(session.role(), allowed) {
        children
    } else if let Some(fallback) = fallback {
        fallback
    } else {
        rsx! {
            AccessDenied {}
        }
    }
}

#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            p { class: "text-4xl mb-3", "\u{1F512}" }
            h2 { class: "text-lg font-semibold text-gray-900 mb-1", "Access Denied" }
            p {
                class: "text-gray-500 text-sm",
                "Your account does not have permission to view this page."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_the_whole_decision() {
        let allowed = [Role::Editor, Role::AdManager];
        assert!(role_permitted(Some(Role::Editor), &allowed));
        assert!(role_permitted(Some(Role::AdManager), &allowed));
        assert!(!role_permitted(Some(Role::Admin), &allowed));
        assert!(!role_permitted(Some(Role::User), &allowed));
        assert!(!role_permitted(None, &allowed));
    }

    #[test]
    fn decision_is_stateless_across_calls() {
        let allowed = [Role::Admin];
        for _ in 0..3 {
            assert!(role_permitted(Some(Role::Admin), &allowed));
            assert!(!role_permitted(Some(Role::User), &allowed));
        }
    }

    #[test]
    fn empty_allow_list_denies_everyone() {
        assert!(!role_permitted(Some(Role::Admin), &[]));
    }
}
