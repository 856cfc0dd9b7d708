//! User management page. Admin only.

use dioxus::prelude::*;
use newsroom_api::services::users::{self, UserInvite};
use newsroom_api::types::{Role, User};

use crate::components::{EmptyState, LoadingSpinner, PaginationControls, RoleGate};
use crate::nav;
use crate::pages::report_error;
use crate::session::use_session;
use crate::state::use_notices;

const ASSIGNABLE_ROLES: &[Role] = &[Role::Admin, Role::AdManager, Role::Editor, Role::User];

/// Users list page
#[component]
pub fn Users() -> Element {
    rsx! {
        RoleGate {
            allowed: nav::ADMIN_ONLY,
            UsersInner {}
        }
    }
}

#[component]
fn UsersInner() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let mut page = use_signal(|| 1u32);
    let mut invite_email = use_signal(String::new);
    let mut invite_name = use_signal(String::new);
    let mut inviting = use_signal(|| false);

    let mut list = use_resource(move || async move {
        users::list(&session.client(), page()).await
    });

    use_effect(move || {
        if let Some(Err(err)) = &*list.read() {
            report_error(err, &mut session, &mut notices, &navigator);
        }
    });

    let handle_role = move |(id, role): (i64, Role)| {
        spawn(async move {
            match users::set_role(&session.client(), id, role).await {
                Ok(()) => {
                    notices.info("Role updated");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_toggle = move |(id, active): (i64, bool)| {
        spawn(async move {
            match users::set_active(&session.client(), id, active).await {
                Ok(()) => {
                    notices.info(if active { "User activated" } else { "User deactivated" });
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match users::delete(&session.client(), id).await {
                Ok(()) => {
                    notices.info("User deleted");
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
        });
    };

    let handle_invite = move |_| {
        let email = invite_email().trim().to_string();
        let name = invite_name().trim().to_string();
        if email.is_empty() {
            return;
        }
        spawn(async move {
            inviting.set(true);
            let draft = UserInvite {
                email,
                full_name: name,
                role: Role::User,
            };
            match users::invite(&session.client(), &draft).await {
                Ok(_) => {
                    notices.info("Invitation sent");
                    invite_email.set(String::new());
                    invite_name.set(String::new());
                    list.restart();
                }
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            inviting.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Users" }

            form {
                onsubmit: handle_invite,
                class: "flex gap-2 mb-6",
                input {
                    r#type: "email",
                    value: "{invite_email}",
                    oninput: move |e| invite_email.set(e.value()),
                    placeholder: "new.user@newsroom.example",
                    class: "w-72 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                    disabled: inviting(),
                }
                input {
                    r#type: "text",
                    value: "{invite_name}",
                    oninput: move |e| invite_name.set(e.value()),
                    placeholder: "Full name",
                    class: "w-56 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                    disabled: inviting(),
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50",
                    disabled: inviting() || invite_email().trim().is_empty(),
                    "Invite"
                }
            }

            match &*list.read() {
                Some(Ok(data)) if !data.items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "User" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Role" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Last Login" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for user in data.items.iter() {
                                    UserRow {
                                        user: user.clone(),
                                        on_role: handle_role,
                                        on_toggle: handle_toggle,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                    PaginationControls {
                        pagination: data.pagination.clone(),
                        on_page: move |p| page.set(p),
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        icon: "\u{1F465}",
                        message: "No users found.".to_string(),
                    }
                },
                Some(Err(_)) => rsx! {
                    EmptyState {
                        icon: "\u{26A0}",
                        message: "Couldn't load users.".to_string(),
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", LoadingSpinner {} }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UserRowProps {
    user: User,
    on_role: EventHandler<(i64, Role)>,
    on_toggle: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
}

#[component]
fn UserRow(props: UserRowProps) -> Element {
    let user = &props.user;
    let current_role = user.role.map(|r| r.as_str()).unwrap_or("");
    let last_login = user.last_login_at.as_deref().unwrap_or("N/A");

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                p { class: "text-sm font-medium text-gray-900", "{user.full_name}" }
                p { class: "text-xs text-gray-500", "{user.email}" }
            }
            td {
                class: "px-6 py-4",
                select {
                    value: "{current_role}",
                    onchange: {
                        let id = user.id;
                        move |e: FormEvent| {
                            if let Some(role) = Role::parse(&e.value()) {
                                props.on_role.call((id, role));
                            }
                        }
                    },
                    class: "text-sm border border-gray-300 rounded px-2 py-1 bg-white",
                    if user.role.is_none() {
                        option { value: "", selected: true, "Unknown" }
                    }
                    for role in ASSIGNABLE_ROLES {
                        option {
                            value: "{role.as_str()}",
                            selected: current_role == role.as_str(),
                            "{role.label()}"
                        }
                    }
                }
            }
            td {
                class: "px-6 py-4",
                span {
                    class: if user.is_active {
                        "px-2 py-1 rounded text-xs font-medium bg-green-100 text-green-700"
                    } else {
                        "px-2 py-1 rounded text-xs font-medium bg-gray-100 text-gray-700"
                    },
                    if user.is_active { "Active" } else { "Inactive" }
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{last_login}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-2 py-1 bg-gray-100 text-gray-600 text-xs rounded hover:bg-gray-200",
                        onclick: {
                            let id = user.id;
                            let next = !user.is_active;
                            move |_| props.on_toggle.call((id, next))
                        },
                        if user.is_active { "Deactivate" } else { "Activate" }
                    }
                    button {
                        class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                        onclick: {
                            let id = user.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
