//! Profile page: edit the signed-in user's own record.

use dioxus::prelude::*;
use newsroom_api::services::auth::ProfileUpdate;

use crate::pages::report_error;
use crate::session::use_session;
use crate::state::use_notices;

#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let mut notices = use_notices();
    let navigator = use_navigator();

    let user = session.user();
    let mut full_name =
        use_signal(|| user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default());
    let mut picture = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.profile_picture.clone())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let handle_submit = move |_| {
        spawn(async move {
            saving.set(true);
            let update = ProfileUpdate {
                full_name: Some(full_name().trim().to_string()).filter(|s| !s.is_empty()),
                profile_picture: Some(picture().trim().to_string()).filter(|s| !s.is_empty()),
            };
            match session.update_profile(update).await {
                Ok(()) => notices.info("Profile saved"),
                Err(err) => report_error(&err, &mut session, &mut notices, &navigator),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Profile" }

            if let Some(user) = user.as_ref() {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-xl",

                    div {
                        class: "mb-6",
                        p { class: "text-sm text-gray-500", "Signed in as" }
                        p { class: "text-sm font-medium text-gray-900", "{user.email}" }
                        p { class: "text-xs text-gray-500 mt-1", "Role: {user.role_label()}" }
                    }

                    form {
                        onsubmit: handle_submit,
                        class: "space-y-4",

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Full name" }
                            input {
                                r#type: "text",
                                value: "{full_name}",
                                oninput: move |e| full_name.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-2", "Profile picture URL" }
                            input {
                                r#type: "url",
                                value: "{picture}",
                                oninput: move |e| picture.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-sky-700 text-white text-sm rounded-md hover:bg-sky-800 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}
