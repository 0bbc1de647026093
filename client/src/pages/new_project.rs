//! Guarded project-intake form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collects a `ProjectDraft`, validates it with the same rules the server
//! applies, and submits the resulting `ProjectRequest`. Validation errors
//! are shown inline and nothing is sent until the draft is valid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header::AdminHeader;
use crate::components::session_guard::SessionGuard;
use crate::intake::{ProjectCategory, ProjectDraft};

#[component]
pub fn NewProjectPage() -> impl IntoView {
    view! {
        <Title text="New project | Keystone Builders"/>
        <SessionGuard>
            <AdminHeader title="New project"/>
            <ProjectForm/>
        </SessionGuard>
    }
}

#[component]
fn ProjectForm() -> impl IntoView {
    let draft = RwSignal::new(ProjectDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.with(ProjectDraft::validate) {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_project(&request).await {
                Ok(receipt) => {
                    log::info!("project submitted: {}", receipt.reference);
                    info.set(format!("Project logged. Reference {}.", receipt.reference));
                    draft.set(ProjectDraft::default());
                }
                Err(e) => {
                    log::warn!("project submission failed: {e}");
                    info.set(e.to_string());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <main class="intake">
            <form class="intake-form" on:submit=on_submit>
                <TextField
                    label="Project title"
                    draft=draft
                    write={|d, v| d.title = v}
                    read={|d| d.title.clone()}
                />
                <TextField
                    label="Client name"
                    draft=draft
                    write={|d, v| d.client_name = v}
                    read={|d| d.client_name.clone()}
                />
                <TextField
                    label="Client email"
                    input_type="email"
                    draft=draft
                    write={|d, v| d.client_email = v}
                    read={|d| d.client_email.clone()}
                />
                <label class="intake-form__field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        <option value="">"Choose..."</option>
                        {ProjectCategory::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <TextField
                    label="Location"
                    draft=draft
                    write={|d, v| d.location = v}
                    read={|d| d.location.clone()}
                />
                <TextField
                    label="Budget (USD, optional)"
                    placeholder="$250,000"
                    draft=draft
                    write={|d, v| d.budget = v}
                    read={|d| d.budget.clone()}
                />
                <TextField
                    label="Start date (optional)"
                    input_type="date"
                    draft=draft
                    write={|d, v| d.start_date = v}
                    read={|d| d.start_date.clone()}
                />
                <label class="intake-form__field">
                    <span>"Description (optional)"</span>
                    <textarea
                        rows="6"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Submit project"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="intake-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </main>
    }
}

/// One labelled text input bound to a field of the draft.
#[component]
fn TextField(
    label: &'static str,
    draft: RwSignal<ProjectDraft>,
    write: fn(&mut ProjectDraft, String),
    read: fn(&ProjectDraft) -> String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="intake-form__field">
            <span>{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || draft.with(read)
                on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
            />
        </label>
    }
}
