use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::contact::{ContactForm, ContactResponse, ContactState, Field};

use super::toasts::use_notifications;

#[server(prefix = "/api", endpoint = "contact")]
pub async fn submit_contact(form: ContactForm) -> Result<ContactResponse, ServerFnError> {
    use std::sync::Arc;

    use crate::relay::{handle_submission, ContactRelay, LogRelay, RelayConfig};

    let relay = use_context::<Arc<dyn ContactRelay>>()
        .unwrap_or_else(|| Arc::new(LogRelay::new(RelayConfig::from_env())));
    Ok(handle_submission(relay.as_ref(), form))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(ContactState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let res = submit_contact(form).await;
            if let Err(e) = &res {
                log::error!("contact submission failed: {e}");
            }
            if let Some(draft) = state.try_update(|s| s.finish(res)) {
                notifications.push(draft);
            }
        });
    };

    view! {
        <div class="grid gap-10 lg:grid-cols-[3fr,2fr]">
            <form
                class="space-y-6 rounded-lg border border-muted/30 p-6"
                aria-live="polite"
                novalidate=true
                on:submit=on_submit
            >
                <FormField state field=Field::Name label="Name" placeholder="Your name" />
                <FormField
                    state
                    field=Field::Email
                    label="Email"
                    placeholder="you@company.com"
                    input_type="email"
                />
                <FormField
                    state
                    field=Field::Message
                    label="How can I help?"
                    placeholder="Tell me about the product, workflow, or experiment you want to explore."
                    multiline=true
                />
                <div class="flex items-center justify-between">
                    <span class="text-xs text-muted">"No spam, just a thoughtful reply."</span>
                    <button
                        type="submit"
                        class="min-w-[140px] rounded-md border border-cyan/30 bg-cyan/20 px-6 py-3 text-cyan disabled:opacity-50"
                        disabled=move || state.with(|s| s.submitting)
                    >
                        {move || if state.with(|s| s.submitting) { "Sending..." } else { "Send Message" }}
                    </button>
                </div>
            </form>
            <div class="space-y-4 rounded-lg border border-muted/30 p-6 text-sm">
                <h3 class="text-lg font-bold">"Reach out directly"</h3>
                <p>"Prefer email? I am always reachable."</p>
                <a class="text-cyan" href="mailto:hello@ahmedali.dev">
                    "hello@ahmedali.dev"
                </a>
                <ul class="space-y-2">
                    <li>
                        <a
                            class="text-cyan"
                            href="https://github.com/Abuzaid911"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "GitHub"
                        </a>
                    </li>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    state: RwSignal<ContactState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let name = match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Message => "message",
    };
    let value = move || state.with(|s| s.form.field(field).to_string());
    let error = move || state.with(|s| s.errors.get(field).map(str::to_string));
    let on_input = move |ev: Event| {
        state.update(|s| s.form.set_field(field, event_target_value(&ev)));
    };
    let class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground";

    view! {
        <label class="block space-y-2">
            <span class="text-sm font-medium">{label}</span>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            name=name
                            rows="5"
                            placeholder=placeholder
                            class=class
                            aria-invalid=move || error().is_some().to_string()
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            name=name
                            type=input_type.unwrap_or("text")
                            placeholder=placeholder
                            autocomplete=name
                            class=class
                            aria-invalid=move || error().is_some().to_string()
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || error().map(|e| view! { <p class="text-xs text-red">{e}</p> })}
        </label>
    }
}
