//! Contact Page
//!
//! Contact form driven by `rajhub_content::contact::update`. Messages go in,
//! effects come out; this module only runs the effects (timers and toasts).

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rajhub_content::config::ContactTiming;
use rajhub_content::contact::{self, ContactEffect, ContactMsg, ContactState, Field, SubmitPhase, Subject};
use rajhub_content::data::{contact_details, SOCIAL_LINKS};
use wasm_bindgen::JsCast;

use crate::components::{use_toaster, Toaster};
use crate::context::use_app_context;

/// Everything an effect needs to feed messages back in
#[derive(Clone, Copy)]
struct Dispatcher {
    state: RwSignal<ContactState>,
    toaster: Toaster,
    timing: ContactTiming,
}

impl Dispatcher {
    fn send(self, msg: ContactMsg) {
        let timing = self.timing;
        let Some(effects) = self.state.try_update(|state| {
            let (next, effects) = contact::update(std::mem::take(state), msg, &timing);
            *state = next;
            effects
        }) else {
            log::debug!("contact form gone, message dropped");
            return;
        };

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: ContactEffect) {
        match effect {
            ContactEffect::SimulateDelivery { delay } => self.send_after(delay, ContactMsg::DeliveryFinished),
            ContactEffect::ShowToast { title, description } => self.toaster.show(title, description),
            ContactEffect::ScheduleReset { delay } => self.send_after(delay, ContactMsg::ResetElapsed),
        }
    }

    fn send_after(self, delay: Duration, msg: ContactMsg) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            self.send(msg);
        });
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let dispatcher = Dispatcher {
        state: RwSignal::new(ContactState::default()),
        toaster: use_toaster(),
        timing: use_app_context().config().contact,
    };
    let state = dispatcher.state;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dispatcher.send(ContactMsg::Submit);
    };

    view! {
        <div class="contact-page">
            <header class="page-header">
                <h1>"Get in Touch"</h1>
                <p>"Collaborations, sponsorships, feedback or a story idea. Drop a message."</p>
            </header>

            <div class="contact-layout">
                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <Show when=move || state.with(|s| s.phase == SubmitPhase::Submitted)>
                        <div class="contact-success">"✓ Message sent! I'll get back to you soon."</div>
                    </Show>

                    <TextField dispatcher field=Field::Name input_type="text" placeholder="Your name" />
                    <TextField dispatcher field=Field::Email input_type="email" placeholder="you@example.com" />

                    <label class="form-field">
                        <span class="form-label">{Field::Subject.label()}</span>
                        <select
                            prop:value=move || state.with(|s| s.form.subject.clone())
                            disabled=move || state.with(ContactState::is_busy)
                            on:change=move |ev| {
                                if let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) {
                                    dispatcher.send(ContactMsg::FieldChanged(Field::Subject, select.value()));
                                }
                            }
                        >
                            <option value="">"Select a subject"</option>
                            {Subject::ALL
                                .into_iter()
                                .map(|subject| view! { <option value=subject.value()>{subject.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldError state field=Field::Subject />
                    </label>

                    <label class="form-field">
                        <span class="form-label">{Field::Message.label()}</span>
                        <textarea
                            rows="6"
                            placeholder="Tell me what's on your mind..."
                            prop:value=move || state.with(|s| s.form.message.clone())
                            disabled=move || state.with(ContactState::is_busy)
                            on:input=move |ev| {
                                if let Some(area) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
                                    dispatcher.send(ContactMsg::FieldChanged(Field::Message, area.value()));
                                }
                            }
                        ></textarea>
                        <FieldError state field=Field::Message />
                    </label>

                    <button type="submit" class="cta-button" disabled=move || state.with(ContactState::is_busy)>
                        {move || match state.with(|s| s.phase) {
                            SubmitPhase::Editing => "Send Message",
                            SubmitPhase::Submitting => "Sending...",
                            SubmitPhase::Submitted => "Sent!",
                        }}
                    </button>
                </form>

                <aside class="contact-info">
                    {contact_details()
                        .into_iter()
                        .map(|detail| {
                            view! {
                                <div class="contact-detail">
                                    <h3>{detail.title}</h3>
                                    <p class="contact-value">{detail.value}</p>
                                    <p class="contact-description">{detail.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, url)| {
                                view! {
                                    <a href=*url class="social-link" target="_blank" rel="noopener noreferrer">{*name}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                </aside>
            </div>
        </div>
    }
}

/// Single-line input bound to one form field
#[component]
fn TextField(
    dispatcher: Dispatcher,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let state = dispatcher.state;

    view! {
        <label class="form-field">
            <span class="form-label">{field.label()}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || state.with(|s| s.form.get(field).to_string())
                disabled=move || state.with(ContactState::is_busy)
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        dispatcher.send(ContactMsg::FieldChanged(field, input.value()));
                    }
                }
            />
            <FieldError state field />
        </label>
    }
}

#[component]
fn FieldError(state: RwSignal<ContactState>, field: Field) -> impl IntoView {
    move || {
        state.with(|s| s.error_for(field).map(|err| err.to_string())).map(|message| {
            view! { <p class="form-error" role="alert">{message}</p> }
        })
    }
}
