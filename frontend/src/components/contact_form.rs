use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_theme;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const SUBJECTS: [&str; 8] = [
    "General Inquiry",
    "Project Quote",
    "Web Development",
    "Digital Marketing",
    "Branding & Design",
    "Partnership",
    "Support",
    "Careers",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub type FormErrors = BTreeMap<Field, &'static str>;

impl ContactMessage {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Copy with surrounding whitespace stripped from every field; this is
    /// what gets sent.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Name and a well-formed email are required; the rest is optional.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.insert(Field::Email, "Please enter a valid email address");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Stand-in for the agency's mail endpoint: waits, then accepts.
async fn deliver(message: &ContactMessage) -> Result<(), serde_json::Error> {
    let payload = serde_json::to_string(message)?;
    TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
    info!("Contact message accepted ({} bytes)", payload.len());
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or(true)]
    pub show_info: bool,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let theme = use_theme();
    let form = use_state(ContactMessage::default);
    let errors = use_state(FormErrors::new);
    let status = use_state(|| SubmitStatus::Idle);

    let on_field = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        })
    };

    let input = |field: Field| {
        let on_field = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };

    let on_message = {
        let on_field = on_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };

    let on_subject = {
        let on_field = on_field(Field::Subject);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit(select.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            if let Err(found) = form.validate() {
                errors.set(found);
                return;
            }

            status.set(SubmitStatus::Submitting);
            let message = form.trimmed();
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match deliver(&message).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success);
                        form.set(ContactMessage::default());
                    }
                    Err(e) => {
                        error!("Could not submit contact message: {}", e);
                        status.set(SubmitStatus::Error);
                    }
                }
            });
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.get(&field) {
            Some(message) => html! { <p class="field-error">{ *message }</p> },
            None => html! {},
        }
    };
    let submitting = *status == SubmitStatus::Submitting;

    html! {
        <div class={classes!("contact", theme.theme.pick("contact-light", "contact-dark"))}>
            {
                if props.show_info {
                    html! {
                        <div class="contact-info">
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="info-card">
                                <h3>{"Email Us"}</h3><p>{ config::CONTACT_EMAIL }</p>
                            </a>
                            <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))} class="info-card">
                                <h3>{"Call Us"}</h3><p>{ config::CONTACT_PHONE }</p>
                            </a>
                            <div class="info-card">
                                <h3>{"Visit Us"}</h3><p>{ config::CONTACT_ADDRESS }</p>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <label>
                        {"Name *"}
                        <input type="text" value={form.name.clone()} oninput={input(Field::Name)} />
                        { error_for(Field::Name) }
                    </label>
                    <label>
                        {"Email *"}
                        <input type="email" value={form.email.clone()} oninput={input(Field::Email)} />
                        { error_for(Field::Email) }
                    </label>
                </div>
                <div class="form-row">
                    <label>
                        {"Phone"}
                        <input type="tel" value={form.phone.clone()} oninput={input(Field::Phone)} />
                    </label>
                    <label>
                        {"Subject"}
                        <select onchange={on_subject}>
                            <option value="" selected={form.subject.is_empty()}>{"Select a subject"}</option>
                            {
                                for SUBJECTS.iter().map(|subject| html! {
                                    <option value={*subject} selected={form.subject == *subject}>{ *subject }</option>
                                })
                            }
                        </select>
                    </label>
                </div>
                <label>
                    {"Message"}
                    <textarea rows="5" value={form.message.clone()} oninput={on_message}></textarea>
                </label>
                <button type="submit" class="button button-primary" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Message" } }
                </button>
                {
                    match *status {
                        SubmitStatus::Success => html! {
                            <p class="form-status success">{"Thank you! Your message has been sent. We'll be in touch soon."}</p>
                        },
                        SubmitStatus::Error => html! {
                            <p class="form-status error">{"There was an error submitting your message. Please try again."}</p>
                        },
                        _ => html! {},
                    }
                }
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            ..ContactMessage::default()
        }
    }

    #[test]
    fn name_and_email_are_enough() {
        assert_eq!(message("Thandi", "thandi@example.co.za").validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported() {
        let errors = message("  ", "").validate().unwrap_err();
        assert_eq!(errors.get(&Field::Name), Some(&"Name is required"));
        assert_eq!(errors.get(&Field::Email), Some(&"Email is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["no-at-sign", "a@b", "a b@c.d", "@c.io"] {
            let errors = message("A", email).validate().unwrap_err();
            assert_eq!(
                errors.get(&Field::Email),
                Some(&"Please enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn sent_payload_is_trimmed() {
        let mut msg = message("  Thandi Mokoena ", " thandi@example.co.za\n");
        msg.set(Field::Message, "\tHello there  ".into());
        assert_eq!(msg.validate(), Ok(()));

        let json = serde_json::to_value(msg.trimmed()).unwrap();
        assert_eq!(json["name"], "Thandi Mokoena");
        assert_eq!(json["email"], "thandi@example.co.za");
        assert_eq!(json["message"], "Hello there");
    }

    #[test]
    fn payload_serializes_every_field() {
        let mut msg = message("A", "a@b.co");
        msg.set(Field::Subject, "Project Quote".into());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["subject"], "Project Quote");
        assert_eq!(json["phone"], "");
    }
}
