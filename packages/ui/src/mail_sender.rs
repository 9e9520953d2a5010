//! Mail composer for outreach to the selected leads.

use api::mail::{self, Attachment, OutgoingMail};
use api::{Notice, Notify};
use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaPaperPlane, FaPaperclip, FaUser, FaWandMagicSparkles, FaXmark};
use crate::notices::use_notices;
use crate::repo::use_backend;
use crate::Icon;

#[component]
pub fn MailSenderForm(
    mailers: Vec<String>,
    recipients: Vec<String>,
    selected: usize,
    on_close: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut sender = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut attachments = use_signal(Vec::<Attachment>::new);
    let mut sending = use_signal(|| false);
    let mut generating = use_signal(|| false);
    let mut prompt = use_signal(String::new);
    let mut show_prompt = use_signal(|| false);

    let on_files = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let mut picked = Vec::new();
        for name in engine.files() {
            match engine.read_file(&name).await {
                Some(bytes) => picked.push(Attachment {
                    file_name: name,
                    content_type: None,
                    bytes,
                }),
                None => tracing::warn!("Could not read attachment {name}"),
            }
        }
        attachments.set(picked);
    };

    let generate = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            spawn(async move {
                generating.set(true);
                match mail::generate_template(&backend, &prompt()).await {
                    Ok(template) => {
                        subject.set(template.subject.clone());
                        message.set(template.compose_message());
                        show_prompt.set(false);
                        prompt.set(String::new());
                        notices.notify(Notice::success(
                            "AI Template Generated!",
                            "Your personalized email template has been created and filled into the form.",
                        ));
                    }
                    Err(e) if e.is_validation() => {
                        notices.notify(Notice::error("Template Prompt Required", e.to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Error generating template: {e}");
                        notices.notify(Notice::error(
                            "Error",
                            "Failed to generate AI template. Please try again.",
                        ));
                    }
                }
                generating.set(false);
            });
        }
    };

    let send = {
        let recipients = recipients.clone();
        move |_| {
            let backend = backend.clone();
            let outgoing = OutgoingMail {
                mailer: sender(),
                to: recipients.clone(),
                subject: subject(),
                message: message(),
                attachments: attachments(),
            };
            spawn(async move {
                sending.set(true);
                match mail::send_mail(&backend, &outgoing).await {
                    Ok(()) => {
                        notices.notify(Notice::success(
                            "Emails Sent Successfully",
                            format!("Sent {selected} emails from {}", outgoing.mailer),
                        ));
                        on_close.call(());
                    }
                    Err(e) if e.is_validation() => {
                        notices.notify(Notice::error("Missing Information", e.to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Error sending mail: {e}");
                        notices.notify(Notice::error("Error", "Failed to send emails"));
                    }
                }
                sending.set(false);
            });
        }
    };

    let plural = if selected == 1 { "" } else { "s" };
    let recipient_list = recipients.join(", ");

    rsx! {
        div {
            class: "card mail-sender",
            div {
                class: "mail-sender-head",
                Icon { icon: FaEnvelope, width: 20, height: 20 }
                div {
                    h3 { "Mail Composer" }
                    p { class: "small muted", "Send emails to {selected} selected lead{plural}" }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }

            label {
                class: "field",
                span { Icon { icon: FaUser, width: 12, height: 12 } " From Account" }
                select {
                    value: "{sender}",
                    onchange: move |evt| sender.set(evt.value()),
                    option { value: "", "Choose your email account..." }
                    for mailer in mailers.iter() {
                        option { key: "{mailer}", value: "{mailer}", "{mailer}" }
                    }
                }
            }

            div {
                class: "field",
                span { "Recipients ({recipients.len()})" }
                div { class: "recipients small muted", "{recipient_list}" }
            }

            label {
                class: "field",
                span { "Subject Line" }
                input {
                    r#type: "text",
                    placeholder: "Enter email subject...",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
            }

            div {
                class: "field",
                div {
                    class: "field-row",
                    span { "Message Content" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| show_prompt.toggle(),
                        Icon { icon: FaWandMagicSparkles, width: 12, height: 12 }
                        " AI Generate"
                    }
                }
                if show_prompt() {
                    div {
                        class: "template-prompt",
                        span { class: "small", "Describe the email you want to generate:" }
                        textarea {
                            rows: 3,
                            placeholder: "e.g., Introduce our new product to potential customers...",
                            value: "{prompt}",
                            oninput: move |evt| prompt.set(evt.value()),
                        }
                        div {
                            class: "field-row",
                            button {
                                class: "btn btn-primary btn-sm",
                                disabled: generating() || prompt().trim().is_empty(),
                                onclick: generate,
                                if generating() { "Generating..." } else { "Generate" }
                            }
                            button {
                                class: "btn btn-outline btn-sm",
                                onclick: move |_| {
                                    show_prompt.set(false);
                                    prompt.set(String::new());
                                },
                                "Cancel"
                            }
                        }
                    }
                }
                textarea {
                    rows: 10,
                    placeholder: "Write your message...",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }

            label {
                class: "field",
                span { Icon { icon: FaPaperclip, width: 12, height: 12 } " Attachments" }
                input {
                    r#type: "file",
                    multiple: true,
                    onchange: on_files,
                }
            }
            if !attachments.read().is_empty() {
                ul {
                    class: "attachments small",
                    for (index, file) in attachments.read().iter().enumerate() {
                        li {
                            key: "{index}",
                            "{file.file_name} ({file.bytes.len()} bytes)"
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| {
                                    attachments.write().remove(index);
                                },
                                Icon { icon: FaXmark, width: 10, height: 10 }
                            }
                        }
                    }
                }
            }

            div {
                class: "field-row",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: sending(),
                    onclick: send,
                    Icon { icon: FaPaperPlane, width: 12, height: 12 }
                    if sending() { " Sending..." } else { " Send Emails" }
                }
            }
        }
    }
}
