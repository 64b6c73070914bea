use leptos::{html, prelude::*};

#[cfg(feature = "ssr")]
use crate::contact::ContactRelay;
use crate::{
    animation::{scroll_animation, Direction, Role, ScrollAnimationOptions},
    contact::{ContactFormData, ContactResponse},
    loading::LoadingState,
};

use super::{
    icon::Icon,
    reveal::{Reveal, RevealSection, SectionHeading},
};

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        icon: "mdi:email",
        title: "Email",
        description: "raffy7792@gmail.com",
        href: "https://mail.google.com/mail/?view=cm&fs=1&to=raffy7792@gmail.com",
    },
    ContactMethod {
        icon: "mdi:linkedin",
        title: "LinkedIn",
        description: "Connect with me",
        href: "https://www.linkedin.com/in/raffy-francisco-50607b325/",
    },
    ContactMethod {
        icon: "mdi:github",
        title: "GitHub",
        description: "Check out my code",
        href: "https://github.com/",
    },
    ContactMethod {
        icon: "mdi:phone",
        title: "Phone",
        description: "Available on request",
        href: "mailto:raffy7792@gmail.com?subject=Phone%20number%20request",
    },
];

/// Relays the page's contact form through the configured form service.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<ContactResponse, ServerFnError> {
    let relay = use_context::<ContactRelay>()
        .ok_or_else(|| ServerFnError::new("Contact relay isn't configured"))?;
    let form = ContactFormData {
        name,
        email,
        subject,
        message,
    };
    let (_, response) = relay.submit(&form).await;
    Ok(response)
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let animation = scroll_animation(
        ScrollAnimationOptions::default()
            .threshold(0.1)
            .direction(Direction::Up),
    );
    let method_count = CONTACT_METHODS.len();

    view! {
        <RevealSection animation=animation id="contact" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind? Let's work together to bring your ideas to life"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-bold">"Let's Connect"</h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {CONTACT_METHODS
                                .into_iter()
                                .enumerate()
                                .map(|(index, method)| {
                                    view! {
                                        <Reveal role=Role::Card index=index count=method_count>
                                            <a
                                                href=method.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-4 h-full p-5 rounded-xl bg-light-bg border border-gray-100 hover:border-primary hover:scale-[1.02] transition-all duration-200"
                                            >
                                                <span class="w-12 h-12 shrink-0 flex items-center justify-center rounded-lg bg-primary/10 text-primary text-2xl">
                                                    <Icon name=method.icon />
                                                </span>
                                                <span>
                                                    <span class="block font-semibold">{method.title}</span>
                                                    <span class="block text-sm text-gray-text">
                                                        {method.description}
                                                    </span>
                                                </span>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Reveal role=Role::Card class="p-6 rounded-xl bg-primary/5 border border-primary/20">
                            <h4 class="flex items-center gap-2 font-semibold mb-2">
                                <Icon name="mdi:clock-outline" class="text-primary" />
                                "Response Time"
                            </h4>
                            <p class="text-sm text-gray-text">
                                "I typically respond to emails within 24 hours. For urgent matters, please include \"URGENT\" in your subject line."
                            </p>
                        </Reveal>
                    </div>
                    <Reveal role=Role::Card>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let send = ServerAction::<SendMessage>::new();
    let (status, set_status) = signal(LoadingState::<ContactResponse>::default());
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    Effect::watch(
        move || send.version().get(),
        move |_, _, _| {
            let Some(result) = send.value().get_untracked() else {
                return;
            };
            match result {
                Ok(res) if res.success => {
                    set_status.update(|s| s.set_data(res));
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
                Ok(res) => {
                    let detail = if res.errors.is_empty() {
                        res.message
                    } else {
                        format!("{}: {}", res.message, res.errors.join(", "))
                    };
                    set_status.update(|s| s.set_error(detail));
                }
                Err(e) => {
                    log::error!("contact form submission failed: {e}");
                    set_status.update(|s| s.set_error("Server error, please try again later"));
                }
            }
        },
        false,
    );

    let field_value = |node: NodeRef<html::Input>| {
        node.get_untracked()
            .map(|el| el.value())
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactFormData {
            name: field_value(name_ref),
            email: field_value(email_ref),
            subject: field_value(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        if let Err(errors) = form.validate() {
            set_status.update(|s| {
                s.reset();
                s.set_error(errors.join(", "));
            });
            return;
        }
        set_status.update(|s| {
            s.reset();
            s.set_loading(true);
        });
        send.dispatch(SendMessage {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        });
    };

    let pending = send.pending();
    let busy = move || pending.get() || status.with(|s| s.is_loading);

    view! {
        <form
            node_ref=form_ref
            class="p-8 rounded-xl bg-light-bg shadow-md space-y-5"
            on:submit=on_submit
            novalidate
        >
            <h3 class="text-2xl font-bold">"Send a Message"</h3>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                <label class="block">
                    <span class="form-label">"Name"</span>
                    <input node_ref=name_ref name="name" type="text" required class="form-input" placeholder="Your name" />
                </label>
                <label class="block">
                    <span class="form-label">"Email"</span>
                    <input node_ref=email_ref name="email" type="email" required class="form-input" placeholder="you@example.com" />
                </label>
            </div>
            <label class="block">
                <span class="form-label">"Subject"</span>
                <input node_ref=subject_ref name="subject" type="text" required class="form-input" placeholder="What's this about?" />
            </label>
            <label class="block">
                <span class="form-label">"Message"</span>
                <textarea node_ref=message_ref name="message" rows="5" required class="form-input resize-none" placeholder="Tell me about your project"></textarea>
            </label>
            {move || {
                status
                    .with(|s| s.error.clone())
                    .map(|err| {
                        view! {
                            <p class="flex items-start gap-2 p-3 rounded-lg bg-red-50 text-red-600 text-sm" role="alert">
                                <Icon name="mdi:alert-circle" />
                                {err}
                            </p>
                        }
                    })
            }}
            {move || {
                status
                    .with(|s| s.data.as_ref().map(|d| d.message.clone()))
                    .map(|msg| {
                        view! {
                            <p class="flex items-start gap-2 p-3 rounded-lg bg-green-50 text-green-700 text-sm" role="status">
                                <Icon name="mdi:check-circle" />
                                {msg}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                disabled=busy
                class="w-full inline-flex items-center justify-center gap-2 px-8 py-3 rounded-lg bg-primary text-white font-semibold hover:bg-primary-dark disabled:opacity-60 disabled:cursor-not-allowed transition-colors duration-200"
            >
                {move || {
                    if busy() {
                        view! {
                            <Icon name="mdi:loading" class="animate-spin" />
                            "Sending..."
                        }
                            .into_any()
                    } else {
                        view! {
                            <Icon name="mdi:send" />
                            "Send Message"
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}
