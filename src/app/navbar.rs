use leptos::prelude::*;
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use leptos_use::{use_throttle_fn_with_options, utils::ThrottleOptions};

#[cfg(feature = "hydrate")]
use crate::scroll::{
    current_section, section_offsets, ACTIVE_SECTION_OFFSET, ACTIVE_SECTION_THROTTLE_MS,
};
use crate::scroll::{is_scrolled, NAV_HEIGHT_OFFSET};

use super::icon::Icon;

pub(crate) const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("projects", "Projects"),
    ("about", "About"),
    ("faqs", "FAQ"),
    ("contact", "Contact"),
];

pub(crate) const SOCIAL_LINKS: [(&str, &str, &str); 2] = [
    (
        "https://www.behance.net/nullzvectcollection",
        "devicon-behance-plain",
        "Behance",
    ),
    (
        "https://www.linkedin.com/in/raffy-francisco-50607b325/",
        "devicon-linkedin-plain",
        "LinkedIn",
    ),
];

/// Smooth-scrolls to a section, leaving room for the fixed nav bar.
pub(crate) fn go_to(section_id: &str) {
    #[cfg(feature = "hydrate")]
    crate::scroll::scroll_to_section(section_id, NAV_HEIGHT_OFFSET);
    #[cfg(not(feature = "hydrate"))]
    let _ = (section_id, NAV_HEIGHT_OFFSET);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(NAV_ITEMS[0].0);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || is_scrolled(scroll_y.get());

    #[cfg(feature = "hydrate")]
    {
        // Trailing call picks up where scrolling stopped
        let update_active = use_throttle_fn_with_options(
            move || {
                let ids = NAV_ITEMS.map(|(id, _)| id);
                let offsets = section_offsets(&ids);
                let y = scroll_y.get_untracked();
                if let Some(id) = current_section(&offsets, y, ACTIVE_SECTION_OFFSET) {
                    if id != active.get_untracked() {
                        set_active(id);
                    }
                }
            },
            ACTIVE_SECTION_THROTTLE_MS,
            ThrottleOptions::default().trailing(true),
        );
        Effect::new(move |_| {
            scroll_y.track();
            update_active();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_active;

    let nav_link = move |(id, label): (&'static str, &'static str), mobile: bool| {
        let base = if mobile {
            "block w-full text-left px-4 py-3 rounded-lg font-medium transition-colors duration-200"
        } else {
            "relative px-3 py-2 font-medium transition-colors duration-200"
        };
        view! {
            <a
                href=format!("#{id}")
                class=move || {
                    let state = if active.get() == id {
                        "text-primary"
                    } else {
                        "text-dark-text hover:text-primary"
                    };
                    format!("{base} {state}")
                }
                on:click=move |ev| {
                    ev.prevent_default();
                    set_menu_open(false);
                    go_to(id);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class=move || {
            if scrolled() || menu_open.get() {
                "fixed top-0 inset-x-0 z-40 bg-white/95 backdrop-blur-md shadow-md transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent transition-all duration-300"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <a
                        href="#home"
                        class="text-2xl font-bold text-dark-text"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to("home");
                        }
                    >
                        "Raffy"
                        <span class="text-primary">"."</span>
                    </a>
                    <div class="hidden md:flex items-center space-x-2">
                        {NAV_ITEMS.into_iter().map(|item| nav_link(item, false)).collect_view()}
                    </div>
                    <div class="hidden md:flex items-center space-x-4">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(href, icon, label)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=label
                                        class="text-xl text-gray-text hover:text-primary transition-colors duration-200"
                                    >
                                        <Icon name=icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-3xl text-dark-text"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <Show when=move || menu_open.get() fallback=|| view! { <Icon name="mdi:menu" /> }>
                            <Icon name="mdi:close" />
                        </Show>
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-t border-gray-100 shadow-lg animate-slide-down">
                    <div class="px-4 py-4 space-y-1">
                        {NAV_ITEMS.into_iter().map(|item| nav_link(item, true)).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
