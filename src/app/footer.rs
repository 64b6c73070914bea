use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{
    icon::Icon,
    navbar::{go_to, NAV_ITEMS, SOCIAL_LINKS},
};

/// Year the site was built, for the copyright line.
fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} Raffy Francisco. All rights reserved."),
        None => "© Raffy Francisco. All rights reserved.".to_string(),
    };

    view! {
        <footer class="bg-dark-bg text-gray-300 pt-16 pb-8">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 mb-12">
                    <div>
                        <div class="text-2xl font-bold text-white mb-3">
                            "Raffy"
                            <span class="text-primary">"."</span>
                        </div>
                        <p class="text-sm leading-relaxed">
                            "Web Developer and Graphic Designer crafting modern, responsive and memorable digital experiences."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Quick Links"</h4>
                        <ul class="grid grid-cols-2 gap-2 text-sm">
                            {NAV_ITEMS
                                .into_iter()
                                .map(|(id, label)| {
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{id}")
                                                class="hover:text-primary transition-colors duration-200"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    go_to(id);
                                                }
                                            >
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Follow Me"</h4>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(href, icon, label)| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=label
                                            class="w-10 h-10 flex items-center justify-center rounded-full bg-white/10 text-xl hover:bg-primary hover:text-white transition-colors duration-200"
                                        >
                                            <Icon name=icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="border-t border-white/10 pt-6 flex flex-col md:flex-row items-center justify-between gap-2 text-sm">
                    <p>{copyright}</p>
                    <p>"Built with Rust, Leptos & Tailwind CSS"</p>
                </div>
            </div>
        </footer>
    }
}
