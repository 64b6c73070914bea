use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::Project,
    gallery::{apply_key, ModalAction, ModalNav, PLACEHOLDER_IMAGE},
};

use super::icon::Icon;

const PROJECT_DETAILS: [(&str, &str); 4] = [
    ("Duration", "2-3 weeks"),
    ("Year", "2024"),
    ("Client", "Personal"),
    ("Status", "Completed"),
];

/// Full-screen viewer for the selected project. Arrow keys step through the
/// list the modal was opened with and Escape closes it.
#[component]
pub fn ProjectModal(
    nav: ReadSignal<Option<ModalNav>>,
    set_nav: WriteSignal<Option<ModalNav>>,
) -> impl IntoView {
    let close = move || set_nav(None);

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !nav.with_untracked(Option::is_some) {
            return;
        }
        let key = ev.key();
        if ModalAction::prevent_default(&key) {
            ev.prevent_default();
        }
        set_nav.maybe_update(|nav| apply_key(nav, &key));
    });

    // Lock page scrolling behind the modal
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let overflow = if nav.with(Option::is_some) { "hidden" } else { "" };
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", overflow);
        }
    });

    let step = move |forward: bool| {
        set_nav.update(|nav| {
            if let Some(nav) = nav {
                if forward {
                    nav.next();
                } else {
                    nav.prev();
                }
            }
        })
    };

    move || {
        nav.get().map(|current| {
            let (position, total) = current.position();
            let show_counter = current.show_counter();
            let can_prev = current.can_prev();
            let can_next = current.can_next();
            let project = current.current().clone();
            log::debug!("showing project {} ({position}/{total})", project.id);

            view! {
                <div
                    class="fixed inset-0 z-50 bg-black/80 backdrop-blur-sm animate-fade-in"
                    on:click=move |_| close()
                >
                    <div
                        class="relative w-full h-full bg-white overflow-y-auto animate-modal-enter"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <header class="sticky top-0 z-10 flex items-center justify-between gap-4 px-6 py-4 bg-white/95 backdrop-blur border-b border-gray-100">
                            <div class="flex items-center gap-4 min-w-0">
                                <h2 class="text-xl md:text-2xl font-bold truncate">
                                    {project.title.clone()}
                                </h2>
                                {show_counter
                                    .then(|| {
                                        view! {
                                            <span class="shrink-0 px-3 py-1 rounded-full bg-light-bg text-sm text-gray-text">
                                                {format!("{position} / {total}")}
                                            </span>
                                        }
                                    })}
                            </div>
                            <div class="flex items-center gap-2">
                                <button
                                    class="modal-nav-btn"
                                    aria-label="Previous project"
                                    disabled=!can_prev
                                    on:click=move |_| step(false)
                                >
                                    <Icon name="mdi:chevron-left" />
                                </button>
                                <button
                                    class="modal-nav-btn"
                                    aria-label="Next project"
                                    disabled=!can_next
                                    on:click=move |_| step(true)
                                >
                                    <Icon name="mdi:chevron-right" />
                                </button>
                                <button
                                    class="modal-nav-btn ml-2"
                                    aria-label="Close"
                                    on:click=move |_| close()
                                >
                                    <Icon name="mdi:close" />
                                </button>
                            </div>
                        </header>
                        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 p-6">
                            <ImageColumn project=project.clone() />
                            <DetailsPanel project=project />
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ImageColumn(project: Project) -> impl IntoView {
    let title = project.title;
    view! {
        <div class="lg:col-span-2 space-y-6">
            {project
                .images
                .into_iter()
                .enumerate()
                .map(|(i, src)| {
                    view! {
                        <img
                            src=src
                            alt=format!("{title} - image {}", i + 1)
                            loading="lazy"
                            class="w-full rounded-lg shadow-md bg-light-bg"
                            on:error=|ev| {
                                let img = event_target::<web_sys::HtmlImageElement>(&ev);
                                if !img.src().ends_with(PLACEHOLDER_IMAGE) {
                                    img.set_src(PLACEHOLDER_IMAGE);
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DetailsPanel(project: Project) -> impl IntoView {
    view! {
        <aside class="lg:sticky lg:top-24 h-fit space-y-6">
            <div>
                <span class="inline-block mb-3 px-3 py-1 rounded-full bg-primary/10 text-primary text-sm font-medium capitalize">
                    {project.category}
                </span>
                <h3 class="text-2xl font-bold mb-3">{project.title}</h3>
                <p class="text-gray-text leading-relaxed">{project.description}</p>
            </div>
            <div class="grid grid-cols-2 gap-4 p-4 rounded-lg bg-light-bg">
                {PROJECT_DETAILS
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div>
                                <div class="text-xs uppercase tracking-wide text-gray-text">{label}</div>
                                <div class="font-semibold">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div>
                <h4 class="font-semibold mb-3">"Technologies"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-secondary/10 text-secondary text-sm">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex gap-3">
                {project
                    .demo_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex-1 text-center px-4 py-2 rounded-lg bg-primary text-white font-medium hover:bg-primary-dark transition-colors duration-200"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .github_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex-1 text-center px-4 py-2 rounded-lg border border-gray-300 font-medium hover:border-primary hover:text-primary transition-colors duration-200"
                            >
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </aside>
    }
}
