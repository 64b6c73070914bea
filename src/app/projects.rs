use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    animation::{exit_animation, AnimationType, Direction, Role, ScrollAnimationOptions},
    content::{FilterOption, Project, GLOBAL_PROJECT_CACHE},
    gallery::{ModalNav, ALL_FILTER, PLACEHOLDER_IMAGE},
};
#[cfg(feature = "ssr")]
use crate::content::{get_projects, load_filters};

use super::{
    icon::Icon,
    project_modal::ProjectModal,
    reveal::{Reveal, RevealSection, SectionHeading},
    skeleton::{LoadingSpinner, ProjectGridSkeleton, SpinnerSize},
};

#[server(input = GetUrl)]
pub async fn get_projects_server(filter: String) -> Result<Vec<Project>, ServerFnError> {
    get_projects(&filter).map_err(|e| {
        tracing::error!(%filter, error = %e, "couldn't load projects");
        ServerFnError::new(e)
    })
}

#[server(input = GetUrl)]
pub async fn get_filters_server() -> Result<Vec<FilterOption>, ServerFnError> {
    load_filters().map_err(|e| {
        tracing::error!(error = %e, "couldn't load project filters");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Projects() -> impl IntoView {
    let animation = exit_animation(
        ScrollAnimationOptions::default()
            .duration(0.8)
            .threshold(0.1)
            .exit_duration(0.5)
            .animation_type(AnimationType::Fade)
            .direction(Direction::Up),
    );
    let (active_filter, set_active_filter) = signal(ALL_FILTER.to_string());
    let (modal, set_modal) = signal(None::<ModalNav>);

    #[cfg(feature = "hydrate")]
    let (stored_filter, set_stored_filter, _) =
        use_local_storage::<String, JsonSerdeWasmCodec>("project_filter");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let stored = stored_filter.get_untracked();
            if !stored.is_empty() {
                set_active_filter(stored);
            }
        },
        true,
    );

    let select_filter = move |id: String| {
        #[cfg(feature = "hydrate")]
        set_stored_filter(id.clone());
        set_modal(None);
        set_active_filter(id);
    };

    let filters = Resource::new(
        || (),
        |_| async { get_filters_server().await.unwrap_or_default() },
    );
    let projects = Resource::new(active_filter, move |filter| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(p) = cache.get(&filter) {
            return (*p).clone();
        }
        let projects = get_projects_server(filter.clone())
            .await
            .unwrap_or_default();
        // only cache on the browser, the server caches inside get_projects
        #[cfg(feature = "hydrate")]
        cache.insert(filter, projects.clone());
        projects
    });

    let open_modal = Callback::new(move |id: u32| {
        let Some(list) = projects.get_untracked() else {
            return;
        };
        match ModalNav::open(list, id) {
            Some(nav) => set_modal(Some(nav)),
            None => log::warn!("project {id} isn't in the current list"),
        }
    });

    view! {
        <RevealSection animation=animation id="projects" class="py-20 bg-light-bg">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="My Projects"
                    subtitle="Explore my recent work and creative solutions"
                />
                <Reveal role=Role::Description class="flex flex-wrap justify-center gap-3 mb-12">
                    <Transition fallback=|| view! { <LoadingSpinner size=SpinnerSize::Small /> }>
                        {move || Suspend::new(async move {
                            filters
                                .await
                                .into_iter()
                                .map(|filter| {
                                    let id = filter.id;
                                    let is_active = {
                                        let id = id.clone();
                                        move || active_filter.with(|f| *f == id)
                                    };
                                    view! {
                                        <button
                                            class=move || {
                                                if is_active() {
                                                    "filter-btn filter-btn-active"
                                                } else {
                                                    "filter-btn"
                                                }
                                            }
                                            on:click=move |_| select_filter(id.clone())
                                        >
                                            {filter.label}
                                        </button>
                                    }
                                })
                                .collect_view()
                        })}
                    </Transition>
                </Reveal>
                <Transition fallback=move || view! { <ProjectGridSkeleton count=6 /> }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        let count = projects.len();
                        if projects.is_empty() {
                            return view! {
                                <p class="text-center text-gray-text py-12">
                                    "No projects in this category yet."
                                </p>
                            }
                                .into_any();
                        }
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 grid-enter">
                                {projects
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, project)| {
                                        view! {
                                            <Reveal role=Role::Card index=index count=count>
                                                <ProjectCard project=project on_open=open_modal />
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    })}
                </Transition>
                <Reveal role=Role::Description class="text-center mt-12">
                    <a
                        href="/projects"
                        class="inline-flex items-center gap-2 px-8 py-3 rounded-lg bg-primary text-white font-semibold hover:bg-primary-dark transition-colors duration-200"
                    >
                        "View All Projects"
                        <Icon name="mdi:arrow-right" />
                    </a>
                </Reveal>
            </div>
        </RevealSection>
        <ProjectModal nav=modal set_nav=set_modal />
    }
}

#[component]
fn ProjectCard(project: Project, on_open: Callback<u32>) -> impl IntoView {
    let id = project.id;
    let image = project
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <article
            class="group h-full flex flex-col rounded-xl bg-white shadow-md overflow-hidden cursor-pointer hover:shadow-xl hover:-translate-y-1 transition-all duration-300"
            on:click=move |_| on_open.run(id)
        >
            <div class=format!("relative h-56 overflow-hidden bg-gray-100 {}", project.image_class)>
                <img
                    src=image
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-3 left-3 px-3 py-1 rounded-full bg-primary text-white text-xs font-semibold">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="flex flex-col flex-grow p-6">
                <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                <div class="flex flex-wrap gap-2 mb-3">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 rounded-md bg-light-bg text-xs text-gray-text">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-gray-text text-sm mb-4 flex-grow line-clamp-3">
                    {project.description}
                </p>
                <button
                    class="inline-flex items-center gap-1 self-start text-primary font-medium hover:gap-2 transition-all duration-200"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_open.run(id);
                    }
                >
                    "View Project"
                    <Icon name="mdi:arrow-right" />
                </button>
            </div>
        </article>
    }
}
