use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use crate::content::load_gallery;
use crate::{
    animation::{scroll_animation, scroll_reveal, Role, ScrollAnimationOptions},
    content::GalleryImage,
    gallery::PLACEHOLDER_IMAGE,
};

use super::{
    icon::Icon,
    reveal::{Reveal, RevealSection},
    skeleton::Skeleton,
};

#[server(input = GetUrl)]
pub async fn get_gallery_server() -> Result<Vec<GalleryImage>, ServerFnError> {
    load_gallery().map_err(|e| {
        tracing::error!(error = %e, "couldn't load gallery");
        ServerFnError::new(e)
    })
}

pub fn showing_label(count: usize) -> String {
    match count {
        1 => "Showing 1 project".to_string(),
        n => format!("Showing {n} projects"),
    }
}

#[component]
pub fn AllProjectsPage() -> impl IntoView {
    let header_animation = scroll_reveal(ScrollAnimationOptions::default());
    let grid_animation = scroll_animation(
        ScrollAnimationOptions::default()
            .threshold(0.05)
            .stagger_delay(0.05),
    );
    let images = Resource::new(
        || (),
        |_| async { get_gallery_server().await.unwrap_or_default() },
    );

    view! {
        <Title text="All Projects" />
        <div class="min-h-screen bg-light-bg">
            <RevealSection animation=header_animation id="gallery-header" class="pt-12 pb-8">
                <div class="max-w-7xl mx-auto px-6">
                    <Reveal role=Role::Description class="mb-8">
                        <a
                            href="/#projects"
                            class="inline-flex items-center gap-2 text-gray-text hover:text-primary transition-colors duration-200"
                        >
                            <Icon name="mdi:arrow-left" />
                            "Back to Portfolio"
                        </a>
                    </Reveal>
                    <div class="text-center">
                        <Reveal role=Role::Title>
                            <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4">"All Projects"</h1>
                        </Reveal>
                        <Reveal role=Role::Description>
                            <p class="text-lg text-gray-text max-w-2xl mx-auto">
                                "Explore my complete collection of design work, from web development to graphic design and everything in between."
                            </p>
                        </Reveal>
                    </div>
                </div>
            </RevealSection>
            <RevealSection animation=grid_animation id="gallery" class="pb-20">
                <div class="max-w-7xl mx-auto px-6">
                    <Transition fallback=|| {
                        view! {
                            <div class="columns-1 sm:columns-2 lg:columns-3 xl:columns-4 gap-4">
                                {(0..8)
                                    .map(|_| {
                                        view! { <Skeleton height="240px" class="mb-4 break-inside-avoid" /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            let images = images.await;
                            let count = images.len();
                            view! {
                                <div class="columns-1 sm:columns-2 lg:columns-3 xl:columns-4 gap-4">
                                    {images
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, image)| {
                                            view! {
                                                <Reveal role=Role::Card index=index count=count class="mb-4 break-inside-avoid">
                                                    <GalleryTile image=image />
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <Reveal role=Role::Description class="text-center mt-12 text-gray-text">
                                    {showing_label(count)}
                                </Reveal>
                            }
                        })}
                    </Transition>
                </div>
            </RevealSection>
        </div>
    }
}

#[component]
fn GalleryTile(image: GalleryImage) -> impl IntoView {
    view! {
        <figure class=format!(
            "group relative w-full {} overflow-hidden rounded-xl shadow-md bg-gray-100 hover:scale-[1.02] transition-transform duration-300",
            image.height,
        )>
            <img
                src=image.src
                alt=image.title.clone()
                loading="lazy"
                class="absolute inset-0 w-full h-full object-cover"
                on:error=|ev| {
                    let img = event_target::<web_sys::HtmlImageElement>(&ev);
                    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
                        img.set_src(PLACEHOLDER_IMAGE);
                    }
                }
            />
            <figcaption class="absolute inset-x-0 bottom-0 p-4 bg-gradient-to-t from-black/70 to-transparent text-white font-medium opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                {image.title}
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(0), "Showing 0 projects");
        assert_eq!(showing_label(1), "Showing 1 project");
        assert_eq!(showing_label(19), "Showing 19 projects");
    }
}
