use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::content::load_faqs;
use crate::{
    animation::{scroll_animation, Role, ScrollAnimationOptions},
    content::FaqItem,
    gallery::{faq_categories, filter_faqs, toggle_open, ALL_CATEGORIES},
};

use super::{
    icon::Icon,
    navbar::go_to,
    reveal::{Reveal, RevealSection, SectionHeading},
    skeleton::{Skeleton, SkeletonVariant},
};

#[server(input = GetUrl)]
pub async fn get_faqs_server() -> Result<Vec<FaqItem>, ServerFnError> {
    load_faqs().map_err(|e| {
        tracing::error!(error = %e, "couldn't load faqs");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Faq() -> impl IntoView {
    let animation = scroll_animation(ScrollAnimationOptions::default().threshold(0.1));
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());
    let (open_item, set_open_item) = signal(None::<u32>);
    let faqs = Resource::new(
        || (),
        |_| async { get_faqs_server().await.unwrap_or_default() },
    );

    view! {
        <RevealSection animation=animation id="faqs" class="py-20 bg-light-bg">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading
                    title="Frequently Asked Questions"
                    subtitle="Find answers to common questions about my services, process, and approach"
                />
                <Transition fallback=|| {
                    view! {
                        <div class="space-y-4">
                            {(0..5)
                                .map(|_| {
                                    view! { <Skeleton height="64px" variant=SkeletonVariant::Text /> }
                                })
                                .collect_view()}
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let items = faqs.await;
                        let categories = faq_categories(&items);
                        let items = StoredValue::new(items);
                        view! {
                            <Reveal role=Role::Description class="flex flex-wrap justify-center gap-3 mb-10">
                                {categories
                                    .into_iter()
                                    .map(|name| {
                                        let label = name.clone();
                                        let is_active = {
                                            let name = name.clone();
                                            move || category.with(|c| *c == name)
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
                                                on:click=move |_| {
                                                    set_open_item(None);
                                                    set_category(name.clone());
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </Reveal>
                            <div class="space-y-4">
                                {move || {
                                    let visible = items.with_value(|i| filter_faqs(i, &category.get()));
                                    let count = visible.len();
                                    visible
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, item)| {
                                            view! {
                                                <Reveal role=Role::Card index=index count=count>
                                                    <FaqEntry item=item open_item=open_item set_open_item=set_open_item />
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        }
                    })}
                </Transition>
                <Reveal role=Role::Card class="mt-16 p-8 rounded-xl bg-white text-center shadow-md">
                    <h3 class="text-2xl font-bold mb-3">"Still Have Questions?"</h3>
                    <p class="text-gray-text mb-6">
                        "Can't find the answer you're looking for? Feel free to reach out!"
                    </p>
                    <button
                        class="inline-flex items-center gap-2 px-8 py-3 rounded-lg bg-primary text-white font-semibold hover:bg-primary-dark hover:scale-105 transition-all duration-200"
                        on:click=move |_| go_to("contact")
                    >
                        "Get In Touch"
                        <Icon name="mdi:arrow-right" />
                    </button>
                </Reveal>
            </div>
        </RevealSection>
    }
}

#[component]
fn FaqEntry(
    item: FaqItem,
    open_item: ReadSignal<Option<u32>>,
    set_open_item: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let id = item.id;
    let is_open = move || open_item.get() == Some(id);

    view! {
        <div class="rounded-xl bg-white shadow-sm border border-gray-100 overflow-hidden">
            <button
                class="w-full flex items-center justify-between gap-4 px-6 py-5 text-left font-semibold hover:text-primary transition-colors duration-200"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| set_open_item.update(|open| *open = toggle_open(*open, id))
            >
                <span>{item.question}</span>
                <span class=move || {
                    if is_open() {
                        "text-2xl text-primary rotate-180 transition-transform duration-300"
                    } else {
                        "text-2xl text-gray-text transition-transform duration-300"
                    }
                }>
                    <Icon name="mdi:chevron-down" />
                </span>
            </button>
            <div class=move || if is_open() { "accordion-panel accordion-open" } else { "accordion-panel" }>
                <div class="overflow-hidden">
                    <p class="px-6 pb-5 text-gray-text leading-relaxed">{item.answer}</p>
                </div>
            </div>
        </div>
    }
}
