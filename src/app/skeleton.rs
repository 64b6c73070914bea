use leptos::prelude::*;

use super::icon::Icon;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkeletonVariant {
    Text,
    #[default]
    Rectangular,
}

impl SkeletonVariant {
    fn rounding(self) -> &'static str {
        match self {
            SkeletonVariant::Text => "rounded-md",
            SkeletonVariant::Rectangular => "rounded-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn text_size(self) -> &'static str {
        match self {
            SpinnerSize::Small => "text-xl",
            SpinnerSize::Medium => "text-3xl",
            SpinnerSize::Large => "text-5xl",
        }
    }
}

/// Shimmering placeholder block. `width`/`height` take any CSS length.
#[component]
pub fn Skeleton(
    #[prop(default = "100%")] width: &'static str,
    #[prop(default = "20px")] height: &'static str,
    #[prop(optional)] variant: SkeletonVariant,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("loading-skeleton relative overflow-hidden {} {class}", variant.rounding())
            style=format!("width: {width}; height: {height};")
            role="status"
            aria-label="Loading"
        ></div>
    }
}

#[component]
pub fn ProjectCardSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-xl bg-white shadow-md overflow-hidden p-4">
            <Skeleton height="224px" class="mb-4" />
            <Skeleton height="24px" width="80%" class="mb-2" variant=SkeletonVariant::Text />
            <div class="flex gap-2 mb-4">
                <Skeleton height="20px" width="60px" />
                <Skeleton height="20px" width="80px" />
                <Skeleton height="20px" width="50px" />
            </div>
            <div class="space-y-2">
                <Skeleton height="16px" variant=SkeletonVariant::Text />
                <Skeleton height="16px" width="85%" variant=SkeletonVariant::Text />
            </div>
        </div>
    }
}

#[component]
pub fn ProjectGridSkeleton(count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {(0..count).map(|_| view! { <ProjectCardSkeleton /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center text-primary" role="status" aria-label="Loading">
            <Icon name="mdi:loading" class=format!("animate-spin {}", size.text_size()) />
        </div>
    }
}
