use leptos::{context::Provider, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::animation::{AnimationState, Role, ScrollAnimation, StaggerSlot};

#[derive(Clone, Copy)]
struct RevealContext {
    animation: ScrollAnimation,
    state: ReadSignal<AnimationState>,
}

/// A page section that tracks whether it is in view and animates itself and
/// any [`Reveal`] children accordingly.
#[component]
pub fn RevealSection(
    animation: ScrollAnimation,
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (state, set_state) = signal(AnimationState::Hidden);
    let viewport = animation.viewport;
    let has_exit = animation.has_exit();

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            for entry in entries {
                let in_view =
                    viewport.is_in_view(entry.is_intersecting(), entry.intersection_ratio());
                let next = viewport.next_state(state.get_untracked(), in_view, has_exit);
                if next != state.get_untracked() {
                    set_state(next);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, viewport.amount]),
    );

    let context = RevealContext { animation, state };

    // Owned per section, so children built later under a Transition still
    // find this one
    view! {
        <section
            id=id
            node_ref=section_ref
            class=class
            style=move || animation.style(Role::Section, state.get(), StaggerSlot::default())
        >
            <Provider value=context>{children()}</Provider>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <Reveal role=Role::Title>
                <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4 text-dark-text">
                    {title}
                </h2>
            </Reveal>
            <Reveal role=Role::Description>
                <p class="text-lg text-gray-text max-w-2xl mx-auto">{subtitle}</p>
            </Reveal>
        </div>
    }
}

/// Animates as part of the enclosing [`RevealSection`]. Cards pass their
/// `index` and the sibling `count` to stagger.
#[component]
pub fn Reveal(
    role: Role,
    #[prop(optional)] index: usize,
    #[prop(optional)] count: Option<usize>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<RevealContext>();
    let slot = StaggerSlot {
        index,
        count: count.unwrap_or(index + 1),
    };
    let style = move || {
        ctx.map(|c| c.animation.style(role, c.state.get(), slot))
            .unwrap_or_default()
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::animation::{scroll_animation, ScrollAnimationOptions};

    type Slot = Arc<Mutex<Option<Owner>>>;

    /// Remembers a child owner, the way a `Transition` does before its
    /// resource resolves.
    #[component]
    fn DeferredChild(cell: Slot) -> impl IntoView {
        *cell.lock().expect("slot lock") = Owner::current().map(|owner| owner.child());
    }

    fn amount_seen_by(slot: &Slot) -> Option<f64> {
        let owner = slot.lock().expect("slot lock").clone()?;
        owner.with(|| use_context::<RevealContext>().map(|c| c.animation.viewport.amount))
    }

    #[test]
    fn test_deferred_children_keep_their_section() {
        let root = Owner::new();
        let first: Slot = Arc::default();
        let second: Slot = Arc::default();
        let first_cell = Arc::clone(&first);
        let second_cell = Arc::clone(&second);

        let _views = root.with(|| {
            let a = view! {
                <RevealSection
                    animation=scroll_animation(ScrollAnimationOptions::default().threshold(0.1))
                    id="first"
                >
                    <DeferredChild cell=first_cell />
                </RevealSection>
            };
            let b = view! {
                <RevealSection
                    animation=scroll_animation(ScrollAnimationOptions::default().threshold(0.9))
                    id="second"
                >
                    <DeferredChild cell=second_cell />
                </RevealSection>
            };
            (a, b)
        });

        assert_eq!(amount_seen_by(&first), Some(0.1));
        assert_eq!(amount_seen_by(&second), Some(0.9));
        // Nothing leaks onto the shared parent
        assert!(root.with(use_context::<RevealContext>).is_none());
    }
}
