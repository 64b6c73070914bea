//! Scroll-triggered animation variants.
//!
//! Sections and their children are described by a set of [`Variants`] per
//! [`Role`]. The view layer tracks visibility with an intersection observer,
//! advances an [`AnimationState`] and renders the matching variant as inline
//! CSS.

use std::fmt::Write;

/// Visible ratios within this distance of the threshold count as reaching it.
const RATIO_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationType {
    #[default]
    Fade,
    Slide,
    Scale,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    EaseIn,
    EaseOut,
}

impl Ease {
    pub fn css_name(self) -> &'static str {
        match self {
            Ease::EaseIn => "ease-in",
            Ease::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn offset_x(x: f64) -> Self {
        Self { x, ..Self::IDENTITY }
    }

    fn offset_y(y: f64) -> Self {
        Self { y, ..Self::IDENTITY }
    }

    fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Option<Ease>,
    pub stagger_children: f64,
    pub delay_children: f64,
    pub stagger_direction: i8,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            ease: None,
            stagger_children: 0.0,
            delay_children: 0.0,
            stagger_direction: 1,
        }
    }
}

impl Transition {
    pub fn timed(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease: Some(ease),
            ..Self::default()
        }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Delay applied to the `index`-th of `count` children of a staggering
    /// container.
    pub fn stagger_offset(&self, index: usize, count: usize) -> f64 {
        let count = count.max(index + 1);
        if self.stagger_direction < 0 {
            (count - 1 - index) as f64 * self.stagger_children
        } else {
            self.delay_children + index as f64 * self.stagger_children
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    pub transform: Transform,
    pub transition: Option<Transition>,
}

impl Variant {
    fn hidden(transform: Transform) -> Self {
        Self {
            opacity: 0.0,
            transform,
            transition: None,
        }
    }

    /// Render as inline CSS declarations. `extra_delay` is added to the
    /// variant's own transition delay.
    pub fn css(&self, extra_delay: f64) -> String {
        let Transform { x, y, scale } = self.transform;
        let mut out = format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            fmt_num(self.opacity),
            fmt_num(x),
            fmt_num(y),
            fmt_num(scale)
        );
        if let Some(t) = self.transition {
            let ease = t.ease.map(Ease::css_name).unwrap_or("ease");
            let delay = fmt_num(t.delay + extra_delay);
            let duration = fmt_num(t.duration);
            let _ = write!(
                out,
                " transition: opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s;"
            );
        }
        out
    }
}

fn fmt_num(n: f64) -> String {
    // round away float noise such as 0.30000000000000004
    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Variant,
    pub visible: Variant,
    pub exit: Option<Variant>,
}

impl Variants {
    pub fn resolve(&self, state: AnimationState) -> &Variant {
        match state {
            AnimationState::Hidden => &self.hidden,
            AnimationState::Visible => &self.visible,
            AnimationState::Exit => self.exit.as_ref().unwrap_or(&self.hidden),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Hidden,
    Visible,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    pub once: bool,
    pub amount: f64,
}

impl ViewportOptions {
    pub fn is_in_view(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio + RATIO_TOLERANCE >= self.amount
    }

    pub fn next_state(
        &self,
        current: AnimationState,
        in_view: bool,
        has_exit: bool,
    ) -> AnimationState {
        if in_view {
            return AnimationState::Visible;
        }
        match current {
            AnimationState::Hidden => AnimationState::Hidden,
            _ if self.once => current,
            _ if has_exit => AnimationState::Exit,
            _ => AnimationState::Hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimationOptions {
    pub play_once: bool,
    pub threshold: f64,
    pub duration: f64,
    pub delay: f64,
    pub enable_exit: bool,
    pub exit_duration: f64,
    pub stagger_delay: f64,
    pub animation_type: AnimationType,
    pub direction: Direction,
}

impl Default for ScrollAnimationOptions {
    fn default() -> Self {
        Self {
            play_once: true,
            threshold: 0.2,
            duration: 0.6,
            delay: 0.0,
            enable_exit: false,
            exit_duration: 0.4,
            stagger_delay: 0.1,
            animation_type: AnimationType::Fade,
            direction: Direction::Up,
        }
    }
}

impl ScrollAnimationOptions {
    pub fn play_once(self, play_once: bool) -> Self {
        Self { play_once, ..self }
    }

    pub fn threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub fn duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn enable_exit(self, enable_exit: bool) -> Self {
        Self {
            enable_exit,
            ..self
        }
    }

    pub fn exit_duration(self, exit_duration: f64) -> Self {
        Self {
            exit_duration,
            ..self
        }
    }

    pub fn stagger_delay(self, stagger_delay: f64) -> Self {
        Self {
            stagger_delay,
            ..self
        }
    }

    pub fn animation_type(self, animation_type: AnimationType) -> Self {
        Self {
            animation_type,
            ..self
        }
    }

    pub fn direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    fn initial_transform(&self) -> Transform {
        if self.animation_type == AnimationType::Scale {
            return Transform::scaled(0.8);
        }
        match self.direction {
            Direction::Up => Transform::offset_y(30.0),
            Direction::Down => Transform::offset_y(-30.0),
            Direction::Left => Transform::offset_x(-50.0),
            Direction::Right => Transform::offset_x(50.0),
        }
    }

    fn exit_transform(&self) -> Transform {
        if self.animation_type == AnimationType::Scale {
            return Transform::scaled(0.8);
        }
        match self.direction {
            Direction::Up => Transform::offset_y(20.0),
            Direction::Down => Transform::offset_y(-20.0),
            Direction::Left => Transform::offset_x(-30.0),
            Direction::Right => Transform::offset_x(30.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Section,
    Title,
    Description,
    Card,
}

/// Position of an element among the staggered children of its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSlot {
    pub index: usize,
    pub count: usize,
}

impl Default for StaggerSlot {
    fn default() -> Self {
        Self { index: 0, count: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub section: Variants,
    pub title: Variants,
    pub description: Variants,
    pub card: Variants,
    pub viewport: ViewportOptions,
}

impl ScrollAnimation {
    pub fn variants(&self, role: Role) -> &Variants {
        match role {
            Role::Section => &self.section,
            Role::Title => &self.title,
            Role::Description => &self.description,
            Role::Card => &self.card,
        }
    }

    pub fn has_exit(&self) -> bool {
        self.section.exit.is_some()
    }

    /// Inline style for an element of `role` while its section is in `state`.
    pub fn style(&self, role: Role, state: AnimationState, slot: StaggerSlot) -> String {
        let variant = self.variants(role).resolve(state);
        if role == Role::Section {
            return variant.css(0.0);
        }
        let stagger = self
            .section
            .resolve(state)
            .transition
            .map(|t| t.stagger_offset(slot.index, slot.count))
            .unwrap_or(0.0);
        variant.css(stagger)
    }
}

pub fn scroll_animation(options: ScrollAnimationOptions) -> ScrollAnimation {
    let hidden = Variant::hidden(options.initial_transform());
    let visible = Variant {
        opacity: 1.0,
        transform: Transform::IDENTITY,
        transition: Some(Transition::timed(options.duration, Ease::EaseOut)),
    };
    let exit = options.enable_exit.then(|| Variant {
        opacity: 0.0,
        transform: options.exit_transform(),
        transition: Some(Transition::timed(options.exit_duration, Ease::EaseIn)),
    });

    let section = Variants {
        hidden: Variant::hidden(Transform::IDENTITY),
        visible: Variant {
            opacity: 1.0,
            transform: Transform::IDENTITY,
            transition: Some(Transition {
                stagger_children: options.stagger_delay,
                delay_children: options.delay,
                ..Transition::default()
            }),
        },
        exit: options.enable_exit.then(|| Variant {
            opacity: 0.0,
            transform: Transform::IDENTITY,
            transition: Some(Transition {
                duration: options.exit_duration,
                stagger_children: options.stagger_delay * 0.5,
                stagger_direction: -1,
                ..Transition::default()
            }),
        }),
    };

    let title = Variants {
        hidden,
        visible,
        exit,
    };

    let description = Variants {
        hidden,
        visible: Variant {
            transition: visible.transition.map(|t| t.with_delay(0.2)),
            ..visible
        },
        exit: exit.map(|e| Variant {
            transition: e.transition.map(|t| t.with_delay(0.1)),
            ..e
        }),
    };

    let card = Variants {
        hidden,
        visible: Variant {
            transition: Some(Transition::timed(options.duration * 0.8, Ease::EaseOut)),
            ..visible
        },
        exit,
    };

    ScrollAnimation {
        section,
        title,
        description,
        card,
        viewport: ViewportOptions {
            once: options.play_once,
            amount: options.threshold,
        },
    }
}

/// Entrance-only animation: elements reveal as they scroll into view.
pub fn scroll_reveal(options: ScrollAnimationOptions) -> ScrollAnimation {
    scroll_animation(options.enable_exit(false))
}

/// Animation that also plays an exit as elements leave the viewport.
pub fn exit_animation(options: ScrollAnimationOptions) -> ScrollAnimation {
    scroll_animation(options.enable_exit(true).play_once(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let anim = scroll_animation(ScrollAnimationOptions::default());

        // Plays once at 20% visibility
        assert!(anim.viewport.once);
        assert_eq!(anim.viewport.amount, 0.2);

        // No exit variants unless enabled
        assert!(anim.section.exit.is_none());
        assert!(anim.title.exit.is_none());
        assert!(!anim.has_exit());

        // Fade up starts 30px low and transparent
        assert_eq!(anim.title.hidden.opacity, 0.0);
        assert_eq!(anim.title.hidden.transform, Transform::offset_y(30.0));
        assert!(anim.title.hidden.transition.is_none());
    }

    #[test]
    fn test_direction_transforms() {
        let cases = [
            (Direction::Up, Transform::offset_y(30.0), Transform::offset_y(20.0)),
            (Direction::Down, Transform::offset_y(-30.0), Transform::offset_y(-20.0)),
            (Direction::Left, Transform::offset_x(-50.0), Transform::offset_x(-30.0)),
            (Direction::Right, Transform::offset_x(50.0), Transform::offset_x(30.0)),
        ];
        for (direction, hidden, exit) in cases {
            let anim = exit_animation(ScrollAnimationOptions::default().direction(direction));
            assert_eq!(anim.card.hidden.transform, hidden, "{direction:?}");
            assert_eq!(
                anim.card.exit.expect("exit enabled").transform,
                exit,
                "{direction:?}"
            );
        }
    }

    #[test]
    fn test_scale_ignores_direction() {
        let anim = exit_animation(
            ScrollAnimationOptions::default()
                .animation_type(AnimationType::Scale)
                .direction(Direction::Left),
        );
        assert_eq!(anim.title.hidden.transform, Transform::scaled(0.8));
        assert_eq!(
            anim.title.exit.expect("exit enabled").transform,
            Transform::scaled(0.8)
        );
    }

    #[test]
    fn test_slide_matches_fade() {
        let fade = scroll_animation(ScrollAnimationOptions::default());
        let slide =
            scroll_animation(ScrollAnimationOptions::default().animation_type(AnimationType::Slide));
        assert_eq!(fade, slide);
    }

    #[test]
    fn test_visible_transitions() {
        let anim = scroll_animation(ScrollAnimationOptions::default().duration(0.8));

        let title = anim.title.visible.transition.expect("title transition");
        assert_eq!(title.duration, 0.8);
        assert_eq!(title.delay, 0.0);
        assert_eq!(title.ease, Some(Ease::EaseOut));

        // Description trails the title
        let desc = anim.description.visible.transition.expect("desc transition");
        assert_eq!(desc.duration, 0.8);
        assert_eq!(desc.delay, 0.2);

        // Cards run a little faster
        let card = anim.card.visible.transition.expect("card transition");
        assert!((card.duration - 0.64).abs() < 1e-9);
        assert_eq!(card.delay, 0.0);

        assert_eq!(anim.card.visible.transform, Transform::IDENTITY);
        assert_eq!(anim.card.visible.opacity, 1.0);
    }

    #[test]
    fn test_section_stagger() {
        let anim = exit_animation(
            ScrollAnimationOptions::default()
                .stagger_delay(0.2)
                .delay(0.3)
                .exit_duration(0.5),
        );

        let visible = anim.section.visible.transition.expect("section transition");
        assert_eq!(visible.stagger_children, 0.2);
        assert_eq!(visible.delay_children, 0.3);
        assert_eq!(visible.stagger_direction, 1);

        let exit = anim
            .section
            .exit
            .and_then(|e| e.transition)
            .expect("section exit transition");
        assert_eq!(exit.stagger_children, 0.1);
        assert_eq!(exit.stagger_direction, -1);
        assert_eq!(exit.duration, 0.5);
    }

    #[test]
    fn test_exit_transitions() {
        let anim = exit_animation(ScrollAnimationOptions::default().exit_duration(0.5));
        assert!(!anim.viewport.once);

        let title_exit = anim.title.exit.and_then(|e| e.transition).expect("title exit");
        assert_eq!(title_exit.duration, 0.5);
        assert_eq!(title_exit.ease, Some(Ease::EaseIn));
        assert_eq!(title_exit.delay, 0.0);

        let desc_exit = anim
            .description
            .exit
            .and_then(|e| e.transition)
            .expect("description exit");
        assert_eq!(desc_exit.delay, 0.1);
    }

    #[test]
    fn test_reveal_forces_no_exit() {
        let anim = scroll_reveal(
            ScrollAnimationOptions::default()
                .enable_exit(true)
                .play_once(false),
        );
        assert!(!anim.has_exit());
        // play_once is left as given
        assert!(!anim.viewport.once);
    }

    #[test]
    fn test_stagger_offset() {
        let forward = Transition {
            stagger_children: 0.1,
            delay_children: 0.5,
            ..Transition::default()
        };
        assert!((forward.stagger_offset(0, 3) - 0.5).abs() < 1e-9);
        assert!((forward.stagger_offset(2, 3) - 0.7).abs() < 1e-9);

        let reverse = Transition {
            stagger_children: 0.05,
            stagger_direction: -1,
            ..Transition::default()
        };
        // Last child leaves first
        assert_eq!(reverse.stagger_offset(2, 3), 0.0);
        assert!((reverse.stagger_offset(0, 3) - 0.1).abs() < 1e-9);
        // Count smaller than index doesn't underflow
        assert_eq!(reverse.stagger_offset(4, 1), 0.0);
    }

    #[test]
    fn test_state_machine_once() {
        let vp = ViewportOptions {
            once: true,
            amount: 0.2,
        };
        let s = vp.next_state(AnimationState::Hidden, false, false);
        assert_eq!(s, AnimationState::Hidden);
        let s = vp.next_state(s, true, false);
        assert_eq!(s, AnimationState::Visible);
        // Stays visible after scrolling away
        let s = vp.next_state(s, false, true);
        assert_eq!(s, AnimationState::Visible);
    }

    #[test]
    fn test_state_machine_repeat() {
        let vp = ViewportOptions {
            once: false,
            amount: 0.1,
        };
        let s = vp.next_state(AnimationState::Hidden, true, true);
        assert_eq!(s, AnimationState::Visible);
        let s = vp.next_state(s, false, true);
        assert_eq!(s, AnimationState::Exit);
        let s = vp.next_state(s, true, true);
        assert_eq!(s, AnimationState::Visible);

        // Without an exit variant the element resets to hidden
        let s = vp.next_state(AnimationState::Visible, false, false);
        assert_eq!(s, AnimationState::Hidden);
    }

    #[test]
    fn test_is_in_view() {
        let vp = ViewportOptions {
            once: true,
            amount: 0.2,
        };
        assert!(vp.is_in_view(true, 0.5));
        assert!(vp.is_in_view(true, 0.1995));
        assert!(!vp.is_in_view(true, 0.1));
        assert!(!vp.is_in_view(false, 1.0));
    }

    #[test]
    fn test_resolve_exit_fallback() {
        let anim = scroll_reveal(ScrollAnimationOptions::default());
        assert_eq!(
            anim.card.resolve(AnimationState::Exit),
            &anim.card.hidden
        );
    }

    #[test]
    fn test_css_rendering() {
        let anim = scroll_animation(ScrollAnimationOptions::default());
        assert_eq!(
            anim.title.hidden.css(0.0),
            "opacity: 0; transform: translate3d(0px, 30px, 0) scale(1);"
        );
        assert_eq!(
            anim.description.visible.css(0.1),
            "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1); \
             transition: opacity 0.6s ease-out 0.3s, transform 0.6s ease-out 0.3s;"
        );
    }

    #[test]
    fn test_style_adds_section_stagger() {
        let anim = scroll_animation(ScrollAnimationOptions::default());
        let style = anim.style(
            Role::Card,
            AnimationState::Visible,
            StaggerSlot { index: 2, count: 4 },
        );
        // card duration 0.48s, stagger 2 * 0.1s
        assert!(style.contains("transition: opacity 0.48s ease-out 0.2s"), "{style}");

        // Hidden cards carry no transition
        let style = anim.style(Role::Card, AnimationState::Hidden, StaggerSlot::default());
        assert!(!style.contains("transition"));
    }
}
