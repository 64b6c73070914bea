use leptos::{html, prelude::*, server_fn::codec::GetUrl};
use leptos_use::{
    use_intersection_observer_with_options, use_raf_fn_with_options, utils::Pausable,
    UseIntersectionObserverOptions, UseRafFnCallbackArgs, UseRafFnOptions,
};

#[cfg(feature = "ssr")]
use crate::content::load_about;
use crate::{
    animation::{scroll_animation, Direction, Role, ScrollAnimationOptions},
    content::{AboutMe as AboutContent, Achievement, Skill},
    count_up::{CountUp, COUNT_UP_THRESHOLD, COUNT_UP_VIEWPORT},
};

use super::{
    icon::Icon,
    reveal::{Reveal, RevealSection, SectionHeading},
    skeleton::{LoadingSpinner, Skeleton, SpinnerSize},
};

const CONTACT_EMAIL_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=raffy7792@gmail.com";

const PERSONAL_INFO: [(&str, &str, &str); 3] = [
    ("mdi:map-marker", "Location", "Remote / Worldwide"),
    ("mdi:phone", "Phone", "Available on request"),
    ("mdi:briefcase", "Status", "Open to opportunities"),
];

#[server(input = GetUrl)]
pub async fn get_about_server() -> Result<AboutContent, ServerFnError> {
    load_about().map_err(|e| {
        tracing::error!(error = %e, "couldn't load about content");
        ServerFnError::new(e)
    })
}

#[component]
pub fn AboutMe() -> impl IntoView {
    let animation = scroll_animation(
        ScrollAnimationOptions::default()
            .threshold(0.15)
            .direction(Direction::Up),
    );
    let about = Resource::new(
        || (),
        |_| async { get_about_server().await.unwrap_or_default() },
    );

    view! {
        <RevealSection animation=animation id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="About Me"
                    subtitle="Passionate developer and designer creating digital experiences"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start mb-16">
                    <Reveal role=Role::Card class="space-y-6">
                        <h3 class="text-2xl md:text-3xl font-bold">"Hi, I'm a Creative Developer"</h3>
                        <p class="text-gray-text leading-relaxed">
                            "I'm a passionate full-stack developer and UI/UX designer with over 3 years of experience creating digital solutions that combine beautiful design with robust functionality. I specialize in modern web technologies and have a keen eye for detail."
                        </p>
                        <p class="text-gray-text leading-relaxed">
                            "My journey in tech started with a curiosity about how things work, and it has evolved into a career where I get to build amazing products that make a difference. I love collaborating with teams and turning ideas into reality."
                        </p>
                        <ul class="space-y-3">
                            {PERSONAL_INFO
                                .into_iter()
                                .map(|(icon, label, value)| {
                                    view! {
                                        <li class="flex items-center gap-3">
                                            <Icon name=icon class="text-xl text-primary" />
                                            <span class="font-medium">{label}":"</span>
                                            <span class="text-gray-text">{value}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <a
                            href=CONTACT_EMAIL_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-8 py-3 rounded-lg bg-primary text-white font-semibold hover:bg-primary-dark hover:scale-105 transition-all duration-200"
                        >
                            <Icon name="mdi:email" />
                            "Get In Touch"
                        </a>
                    </Reveal>
                    <Transition fallback=|| {
                        view! {
                            <div class="grid grid-cols-2 gap-4">
                                {(0..8).map(|_| view! { <Skeleton height="72px" /> }).collect_view()}
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            let skills = about.await.skills;
                            let count = skills.len();
                            view! {
                                <div>
                                    <h3 class="text-xl font-semibold mb-6">"Skills & Technologies"</h3>
                                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                        {skills
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, skill)| {
                                                view! {
                                                    <Reveal role=Role::Card index=index count=count>
                                                        <SkillCard skill=skill />
                                                    </Reveal>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                    </Transition>
                </div>
                <Transition fallback=|| {
                    view! { <LoadingSpinner size=SpinnerSize::Large /> }
                }>
                    {move || Suspend::new(async move {
                        let achievements = about.await.achievements;
                        let count = achievements.len();
                        view! {
                            <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                                {achievements
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, achievement)| {
                                        view! {
                                            <Reveal role=Role::Card index=index count=count>
                                                <AchievementCard achievement=achievement />
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let percent = skill.percent();
    view! {
        <div class="p-4 rounded-lg bg-light-bg border border-gray-100 hover:shadow-md transition-shadow duration-200">
            <div class="flex items-center justify-between mb-2">
                <span class="flex items-center gap-2 font-medium">
                    <Icon name=skill.icon class="text-2xl" />
                    {skill.name}
                </span>
                <span class="text-sm text-gray-text">{format!("{percent}%")}</span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 overflow-hidden">
                <div
                    class="h-full rounded-full bg-primary transition-[width] duration-1000 ease-out"
                    style=format!("width: {percent}%;")
                ></div>
            </div>
        </div>
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let counter = CountUp::to(achievement.value as f64)
        .prefix(achievement.prefix)
        .suffix(achievement.suffix);

    view! {
        <div class="h-full p-6 rounded-xl bg-light-bg text-center hover:shadow-lg transition-shadow duration-300">
            <Icon name=achievement.icon class="text-4xl text-primary mb-3" />
            <CountUpNumber counter=counter class="text-3xl md:text-4xl font-bold text-dark-text" />
            <div class="mt-2 font-medium">{achievement.label}</div>
            {achievement
                .description
                .map(|d| view! { <p class="mt-1 text-sm text-gray-text">{d}</p> })}
        </div>
    }
}

/// Counts up to its target each time it scrolls into view and resets once
/// it leaves.
#[component]
pub fn CountUpNumber(counter: CountUp, #[prop(optional, into)] class: String) -> impl IntoView {
    let counter = StoredValue::new(counter);
    let node_ref = NodeRef::<html::Div>::new();
    let (display, set_display) = signal(counter.with_value(|c| c.format(c.start)));
    let (running, set_running) = signal(false);
    let started_at = StoredValue::new(None::<f64>);
    // Set once the number has left the viewport, so it counts again next time
    let armed = StoredValue::new(true);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let start = match started_at.get_value() {
                Some(start) => start,
                None => {
                    started_at.set_value(Some(args.timestamp));
                    args.timestamp
                }
            };
            let elapsed = args.timestamp - start;
            let (text, finished) =
                counter.with_value(|c| (c.format(c.value_at(elapsed)), c.is_finished(elapsed)));
            set_display(text);
            if finished {
                set_running(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if running.get() {
            resume();
        } else {
            pause();
        }
    });

    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            for entry in entries {
                let in_view = COUNT_UP_VIEWPORT
                    .is_in_view(entry.is_intersecting(), entry.intersection_ratio());
                if in_view && armed.get_value() {
                    armed.set_value(false);
                    started_at.set_value(None);
                    set_running(true);
                } else if !entry.is_intersecting() {
                    armed.set_value(true);
                    set_running(false);
                    set_display(counter.with_value(|c| c.format(c.start)));
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, COUNT_UP_THRESHOLD]),
    );

    view! {
        <div node_ref=node_ref class=class>
            {display}
        </div>
    }
}
