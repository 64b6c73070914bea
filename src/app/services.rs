use leptos::prelude::*;

use crate::animation::{scroll_reveal, Role, ScrollAnimationOptions};

use super::{
    icon::Icon,
    reveal::{Reveal, RevealSection, SectionHeading},
};

#[derive(Clone, Copy)]
struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "mdi:web",
        title: "Web Development",
        description: "Modern, responsive websites built with the latest technologies",
        features: &["Responsive layouts", "Performance tuning", "CMS integration"],
    },
    Service {
        icon: "mdi:palette",
        title: "Graphic Design",
        description: "Creative visual solutions for branding and marketing materials",
        features: &["Logos and branding", "Social media assets", "Print materials"],
    },
    Service {
        icon: "mdi:cellphone",
        title: "Mobile Apps",
        description: "Cross-platform mobile applications for iOS and Android",
        features: &["UI/UX prototypes", "Cross-platform builds", "App store assets"],
    },
    Service {
        icon: "mdi:search-web",
        title: "SEO Optimization",
        description: "Improve your website's visibility and search engine rankings",
        features: &["Technical audits", "On-page optimization", "Analytics setup"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    let animation = scroll_reveal(ScrollAnimationOptions::default().threshold(0.1));
    let count = SERVICES.len();

    view! {
        <RevealSection animation=animation id="services" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="My Services"
                    subtitle="I offer a range of professional services to help bring your ideas to life"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .into_iter()
                        .enumerate()
                        .map(|(index, service)| {
                            view! {
                                <Reveal role=Role::Card index=index count=count>
                                    <div class="h-full p-8 rounded-xl bg-light-bg border border-gray-100 hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
                                        <div class="w-14 h-14 mb-6 flex items-center justify-center rounded-lg bg-primary/10 text-primary text-3xl">
                                            <Icon name=service.icon />
                                        </div>
                                        <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
                                        <p class="text-gray-text mb-4">{service.description}</p>
                                        <ul class="space-y-2">
                                            {service
                                                .features
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <li class="flex items-center gap-2 text-sm text-gray-text">
                                                            <Icon name="mdi:check-circle" class="text-primary" />
                                                            {*feature}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
