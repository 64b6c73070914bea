use leptos::prelude::*;

use super::{icon::Icon, navbar::go_to};

const MARQUEE_TECH: [(&str, &str); 8] = [
    ("devicon-react-original colored", "React"),
    ("devicon-nextjs-plain", "Next.js"),
    ("devicon-typescript-plain colored", "TypeScript"),
    ("devicon-tailwindcss-original colored", "Tailwind CSS"),
    ("devicon-nodejs-plain colored", "Node.js"),
    ("devicon-figma-plain colored", "Figma"),
    ("devicon-photoshop-plain colored", "Photoshop"),
    ("devicon-illustrator-plain colored", "Illustrator"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero-bg min-h-screen flex flex-col justify-center pt-20">
            <div class="max-w-6xl w-full mx-auto px-6 py-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 items-center">
                    <div class="text-center lg:text-left space-y-6">
                        <p class="flex items-center justify-center lg:justify-start gap-2 text-secondary animate-slide-in-left">
                            "Available for Freelance/Fulltime World Wide."
                            <Icon name="mdi:earth" />
                        </p>
                        <div class="border-b-2 border-secondary animate-fade-in animation-delay-200"></div>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold animate-slide-in-left animation-delay-600">
                            "Welcome to My"
                            <span class="block mt-2 text-primary">"Portfolio"</span>
                        </h1>
                        <p class="text-lg md:text-2xl text-dark-text animate-fade-in-up animation-delay-800">
                            "I'm Raffy Francisco"
                        </p>
                        <p class="max-w-2xl mx-auto lg:mx-0 text-gray-text animate-fade-in animation-delay-1000">
                            "Professional Web Developer and Graphic Designer specializing in modern technologies"
                        </p>
                        <div class="flex gap-6 justify-center lg:justify-start flex-wrap animate-slide-in-left animation-delay-1000">
                            <a
                                href="#projects"
                                class="inline-flex items-center gap-2 px-8 py-3 rounded-lg bg-primary text-white font-semibold hover:bg-primary-dark transition-colors duration-200"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go_to("projects");
                                }
                            >
                                <Icon name="mdi:account" />
                                "View Portfolio"
                            </a>
                            <a
                                href="#contact"
                                class="inline-flex items-center gap-2 px-8 py-3 rounded-lg border-2 border-secondary text-secondary font-semibold hover:bg-secondary hover:text-white transition-colors duration-200"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go_to("contact");
                                }
                            >
                                <Icon name="mdi:email" />
                                "Get In Touch"
                            </a>
                        </div>
                    </div>
                    <div class="flex justify-center items-center">
                        <div class="profile-image w-full min-h-[400px] lg:min-h-[500px] animate-slide-in-right animation-delay-600"></div>
                    </div>
                </div>
            </div>
            <div class="overflow-hidden py-6 border-y border-gray-200 bg-white/60">
                // Listed twice so the scroll loops seamlessly
                <div class="flex w-max gap-12 animate-marquee">
                    {MARQUEE_TECH
                        .into_iter()
                        .chain(MARQUEE_TECH)
                        .map(|(icon, label)| {
                            view! {
                                <span class="flex items-center gap-3 text-lg font-medium text-gray-text whitespace-nowrap">
                                    <Icon name=icon class="text-3xl" />
                                    {label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
