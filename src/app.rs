mod about;
mod contact;
mod faq;
mod footer;
mod gallery_page;
mod hero;
mod icon;
mod navbar;
mod project_modal;
mod projects;
mod reveal;
mod services;
mod skeleton;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutMe;
use contact::ContactSection;
use faq::Faq;
use footer::Footer;
use gallery_page::AllProjectsPage;
use hero::Hero;
use navbar::NavBar;
use projects::Projects;
use services::Services;

const SITE_DESCRIPTION: &str = "Professional web developer and graphic designer specializing in modern web applications, UI/UX design, and digital solutions.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/@mdi/font@7.4.47/css/materialdesignicons.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-light-bg text-dark-text antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Raffy Francisco") />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta
            name="keywords"
            content="web developer, graphic designer, UI/UX design, portfolio, Philippines"
        />
        <Meta name="author" content="Raffy Francisco" />
        <Meta name="robots" content="index, follow" />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Raffy Francisco | Portfolio" />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Raffy Francisco | Portfolio" />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects") view=AllProjectsPage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Web Developer & Graphic Designer" />
        <NavBar />
        <main>
            <Hero />
            <Services />
            <Projects />
            <AboutMe />
            <Faq />
            <ContactSection />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
            res.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>
            <p class="text-lg text-gray-text mb-8">"The page you're looking for doesn't exist."</p>
            <a
                href="/"
                class="px-6 py-3 rounded-lg bg-primary text-white font-medium hover:bg-primary-dark transition-colors duration-200"
            >
                "Back to Home"
            </a>
        </main>
    }
}
