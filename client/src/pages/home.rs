//! Public marketing home page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::cards::{FeatureCard, Gradient, GradientCard};
use crate::components::counter::Counter;
use crate::components::header::SiteHeader;

struct Service {
    title: &'static str,
    body: &'static str,
    gradient: Gradient,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Residential",
        body: "Custom homes and additions, from foundation to final walkthrough.",
        gradient: Gradient::Ember,
    },
    Service {
        title: "Commercial",
        body: "Offices, retail and hospitality fit-outs delivered on schedule.",
        gradient: Gradient::Slate,
    },
    Service {
        title: "Industrial",
        body: "Warehouses and light manufacturing with heavy civil expertise.",
        gradient: Gradient::Forest,
    },
    Service {
        title: "Renovation",
        body: "Structural upgrades and restorations that respect the original build.",
        gradient: Gradient::Dusk,
    },
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("🛡", "Safety first", "Zero lost-time incidents across our last 400,000 site hours."),
    ("📐", "In-house design", "Architects and estimators under one roof, so budgets hold."),
    ("🤝", "One point of contact", "A dedicated project lead from first call to handover."),
];

const STATS: [(u64, &str, &str); 3] = [
    (1250, "+", "Projects delivered"),
    (35, "", "Years in business"),
    (180, "", "Skilled tradespeople"),
];

const TEAM: [(&str, &str); 4] = [
    ("Maria Santos", "Founder & CEO"),
    ("Jordan Lee", "Head of Estimating"),
    ("Priya Raman", "Lead Architect"),
    ("Sam O'Neil", "Site Operations"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Keystone Builders"/>
        <SiteHeader/>
        <main class="home">
            <section class="home__hero">
                <h1>"Built right. Built to last."</h1>
                <p>"General contracting for homes, businesses and industry since 1990."</p>
                <a class="button button--primary" href="#services">
                    "Explore our services"
                </a>
            </section>

            <section id="services" class="home__section">
                <h2>"Services"</h2>
                <div class="card-grid">
                    {SERVICES
                        .iter()
                        .map(|s| view! { <GradientCard title=s.title body=s.body gradient=s.gradient/> })
                        .collect_view()}
                </div>
            </section>

            <section id="why-us" class="home__section">
                <h2>"Why Keystone"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| {
                            view! { <FeatureCard icon=*icon title=*title description=*description/> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__stats">
                {STATS
                    .iter()
                    .map(|(target, suffix, label)| {
                        view! { <Counter target=*target suffix=*suffix label=*label/> }
                    })
                    .collect_view()}
            </section>

            <section id="team" class="home__section">
                <h2>"Our team"</h2>
                <ul class="team-list">
                    {TEAM
                        .iter()
                        .map(|(name, role)| {
                            view! {
                                <li class="team-list__member">
                                    <Avatar name=*name size=AvatarSize::Large/>
                                    <span class="team-list__name">{*name}</span>
                                    <span class="team-list__role">{*role}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </main>
    }
}
