//! Marketing cards for the public home page.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use leptos::prelude::*;

/// Named background gradients available to [`GradientCard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gradient {
    #[default]
    Ember,
    Slate,
    Forest,
    Dusk,
}

impl Gradient {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Ember => "linear-gradient(135deg, #f97316 0%, #b91c1c 100%)",
            Self::Slate => "linear-gradient(135deg, #475569 0%, #0f172a 100%)",
            Self::Forest => "linear-gradient(135deg, #22c55e 0%, #065f46 100%)",
            Self::Dusk => "linear-gradient(135deg, #8b5cf6 0%, #1e3a8a 100%)",
        }
    }
}

#[component]
pub fn GradientCard(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    #[prop(optional)] gradient: Gradient,
) -> impl IntoView {
    let style = format!("background-image: {}", gradient.css());
    view! {
        <article class="gradient-card" style=style>
            <h3 class="gradient-card__title">{title}</h3>
            <p class="gradient-card__body">{body}</p>
        </article>
    }
}

#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <span class="feature-card__icon" aria-hidden="true">{icon}</span>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </article>
    }
}
