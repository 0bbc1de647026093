//! Round avatar with an image or an initials fallback.
//!
//! DESIGN
//! ======
//! The fallback color is derived from the name so the same person keeps the
//! same color on every page without storing anything.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

const PALETTE: [&str; 6] = ["#c2410c", "#0f766e", "#1d4ed8", "#a16207", "#7c3aed", "#be123c"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "avatar--sm",
            Self::Medium => "avatar--md",
            Self::Large => "avatar--lg",
        }
    }
}

/// Up to two uppercase initials: first and last word. `?` for blank names.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace().filter_map(|w| w.chars().find(|c| c.is_alphanumeric()));
    let Some(first) = words.next() else {
        return "?".to_owned();
    };
    let mut out: String = first.to_uppercase().collect();
    if let Some(last) = words.last() {
        out.extend(last.to_uppercase());
    }
    out
}

/// Stable palette color for `name` (case- and whitespace-insensitive).
#[must_use]
pub fn avatar_color(name: &str) -> &'static str {
    // FNV-1a over the normalized name.
    let hash = name
        .split_whitespace()
        .flat_map(str::chars)
        .flat_map(char::to_lowercase)
        .fold(0x811c_9dc5_u32, |acc, c| (acc ^ u32::from(c)).wrapping_mul(0x0100_0193));
    PALETTE[hash as usize % PALETTE.len()]
}

#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] image_url: Option<String>,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    let class = format!("avatar {}", size.class());
    match image_url {
        Some(src) => view! { <img class=class src=src alt=name/> }.into_any(),
        None => {
            let style = format!("background-color: {}", avatar_color(&name));
            view! {
                <span class=class style=style role="img" aria-label=name.clone()>
                    {initials(&name)}
                </span>
            }
            .into_any()
        }
    }
}
