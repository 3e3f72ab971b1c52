//! Inline stroke icons.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowLeft,
    ArrowRight,
    ArrowUpRight,
    ChevronLeft,
    ChevronRight,
    CheckCircle,
    Link,
    Quote,
    Info,
    Play,
    Download,
    Mail,
    Globe,
    MapPin,
    ExternalLink,
    Calendar,
    Twitter,
    Dribbble,
    Linkedin,
}

/// 24x24 outline icon drawn with `currentColor`.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    let size = size.to_string();
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(kind)}
        </svg>
    }
}

fn paths(kind: IconKind) -> AnyView {
    match kind {
        IconKind::ArrowLeft => view! {
            <path d="m12 19-7-7 7-7"></path>
            <path d="M19 12H5"></path>
        }
        .into_any(),
        IconKind::ArrowRight => view! {
            <path d="M5 12h14"></path>
            <path d="m12 5 7 7-7 7"></path>
        }
        .into_any(),
        IconKind::ArrowUpRight => view! {
            <path d="M7 7h10v10"></path>
            <path d="M7 17 17 7"></path>
        }
        .into_any(),
        IconKind::ChevronLeft => view! { <path d="m15 18-6-6 6-6"></path> }.into_any(),
        IconKind::ChevronRight => view! { <path d="m9 18 6-6-6-6"></path> }.into_any(),
        IconKind::CheckCircle => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
            <path d="m9 11 3 3L22 4"></path>
        }
        .into_any(),
        IconKind::Link => view! {
            <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"></path>
            <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"></path>
        }
        .into_any(),
        IconKind::Quote => view! {
            <path d="M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"></path>
            <path d="M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"></path>
        }
        .into_any(),
        IconKind::Info => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <path d="M12 16v-4"></path>
            <path d="M12 8h.01"></path>
        }
        .into_any(),
        IconKind::Play => view! { <polygon points="6 3 20 12 6 21 6 3"></polygon> }.into_any(),
        IconKind::Download => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path>
            <polyline points="7 10 12 15 17 10"></polyline>
            <line x1="12" x2="12" y1="15" y2="3"></line>
        }
        .into_any(),
        IconKind::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        }
        .into_any(),
        IconKind::Globe => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"></path>
            <path d="M2 12h20"></path>
        }
        .into_any(),
        IconKind::MapPin => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path>
            <circle cx="12" cy="10" r="3"></circle>
        }
        .into_any(),
        IconKind::ExternalLink => view! {
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
            <polyline points="15 3 21 3 21 9"></polyline>
            <line x1="10" y1="14" x2="21" y2="3"></line>
        }
        .into_any(),
        IconKind::Calendar => view! {
            <rect width="18" height="18" x="3" y="4" rx="2"></rect>
            <path d="M16 2v4"></path>
            <path d="M8 2v4"></path>
            <path d="M3 10h18"></path>
        }
        .into_any(),
        IconKind::Twitter => view! {
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"></path>
        }
        .into_any(),
        IconKind::Dribbble => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <path d="M19.13 5.09C15.22 9.14 10 10.44 2.25 10.94"></path>
            <path d="M21.75 12.84c-6.62-1.41-12.14 1-16.38 6.32"></path>
            <path d="M8.56 2.75c4.37 6 6 9.42 8 17.72"></path>
        }
        .into_any(),
        IconKind::Linkedin => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
            <rect width="4" height="12" x="2" y="9"></rect>
            <circle cx="4" cy="4" r="2"></circle>
        }
        .into_any(),
    }
}

/// Icon for a social link, picked by its label.
pub fn social_icon(label: &str) -> IconKind {
    match label.to_ascii_lowercase().as_str() {
        "twitter" | "x" => IconKind::Twitter,
        "dribbble" => IconKind::Dribbble,
        "linkedin" => IconKind::Linkedin,
        _ => IconKind::Globe,
    }
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;
