use super::{ExternalLink, SiteProfile};

static SOCIALS: [ExternalLink; 3] = [
    ExternalLink { label: "Twitter", href: "https://twitter.com" },
    ExternalLink { label: "Dribbble", href: "https://dribbble.com" },
    ExternalLink { label: "LinkedIn", href: "https://linkedin.com" },
];

static PROFILE: SiteProfile = SiteProfile {
    name: "Emil Donchev",
    title: "Product Designer",
    location: "Plovdiv, Bulgaria",
    summary: "Experienced Product Designer with a strong focus on user-centric design and problem-solving. I create scalable, user-centric solutions that address real business needs.",
    email: "aemd2donchev@gmail.com",
    scheduling: ExternalLink {
        label: "Book via Calendly",
        href: "https://calendly.com/aemd2donchev/interview",
    },
    blog: ExternalLink { label: "BLOG", href: "https://medium.com/@aemd2donchev" },
    linkedin: ExternalLink {
        label: "linkedin.com/in/emil-donchev",
        href: "https://www.linkedin.com/in/emil-donchev",
    },
    website: ExternalLink {
        label: "emildonchev-producrdesigner.com",
        href: "https://www.emildonchev-producrdesigner.com/",
    },
    socials: &SOCIALS,
    cv_pdf: "/emil-donchev-cv.pdf",
    portrait: "/new picture.jpg",
    copyright: "© 2025 Emil Donchev. All rights reserved.",
};

pub fn profile() -> &'static SiteProfile {
    &PROFILE
}
