//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders from the typed records in this module. Content is
//! compiled in, so lookups are the only "queries" the site makes and they
//! return `Option` rather than errors.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod blog;
mod case_studies;
mod cv;
mod home;
mod profile;

pub use blog::blog_posts;
pub use case_studies::case_studies;
pub use cv::cv;
pub use home::{home_projects, home_testimonials};
pub use profile::profile;

// =============================================================================
// SHARED
// =============================================================================

/// Hyperlink with a visible label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Quote shown in a testimonial card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One slide of a carousel or gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub kind: MediaKind,
    pub caption: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Small uppercase label above the caption.
    pub section: Option<&'static str>,
    /// Grouping used by the phase gallery's pill navigation.
    pub phase: Option<&'static str>,
    /// Longer notes in Markdown, shown in a details panel.
    pub details: Option<&'static str>,
}

impl MediaItem {
    pub const fn image(src: &'static str, alt: &'static str) -> Self {
        Self {
            src,
            alt,
            kind: MediaKind::Image,
            caption: None,
            description: None,
            section: None,
            phase: None,
            details: None,
        }
    }

    pub const fn video(src: &'static str, alt: &'static str) -> Self {
        Self { kind: MediaKind::Video, ..Self::image(src, alt) }
    }

    pub const fn captioned(self, caption: &'static str, description: &'static str) -> Self {
        Self { caption: Some(caption), description: Some(description), ..self }
    }

    pub const fn in_phase(self, phase: &'static str, section: &'static str) -> Self {
        Self { phase: Some(phase), section: Some(section), ..self }
    }

    pub const fn with_details(self, details: &'static str) -> Self {
        Self { details: Some(details), ..self }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

// =============================================================================
// HOME
// =============================================================================

/// Project card on the home page linking to a case study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub slug: &'static str,
}

impl Project {
    #[must_use]
    pub fn href(&self) -> String {
        case_study_href(self.slug)
    }
}

#[must_use]
pub fn case_study_href(slug: &str) -> String {
    format!("/case-studies/{slug}")
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub scheduling: ExternalLink,
    pub blog: ExternalLink,
    pub linkedin: ExternalLink,
    pub website: ExternalLink,
    pub socials: &'static [ExternalLink],
    pub cv_pdf: &'static str,
    pub portrait: &'static str,
    pub copyright: &'static str,
}

impl SiteProfile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// =============================================================================
// CV
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CvEntry {
    pub role: &'static str,
    pub period: &'static str,
    pub setting: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub school: &'static str,
    pub period: &'static str,
    pub degree: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CvProject {
    pub title: &'static str,
    pub summary: &'static str,
    pub outcomes: &'static [&'static str],
}

/// Short experience entry on the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceNote {
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cv {
    pub summary: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [CvEntry],
    pub education: &'static [EducationEntry],
    pub projects: &'static [CvProject],
    pub about_paragraphs: &'static [&'static str],
    pub approach_paragraphs: &'static [&'static str],
    pub about_experience: &'static [ExperienceNote],
    pub about_skills: &'static [SkillGroup],
}

// =============================================================================
// BLOG
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO-8601 date for `<time datetime>`.
    pub date: &'static str,
    pub display_date: &'static str,
    pub image: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

impl BlogPost {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Look up a blog post by exact slug.
#[must_use]
pub fn find_blog_post(slug: &str) -> Option<&'static BlogPost> {
    blog_posts().iter().find(|post| post.slug == slug)
}

// =============================================================================
// CASE STUDIES
// =============================================================================

/// Headline number in the metrics strip under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Before/after row in the results section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultMetric {
    pub label: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub improvement: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResearchMethod {
    pub title: &'static str,
    pub count: &'static str,
    pub insights: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    pub statement: &'static str,
    pub goals: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Research {
    pub methods: &'static [ResearchMethod],
    pub key_findings: &'static [&'static str],
}

/// One column of the design-iteration grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iteration {
    pub src: &'static str,
    pub alt: &'static str,
    pub label: &'static str,
    pub note: &'static str,
}

/// Stacked before/after pair driven by the comparison slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub hint: &'static str,
    pub base: MediaItem,
    pub overlay: MediaItem,
    pub overlay_label: &'static str,
    pub base_label: &'static str,
}

/// Visual that accompanies a design-process phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseMedia {
    None,
    Image(MediaItem),
    /// SVG file rendered through an `<object>` loader.
    SvgFile(MediaItem),
    Videos(&'static [MediaItem]),
    Carousel(&'static [MediaItem]),
    Comparison(Comparison),
    /// Design evolution rows, each a slice of iterations.
    Iterations {
        hint: &'static str,
        rows: &'static [&'static [Iteration]],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessPhase {
    pub title: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
    pub media: PhaseMedia,
}

/// Combined gallery covering every process phase in one carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignProcess {
    pub description: &'static str,
    pub media: &'static [MediaItem],
    pub deliverables: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub media: MediaItem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solutions {
    pub description: &'static str,
    pub features: &'static [KeyFeature],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductShowcase {
    pub title: &'static str,
    pub description: &'static str,
    pub screens: &'static [MediaItem],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextProject {
    pub title: &'static str,
    pub slug: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub hero: Option<MediaItem>,
    pub metrics: &'static [Metric],
    /// Ordered `(label, value)` pairs for the project overview grid.
    pub overview: &'static [(&'static str, &'static str)],
    pub problem: Problem,
    pub research: Research,
    pub showcase: Option<ProductShowcase>,
    pub links: &'static [ExternalLink],
    pub design_process: Option<DesignProcess>,
    pub process: &'static [ProcessPhase],
    pub solutions: Option<Solutions>,
    pub results: &'static [ResultMetric],
    pub testimonials: &'static [Testimonial],
    pub learnings: &'static [&'static str],
    pub personal_growth: &'static [&'static str],
    pub next: NextProject,
}

impl CaseStudy {
    #[must_use]
    pub fn href(&self) -> String {
        case_study_href(self.slug)
    }
}

/// Look up a case study by slug.
///
/// Exact matches win; otherwise an ASCII case-insensitive match is accepted
/// because older links used a different capitalisation.
#[must_use]
pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    let all = case_studies();
    all.iter()
        .find(|study| study.slug == slug)
        .or_else(|| all.iter().find(|study| study.slug.eq_ignore_ascii_case(slug)))
}
