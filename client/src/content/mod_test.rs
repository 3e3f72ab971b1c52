use super::*;
use std::collections::HashSet;

fn all_media(study: &CaseStudy) -> Vec<MediaItem> {
    let mut media: Vec<MediaItem> = study.hero.into_iter().collect();
    if let Some(showcase) = study.showcase {
        media.extend_from_slice(showcase.screens);
    }
    if let Some(process) = study.design_process {
        media.extend_from_slice(process.media);
    }
    if let Some(solutions) = study.solutions {
        media.extend(solutions.features.iter().map(|f| f.media));
    }
    for phase in study.process {
        match phase.media {
            PhaseMedia::None | PhaseMedia::Iterations { .. } => {}
            PhaseMedia::Image(item) | PhaseMedia::SvgFile(item) => media.push(item),
            PhaseMedia::Videos(items) | PhaseMedia::Carousel(items) => media.extend_from_slice(items),
            PhaseMedia::Comparison(c) => {
                media.push(c.base);
                media.push(c.overlay);
            }
        }
    }
    media
}

fn is_valid_src(src: &str) -> bool {
    src.starts_with('/') || src.starts_with("https://")
}

// =============================================================
// case studies
// =============================================================

#[test]
fn case_study_slugs_are_unique() {
    let slugs: HashSet<&str> = case_studies().iter().map(|s| s.slug).collect();
    assert_eq!(slugs.len(), case_studies().len());
}

#[test]
fn every_next_project_resolves() {
    for study in case_studies() {
        let next = find_case_study(study.next.slug);
        assert!(next.is_some(), "{} -> {}", study.slug, study.next.slug);
    }
}

#[test]
fn home_projects_link_to_case_studies() {
    for project in home_projects() {
        let study = find_case_study(project.slug).expect("project slug resolves");
        assert_eq!(study.title, project.title);
        assert_eq!(project.href(), format!("/case-studies/{}", study.slug));
    }
}

#[test]
fn find_case_study_prefers_exact_match() {
    assert_eq!(find_case_study("Afrika").map(|s| s.slug), Some("Afrika"));
    assert_eq!(find_case_study("pen-pal").map(|s| s.slug), Some("pen-pal"));
}

#[test]
fn find_case_study_falls_back_to_case_insensitive() {
    assert_eq!(find_case_study("afrika").map(|s| s.slug), Some("Afrika"));
    assert_eq!(find_case_study("DREAM-AI").map(|s| s.slug), Some("Dream-Ai"));
}

#[test]
fn find_case_study_unknown_is_none() {
    assert!(find_case_study("unknown").is_none());
    assert!(find_case_study("").is_none());
}

#[test]
fn media_sources_are_rooted_or_absolute() {
    for study in case_studies() {
        for item in all_media(study) {
            assert!(is_valid_src(item.src), "{}: {}", study.slug, item.src);
        }
    }
    for project in home_projects() {
        assert!(is_valid_src(project.logo));
    }
}

#[test]
fn afrika_has_comparison_slider_phase() {
    let study = find_case_study("Afrika").expect("afrika");
    let comparison = study.process.iter().find_map(|phase| match phase.media {
        PhaseMedia::Comparison(c) => Some(c),
        _ => None,
    });
    let comparison = comparison.expect("comparison phase");
    assert_eq!(comparison.base.src, "/Africa/Africa home page.png");
    assert_eq!(comparison.overlay.src, "/Africa/Landing page.png");
}

#[test]
fn pen_pal_process_gallery_is_phase_grouped() {
    let study = find_case_study("pen-pal").expect("pen pal");
    let process = study.design_process.expect("design process");
    assert_eq!(process.media.len(), 8);
    assert!(process.media.iter().all(|m| m.phase.is_some() && m.details.is_some()));
    assert_eq!(study.testimonials.len(), 4);
}

// =============================================================
// blog, profile, cv
// =============================================================

#[test]
fn blog_posts_are_newest_first() {
    let dates: Vec<&str> = blog_posts().iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[test]
fn find_blog_post_is_exact() {
    let post = find_blog_post("user-research-startups").expect("post");
    assert_eq!(post.href(), "/blog/user-research-startups");
    assert!(find_blog_post("User-Research-Startups").is_none());
}

#[test]
fn profile_links_are_well_formed() {
    let p = profile();
    assert_eq!(p.mailto(), "mailto:aemd2donchev@gmail.com");
    assert!(p.cv_pdf.ends_with(".pdf"));
    assert!(p.socials.iter().all(|s| s.href.starts_with("https://")));
}

#[test]
fn cv_sections_are_populated() {
    let cv = cv();
    assert!(!cv.skills.is_empty());
    assert!(cv.experience.iter().all(|e| !e.highlights.is_empty()));
    assert_eq!(cv.education.len(), 3);
}

#[test]
fn home_has_three_testimonials() {
    assert_eq!(home_testimonials().len(), 3);
}
