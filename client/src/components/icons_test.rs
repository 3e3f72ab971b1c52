use super::*;

#[test]
fn social_icon_matches_known_networks() {
    assert_eq!(social_icon("Twitter"), IconKind::Twitter);
    assert_eq!(social_icon("X"), IconKind::Twitter);
    assert_eq!(social_icon("DRIBBBLE"), IconKind::Dribbble);
    assert_eq!(social_icon("LinkedIn"), IconKind::Linkedin);
}

#[test]
fn social_icon_falls_back_to_globe() {
    assert_eq!(social_icon("Medium"), IconKind::Globe);
    assert_eq!(social_icon(""), IconKind::Globe);
}
