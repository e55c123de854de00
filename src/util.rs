use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Joins class lists, dropping empty parts and earlier repeats of a class.
pub fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let tokens = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>();
    tokens
        .iter()
        .enumerate()
        .filter(|&(i, t)| !tokens[i + 1..].contains(t))
        .map(|(_, t)| *t)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats `2024-03-15` (or an RFC 3339 timestamp) as "March 15, 2024" and
/// `2024-03` as "March 2024". Returns `None` for anything else.
pub fn format_date(date: &str) -> Option<String> {
    let date = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.format("%B %-d, %Y").to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.format("%B %-d, %Y").to_string());
    }
    NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %Y").to_string())
}

/// In-page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    /// Sections linked from the header navigation.
    pub const NAV: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// The last section whose top edge has scrolled past `offset`, given the
    /// top edge of each section relative to the viewport.
    pub fn in_view(tops: &[(Section, f64)], offset: f64) -> Option<Section> {
        tops.iter()
            .filter(|(_, top)| *top <= offset)
            .last()
            .map(|(s, _)| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_merge_classes() {
        assert_eq!(merge_classes(["px-4 py-2", "", "text-cyan"]), "px-4 py-2 text-cyan");
        assert_eq!(merge_classes(["a b", "b c"]), "a b c");
        assert_eq!(merge_classes(["  "]), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15").as_deref(), Some("March 15, 2024"));
        assert_eq!(
            format_date("2023-11-02T10:00:00Z").as_deref(),
            Some("November 2, 2023")
        );
        assert_eq!(format_date("2024-07").as_deref(), Some("July 2024"));
        assert_eq!(format_date("2024"), None);
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn test_section_anchors() {
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::from_href("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_href("about"), Some(Section::About));
        assert_eq!(Section::from_href("#blog"), None);
        assert_eq!(Section::from_href(""), None);
    }

    #[test]
    fn test_section_in_view() {
        let tops = [
            (Section::Home, -900.0),
            (Section::About, -100.0),
            (Section::Experience, 50.0),
            (Section::Projects, 700.0),
        ];
        assert_eq!(Section::in_view(&tops, 80.0), Some(Section::Experience));
        assert_eq!(Section::in_view(&tops, 0.0), Some(Section::About));
        assert_eq!(Section::in_view(&[(Section::Home, 10.0)], 0.0), None);
    }
}
