use crate::portfolio::Project;

/// Items shown before a list is expanded.
pub const PAGE_SIZE: usize = 6;
/// Skill items shown while a card is collapsed.
pub const PREVIEW_ITEMS: usize = 4;

pub const FILTER_TAGS: [&str; 5] = ["AI/ML", "Python", "Cloud", "React", "NLP"];

/// Show more / show less over an ordered list. Binary: either the first page
/// or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCount {
    page: usize,
    count: usize,
}

impl Default for VisibleCount {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl VisibleCount {
    pub fn new(page: usize) -> Self {
        Self { page, count: page }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = self.page;
    }

    pub fn toggle(&mut self, total: usize) {
        self.count = if self.count >= total { self.page } else { total };
    }

    pub fn visible(&self, total: usize) -> usize {
        self.count.min(total)
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.count)
    }

    pub fn can_expand(&self, total: usize) -> bool {
        total > self.page
    }

    pub fn toggle_label(&self, total: usize) -> String {
        if self.count >= total {
            "Show Less".to_string()
        } else {
            format!("Show {} More", self.remaining(total))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Tag(String),
}

impl ProjectFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Projects",
            Self::Tag(t) => t,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => {
                let tag = tag.to_lowercase();
                project
                    .technologies
                    .iter()
                    .any(|t| t.to_lowercase().contains(&tag))
            }
        }
    }

    /// "All Projects" followed by one filter per tag, in button order.
    pub fn options() -> Vec<ProjectFilter> {
        std::iter::once(Self::All)
            .chain(FILTER_TAGS.iter().map(|t| Self::Tag(t.to_string())))
            .collect()
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter plus visible count over the project table.
#[derive(Debug, Clone)]
pub struct ProjectListing {
    projects: &'static [Project],
    filter: ProjectFilter,
    visible: VisibleCount,
}

impl ProjectListing {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            filter: ProjectFilter::All,
            visible: VisibleCount::default(),
        }
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn is_selected(&self, filter: &ProjectFilter) -> bool {
        self.filter == *filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.visible.reset();
    }

    pub fn matching(&self) -> Vec<&'static Project> {
        self.filter.apply(self.projects)
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        let mut matching = self.matching();
        matching.truncate(self.visible.count());
        matching
    }

    pub fn is_empty(&self) -> bool {
        self.matching().is_empty()
    }

    pub fn toggle(&mut self) {
        let total = self.matching().len();
        self.visible.toggle(total);
    }

    pub fn can_expand(&self) -> bool {
        self.visible.can_expand(self.matching().len())
    }

    pub fn toggle_label(&self) -> String {
        self.visible.toggle_label(self.matching().len())
    }

    pub fn summary(&self) -> String {
        let total = self.matching().len();
        let shown = self.visible.visible(total);
        match &self.filter {
            ProjectFilter::All => format!("Showing {shown} of {total} projects"),
            ProjectFilter::Tag(t) => {
                format!("Showing {shown} of {total} projects filtered by \"{t}\"")
            }
        }
    }
}

/// Collapsed/expanded state of one skill card's item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemPreview {
    expanded: bool,
}

impl ItemPreview {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(PREVIEW_ITEMS)]
        }
    }

    pub fn has_more(&self, len: usize) -> bool {
        len > PREVIEW_ITEMS
    }

    pub fn toggle_label(&self, len: usize) -> String {
        if self.expanded {
            "Show Less".to_string()
        } else {
            format!("Show {} More", len.saturating_sub(PREVIEW_ITEMS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{CERTIFICATIONS, PROJECTS, SKILLS};

    #[test]
    fn test_project_page_toggle() {
        let mut listing = ProjectListing::new(PROJECTS);
        assert_eq!(listing.visible_projects().len(), 6);
        assert!(listing.can_expand());
        assert_eq!(listing.toggle_label(), "Show 3 More");

        listing.toggle();
        assert_eq!(listing.visible_projects().len(), 9);
        assert_eq!(listing.toggle_label(), "Show Less");

        listing.toggle();
        assert_eq!(listing.visible_projects().len(), 6);
        assert_eq!(listing.summary(), "Showing 6 of 9 projects");
    }

    #[test]
    fn test_filter_without_matches() {
        let mut listing = ProjectListing::new(PROJECTS);
        listing.set_filter(ProjectFilter::Tag("Cloud".to_string()));
        assert!(listing.is_empty());
        assert!(listing.visible_projects().is_empty());
        assert_eq!(
            listing.summary(),
            "Showing 0 of 0 projects filtered by \"Cloud\""
        );

        listing.set_filter(ProjectFilter::All);
        assert_eq!(listing.matching().len(), 9);
        assert_eq!(listing.visible_projects().len(), 6);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let filter = ProjectFilter::Tag("python".to_string());
        let ids = filter
            .apply(PROJECTS)
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), 8);
        assert!(!ids.contains(&"sorting-visualizer"));

        // "ML" matches "AI/ML" and "ML" but also "HTML"
        let ml = ProjectFilter::Tag("ml".to_string()).apply(PROJECTS);
        assert!(ml.iter().any(|p| p.id == "sorting-visualizer"));
    }

    #[test]
    fn test_filter_change_resets_visible_count() {
        let mut listing = ProjectListing::new(PROJECTS);
        listing.toggle();
        assert_eq!(listing.visible_projects().len(), 9);
        listing.set_filter(ProjectFilter::Tag("Python".to_string()));
        assert_eq!(listing.visible_projects().len(), 6);
        assert_eq!(listing.toggle_label(), "Show 2 More");
    }

    #[test]
    fn test_filter_buttons_track_selection() {
        let options = ProjectFilter::options();
        assert_eq!(options.len(), FILTER_TAGS.len() + 1);
        assert_eq!(options[0].label(), "All Projects");
        assert_eq!(options[1], ProjectFilter::Tag("AI/ML".to_string()));

        let mut listing = ProjectListing::new(PROJECTS);
        let selected = |l: &ProjectListing| {
            options
                .iter()
                .filter(|f| l.is_selected(f))
                .map(|f| f.label().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(selected(&listing), ["All Projects"]);

        listing.set_filter(options[5].clone());
        assert_eq!(selected(&listing), ["NLP"]);
        assert!(!listing.is_selected(&ProjectFilter::All));
    }

    #[test]
    fn test_certifications_page() {
        let mut visible = VisibleCount::default();
        let total = CERTIFICATIONS.len();
        assert_eq!(visible.visible(total), 6);
        assert_eq!(visible.toggle_label(total), "Show 1 More");
        visible.toggle(total);
        assert_eq!(visible.visible(total), 7);
        visible.toggle(total);
        assert_eq!(visible.visible(total), 6);
    }

    #[test]
    fn test_short_list_cannot_expand() {
        let visible = VisibleCount::default();
        assert!(!visible.can_expand(6));
        assert_eq!(visible.visible(3), 3);
    }

    #[test]
    fn test_skill_preview_toggle() {
        let skill = SKILLS
            .iter()
            .find(|s| s.category == "Large Language Models")
            .unwrap();
        let mut preview = ItemPreview::default();
        assert!(preview.has_more(skill.items.len()));
        assert_eq!(preview.visible(skill.items).len(), 4);
        assert_eq!(preview.toggle_label(skill.items.len()), "Show 2 More");
        preview.toggle();
        assert_eq!(preview.visible(skill.items).len(), 6);
        preview.toggle();
        assert_eq!(preview.visible(skill.items), &skill.items[..4]);
    }

    #[test]
    fn test_short_skill_list() {
        let preview = ItemPreview::default();
        let items = ["a", "b", "c"];
        assert!(!preview.has_more(items.len()));
        assert_eq!(preview.visible(&items).len(), 3);
    }
}
