//! Document title capture and section depth.
//!
//! The first title in a translation names the whole document and is not
//! rendered. Sections nest from a base depth that depends on the document
//! class: `manual` documents start at chapters, everything else one level
//! deeper.

use crate::model::Kind;

/// Heading commands, indexed by section depth.
pub const SECTION_NAMES: [&str; 7] = [
    "chapter",
    "chapter",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "subparagraph",
];

/// Document class whose sections start at depth 0.
const ROOT_DOCUMENT_CLASS: &str = "manual";

/// Emitted when the first document starts.
pub const BEGIN_DOCUMENT: &str = "\\begin{document}\n\\maketitle\n\\tableofcontents\n";

/// Emitted when the second document starts.
pub const APPENDIX: &str = "\n\\appendix\n";

/// Base section depth for a document class.
pub fn base_depth(docclass: &str) -> i32 {
    if docclass == ROOT_DOCUMENT_CLASS { 0 } else { 1 }
}

/// Heading command for a depth, clamped to the known names.
pub fn heading_command(depth: i32) -> &'static str {
    let index = depth.clamp(0, SECTION_NAMES.len() as i32 - 1) as usize;
    SECTION_NAMES[index]
}

/// How many documents have been entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DocumentPhase {
    #[default]
    NotStarted,
    Body,
    Appendix,
}

/// Where a rendered title sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePlacement {
    /// Section heading.
    Section,
    /// Caption of a topic or sidebar.
    Aside,
    /// The parent already prints its own heading.
    Suppressed,
    /// Anywhere else; rendered bold with a warning.
    Other,
}

impl TitlePlacement {
    pub fn for_parent(parent: Option<&Kind>) -> Self {
        match parent {
            Some(Kind::Section { .. }) => TitlePlacement::Section,
            Some(Kind::Topic | Kind::Sidebar) => TitlePlacement::Aside,
            Some(Kind::Seealso) => TitlePlacement::Suppressed,
            _ => TitlePlacement::Other,
        }
    }
}

/// Section depth and title capture state.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    base: i32,
    depth: i32,
    title_pending: bool,
    phase: DocumentPhase,
}

impl SectionTracker {
    pub fn new(docclass: &str) -> Self {
        let base = base_depth(docclass);
        Self {
            base,
            depth: base,
            title_pending: true,
            phase: DocumentPhase::NotStarted,
        }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Enter a document node; returns the marker to emit, if any.
    pub fn enter_document(&mut self) -> Option<&'static str> {
        self.depth = self.base;
        match self.phase {
            DocumentPhase::NotStarted => {
                self.phase = DocumentPhase::Body;
                Some(BEGIN_DOCUMENT)
            }
            DocumentPhase::Body => {
                self.phase = DocumentPhase::Appendix;
                Some(APPENDIX)
            }
            DocumentPhase::Appendix => None,
        }
    }

    /// The section holding the document title does not nest.
    pub fn enter_section(&mut self) {
        if !self.title_pending {
            self.depth += 1;
        }
    }

    pub fn leave_section(&mut self) {
        self.depth -= 1;
    }

    /// Claim the document title. Returns `true` exactly once.
    pub fn take_title(&mut self) -> bool {
        std::mem::replace(&mut self.title_pending, false)
    }

    /// Heading command for a section title at the current depth.
    pub fn heading(&self) -> &'static str {
        heading_command(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_depth_depends_on_class() {
        assert_eq!(SectionTracker::new("manual").depth(), 0);
        assert_eq!(SectionTracker::new("howto").depth(), 1);
    }

    #[test]
    fn test_heading_command_clamps() {
        assert_eq!(heading_command(-1), "chapter");
        assert_eq!(heading_command(2), "section");
        assert_eq!(heading_command(40), "subparagraph");
    }

    #[test]
    fn test_title_is_taken_once() {
        let mut tracker = SectionTracker::new("manual");
        assert!(tracker.take_title());
        assert!(!tracker.take_title());
    }

    #[test]
    fn test_title_section_does_not_nest() {
        let mut tracker = SectionTracker::new("manual");
        tracker.enter_document();
        tracker.enter_section();
        assert_eq!(tracker.depth(), 0);
        tracker.take_title();
        tracker.enter_section();
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.heading(), "chapter");
        tracker.enter_section();
        assert_eq!(tracker.heading(), "section");
        tracker.leave_section();
        tracker.leave_section();
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_document_markers() {
        let mut tracker = SectionTracker::new("howto");
        assert_eq!(tracker.enter_document(), Some(BEGIN_DOCUMENT));
        tracker.enter_section();
        assert_eq!(tracker.enter_document(), Some(APPENDIX));
        assert_eq!(tracker.depth(), 1);
        assert_eq!(tracker.enter_document(), None);
        assert_eq!(tracker.enter_document(), None);
    }

    #[test]
    fn test_title_placement() {
        assert_eq!(
            TitlePlacement::for_parent(Some(&Kind::Section { ids: vec![] })),
            TitlePlacement::Section
        );
        assert_eq!(TitlePlacement::for_parent(Some(&Kind::Sidebar)), TitlePlacement::Aside);
        assert_eq!(
            TitlePlacement::for_parent(Some(&Kind::Seealso)),
            TitlePlacement::Suppressed
        );
        assert_eq!(TitlePlacement::for_parent(Some(&Kind::Table)), TitlePlacement::Other);
        assert_eq!(TitlePlacement::for_parent(None), TitlePlacement::Other);
    }
}
