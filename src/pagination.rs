use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Sleep,
    Readiness,
    Activity,
    Bedtime,
}

impl PageType {
    pub const ALL: [PageType; 4] = [
        PageType::Sleep,
        PageType::Readiness,
        PageType::Activity,
        PageType::Bedtime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageType::Sleep => "sleep",
            PageType::Readiness => "readiness",
            PageType::Activity => "activity",
            PageType::Bedtime => "bedtime",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageType::Sleep => "Sleep Data",
            PageType::Readiness => "Readiness Data",
            PageType::Activity => "Activity Data",
            PageType::Bedtime => "Bedtime Data",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|page| page.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// A configured page. Names from the settings file that match no page type
/// are kept so they can be reported on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSlot {
    Known(PageType),
    Unrecognized(String),
}

impl PageSlot {
    pub fn parse(name: &str) -> Self {
        match name.parse::<PageType>() {
            Ok(page) => PageSlot::Known(page),
            Err(name) => PageSlot::Unrecognized(name),
        }
    }
}

/// Cyclic cursor over a non-empty page order.
#[derive(Debug, Clone)]
pub struct Pagination {
    pages: Vec<PageSlot>,
    index: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageType::ALL.into_iter().map(PageSlot::Known).collect())
    }
}

impl Pagination {
    /// An empty order falls back to every page type.
    pub fn new(pages: Vec<PageSlot>) -> Self {
        if pages.is_empty() {
            return Self::default();
        }
        Self { pages, index: 0 }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let pages = names
            .iter()
            .map(|name| {
                let slot = PageSlot::parse(name.as_ref());
                if let PageSlot::Unrecognized(name) = &slot {
                    tracing::warn!(page = %name, "unrecognized page in settings");
                }
                slot
            })
            .collect();
        Self::new(pages)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &PageSlot {
        &self.pages[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.pages.len();
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.pages.len() - 1) % self.pages.len();
    }

    /// One sigil per page, `_` on the current one, centered in `width` columns.
    /// Empty when there is nothing to page through.
    pub fn marker(&self, width: usize) -> String {
        if self.pages.len() <= 1 {
            return String::new();
        }
        let sigils: String = (0..self.pages.len())
            .map(|i| if i == self.index { '_' } else { '*' })
            .collect();
        crate::format::center(&sigils, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_starts_on_first_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.index(), 0);
        assert_eq!(pagination.current(), &PageSlot::Known(PageType::Sleep));
    }

    #[test]
    fn test_advance_wraps_after_full_cycle() {
        for n in 1..=4 {
            let mut pagination = Pagination::new(
                PageType::ALL[..n].iter().copied().map(PageSlot::Known).collect(),
            );
            for _ in 0..n {
                pagination.advance();
            }
            assert_eq!(pagination.index(), 0, "n = {n}");
        }
    }

    #[test]
    fn test_retreat_from_first_lands_on_last() {
        let mut pagination = Pagination::default();
        pagination.retreat();
        assert_eq!(pagination.index(), 3);
        assert_eq!(pagination.current(), &PageSlot::Known(PageType::Bedtime));
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut pagination = Pagination::default();
        pagination.advance();
        pagination.advance();
        pagination.retreat();
        assert_eq!(pagination.current(), &PageSlot::Known(PageType::Readiness));
    }

    #[test]
    fn test_single_page_stays_put() {
        let mut pagination = Pagination::from_names(&["sleep"]);
        pagination.advance();
        assert_eq!(pagination.index(), 0);
        pagination.retreat();
        assert_eq!(pagination.index(), 0);
    }

    #[test]
    fn test_from_names_keeps_unrecognized_pages() {
        let pagination = Pagination::from_names(&["Sleep", " readiness", "steps"]);
        assert_eq!(pagination.len(), 3);
        let mut pagination = pagination;
        pagination.retreat();
        assert_eq!(
            pagination.current(),
            &PageSlot::Unrecognized("steps".to_string())
        );
    }

    #[test]
    fn test_unrecognized_page_names_are_logged() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Pagination::from_names(&["sleep", "steps"]);
        });

        let output = log.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("unrecognized page in settings"), "{output}");
        assert!(output.contains("steps"), "{output}");
        assert!(!output.contains("page=sleep"), "{output}");
    }

    #[test]
    fn test_empty_order_falls_back_to_all_pages() {
        let pagination = Pagination::from_names::<&str>(&[]);
        assert_eq!(pagination.len(), 4);
        assert!(!pagination.is_empty());
    }

    #[test]
    fn test_marker_highlights_current_page() {
        let mut pagination = Pagination::default();
        assert_eq!(pagination.marker(4), "_***");
        pagination.advance();
        assert_eq!(pagination.marker(8), "  *_**");
    }

    #[test]
    fn test_marker_empty_for_single_page() {
        assert_eq!(Pagination::from_names(&["bedtime"]).marker(20), "");
    }
}
