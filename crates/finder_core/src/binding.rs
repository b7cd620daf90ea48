use std::fmt;

use thiserror::Error;

use crate::Theme;

/// Capabilities the controller needs from the page it drives.
///
/// Input and keydown registration live on the platform side: it translates
/// its own events into [`crate::Msg`] values and hands them to the controller.
pub trait UiBinding {
    /// Current raw text of the search input.
    fn read_text(&self) -> String;
    fn set_results_html(&mut self, html: &str);
    fn set_results_visible(&mut self, visible: bool);
    fn show_loader(&mut self);
    fn hide_loader(&mut self);
    /// Full-page redirect to `path`.
    fn navigate(&mut self, path: &str);
    fn apply_theme(&mut self, theme: Theme);
}

/// Elements that must exist before search can be initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageElement {
    SearchInput,
    ResultsContainer,
    Loader,
    ThemeToggle,
}

impl PageElement {
    pub const REQUIRED: [PageElement; 4] = [
        PageElement::SearchInput,
        PageElement::ResultsContainer,
        PageElement::Loader,
        PageElement::ThemeToggle,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            PageElement::SearchInput => ".search-input",
            PageElement::ResultsContainer => "#results-container",
            PageElement::Loader => "#loader",
            PageElement::ThemeToggle => "#theme-toggle",
        }
    }
}

impl fmt::Display for PageElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Element lookup over the hosting page.
pub trait Document {
    fn has_element(&self, element: PageElement) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("required elements not found: {}", join_selectors(.0))]
    MissingElements(Vec<PageElement>),
}

fn join_selectors(elements: &[PageElement]) -> String {
    elements
        .iter()
        .map(|element| element.selector())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn check_required_elements(document: &dyn Document) -> Result<(), InitError> {
    let missing: Vec<PageElement> = PageElement::REQUIRED
        .into_iter()
        .filter(|element| !document.has_element(*element))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(InitError::MissingElements(missing))
    }
}
