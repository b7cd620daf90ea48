//! Line-oriented stand-in for the search page.
//!
//! Each plain line replaces the search input's text; lines starting with `:`
//! are commands (`:enter`, `:open N`, `:theme light|dark`, `:quit`).

use std::io::Write;

use finder_core::{Document, Key, PageElement, Theme, UiBinding};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Input(String),
    Key(Key),
    OpenRow(usize),
    Theme { light: bool },
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ConsoleCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return ConsoleCommand::Input(line.to_string());
    };
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("enter"), None) => ConsoleCommand::Key(Key::Enter),
        (Some("quit" | "q"), None) => ConsoleCommand::Quit,
        // Rows are numbered from 1 on screen.
        (Some("open"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => ConsoleCommand::OpenRow(n - 1),
            _ => ConsoleCommand::Unknown(line.to_string()),
        },
        (Some("theme"), Some("light")) => ConsoleCommand::Theme { light: true },
        (Some("theme"), Some("dark")) => ConsoleCommand::Theme { light: false },
        _ => ConsoleCommand::Unknown(line.to_string()),
    }
}

/// The console always provides every element the search needs.
pub struct ConsoleDocument;

impl Document for ConsoleDocument {
    fn has_element(&self, _element: PageElement) -> bool {
        true
    }
}

/// Writes page changes to `out` as they happen.
pub struct ConsolePage<W: Write> {
    out: W,
    base_url: String,
    input: String,
    results_html: String,
    results_visible: bool,
    shown_html: Option<String>,
    loader_visible: bool,
    theme: Option<Theme>,
}

impl<W: Write> ConsolePage<W> {
    pub fn new(out: W, base_url: impl Into<String>) -> Self {
        Self {
            out,
            base_url: base_url.into(),
            input: String::new(),
            results_html: String::new(),
            results_visible: false,
            shown_html: None,
            loader_visible: false,
            theme: None,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn print_notice(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    /// Prints the results container if its visible contents changed.
    pub fn flush_frame(&mut self) {
        let visible = self.results_visible.then(|| self.results_html.clone());
        if visible == self.shown_html {
            return;
        }
        match &visible {
            Some(html) => {
                let _ = writeln!(self.out, "[results]\n{html}");
            }
            None => {
                let _ = writeln!(self.out, "[results hidden]");
            }
        }
        let _ = self.out.flush();
        self.shown_html = visible;
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> UiBinding for ConsolePage<W> {
    fn read_text(&self) -> String {
        self.input.clone()
    }

    fn set_results_html(&mut self, html: &str) {
        html.clone_into(&mut self.results_html);
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn show_loader(&mut self) {
        if !self.loader_visible {
            self.loader_visible = true;
            let _ = writeln!(self.out, "[searching...]");
        }
    }

    fn hide_loader(&mut self) {
        self.loader_visible = false;
    }

    fn navigate(&mut self, path: &str) {
        let _ = writeln!(self.out, "[navigate] {}{}", self.base_url, path);
        let _ = self.out.flush();
    }

    fn apply_theme(&mut self, theme: Theme) {
        if self.theme != Some(theme) {
            self.theme = Some(theme);
            let _ = writeln!(self.out, "[theme] {}", theme.as_str());
        }
    }
}
