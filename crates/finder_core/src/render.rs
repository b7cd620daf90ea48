use std::fmt::Write;

use crate::{ResultRowView, ResultsView, SearchResult, ADDON_ICON, MAX_VISIBLE_ROWS};

pub const NO_RESULTS_HTML: &str = r#"<div class="no-results">No results found</div>"#;
pub const ERROR_HTML: &str = r#"<div class="no-results">Error loading results</div>"#;

/// Builds the container view for a result sequence, keeping API order.
pub fn display_results(results: &[SearchResult], max_rows: usize) -> ResultsView {
    if results.is_empty() {
        return ResultsView::NoResults;
    }
    let shown = results.len().min(max_rows);
    let rows = results[..shown]
        .iter()
        .enumerate()
        .map(|(index, result)| ResultRowView {
            index,
            esoui_id: result.esoui_id,
            title: result.title.clone(),
            author: result.author.clone(),
            icon: ADDON_ICON,
        })
        .collect();
    ResultsView::Rows {
        rows,
        hidden: results.len() - shown,
    }
}

/// Trailer text for results cut off by the row limit.
pub fn hidden_results_label(hidden: usize) -> String {
    let noun = if hidden == 1 { "result" } else { "results" };
    format!("~ {hidden} more {noun} hidden ~")
}

pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Empty => String::new(),
        ResultsView::NoResults => NO_RESULTS_HTML.to_string(),
        ResultsView::Error => ERROR_HTML.to_string(),
        ResultsView::Rows { rows, hidden } => {
            let mut html = String::new();
            for row in rows {
                render_row(&mut html, row);
            }
            if *hidden > 0 {
                let _ = write!(
                    html,
                    r#"<div class="more-results">{}</div>"#,
                    hidden_results_label(*hidden)
                );
            }
            html
        }
    }
}

/// Shorthand for rendering a sequence with the default row limit.
pub fn results_html(results: &[SearchResult]) -> String {
    render_results(&display_results(results, MAX_VISIBLE_ROWS))
}

fn render_row(html: &mut String, row: &ResultRowView) {
    let _ = write!(
        html,
        concat!(
            r#"<div class="result-item" data-index="{index}">"#,
            r#"<div class="result-icon"><i class="{icon}"></i></div>"#,
            r#"<div class="result-content">"#,
            r#"<div class="result-title">{title}</div>"#,
            r#"<div class="result-author">by {author}</div>"#,
            "</div></div>",
        ),
        index = row.index,
        icon = row.icon,
        title = escape_html(&row.title),
        author = escape_html(&row.author),
    );
}

// Titles and author names come straight from the API.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_replaces_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("LibAddonMenu-2.0"), "LibAddonMenu-2.0");
    }
}
