//! Search controller: turns a submitted query into what the user sees.
//!
//! Searches run on explicit submit only (form submit / Enter, or one CLI
//! invocation). There is no keystroke debounce.

use tracing::debug;

use crate::api::LookupService;
use crate::lookup::normalize;
use crate::models::Record;
use crate::page::escape_html;

/// Message shown before any search has been made
pub const IDLE_MESSAGE: &str = "Enter a zip code to search.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing searched yet, or the query was blank
    Idle,
    Results { query: String, records: Vec<Record> },
    NoResults { query: String },
}

impl ViewState {
    /// Render the results region as an HTML fragment
    pub fn render(&self) -> String {
        match self {
            ViewState::Idle => format!(r#"<p class="idle">{}</p>"#, IDLE_MESSAGE),
            ViewState::Results { query, records } => {
                let mut html = format!(
                    "<h2>Results for '{}'</h2>\n        <ul>\n",
                    escape_html(query)
                );
                for record in records {
                    html.push_str(&format!(
                        "            <li><b>{}</b><span class=\"code\">{}</span></li>\n",
                        escape_html(&record.location()),
                        escape_html(&record.code)
                    ));
                }
                html.push_str("        </ul>");
                html
            }
            ViewState::NoResults { query } => format!(
                r#"<p class="no-results">No results for '{}'</p>"#,
                escape_html(query)
            ),
        }
    }

    /// Plain-text rendering for terminal output
    pub fn render_text(&self) -> String {
        match self {
            ViewState::Idle => IDLE_MESSAGE.to_string(),
            ViewState::Results { records, .. } => records
                .iter()
                .map(|r| format!("{}  {}", r.code, r.location()))
                .collect::<Vec<_>>()
                .join("\n"),
            ViewState::NoResults { query } => format!("No results for '{}'", query),
        }
    }
}

pub struct SearchController {
    service: LookupService,
    state: ViewState,
}

impl SearchController {
    pub fn new(service: LookupService) -> Self {
        Self {
            service,
            state: ViewState::Idle,
        }
    }

    /// Run a lookup for `raw_query` and update the view.
    /// A blank query resets to the idle state.
    /// The view echoes the trimmed query as typed; only matching uses the
    /// normalized form.
    pub fn submit(&mut self, raw_query: &str) -> &ViewState {
        let query = raw_query.trim().to_string();

        self.state = if query.is_empty() {
            ViewState::Idle
        } else {
            let records: Vec<Record> = self.service.find(&query).into_iter().cloned().collect();
            debug!("Query '{}' matched {} record(s)", normalize(&query), records.len());
            if records.is_empty() {
                ViewState::NoResults { query }
            } else {
                ViewState::Results { query, records }
            }
        };

        &self.state
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn render(&self) -> String {
        self.state.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::lookup::MatchMode;

    fn controller() -> SearchController {
        let dataset = Dataset::new(vec![
            Record::new("90210", "Beverly Hills", "CA"),
            Record::new("02108", "Boston", "MA"),
        ]);
        SearchController::new(LookupService::new(dataset, MatchMode::Exact))
    }

    #[test]
    fn test_starts_idle() {
        let c = controller();
        assert_eq!(c.state(), &ViewState::Idle);
        assert!(c.render().contains(IDLE_MESSAGE));
    }

    #[test]
    fn test_match_renders_city_state() {
        let mut c = controller();
        c.submit("90210");
        let html = c.render();
        assert!(html.contains("Beverly Hills, CA"));
        assert!(html.contains("90210"));
        assert_eq!(c.state().render_text(), "90210  Beverly Hills, CA");
    }

    #[test]
    fn test_no_match_shows_message() {
        let mut c = controller();
        let state = c.submit("00000").clone();
        assert_eq!(state, ViewState::NoResults { query: "00000".to_string() });

        let html = c.render();
        assert!(html.contains("No results for '00000'"));
        assert!(!html.contains(IDLE_MESSAGE));
    }

    #[test]
    fn test_whitespace_query_same_as_trimmed() {
        let mut c = controller();
        let padded = c.submit(" 90210 ").clone();
        let plain = c.submit("90210").clone();
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_blank_query_returns_to_idle() {
        let mut c = controller();
        c.submit("90210");
        assert_eq!(c.submit("   "), &ViewState::Idle);
    }

    #[test]
    fn test_query_is_escaped() {
        let mut c = controller();
        c.submit("<b>x</b>");
        let html = c.render();
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_query_echoed_as_typed() {
        let mut c = controller();
        assert_eq!(
            c.submit("  k1a "),
            &ViewState::NoResults { query: "k1a".to_string() }
        );
        assert!(c.render().contains("No results for 'k1a'"));
        assert_eq!(c.state().render_text(), "No results for 'k1a'");
    }

    #[test]
    fn test_empty_dataset_never_fails() {
        let mut c = SearchController::new(LookupService::new(Dataset::default(), MatchMode::Exact));
        assert!(matches!(c.submit("90210"), ViewState::NoResults { .. }));
        assert!(c.render().contains("No results"));
    }
}
