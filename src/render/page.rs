use askama::Template;
use chrono::DateTime;

use crate::render::container::HtmlContainer;

const TITLE: &str = "Team Roster";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    /// Already rendered container element
    container: String,
    last_updated: Option<String>,
}

/// Wrap a rendered container in a standalone HTML document
pub fn render_page(container: &HtmlContainer, last_updated: Option<f64>) -> askama::Result<String> {
    PageTemplate {
        title: TITLE,
        container: container.to_html()?,
        last_updated: last_updated.and_then(format_timestamp),
    }
    .render()
}

fn format_timestamp(epoch_secs: f64) -> Option<String> {
    if !epoch_secs.is_finite() || epoch_secs <= 0.0 {
        return None;
    }
    DateTime::from_timestamp(epoch_secs.trunc() as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::container::{render_error, Container};

    #[test]
    fn test_page_wraps_container() {
        let mut container = HtmlContainer::new("roster-grid");
        container.replace_contents("<p>hi</p>".to_string());

        let page = render_page(&container, None).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Team Roster</title>"));
        assert!(page.contains("<div id=\"roster-grid\">\n<p>hi</p>\n</div>"));
        assert!(!page.contains("<footer>"));
    }

    #[test]
    fn test_footer_shows_last_updated() {
        let mut container = HtmlContainer::new("roster-grid");
        render_error(&mut container);

        let page = render_page(&container, Some(1_700_000_000.0)).unwrap();

        assert!(page.contains("<footer>Last updated 2023-11-14 22:13 UTC</footer>"));
    }

    #[test]
    fn test_zero_timestamp_means_never_updated() {
        let container = HtmlContainer::new("roster-grid");
        assert!(!render_page(&container, Some(0.0)).unwrap().contains("<footer>"));
    }
}
