use scraper::{Html, Selector};

use crate::link_matcher::LinkEntry;

/// Pull every (name, href) pair out of the listing file table, in page
/// order. Returns None when the page doesn't carry the expected
/// `tbody#tbody` table at all, rows without an anchor are skipped.
pub fn extract_links(html: &str) -> Option<Vec<LinkEntry>> {
    let document = Html::parse_document(html);
    let tbody_selector = Selector::parse("tbody#tbody").unwrap();
    let row_selector = Selector::parse("tr.editable").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let tbody = document.select(&tbody_selector).next()?;

    let mut entries = vec![];
    for row in tbody.select(&row_selector) {
        let anchor = match row.select(&anchor_selector).next() {
            Some(anchor) => anchor,
            None => continue,
        };
        entries.push(LinkEntry {
            text: anchor.text().collect::<String>().trim().to_string(),
            href: anchor.value().attr("href").unwrap_or_default().to_string(),
        });
    }
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_body_returns_none() {
        let html = "<html><body><table><tbody><tr></tr></tbody></table></body></html>";
        assert!(extract_links(html).is_none());
    }

    #[test]
    fn rows_come_back_in_page_order() {
        let html = r#"
        <html>
        <body>
            <table>
            <tbody id="tbody">
                <tr class="editable"><td><a href="/f/aaa">Show E01 720p</a></td></tr>
                <tr class="editable"><td><a href="/f/bbb">Show E02 720p</a></td></tr>
                <tr class="editable"><td><a href="/f/ccc">Show E03 720p</a></td></tr>
            </tbody>
            </table>
        </body>
        </html>
        "#;

        let entries = extract_links(html).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "Show E01 720p");
        assert_eq!(entries[0].href, "/f/aaa");
        assert_eq!(entries[2].href, "/f/ccc");
    }

    #[test]
    fn row_without_anchor_is_skipped() {
        let html = r#"
        <table>
        <tbody id="tbody">
            <tr class="editable"><td>no link here</td></tr>
            <tr class="editable"><td><a href="/f/aaa">Show E01 720p</a></td></tr>
        </tbody>
        </table>
        "#;

        let entries = extract_links(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].href, "/f/aaa");
    }

    #[test]
    fn anchor_without_href_yields_empty_string() {
        let html = r#"
        <table>
        <tbody id="tbody">
            <tr class="editable"><td><a>Show E01 720p</a></td></tr>
        </tbody>
        </table>
        "#;

        let entries = extract_links(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].href, "");
    }

    #[test]
    fn non_editable_rows_are_ignored() {
        let html = r#"
        <table>
        <tbody id="tbody">
            <tr><td><a href="/f/header">not a file row</a></td></tr>
            <tr class="editable"><td><a href="/f/aaa">Show E01 720p</a></td></tr>
        </tbody>
        </table>
        "#;

        let entries = extract_links(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].href, "/f/aaa");
    }
}
