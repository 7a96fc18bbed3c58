//! HTML rendering of a table view.
//!
//! Produces the table markup (header groups, sortable headers with
//! direction indicators, a row of filter controls, body rows) followed by a
//! row-count footer. [`render_page`] wraps it in a standalone document with
//! the table stylesheet.

use crate::column::{Column, FilterControl};
use crate::filter::{FilterValue, distinct_values};
use crate::table::{Row, TableView};

/// Indicator appended to an ascending column header.
pub const ASC_INDICATOR: &str = " 🔼";
/// Indicator appended to a descending column header.
pub const DESC_INDICATOR: &str = " 🔽";

/// Stylesheet for the rendered table.
const STYLES: &str = r#"
.table-wrapper {
  padding: 1rem;
}

table {
  border-spacing: 0;
  border: 1px solid black;
}

table tr:last-child td {
  border-bottom: 0;
}

table th,
table td {
  margin: 0;
  padding: 0.5rem;
  border-bottom: 1px solid black;
  border-right: 1px solid black;
}

table th:last-child,
table td:last-child {
  border-right: 0;
}

table th[data-sortable="true"] {
  cursor: pointer;
}
"#;

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title (page rendering only).
    pub title: String,
    /// Plural noun used in the footer, e.g. `Showing 12 heros`.
    pub row_noun: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Hero Wars".to_string(),
            row_noun: "heros".to_string(),
        }
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the table and its row-count footer.
pub fn render_table(view: &TableView<'_>, options: &RenderOptions) -> String {
    let rows = view.rows();
    let pre_filtered = view.pre_filtered_rows();

    let mut out = String::new();
    out.push_str("<table>\n  <thead>\n");
    render_group_headers(view, &mut out);
    render_column_headers(view, &mut out);
    render_filter_controls(view, &pre_filtered, &mut out);
    out.push_str("  </thead>\n  <tbody>\n");
    for row in &rows {
        render_row(view, row, &mut out);
    }
    out.push_str("  </tbody>\n</table>\n<br />\n");
    out.push_str(&format!(
        "<div class=\"row-count\">Showing {} {}</div>\n",
        rows.len(),
        escape(&options.row_noun)
    ));
    out
}

/// Render a complete HTML document containing the table.
pub fn render_page(view: &TableView<'_>, options: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<div class="table-wrapper">
{table}</div>
</body>
</html>
"#,
        title = escape(&options.title),
        styles = STYLES,
        table = render_table(view, options),
    )
}

fn render_group_headers(view: &TableView<'_>, out: &mut String) {
    let columns = view.columns();
    if !columns.has_group_headers() {
        return;
    }
    out.push_str("    <tr>");
    for group in columns.groups() {
        if group.columns.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "<th colspan=\"{}\">{}</th>",
            group.columns.len(),
            escape(&group.header)
        ));
    }
    out.push_str("</tr>\n");
}

fn render_column_headers(view: &TableView<'_>, out: &mut String) {
    out.push_str("    <tr>");
    for col in view.columns().iter() {
        // Indicator follows the header text
        let indicator = match view.sorted(&col.accessor) {
            Some(key) if key.desc => DESC_INDICATOR,
            Some(_) => ASC_INDICATOR,
            None => "",
        };
        out.push_str(&format!(
            "<th data-column=\"{}\" data-sortable=\"{}\">{}<span>{}</span></th>",
            escape(&col.accessor),
            col.sortable,
            escape(&col.header),
            indicator
        ));
    }
    out.push_str("</tr>\n");
}

fn render_filter_controls(view: &TableView<'_>, pre_filtered: &[Row<'_>], out: &mut String) {
    if !view.columns().iter().any(Column::is_filterable) {
        return;
    }
    out.push_str("    <tr class=\"filters\">");
    for col in view.columns().iter() {
        out.push_str("<th>");
        if let Some(filter) = &col.filter {
            let current = view.filter_value(&col.accessor);
            let control = match filter.control {
                FilterControl::Text => text_control(col, current, pre_filtered.len()),
                FilterControl::Range => range_control(col, current),
                FilterControl::Select => select_control(col, current, pre_filtered),
            };
            out.push_str(&control);
        }
        out.push_str("</th>");
    }
    out.push_str("</tr>\n");
}

fn text_control(col: &Column, current: Option<&FilterValue>, count: usize) -> String {
    let value = current.and_then(FilterValue::as_text).unwrap_or_default();
    format!(
        "<input type=\"text\" name=\"{}\" value=\"{}\" placeholder=\"Search {} records...\" />",
        escape(&col.accessor),
        escape(&value),
        count
    )
}

fn range_control(col: &Column, current: Option<&FilterValue>) -> String {
    let (min, max) = current.and_then(FilterValue::as_range).unwrap_or((None, None));
    let bound = |b: Option<f64>| b.map(|n| n.to_string()).unwrap_or_default();
    format!(
        "<input type=\"number\" name=\"{name}-min\" value=\"{}\" placeholder=\"Min\" /> to \
         <input type=\"number\" name=\"{name}-max\" value=\"{}\" placeholder=\"Max\" />",
        bound(min),
        bound(max),
        name = escape(&col.accessor),
    )
}

fn select_control(col: &Column, current: Option<&FilterValue>, pre_filtered: &[Row<'_>]) -> String {
    let selected = current.and_then(FilterValue::as_text);
    let mut out = format!("<select name=\"{}\">", escape(&col.accessor));
    out.push_str("<option value=\"\">All</option>");
    for option in distinct_values(pre_filtered, &col.accessor) {
        let attr = if selected.as_deref() == Some(option.as_str()) {
            " selected"
        } else {
            ""
        };
        let option = escape(&option);
        out.push_str(&format!("<option value=\"{option}\"{attr}>{option}</option>"));
    }
    out.push_str("</select>");
    out
}

fn render_row(view: &TableView<'_>, row: &Row<'_>, out: &mut String) {
    out.push_str(&format!("    <tr data-index=\"{}\">", row.index));
    for col in view.columns().iter() {
        out.push_str(&format!(
            "<td style=\"text-align: {}\">{}</td>",
            col.align.as_css(),
            escape(&row.value(&col.accessor).display())
        ));
    }
    out.push_str("</tr>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Qing Mao"), "Qing Mao");
    }
}
