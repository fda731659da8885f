//! Plain-HTML rendering for the dashboard pages.

use crate::storage::{ColumnInfo, TableData, DASHBOARD_TABLES};

const STYLE: &str = "body{font-family:sans-serif;margin:2em;max-width:60em}\
table{border-collapse:collapse;margin:1em 0}\
th,td{border:1px solid #ccc;padding:0.3em 0.6em;text-align:left}\
th{background:#f0f0f0}\
textarea{width:100%;height:6em}\
.error{color:#b00020}";

/// Wrap a body fragment in the shared page layout.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body><h1>Tennis Data Explorer</h1><h2>{title}</h2>{body}\
         <p><a href=\"/\">Back</a></p></body></html>",
        title = escape(title),
        body = body,
    )
}

/// The landing page: table choices plus the custom SQL form.
pub fn index() -> String {
    let mut body = String::from("<h3>Tables</h3><ul>");
    for table in DASHBOARD_TABLES {
        body.push_str(&format!(
            "<li>{table} \
             &mdash; <a href=\"/tables/{table}\">view data</a> \
             | <a href=\"/tables/{table}/schema\">show schema</a></li>"
        ));
    }
    body.push_str("</ul>");

    body.push_str(
        "<h3>Custom SQL Query</h3>\
         <form method=\"post\" action=\"/query\">\
         <textarea name=\"sql\" placeholder=\"SELECT ...\"></textarea>\
         <p><button type=\"submit\">Execute Query</button> \
         (read-only: SELECT, WITH, EXPLAIN)</p>\
         </form>",
    );

    page("Tables", &body)
}

/// Render a tabular result as an HTML table.
pub fn data_table(data: &TableData) -> String {
    if data.columns.is_empty() {
        return "<p>(no rows)</p>".to_string();
    }

    let mut html = String::from("<table><tr>");
    for column in &data.columns {
        html.push_str(&format!("<th>{}</th>", escape(column)));
    }
    html.push_str("</tr>");

    for row in &data.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

/// Render a table's column list.
pub fn schema_table(columns: &[ColumnInfo]) -> String {
    let data = TableData {
        columns: vec!["column_name".to_string(), "data_type".to_string()],
        rows: columns
            .iter()
            .map(|c| vec![c.column_name.clone(), c.data_type.clone()])
            .collect(),
    };
    data_table(&data)
}

/// Render an error message inside the page layout.
pub fn error_page(message: &str) -> String {
    page(
        "Error",
        &format!("<p class=\"error\">{}</p>", escape(message)),
    )
}

/// Minimal HTML escaping for text nodes and attribute values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
