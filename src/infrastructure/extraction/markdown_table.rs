/// Serializes a header row plus data rows as a markdown table:
/// header, `---` delimiter row, then one line per record.
pub fn render_markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();

    out.push_str("| ");
    out.push_str(&headers.join(" | "));
    out.push_str(" |\n");

    out.push_str("| ");
    out.push_str(&vec!["---"; headers.len()].join(" | "));
    out.push_str(" |\n");

    for row in rows {
        out.push_str("| ");
        out.push_str(&row.join(" | "));
        out.push_str(" |\n");
    }

    out.trim_end().to_string()
}
