/// HTML rendering for assembled report sections
///
/// Produces a self-contained document with embedded CSS. Metric cells render
/// as placeholders tagged with `data-counter`/`data-ratio`/`data-throughput`
/// attributes; a downstream report writer substitutes collected values into
/// them. Output is a pure function of the input sections.
use anyhow::Result;

use crate::report::types::{DataSection, DataTable, MetricKind, TableCell};

/// Render the per-range report sections to HTML
pub fn render_range_html(sections: &[DataSection]) -> Result<String> {
    render_document(sections, "GPU Performance Report", "range-report")
}

/// Render the summary report sections to HTML
pub fn render_summary_html(sections: &[DataSection]) -> Result<String> {
    render_document(sections, "GPU Performance Summary", "summary-report")
}

fn render_document(sections: &[DataSection], title: &str, body_class: &str) -> Result<String> {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 1100px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }}
        .container {{
            background-color: white;
            border-radius: 8px;
            padding: 30px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        h1 {{
            color: #2c3e50;
            border-bottom: 3px solid #76b900;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }}
        h2 {{
            color: #34495e;
            margin-top: 30px;
            margin-bottom: 15px;
            border-left: 4px solid #76b900;
            padding-left: 10px;
        }}
        h3 {{
            color: #34495e;
            margin-bottom: 5px;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            margin: 15px 0;
            background-color: white;
        }}
        .section.tight table {{
            margin: 2px 0;
        }}
        th {{
            background-color: #34495e;
            color: white;
            padding: 10px 12px;
            text-align: left;
            font-weight: 600;
        }}
        td {{
            padding: 8px 12px;
            border-bottom: 1px solid #ecf0f1;
        }}
        tr:hover {{
            background-color: #f8f9fa;
        }}
        td.metric {{
            font-family: "Courier New", monospace;
            color: #7f8c8d;
        }}
    </style>
</head>
<body class="{}">
    <div class="container">
        <h1>{}</h1>
"#,
        escape(title),
        body_class,
        escape(title)
    ));

    for section in sections {
        render_section(&mut html, section)?;
    }

    html.push_str("    </div>\n</body>\n</html>");

    Ok(html)
}

fn render_section(html: &mut String, section: &DataSection) -> Result<()> {
    let class = if section.inter_table_spacing {
        "section"
    } else {
        "section tight"
    };
    html.push_str(&format!("<div class=\"{}\">\n", class));

    if let Some(title) = &section.title {
        html.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    }

    for table in &section.tables {
        render_table(html, table);
    }

    html.push_str("</div>\n");
    Ok(())
}

fn render_table(html: &mut String, table: &DataTable) {
    if let Some(title) = &table.title {
        html.push_str(&format!("<h3>{}</h3>\n", escape(title)));
    }

    html.push_str("<table>\n");

    html.push_str("  <thead>\n    <tr>\n");
    for header in &table.headers {
        html.push_str(&format!("      <th>{}</th>\n", escape(header)));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in &table.rows {
        html.push_str("    <tr>\n");
        for cell in row {
            render_cell(html, cell);
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n");

    html.push_str("</table>\n");
}

fn render_cell(html: &mut String, cell: &TableCell) {
    match cell {
        TableCell::Text(text) => {
            html.push_str(&format!("      <td>{}</td>\n", escape(text)));
        }
        TableCell::Metric(metric) => {
            let attr = match metric.kind {
                MetricKind::Counter => "data-counter",
                MetricKind::Ratio => "data-ratio",
                MetricKind::Throughput => "data-throughput",
            };
            html.push_str(&format!(
                "      <td class=\"metric\" {}=\"{}\">{}</td>\n",
                attr,
                escape(&metric.name),
                escape(&metric.name)
            ));
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn one_cell_section() -> DataSection {
        let table = DataTable::new(vec!["Unit".to_string(), "Value".to_string()])
            .with_row(vec!["GPC".into(), TableCell::counter("gpc__cycles_elapsed.sum")]);
        DataSection::new(vec![table]).with_title("Overview Section")
    }

    #[test]
    fn metric_cells_become_placeholders() {
        let html = render_range_html(&[one_cell_section()]).unwrap();
        assert!(html.contains("data-counter=\"gpc__cycles_elapsed.sum\""));
    }

    #[test]
    fn titled_section_gets_heading() {
        let html = render_range_html(&[one_cell_section()]).unwrap();
        assert!(html.contains("<h2>Overview Section</h2>"));
    }

    #[test]
    fn untitled_section_has_no_heading() {
        let section = DataSection::new(vec![DataTable::new(vec!["A".to_string()])]);
        let html = render_range_html(&[section]).unwrap();
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn spacing_flag_selects_tight_class() {
        let tight = DataSection::new(vec![]).without_inter_table_spacing();
        let html = render_range_html(&[tight]).unwrap();
        assert!(html.contains("<div class=\"section tight\">"));

        let spaced = DataSection::new(vec![]);
        let html = render_range_html(&[spaced]).unwrap();
        assert!(html.contains("<div class=\"section\">"));
    }

    #[test]
    fn text_is_escaped() {
        let table = DataTable::new(vec!["Label".to_string()])
            .with_row(vec!["<script>alert(1)</script>".into()]);
        let html = render_summary_html(&[DataSection::new(vec![table])]).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let sections = vec![one_cell_section()];
        let first = render_range_html(&sections).unwrap();
        let second = render_range_html(&sections).unwrap();
        assert_eq!(first, second);
    }
}
