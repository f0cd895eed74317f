//! Server-rendered category listing page.

use std::fmt::Write;

use categories_core::category::NAME_MAX_LEN;
use categories_db::models::category::Category;

/// Render the full listing page: a name filter form and one table row per
/// category.
pub fn render_category_list(categories: &[Category], name_filter: Option<&str>) -> String {
    let mut rows = String::new();
    for category in categories {
        // Writing into a String cannot fail.
        let _ = write!(
            rows,
            "\n        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>",
            category.id,
            escape(&category.name),
            escape(category.description.as_deref().unwrap_or_default()),
        );
    }

    let filter = escape(name_filter.unwrap_or_default());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Categories List</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
    th {{ background: #f3f3f3; }}
  </style>
</head>
<body>
  <h1>Categories</h1>
  <form method="get" action="/">
    <input type="text" name="name_filter" placeholder="Filter by name" maxlength="{NAME_MAX_LEN}" value="{filter}">
    <button type="submit">Filter Categories</button>
  </form>
  <table>
    <thead>
      <tr>
        <th>ID</th>
        <th>Name</th>
        <th>Description</th>
      </tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
</body>
</html>
"#
    )
}

/// Escape text for use in HTML element content and quoted attributes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
