//! The search page: one HTML document with an inline stylesheet,
//! a search form and the results container.

const STYLESHEET: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
        h1 { color: #333; }
        form { display: flex; gap: 8px; }
        input[type=text] { flex: 1; padding: 8px; font-size: 1em; }
        button { padding: 8px 14px; background: #007BFF; color: white; border: none; border-radius: 6px; cursor: pointer; }
        button:hover { background: #0056b3; }
        #results { background: white; padding: 20px; margin-top: 20px; border-radius: 10px; box-shadow: 0px 2px 6px rgba(0,0,0,0.1); }
        .idle { color: #666; }
        .no-results { color: #b00020; }
        .code { color: #888; margin-left: 6px; }
"#;

/// Escape text for safe inclusion in HTML body and attribute values
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Render the full document around an already-rendered results region.
/// `query` prefills the search box.
pub fn render_page(query: &str, results_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Zip Code Lookup</title>
    <style>{style}</style>
</head>
<body>
    <h1>Zip Code Lookup</h1>
    <form method="get" action="/search">
        <input type="text" name="q" value="{query}" placeholder="Enter a zip code (e.g. 90210)" autofocus>
        <button type="submit">Search</button>
    </form>
    <div id="results">
        {results}
    </div>
</body>
</html>
"#,
        style = STYLESHEET,
        query = escape_html(query.trim()),
        results = results_html,
    )
}
