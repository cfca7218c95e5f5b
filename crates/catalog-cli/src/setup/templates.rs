//! Files written into a fresh catalog.

/// Placeholder replaced with the public URL (without trailing slash).
pub const PUBLIC_URL_PLACEHOLDER: &str = "%PUBLIC_URL%";

/// Entry point written when the catalog has none.
pub const INDEX_JS: &str = r#"import React from "react";
import ReactDOM from "react-dom";
import { Catalog, pageLoader } from "catalog";

const pages = [
  {
    path: "/",
    title: "Welcome",
    content: pageLoader(() => import("./WELCOME.md"))
  }
];

ReactDOM.render(
  <Catalog title="Catalog" pages={pages} />,
  document.getElementById("catalog")
);
"#;

/// HTML shell used when the catalog has no `index.html` of its own.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Catalog</title>
  </head>
  <body>
    <div id="catalog"></div>
    <script type="module" src="%PUBLIC_URL%/index.js"></script>
  </body>
</html>
"#;

/// Substitute the public URL into an HTML template.
///
/// The URL is inserted without its trailing slash, so templates write
/// `%PUBLIC_URL%/favicon.ico`.
pub fn render_html(template: &str, public_url: &str) -> String {
    template.replace(PUBLIC_URL_PLACEHOLDER, public_url.trim_end_matches('/'))
}
