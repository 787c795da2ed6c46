use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::code::ResultCode;
use crate::verifier::{Classification, TITLE_SPUN};

pub const DEFAULT_BASE_URL: &str = "https://soposlots.sudy.me";

const SITE_NAME: &str = "そぽたんスロット";

const STYLE: &str = r#"    body {
      font-family: sans-serif;
      max-width: 400px;
      margin: 50px auto;
      padding: 20px;
      text-align: center;
    }
    h1 { font-size: 1.5rem; }
    .result {
      margin: 40px 0;
      font-size: 4rem;
      letter-spacing: 0.2em;
      color: #e74c3c;
      font-weight: bold;
    }
    .result img {
      max-width: 100%;
      height: auto;
    }
    p { color: #666; }
    a {
      display: inline-block;
      margin-top: 20px;
      padding: 12px 24px;
      background: #333;
      color: white;
      text-decoration: none;
      border-radius: 4px;
    }"#;

/// Render the share page for a classified result.
///
/// The OGP tags follow the classification; the page body shows the
/// character artwork for any rare code, signed or not.
pub fn render_result_page(c: &Classification, base_url: &str) -> String {
    let code = c.code;
    let (display, message) = match code.rare_kind() {
        Some(kind) => (
            format!(r#"<img src="../image/{}" alt="{}">"#, kind.artwork(), kind.name()),
            "が出ました！",
        ),
        None => (c.glyphs.clone(), "残念！そぽたんになれませんでした..."),
    };
    let og_title = c.title();
    let og_image = c.image().url(base_url);
    let glyphs = &c.glyphs;

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{glyphs} - {SITE_NAME}</title>
  <meta property="og:type" content="website">
  <meta property="og:title" content="{og_title}">
  <meta property="og:description" content="{TITLE_SPUN}">
  <meta property="og:image" content="{og_image}">
  <meta property="og:url" content="{base_url}/result/{code}">
  <meta name="twitter:card" content="summary_large_image">
  <style>
{STYLE}
  </style>
</head>
<body>
  <h1>{SITE_NAME}</h1>
  <div class="result">{display}</div>
  <p>{message}</p>
  <a href="{base_url}/">自分も回す</a>
</body>
</html>"#
    )
}

/// Write `<code>.html` for every common code into `dir`, rendered as an
/// unsigned visit. Returns the number of pages written.
pub fn write_static_pages(dir: &Path, base_url: &str) -> io::Result<usize> {
    fs::create_dir_all(dir)?;
    let mut count = 0;
    for code in ResultCode::all_common() {
        let html = render_result_page(&Classification::without_token(code), base_url);
        fs::write(dir.join(format!("{code}.html")), html)?;
        count += 1;
    }
    info!(count, dir = %dir.display(), "wrote static result pages");
    Ok(count)
}
