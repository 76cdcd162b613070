//! Documentation page
//!
//! Served for every path that is not a feed or the health check.

use axum::response::Html;

const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>owockibot Bounty RSS Feed</title>
  <style>
    body { font-family: system-ui; max-width: 800px; margin: 50px auto; padding: 20px; background: #0a0a0f; color: #fff; }
    h1 { color: #00F5D4; }
    a { color: #00BBF9; }
    code { background: #1a1a2e; padding: 2px 8px; border-radius: 4px; }
    .endpoint { background: #1a1a2e; padding: 15px; border-radius: 8px; margin: 10px 0; }
  </style>
</head>
<body>
  <h1>owockibot Bounty RSS Feed</h1>
  <p>Subscribe to open bounties from the AI Bounty Board.</p>

  <h2>Endpoints</h2>
  <div class="endpoint">
    <strong>RSS 2.0:</strong> <a href="/rss">/rss</a>, <a href="/rss.xml">/rss.xml</a> or <a href="/feed">/feed</a>
  </div>
  <div class="endpoint">
    <strong>Atom:</strong> <a href="/atom">/atom</a> or <a href="/atom.xml">/atom.xml</a>
  </div>
  <div class="endpoint">
    <strong>JSON Feed:</strong> <a href="/json">/json</a> or <a href="/feed.json">/feed.json</a>
  </div>

  <h2>Tag Filtering</h2>
  <p>Filter bounties by tag using the <code>?tag=</code> parameter. Several tags may be given, separated by commas; matching ignores case.</p>
  <div class="endpoint">
    <a href="/rss?tag=coding">/rss?tag=coding</a><br>
    <a href="/rss?tag=content,writing">/rss?tag=content,writing</a>
  </div>

  <h2>Health Check</h2>
  <div class="endpoint">
    <a href="/health">/health</a>
  </div>

  <footer style="margin-top: 40px; color: #666;">
    <p>Built for <a href="https://bounty.owockibot.xyz">owockibot Bounty Board</a></p>
  </footer>
</body>
</html>
"#;

/// Fallback for any unmatched path
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
