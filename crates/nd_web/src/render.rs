//! Minimal server-side rendering for the digest page. The page is plain
//! glue over the pipeline output: an article list and an optional error
//! banner.

use nd_core::Article;

pub fn index_page(articles: &[Article], error: Option<&str>) -> String {
    let mut page = String::with_capacity(4096);
    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>News Digest</title>\n<style>\n\
         body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }\n\
         article { border-bottom: 1px solid #ddd; padding: 1rem 0; }\n\
         .category { background: #eee; border-radius: 4px; padding: 0.1rem 0.5rem; font-size: 0.8rem; }\n\
         .error { color: #a00; border: 1px solid #a00; padding: 0.5rem 1rem; }\n\
         .published { color: #777; font-size: 0.8rem; }\n\
         </style>\n</head>\n<body>\n<h1>News Digest</h1>\n",
    );

    if let Some(error) = error {
        page.push_str("<p class=\"error\">");
        page.push_str(&escape_html(error));
        page.push_str("</p>\n");
    }

    for article in articles {
        page.push_str("<article>\n<h2>");
        match article.url.as_deref() {
            Some(url) => {
                page.push_str("<a href=\"");
                page.push_str(&escape_html(url));
                page.push_str("\">");
                page.push_str(&escape_html(article.title.as_deref().unwrap_or("Untitled")));
                page.push_str("</a>");
            }
            None => page.push_str(&escape_html(article.title.as_deref().unwrap_or("Untitled"))),
        }
        page.push_str("</h2>\n");

        if let Some(category) = article.category.as_deref() {
            page.push_str("<span class=\"category\">");
            page.push_str(&escape_html(category));
            page.push_str("</span>\n");
        }
        if let Some(published_at) = article.published_at.as_deref() {
            page.push_str("<span class=\"published\">");
            page.push_str(&escape_html(published_at));
            page.push_str("</span>\n");
        }
        if let Some(summary) = article.summary.as_deref() {
            page.push_str("<p>");
            page.push_str(&escape_html(summary));
            page.push_str("</p>\n");
        }
        page.push_str("</article>\n");
    }

    page.push_str("<footer><p class=\"published\">Generated at ");
    page.push_str(&chrono::Utc::now().to_rfc3339());
    page.push_str("</p></footer>\n</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
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
