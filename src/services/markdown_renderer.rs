use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_URL_PREFIXES: [&str; 4] = ["http://", "https://", "mailto:", "#"];

/// Renders the model's markdown answer to HTML. Raw HTML in the answer is shown as
/// text, and link or image targets outside http(s), mailto and fragments point at `#`.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn is_safe_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    SAFE_URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bulleted_sections() {
        let html = render_markdown("- **Entry Conditions**: fast EMA crosses above slow EMA\n- **Exit Conditions**: opposite cross");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<strong>Entry Conditions</strong>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Summary <script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_urls_are_neutralized() {
        let html = render_markdown("See [details](javascript:alert(document.cookie)) and ![x](JavaScript:alert(2))");

        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains(r##"<a href="#">details</a>"##));
        assert!(html.contains(r##"<img src="#" alt="x" />"##));
    }

    #[test]
    fn test_web_and_mail_links_are_kept() {
        let html = render_markdown("[docs](https://ninjatrader.com/support) [mail](mailto:desk@example.com) [top](#summary)");

        assert!(html.contains(r#"href="https://ninjatrader.com/support""#));
        assert!(html.contains(r#"href="mailto:desk@example.com""#));
        assert!(html.contains(r##"href="#summary""##));
    }
}
