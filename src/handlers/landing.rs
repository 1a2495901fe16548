use actix_web::HttpResponse;

use crate::services::prompts::seed_prompts;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Chat</title>
</head>
<body>
<div id="chatWidget">
<div id="messages"></div>
<div class="quick-replies">
"#;

const PAGE_TAIL: &str = r#"</div>
<form id="chatForm">
<input id="messageInput" name="message" autocomplete="off">
<button type="submit">Send</button>
</form>
</div>
</body>
</html>
"#;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_landing(seed_prompts()))
}

fn render_landing(prompts: &[&str]) -> String {
    let mut page = String::from(PAGE_HEAD);
    for (index, prompt) in prompts.iter().enumerate() {
        let escaped = escape_html(prompt);
        page.push_str(&format!(
            "<button type=\"button\" class=\"quick-reply-btn\" data-index=\"{}\" data-prompt=\"{}\">{}</button>\n",
            index, escaped, escaped
        ));
    }
    page.push_str(PAGE_TAIL);
    page
}

fn escape_html(raw: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(escape_html("What's <b>\"new\"</b> & old?"), "What&#39;s &lt;b&gt;&quot;new&quot;&lt;/b&gt; &amp; old?");
    }

    #[test]
    fn renders_one_button_per_prompt_in_order() {
        let page = render_landing(&["first", "second"]);
        let first = page.find("data-index=\"0\" data-prompt=\"first\"").unwrap();
        let second = page.find("data-index=\"1\" data-prompt=\"second\"").unwrap();
        assert!(first < second);
        assert_eq!(page.matches("quick-reply-btn").count(), 2);
    }
}
