use d56_landing::edition::Edition;

/// Head metadata of one exported page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Route path, e.g. `/en`. `None` for pages outside the router.
    pub path: Option<&'static str>,
}

impl PageMeta {
    pub fn for_edition(edition: Edition) -> Self {
        let content = edition.content();
        Self {
            lang: content.lang,
            title: content.page_title,
            description: content.meta_description,
            path: Some(edition.path()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            lang: "de",
            title: "404 | d56",
            description: "Seite nicht gefunden / Page not found",
            path: None,
        }
    }
}

/// Wraps a rendered body into a complete HTML document.
pub fn wrap(meta: &PageMeta, body: &str, site_origin: Option<&str>) -> String {
    let mut head = String::new();
    head.push_str("<meta charset=\"utf-8\" />\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n");
    head.push_str(&format!("<title>{}</title>\n", escape(meta.title)));
    head.push_str(&format!(
        "<meta name=\"description\" content=\"{}\" />\n",
        escape(meta.description)
    ));

    if let (Some(origin), Some(path)) = (site_origin, meta.path) {
        head.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            escape(&format!("{}{}", origin, path))
        ));
        for edition in Edition::ALL {
            head.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                edition.lang(),
                escape(&format!("{}{}", origin, edition.path()))
            ));
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}<style>body {{ margin: 0; }}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        meta.lang, head, body
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_edition_metadata() {
        let meta = PageMeta::for_edition(Edition::German);
        let html = wrap(&meta, "<main></main>", None);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
        assert!(html.contains("<title>d56 | AI-Automatisierung für B2B</title>"));
        assert!(html.contains("<body>\n<main></main>\n</body>"));
        assert!(!html.contains("hreflang"));
    }

    #[test]
    fn origin_adds_canonical_and_alternates() {
        let meta = PageMeta::for_edition(Edition::English);
        let html = wrap(&meta, "", Some("https://d56.de"));

        assert!(html.contains("<link rel=\"canonical\" href=\"https://d56.de/en\" />"));
        assert!(html.contains("<link rel=\"alternate\" hreflang=\"de\" href=\"https://d56.de/\" />"));
        assert!(html.contains("<link rel=\"alternate\" hreflang=\"en\" href=\"https://d56.de/en\" />"));
    }

    #[test]
    fn not_found_page_has_no_canonical() {
        let html = wrap(&PageMeta::not_found(), "", Some("https://d56.de"));
        assert!(!html.contains("canonical"));
    }

    #[test]
    fn link_hrefs_cannot_break_out_of_the_attribute() {
        let meta = PageMeta::for_edition(Edition::English);
        let html = wrap(&meta, "", Some("https://d56.de\"onload=\"x"));

        assert!(html.contains("href=\"https://d56.de&quot;onload=&quot;x/en\""));
        assert!(!html.contains("\"onload=\""));
    }

    #[test]
    fn escapes_head_text() {
        assert_eq!(escape("Tools & \"Dashboards\""), "Tools &amp; &quot;Dashboards&quot;");
    }
}
