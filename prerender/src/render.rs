use d56_landing::edition::Edition;
use d56_landing::pages::landing::{Landing, LandingProps};
use d56_landing::pages::not_found::NotFound;
use tracing::debug;
use yew::LocalServerRenderer;

/// Renders the landing page body of one edition.
///
/// Output is not hydratable: the exported site is plain HTML and CSS.
pub async fn render_landing(edition: Edition) -> String {
    let html = LocalServerRenderer::<Landing>::with_props(LandingProps { edition })
        .hydratable(false)
        .render()
        .await;
    debug!(lang = edition.lang(), bytes = html.len(), "rendered landing page");
    html
}

pub async fn render_not_found() -> String {
    LocalServerRenderer::<NotFound>::new()
        .hydratable(false)
        .render()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use d56_landing::content::SECTION_IDS;

    /// Text nodes come out of the server renderer HTML-escaped.
    fn text(raw: &str) -> String {
        raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    #[tokio::test]
    async fn service_cards_render_every_field() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            for service in edition.content().services {
                let title = format!("<h3 class=\"service-card__title\">{}</h3>", text(service.title));
                assert_eq!(html.matches(&title).count(), 1, "{}", service.title);
                assert!(html.contains(&text(service.description)), "{}", service.title);

                for tag in service.tags {
                    let chip = format!("<span class=\"service-card__tag\">{}</span>", text(tag));
                    assert_eq!(html.matches(&chip).count(), 1, "{} / {}", service.title, tag);
                }
            }
        }
    }

    #[tokio::test]
    async fn one_block_per_use_case() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            let blocks = html.matches("<div class=\"use-case\">").count();
            assert_eq!(blocks, edition.content().use_cases.len());
            assert_eq!(blocks, 4);

            for use_case in edition.content().use_cases {
                assert!(html.contains(&text(use_case.title)));
                assert!(html.contains(&text(use_case.metric)));
                for detail in use_case.details {
                    assert!(html.contains(&text(detail)), "{}", detail);
                }
            }
        }
    }

    #[tokio::test]
    async fn german_footer_copyright() {
        let html = render_landing(Edition::German).await;
        assert!(html.contains(
            "<p class=\"site-footer__copyright\">© 2025 d56 Büro für Gestaltung. Alle Rechte vorbehalten.</p>"
        ));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            let header = html.find("<header").unwrap();
            let footer = html.find("<footer").unwrap();

            let mut last = header;
            for id in SECTION_IDS {
                let at = html
                    .find(&format!("id=\"{}\"", id))
                    .unwrap_or_else(|| panic!("section {} missing", id));
                assert!(at > last, "section {} out of order", id);
                last = at;
            }
            assert!(footer > last);
        }
    }

    #[tokio::test]
    async fn nav_links_resolve_to_rendered_ids() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            let targets: Vec<&str> = html
                .split("href=\"#")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .filter(|target| !target.is_empty())
                .collect();
            assert_eq!(targets.len(), edition.content().nav.len(), "{}", edition.lang());

            for target in targets {
                assert_eq!(
                    html.matches(&format!("id=\"{}\"", target)).count(),
                    1,
                    "{} links to #{} but no such id was rendered",
                    edition.lang(),
                    target
                );
            }
        }
    }

    #[tokio::test]
    async fn badges_and_steps_match_content() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            let content = edition.content();
            assert_eq!(html.matches("<div class=\"tech-badge\">").count(), content.tech_stack.len());
            assert_eq!(html.matches("<div class=\"process-step\">").count(), content.process_steps.len());
            assert_eq!(html.matches("<div class=\"icon-tile\">").count(), 4);
        }
    }

    #[tokio::test]
    async fn footer_links_are_placeholders() {
        for edition in Edition::ALL {
            let html = render_landing(edition).await;
            let footer = &edition.content().footer;
            let expected = edition.content().services.len()
                + footer.resources.len()
                + footer.legal_links.len();
            assert_eq!(html.matches("href=\"#\"").count(), expected);
        }
    }

    #[tokio::test]
    async fn edition_carries_its_theme() {
        let german = render_landing(Edition::German).await;
        assert!(german.contains("class=\"landing landing--dashed\""));
        assert!(german.contains("--box-border: 2px dashed #a1a1aa;"));
        assert!(german.contains("href=\"/en\""));

        let english = render_landing(Edition::English).await;
        assert!(english.contains("class=\"landing landing--rounded\""));
        assert!(english.contains("--radius: 16px;"));
        assert!(english.contains("Get Started"));
        assert!(english.contains("Learn More"));
    }

    #[tokio::test]
    async fn not_found_links_both_editions() {
        let html = render_not_found().await;
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("href=\"/en\""));
    }
}
