use super::*;

pub static CONTENT: LandingContent = LandingContent {
    lang: "de",
    page_title: "d56 | AI-Automatisierung für B2B",
    meta_description: "Von Rapid Prototyping bis zu komplexen RAG-Systemen: maßgeschneiderte AI-Lösungen für Ihre Geschäftsprozesse.",
    brand: "d56",
    nav: &[
        NavItem { label: "Services", anchor: section::SERVICES },
        NavItem { label: "Use Cases", anchor: section::USE_CASES },
        NavItem { label: "Prozess", anchor: section::PROCESS },
        NavItem { label: "Kontakt", anchor: section::CONTACT },
    ],
    header_cta: "CTA Button",
    switch_label: "EN",
    hero: Hero {
        eyebrow: "AI-AUTOMATISIERUNG FÜR B2B",
        headline: ["Automatisieren Sie", "intelligenter,", "nicht härter."],
        lead: "Von Rapid Prototyping bis zu komplexen RAG-Systemen – wir transformieren Ihre Geschäftsprozesse mit maßgeschneiderten AI-Lösungen.",
        primary_cta: "Erstgespräch vereinbaren",
        secondary_cta: "Use Cases ansehen",
        illustration_icons: &["⚡", "🧠", "🎨", "💬"],
        illustration_caption: "[Animierte Grafik / Illustration]",
    },
    services_heading: SectionHeading {
        eyebrow: "SERVICES",
        title: "Was wir für Sie entwickeln",
    },
    services: &[
        Service {
            icon: "⚡",
            title: "Rapid Softwareentwicklung",
            description: "Von der Idee zum MVP in Tagen statt Monaten. AI-gestützte Entwicklung beschleunigt jeden Schritt des Prozesses.",
            tags: &["MVP in 2 Wochen", "Iterativ", "Kosteneffizient"],
        },
        Service {
            icon: "🎨",
            title: "Vibe-Coding",
            description: "Beschreiben Sie Ihre Vision in natürlicher Sprache. Unsere AI transformiert Konzepte in funktionierenden Code.",
            tags: &["Natural Language", "Design-to-Code", "Prototyping"],
        },
        Service {
            icon: "🧠",
            title: "RAG-Systeme",
            description: "Retrieval-Augmented Generation für präzise, kontextbezogene Antworten aus Ihren Unternehmensdaten.",
            tags: &["Wissensbasis", "Dokumentensuche", "Präzision"],
        },
        Service {
            icon: "💬",
            title: "AI-Chatbots",
            description: "Intelligente Konversationsagenten für Support, Sales und interne Prozesse. 24/7 verfügbar.",
            tags: &["Multi-Channel", "Multilingual", "Integration"],
        },
    ],
    use_cases_heading: SectionHeading {
        eyebrow: "USE CASES",
        title: "Konkrete Anwendungen",
    },
    use_cases_media: "[Screenshot / Demo-Video]",
    use_cases: &[
        UseCase {
            number: "01",
            title: "Kundenservice-Automatisierung",
            metric: "-65% Response-Zeit",
            description: "AI-Chatbot bearbeitet Tier-1-Anfragen, eskaliert komplexe Fälle automatisch an Mitarbeiter.",
            details: &["Automated response generation", "Intelligent ticket routing", "Priority classification"],
        },
        UseCase {
            number: "02",
            title: "Dokumentenanalyse & Extraktion",
            metric: "10x schneller",
            description: "RAG-System durchsucht tausende Dokumente in Sekunden und liefert präzise Antworten mit Quellenangabe.",
            details: &["Template-based generation", "Automated distribution", "Version control"],
        },
        UseCase {
            number: "03",
            title: "Interne Tools & Dashboards",
            metric: "2 Wochen Entwicklung",
            description: "Maßgeschneiderte Anwendungen durch Vibe-Coding – beschreiben Sie, was Sie brauchen, wir liefern.",
            details: &["Custom development", "Rapid prototyping", "Agile delivery"],
        },
        UseCase {
            number: "04",
            title: "Workflow-Automatisierung",
            metric: "80% weniger manuell",
            description: "Verbinden Sie Ihre Systeme mit intelligenten Automatisierungen, die lernen und sich anpassen.",
            details: &["System integration", "Intelligent automation", "Adaptive learning"],
        },
    ],
    process_heading: SectionHeading {
        eyebrow: "PROZESS",
        title: "Von der Idee zur Lösung",
    },
    process_steps: &[
        ProcessStep { step: "1", title: "Discovery", items: &["Anforderungsanalyse", "Prozess-Mapping", "ROI-Schätzung"] },
        ProcessStep { step: "2", title: "Konzept", items: &["Lösungsarchitektur", "Wireframes", "Tech-Stack"] },
        ProcessStep { step: "3", title: "Entwicklung", items: &["Agile Sprints", "Kontinuierliches Feedback", "Testing"] },
        ProcessStep { step: "4", title: "Launch", items: &["Deployment", "Training", "Support & Iteration"] },
    ],
    tech_heading: SectionHeading {
        eyebrow: "TECHNOLOGIE",
        title: "Unser Stack",
    },
    tech_stack: &[
        "OpenAI", "Anthropic", "n8n", "LangChain", "Pinecone", "Vercel",
        "Supabase", "React", "Node.js", "Python", "Docker", "AWS",
    ],
    cta: Cta {
        title: "Bereit für den nächsten Schritt?",
        lead: "Lassen Sie uns in einem kostenlosen Erstgespräch herausfinden, wie AI-Automatisierung Ihr Unternehmen transformieren kann.",
        primary: "Termin vereinbaren",
        secondary: "Kontakt aufnehmen",
    },
    footer: Footer {
        brand: "d56",
        tagline: &["Büro für Gestaltung", "Donnersdorf, Germany"],
        services_heading: "Services",
        resources_heading: "Ressourcen",
        resources: &["Blog", "Case Studies", "Dokumentation", "FAQ"],
        contact_heading: "Kontakt",
        contact_placeholders: &["[E-Mail]", "[Telefon]", "[Social Links]"],
        copyright: "© 2025 d56 Büro für Gestaltung. Alle Rechte vorbehalten.",
        legal_links: &["Impressum", "Datenschutz", "AGB"],
    },
};
