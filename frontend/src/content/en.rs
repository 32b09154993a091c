use super::*;

pub static CONTENT: LandingContent = LandingContent {
    lang: "en",
    page_title: "d56 | AI Automation for B2B",
    meta_description: "From rapid prototyping to production RAG systems: tailored AI solutions for your business processes.",
    brand: "d56",
    nav: &[
        NavItem { label: "Services", anchor: section::SERVICES },
        NavItem { label: "Use Cases", anchor: section::USE_CASES },
        NavItem { label: "Process", anchor: section::PROCESS },
        NavItem { label: "Contact", anchor: section::CONTACT },
    ],
    header_cta: "Get Started",
    switch_label: "DE",
    hero: Hero {
        eyebrow: "AI AUTOMATION FOR B2B",
        headline: ["Automate", "smarter,", "not harder."],
        lead: "From rapid prototyping to complex RAG systems, we transform your business processes with tailored AI solutions.",
        primary_cta: "Get Started",
        secondary_cta: "Learn More",
        illustration_icons: &["⚡", "🧠", "🎨", "💬"],
        illustration_caption: "[Animated graphic / illustration]",
    },
    services_heading: SectionHeading {
        eyebrow: "SERVICES",
        title: "What we build for you",
    },
    services: &[
        Service {
            icon: "⚡",
            title: "Rapid Software Development",
            description: "From idea to MVP in days instead of months. AI-assisted development speeds up every step of the process.",
            tags: &["MVP in 2 weeks", "Iterative", "Cost-efficient"],
        },
        Service {
            icon: "🎨",
            title: "Vibe Coding",
            description: "Describe your vision in plain language. Our AI turns concepts into working code.",
            tags: &["Natural Language", "Design-to-Code", "Prototyping"],
        },
        Service {
            icon: "🧠",
            title: "RAG Systems",
            description: "Retrieval-Augmented Generation for precise, context-aware answers from your company data.",
            tags: &["Knowledge Base", "Document Search", "Precision"],
        },
        Service {
            icon: "💬",
            title: "AI Chatbots",
            description: "Intelligent conversational agents for support, sales and internal processes. Available 24/7.",
            tags: &["Multi-Channel", "Multilingual", "Integration"],
        },
    ],
    use_cases_heading: SectionHeading {
        eyebrow: "USE CASES",
        title: "Real-world applications",
    },
    use_cases_media: "[Screenshot / demo video]",
    use_cases: &[
        UseCase {
            number: "01",
            title: "Customer Service Automation",
            metric: "-65% response time",
            description: "An AI chatbot handles tier-1 requests and escalates complex cases to your team automatically.",
            details: &["Automated response generation", "Intelligent ticket routing", "Priority classification"],
        },
        UseCase {
            number: "02",
            title: "Document Analysis & Extraction",
            metric: "10x faster",
            description: "A RAG system searches thousands of documents in seconds and answers precisely, with sources.",
            details: &["Template-based generation", "Automated distribution", "Version control"],
        },
        UseCase {
            number: "03",
            title: "Internal Tools & Dashboards",
            metric: "2 weeks to ship",
            description: "Custom applications through vibe coding: describe what you need and we deliver.",
            details: &["Custom development", "Rapid prototyping", "Agile delivery"],
        },
        UseCase {
            number: "04",
            title: "Workflow Automation",
            metric: "80% less manual work",
            description: "Connect your systems with intelligent automations that learn and adapt.",
            details: &["System integration", "Intelligent automation", "Adaptive learning"],
        },
    ],
    process_heading: SectionHeading {
        eyebrow: "PROCESS",
        title: "From idea to solution",
    },
    process_steps: &[
        ProcessStep { step: "1", title: "Discovery", items: &["Requirements analysis", "Process mapping", "ROI estimate"] },
        ProcessStep { step: "2", title: "Concept", items: &["Solution architecture", "Wireframes", "Tech stack"] },
        ProcessStep { step: "3", title: "Build", items: &["Agile sprints", "Continuous feedback", "Testing"] },
        ProcessStep { step: "4", title: "Launch", items: &["Deployment", "Training", "Support & iteration"] },
    ],
    tech_heading: SectionHeading {
        eyebrow: "TECHNOLOGY",
        title: "Our stack",
    },
    tech_stack: &[
        "OpenAI", "Anthropic", "n8n", "LangChain", "Pinecone", "Vercel",
        "Supabase", "React", "Node.js", "Python", "Docker", "AWS",
    ],
    cta: Cta {
        title: "Ready for the next step?",
        lead: "Let's find out in a free intro call how AI automation can transform your business.",
        primary: "Book a call",
        secondary: "Learn More",
    },
    footer: Footer {
        brand: "d56",
        tagline: &["Studio for Design", "Donnersdorf, Germany"],
        services_heading: "Services",
        resources_heading: "Resources",
        resources: &["Blog", "Case Studies", "Documentation", "FAQ"],
        contact_heading: "Contact",
        contact_placeholders: &["[Email]", "[Phone]", "[Social links]"],
        copyright: "© 2025 d56 Studio for Design. All rights reserved.",
        legal_links: &["Imprint", "Privacy", "Terms"],
    },
};
