use api::{blog::BlogPost, home::HomePayload, project::Project, tech::TechItem};

// built-in content shown whenever the backend has nothing to say
//
// the landing page never renders empty: a slice missing from /home (or a /home that
// never answers) is filled from here, one slice at a time

fn tech(name: &str, category: &str, level: &str) -> TechItem {
    TechItem {
        name: name.to_owned(),
        category: category.to_owned(),
        level: level.to_owned(),
    }
}

pub fn sample_tech() -> Vec<TechItem> {
    vec![
        tech("Rust", "Languages", "Daily"),
        tech("TypeScript", "Languages", "Daily"),
        tech("Python", "Languages", "Frequent"),
        tech("Go", "Languages", "Occasional"),
        tech("React", "Frontend", "Daily"),
        tech("Dioxus", "Frontend", "Frequent"),
        tech("Tailwind CSS", "Frontend", "Frequent"),
        tech("Node.js", "Backend", "Frequent"),
        tech("PostgreSQL", "Data", "Frequent"),
        tech("Redis", "Data", "Occasional"),
        tech("Docker", "Infrastructure", "Daily"),
        tech("AWS", "Infrastructure", "Frequent"),
    ]
}

fn project(title: &str, slug: &str, summary: &str, tech: &[&str]) -> Project {
    Project {
        title: title.to_owned(),
        slug: slug.to_owned(),
        summary: summary.to_owned(),
        tech: tech.iter().map(|t| (*t).to_owned()).collect(),
        ..Default::default()
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        project(
            "Realtime Dashboard",
            "realtime-dashboard",
            "Streaming metrics board with sub-second updates over websockets.",
            &["Rust", "WebSockets", "React"],
        ),
        project(
            "Headless Storefront",
            "headless-storefront",
            "Static-first shop front that talks to a commerce API at the edge.",
            &["TypeScript", "Next.js", "Stripe"],
        ),
        project(
            "Notes Sync Engine",
            "notes-sync",
            "Offline-first note taking with conflict-free merges between devices.",
            &["Rust", "CRDT", "SQLite"],
        ),
        project(
            "Infra Playground",
            "infra-playground",
            "Reproducible sandbox clusters spun up from a single config file.",
            &["Go", "Docker", "Terraform"],
        ),
    ]
}

fn post(title: &str, slug: &str, excerpt: &str, tags: &[&str], read_time: u32) -> BlogPost {
    BlogPost {
        title: title.to_owned(),
        slug: slug.to_owned(),
        excerpt: excerpt.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        read_time: Some(read_time),
        published_at: None,
    }
}

pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        post(
            "Shipping a WASM frontend",
            "shipping-a-wasm-frontend",
            "What changed when the whole UI moved to a compiled bundle.",
            &["rust", "wasm"],
            6,
        ),
        post(
            "Designing for dark mode",
            "designing-for-dark-mode",
            "Colour tokens, contrast and why pure black is rarely right.",
            &["design", "css"],
            4,
        ),
        post(
            "Small APIs, sharp edges",
            "small-apis-sharp-edges",
            "Notes on keeping a personal backend boring and reliable.",
            &["backend", "api"],
            5,
        ),
    ]
}

// static career timeline; this never comes from the backend
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub detail: &'static str,
}

pub fn timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            period: "2023 - now",
            title: "Senior Software Engineer",
            place: "Independent",
            detail: "Building web platforms and developer tooling for small teams.",
        },
        TimelineEntry {
            period: "2020 - 2023",
            title: "Software Engineer",
            place: "Product studio",
            detail: "Full-stack work across client apps, APIs and deployment pipelines.",
        },
        TimelineEntry {
            period: "2018 - 2020",
            title: "Junior Developer",
            place: "Agency",
            detail: "Marketing sites, CMS integrations and a first taste of systems code.",
        },
        TimelineEntry {
            period: "2014 - 2018",
            title: "BSc Computer Science",
            place: "University",
            detail: "Distributed systems, compilers and far too many side projects.",
        },
    ]
}

// what the landing page actually renders
#[derive(Clone, Debug, PartialEq)]
pub struct HomeContent {
    pub tech: Vec<TechItem>,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
}

// a slice that is present is used as-is, even when it is empty
pub fn resolve_home(payload: Option<&HomePayload>) -> HomeContent {
    let payload = payload.cloned().unwrap_or_default();

    HomeContent {
        tech: payload.tech.unwrap_or_else(sample_tech),
        projects: payload.projects.unwrap_or_else(sample_projects),
        posts: payload.posts.unwrap_or_else(sample_posts),
    }
}
