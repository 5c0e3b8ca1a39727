use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{endpoint, join_url};

// structs and types

// the backend owns this shape; only title and summary are guaranteed, everything
// else is rendered if present
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub tech: Vec<String>,
    pub role: Option<String>,
    pub timeline: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

// messages

// fetch a single project for the detail page
pub async fn get_project_by_slug(base_url: &str, slug: &str) -> anyhow::Result<Project> {
    let resp = Request::get(&join_url(base_url, &format!("/projects/slug/{slug}")))
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

// create a new project from the studio
endpoint!(CreateProject, "/projects");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectReq {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub tech: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn sparse_project_fills_defaults() {
        let project: Project =
            serde_json::from_value(json!({"title": "Atlas", "summary": "maps"})).unwrap();

        assert_eq!(project.title, "Atlas");
        assert!(project.tech.is_empty());
        assert_eq!(project.demo_url, None);
        assert_eq!(project.role, None);
    }

    #[test]
    fn full_project_parses_optional_fields() {
        let project: Project = serde_json::from_value(json!({
            "title": "Atlas",
            "slug": "atlas",
            "summary": "maps",
            "tech": ["rust", "wasm"],
            "role": "lead",
            "timeline": "2023",
            "demo_url": "https://atlas.example.dev",
            "repo_url": null
        }))
        .unwrap();

        assert_eq!(project.tech, vec!["rust", "wasm"]);
        assert_eq!(project.role.as_deref(), Some("lead"));
        assert_eq!(project.demo_url.as_deref(), Some("https://atlas.example.dev"));
        assert_eq!(project.repo_url, None);
    }
}
