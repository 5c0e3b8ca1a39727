use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{blog::BlogPost, join_url, project::Project, tech::TechItem};

// the aggregate payload behind the landing page
//
// every slice is optional; the page falls back to its own samples field by field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePayload {
    pub tech: Option<Vec<TechItem>>,
    pub projects: Option<Vec<Project>>,
    pub posts: Option<Vec<BlogPost>>,
}

pub async fn get_home(base_url: &str) -> anyhow::Result<HomePayload> {
    let resp = Request::get(&join_url(base_url, "/home")).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn empty_object_is_a_valid_payload() {
        let payload: HomePayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload, HomePayload::default());
    }

    #[test]
    fn partial_payload_keeps_missing_slices_empty() {
        let payload: HomePayload = serde_json::from_value(json!({
            "posts": [{"title": "Hello", "slug": "hello", "excerpt": "first", "tags": ["meta"], "read_time": 3}],
            "unknown": true
        }))
        .unwrap();

        assert_eq!(payload.tech, None);
        assert_eq!(payload.projects, None);

        let posts = payload.posts.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].read_time, Some(3));
    }
}
