use async_trait::async_trait;

pub mod auth;
pub mod blog;
pub mod content;
pub mod home;
pub mod project;
pub mod tech;

use auth::{LoginReq, LoginResp};
use content::CreateContentReq;
use home::HomePayload;
use project::Project;

// every request is made against a single configured origin
//
// an empty base is allowed and produces relative paths, which is what we want
// when the backend is served from the same origin as the wasm bundle
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// authenticated create calls
//
// the backend echoes something back, but nothing in the frontend consumes it, so the
// generated functions only report whether the call succeeded
#[macro_export]
macro_rules! endpoint {
    ($name:ident, $path:literal) => {
        paste::paste! {
            pub async fn [<$name:snake>](base_url: &str, token: &str, req: &[<$name:camel Req>]) -> anyhow::Result<()> {
                let resp = gloo_net::http::Request::post(&$crate::join_url(base_url, $path))
                    .header("Authorization", &$crate::bearer(token))
                    .json(req)?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(())
                } else {
                    Err(anyhow::Error::msg(format!(
                        "{} returned {}: {}",
                        $path,
                        resp.status(),
                        resp.text().await?
                    )))
                }
            }
        }
    };
}

// the transport seen by the stores
//
// pages only ever talk to the backend through this trait, so the login and submit
// state machines can be exercised without a browser.  gloo futures are not Send,
// hence ?Send
#[async_trait(?Send)]
pub trait Backend {
    async fn home(&self) -> anyhow::Result<HomePayload>;

    async fn project(&self, slug: &str) -> anyhow::Result<Project>;

    async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp>;

    async fn create(&self, token: &str, req: &CreateContentReq) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpBackend {
    pub base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpBackend {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn home(&self) -> anyhow::Result<HomePayload> {
        home::get_home(&self.base_url).await
    }

    async fn project(&self, slug: &str) -> anyhow::Result<Project> {
        project::get_project_by_slug(&self.base_url, slug).await
    }

    async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp> {
        auth::login(&self.base_url, req).await
    }

    async fn create(&self, token: &str, req: &CreateContentReq) -> anyhow::Result<()> {
        match req {
            CreateContentReq::Project(req) => project::create_project(&self.base_url, token, req).await,
            CreateContentReq::Blog(req) => blog::create_blog(&self.base_url, token, req).await,
            CreateContentReq::Tech(req) => tech::create_tech(&self.base_url, token, req).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_gives_relative_path() {
        assert_eq!(join_url("", "/home"), "/home");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        assert_eq!(
            join_url("https://api.example.dev/", "/projects/slug/foo"),
            "https://api.example.dev/projects/slug/foo"
        );
        assert_eq!(join_url("https://api.example.dev", "/blog"), "https://api.example.dev/blog");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
