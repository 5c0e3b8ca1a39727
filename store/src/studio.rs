use api::{
    Backend,
    auth::LoginReq,
    blog::CreateBlogReq,
    content::{ContentKind, CreateContentReq},
    project::CreateProjectReq,
    tech::CreateTechReq,
};
use tracing::{info, warn};

use crate::{session::SessionStore, storage::KeyValueStore};

// split a free-text tag field on commas
//
// pieces are trimmed and kept in order.  nothing is deduplicated and empty pieces
// survive as empty strings, so "a,,b" is three tags
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_owned()).collect()
}

// form labels for each kind; tech items reuse the generic fields under other names
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraftLabels {
    pub title: &'static str,
    pub slug: &'static str,
    pub summary: &'static str,
    pub tags: Option<&'static str>,
}

pub fn draft_labels(kind: ContentKind) -> DraftLabels {
    match kind {
        ContentKind::Project => DraftLabels {
            title: "Title",
            slug: "Slug",
            summary: "Summary",
            tags: Some("Tech (comma separated)"),
        },
        ContentKind::Blog => DraftLabels {
            title: "Title",
            slug: "Slug",
            summary: "Excerpt",
            tags: Some("Tags (comma separated)"),
        },
        ContentKind::Tech => DraftLabels {
            title: "Name",
            slug: "Category",
            summary: "Level",
            tags: None,
        },
    }
}

// transient studio form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDraft {
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub tags_raw: String,
}

impl ContentDraft {
    pub fn new(kind: ContentKind) -> Self {
        ContentDraft {
            kind,
            ..Default::default()
        }
    }

    // no validation happens here, the backend is the only judge of a draft
    pub fn to_request(&self, read_time: u32) -> CreateContentReq {
        match self.kind {
            ContentKind::Project => CreateContentReq::Project(CreateProjectReq {
                title: self.title.clone(),
                slug: self.slug.clone(),
                summary: self.summary.clone(),
                tech: split_tags(&self.tags_raw),
            }),
            ContentKind::Blog => CreateContentReq::Blog(CreateBlogReq {
                title: self.title.clone(),
                slug: self.slug.clone(),
                excerpt: self.summary.clone(),
                tags: split_tags(&self.tags_raw),
                read_time,
            }),
            ContentKind::Tech => CreateContentReq::Tech(CreateTechReq {
                name: self.title.clone(),
                category: self.slug.clone(),
                level: self.summary.clone(),
            }),
        }
    }

    // after a successful submit the fields are emptied but the kind stays selected
    pub fn clear(&mut self) {
        *self = ContentDraft::new(self.kind);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Submitted(ContentKind),
    Failed(String),
    NotAuthenticated,
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Submitted(kind) => format!("Saved new {kind}"),
            SubmitOutcome::Failed(reason) => format!("Error: {reason}"),
            SubmitOutcome::NotAuthenticated => String::from("Log in before submitting"),
        }
    }
}

// one login attempt; no retry, the user resubmits by hand
//
// only a successful exchange touches the session, so a failure leaves nothing behind
pub async fn login<B, S>(backend: &B, session: &SessionStore<S>, password: &str) -> LoginOutcome
where
    B: Backend + ?Sized,
    S: KeyValueStore,
{
    let req = LoginReq {
        password: password.to_owned(),
    };

    match backend.login(&req).await {
        Ok(resp) if !resp.access_token.is_empty() => {
            session.authenticate(&resp.access_token);
            LoginOutcome::Authenticated
        }
        Ok(_) => {
            warn!("login response carried an empty token");
            LoginOutcome::Rejected(String::from("Login failed"))
        }
        Err(err) => {
            warn!("login failed: {err}");
            LoginOutcome::Rejected(String::from("Login failed"))
        }
    }
}

// one create call for the current draft
//
// a failed call keeps the token; we cannot tell an expired token from a bad draft
pub async fn submit<B, S>(
    backend: &B,
    session: &SessionStore<S>,
    draft: &ContentDraft,
    read_time: u32,
) -> SubmitOutcome
where
    B: Backend + ?Sized,
    S: KeyValueStore,
{
    let Some(token) = session.token() else {
        return SubmitOutcome::NotAuthenticated;
    };

    let req = draft.to_request(read_time);

    match backend.create(&token, &req).await {
        Ok(()) => {
            info!({ kind = %draft.kind, path = req.path() }, "content created");
            SubmitOutcome::Submitted(draft.kind)
        }
        Err(err) => {
            warn!({ kind = %draft.kind }, "content creation failed: {err}");
            SubmitOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{auth::LoginResp, home::HomePayload, project::Project};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::{config::PortfolioConfig, session::AuthState, storage::MemoryStorage};

    const KEY: &str = "portfolio_token";

    fn read_time() -> u32 {
        PortfolioConfig::default().blog_read_time
    }

    // answers login with a fixed token (or refuses), and records every create call
    #[derive(Default)]
    struct StubBackend {
        token: Option<String>,
        accept_creates: bool,
        logins: RefCell<Vec<String>>,
        creates: RefCell<Vec<(String, serde_json::Value, &'static str)>>,
    }

    impl StubBackend {
        fn issuing(token: &str) -> Self {
            StubBackend {
                token: Some(token.to_owned()),
                accept_creates: true,
                ..Default::default()
            }
        }

        fn refusing() -> Self {
            StubBackend::default()
        }
    }

    #[async_trait(?Send)]
    impl Backend for StubBackend {
        async fn home(&self) -> anyhow::Result<HomePayload> {
            Ok(HomePayload::default())
        }

        async fn project(&self, _slug: &str) -> anyhow::Result<Project> {
            Err(anyhow::Error::msg("not found"))
        }

        async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp> {
            self.logins.borrow_mut().push(req.password.clone());

            match &self.token {
                Some(token) => Ok(LoginResp {
                    access_token: token.clone(),
                }),
                None => Err(anyhow::Error::msg("login rejected with status 401")),
            }
        }

        async fn create(&self, token: &str, req: &CreateContentReq) -> anyhow::Result<()> {
            self.creates
                .borrow_mut()
                .push((token.to_owned(), serde_json::to_value(req)?, req.path()));

            if self.accept_creates {
                Ok(())
            } else {
                Err(anyhow::Error::msg("/projects returned 422: slug taken"))
            }
        }
    }

    fn draft(kind: ContentKind) -> ContentDraft {
        ContentDraft {
            kind,
            title: "Foo".into(),
            slug: "foo".into(),
            summary: "bar".into(),
            tags_raw: "a,b".into(),
        }
    }

    #[test]
    fn tags_are_trimmed_in_order() {
        assert_eq!(split_tags("react, ts ,  node"), vec!["react", "ts", "node"]);
    }

    #[test]
    fn empty_tag_pieces_are_kept() {
        assert_eq!(split_tags(""), vec![""]);
        assert_eq!(split_tags("a,,b, "), vec!["a", "", "b", ""]);
        assert_eq!(split_tags("a,a"), vec!["a", "a"]);
    }

    #[test]
    fn project_draft_maps_to_project_body() {
        let req = draft(ContentKind::Project).to_request(read_time());

        assert_eq!(req.path(), "/projects");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"title": "Foo", "slug": "foo", "summary": "bar", "tech": ["a", "b"]})
        );
    }

    #[test]
    fn blog_draft_maps_to_blog_body() {
        let req = draft(ContentKind::Blog).to_request(read_time());

        assert_eq!(req.path(), "/blog");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"title": "Foo", "slug": "foo", "excerpt": "bar", "tags": ["a", "b"], "read_time": 4})
        );
    }

    #[test]
    fn tech_draft_renames_fields() {
        let req = draft(ContentKind::Tech).to_request(read_time());

        assert_eq!(req.path(), "/tech");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Foo", "category": "foo", "level": "bar"})
        );
    }

    #[test]
    fn clear_keeps_kind() {
        let mut draft = draft(ContentKind::Blog);
        draft.clear();

        assert_eq!(draft, ContentDraft::new(ContentKind::Blog));
    }

    #[test]
    fn tech_form_has_no_tag_field() {
        assert_eq!(draft_labels(ContentKind::Tech).tags, None);
        assert_eq!(draft_labels(ContentKind::Blog).summary, "Excerpt");
    }

    #[test]
    fn successful_login_authenticates_and_persists() {
        let backend = StubBackend::issuing("abc");
        let session = SessionStore::restore(MemoryStorage::new(), KEY);

        let outcome = block_on(login(&backend, &session, "correct horse"));

        assert_eq!(outcome, LoginOutcome::Authenticated);
        assert_eq!(
            session.state(),
            AuthState::Authenticated {
                token: String::from("abc")
            }
        );
        assert_eq!(session.storage().get(KEY).as_deref(), Some("abc"));
        assert_eq!(*backend.logins.borrow(), vec![String::from("correct horse")]);
    }

    #[test]
    fn failed_login_persists_nothing() {
        let backend = StubBackend::refusing();
        let session = SessionStore::restore(MemoryStorage::new(), KEY);

        let outcome = block_on(login(&backend, &session, "wrong"));

        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert!(session.storage().is_empty());
        assert_eq!(backend.logins.borrow().len(), 1);
    }

    #[test]
    fn empty_token_is_a_rejection() {
        let backend = StubBackend::issuing("");
        let session = SessionStore::restore(MemoryStorage::new(), KEY);

        let outcome = block_on(login(&backend, &session, "pw"));

        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
        assert!(session.storage().is_empty());
    }

    #[test]
    fn submit_sends_bearer_and_body() {
        let backend = StubBackend::issuing("abc");
        let session = SessionStore::restore(MemoryStorage::new().with_entry(KEY, "abc"), KEY);

        let outcome = block_on(submit(&backend, &session, &draft(ContentKind::Project), read_time()));

        assert_eq!(outcome, SubmitOutcome::Submitted(ContentKind::Project));

        let creates = backend.creates.borrow();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].0, "abc");
        assert_eq!(
            creates[0].1,
            json!({"title": "Foo", "slug": "foo", "summary": "bar", "tech": ["a", "b"]})
        );
        assert_eq!(creates[0].2, "/projects");
    }

    #[test]
    fn submit_without_token_makes_no_call() {
        let backend = StubBackend::issuing("abc");
        let session = SessionStore::restore(MemoryStorage::new(), KEY);

        let outcome = block_on(submit(&backend, &session, &draft(ContentKind::Blog), read_time()));

        assert_eq!(outcome, SubmitOutcome::NotAuthenticated);
        assert!(backend.creates.borrow().is_empty());
    }

    #[test]
    fn rejected_submit_keeps_session() {
        let backend = StubBackend {
            token: Some(String::from("abc")),
            accept_creates: false,
            ..Default::default()
        };
        let session = SessionStore::restore(MemoryStorage::new().with_entry(KEY, "abc"), KEY);

        let outcome = block_on(submit(&backend, &session, &draft(ContentKind::Project), read_time()));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(String::from("/projects returned 422: slug taken"))
        );
        assert!(outcome.message().starts_with("Error: "));
        assert!(session.state().is_authenticated());
    }
}
