use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::join_url;

// exchange the studio password for a bearer token
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginReq {
    pub password: String,
}

// the token is opaque to us; we only ever echo it back in the Authorization header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResp {
    pub access_token: String,
}

// a login only succeeds if the status is ok AND the body carries an access_token,
// otherwise the json() call fails and the caller stays unauthenticated
pub async fn login(base_url: &str, req: &LoginReq) -> anyhow::Result<LoginResp> {
    let resp = Request::post(&join_url(base_url, "/auth/login"))
        .json(req)?
        .send()
        .await?;

    debug!({ status = resp.status() }, "login response");

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(format!(
            "login rejected with status {}",
            resp.status()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn login_body_is_password_only() {
        let req = LoginReq {
            password: String::from("hunter2"),
        };

        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"password": "hunter2"}));
    }

    #[test]
    fn login_response_requires_token() {
        let resp: LoginResp = serde_json::from_value(json!({"access_token": "abc"})).unwrap();
        assert_eq!(resp.access_token, "abc");

        assert!(serde_json::from_value::<LoginResp>(json!({"detail": "nope"})).is_err());
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let resp: LoginResp =
            serde_json::from_value(json!({"access_token": "abc", "token_type": "bearer"})).unwrap();
        assert_eq!(resp.access_token, "abc");
    }
}
