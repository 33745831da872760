//! HTTP Basic Authentication.

use base64::prelude::*;

use crate::request::Request;

pub(crate) fn basic_auth_value(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{username}:{password}"))
    )
}

impl Request {
    /// Sets the `Authorization` header to HTTP Basic credentials for the
    /// given username and password, overwriting any prior value.
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        self.headers.push((
            "authorization".into(),
            basic_auth_value(username, password).into(),
        ));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_credentials() {
        assert_eq!(
            basic_auth_value("test", "password"),
            "Basic dGVzdDpwYXNzd29yZA=="
        );
    }

    #[test]
    fn overwrites_prior_authorization_header() {
        let request = Request::post("http://example.com/")
            .with_header("Authorization", "Bearer stale")
            .with_basic_auth("test", "password");
        let auth: Vec<_> = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].1, "Basic dGVzdDpwYXNzd29yZA==");
    }
}
