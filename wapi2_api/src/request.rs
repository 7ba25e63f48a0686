//! Per-call request description: [`Method`], path, JSON body and query pairs.

use std::fmt;

use serde_json::Value;
use url::Url;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// One request to the API, built fresh for every call.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    pub method: Method,
    /// Path appended to the base URL, starting with `/`.
    pub path: String,
    pub body: Option<Value>,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the `session_id` query parameter used by chat and contact endpoints.
    pub fn with_session(self, session_id: &str) -> Self {
        self.with_query("session_id", session_id)
    }

    /// Resolves the full URL against `base_url`, form-encoding the query.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(format!("{}{}", base_url, self.path).as_str())?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    /// Serialized request payload. POST always carries a JSON object; GET carries nothing.
    pub fn payload(&self) -> Option<String> {
        match self.method {
            Method::Get => None,
            Method::Post => Some(match &self.body {
                Some(body) => body.to_string(),
                None => "{}".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_without_query_has_no_query_string() {
        let url = RequestSpec::get("/auth/getsessions")
            .url("https://wapi2.com")
            .unwrap();
        assert_eq!(url.as_str(), "https://wapi2.com/auth/getsessions");
        assert!(url.query().is_none());
    }

    #[test]
    fn session_query_appended() {
        let url = RequestSpec::get("/contact/getcontacts")
            .with_session("my-session")
            .url("https://wapi2.com")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://wapi2.com/contact/getcontacts?session_id=my-session"
        );
    }

    #[test]
    fn query_values_are_form_encoded() {
        let url = RequestSpec::get("/x")
            .with_query("session_id", "a b&c")
            .url("http://localhost")
            .unwrap();
        assert_eq!(url.query(), Some("session_id=a+b%26c"));
    }

    #[test]
    fn query_keeps_insertion_order() {
        let url = RequestSpec::get("/x")
            .with_query("b", "2")
            .with_query("a", "1")
            .url("http://localhost")
            .unwrap();
        assert_eq!(url.query(), Some("b=2&a=1"));
    }

    #[test]
    fn invalid_base_url_is_error() {
        assert!(RequestSpec::get("/x").url("not a url").is_err());
    }

    #[test]
    fn payload_by_method() {
        assert_eq!(RequestSpec::get("/x").payload(), None);

        let spec = RequestSpec::post("/x", json!({"message": "hi"}));
        assert_eq!(spec.payload().as_deref(), Some(r#"{"message":"hi"}"#));

        let mut spec = RequestSpec::post("/x", json!(null));
        spec.body = None;
        assert_eq!(spec.payload().as_deref(), Some("{}"));
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
