//! Request construction.
//!
//! Every call builds a fresh [`RequestSpec`]; nothing here is persisted.
//! The upstream API takes ALL parameters in the query string, for POST and
//! DELETE as much as for GET — request bodies are never used.

use reqwest::Method;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// UTF-8 text value.
    Text(String),
    /// Raw bytes, percent-encoded on the wire.
    Bytes(Vec<u8>),
}

impl ParamValue {
    fn encode(&self) -> String {
        match self {
            Self::Text(s) => urlencoding::encode(s).into_owned(),
            Self::Bytes(b) => urlencoding::encode_binary(b).into_owned(),
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

/// Image payload for pin creation.
///
/// The upstream endpoint distinguishes a remote image (`image_url`
/// parameter) from an inline upload (`image` parameter); callers pick the
/// variant explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote image fetched by the server.
    Url(String),
    /// Raw image bytes sent with the request.
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Parameter name and value this image contributes to the request.
    pub(crate) fn into_param(self) -> (String, ParamValue) {
        match self {
            Self::Url(url) => ("image_url".to_string(), ParamValue::Text(url)),
            Self::Bytes(bytes) => ("image".to_string(), ParamValue::Bytes(bytes)),
        }
    }
}

/// One API call: resource path, verb and parameters.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Resource path relative to the API root, e.g. `boards/123`.
    pub endpoint: String,
    /// HTTP verb.
    pub method: Method,
    /// Attribute projection; joined into a single `fields` parameter.
    pub fields: Vec<String>,
    /// Endpoint-specific parameters, in wire order.
    pub params: Vec<(String, ParamValue)>,
}

impl RequestSpec {
    /// A GET with an attribute projection.
    pub fn get(endpoint: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::GET,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            params: Vec::new(),
        }
    }

    /// A POST carrying its parameters in the query string.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::POST,
            fields: Vec::new(),
            params: Vec::new(),
        }
    }

    /// A bare DELETE.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::DELETE,
            fields: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Serialize the query string for this request.
    ///
    /// Pair order: access token first when given, then explicit params,
    /// then the comma-joined `fields` projection. Returns an empty string
    /// when there is nothing to send.
    pub fn query(&self, access_token: Option<&str>) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(token) = access_token {
            pairs.push(("access_token".to_string(), urlencoding::encode(token).into_owned()));
        }

        for (key, value) in &self.params {
            pairs.push((key.clone(), value.encode()));
        }

        if !self.fields.is_empty() {
            let joined = self.fields.join(",");
            pairs.push(("fields".to_string(), urlencoding::encode(&joined).into_owned()));
        }

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_query_token_first() {
        let spec = RequestSpec::get("me", &["id", "username"]);
        let query = spec.query(Some("tok"));
        assert_eq!(query, "access_token=tok&fields=id%2Cusername");
    }

    #[test]
    fn test_query_without_token() {
        let spec = RequestSpec::get("me/boards", &["id", "name"]);
        assert_eq!(spec.query(None), "fields=id%2Cname");
    }

    #[test]
    fn test_post_param_order() {
        let spec = RequestSpec::post("pins")
            .param("board", "b1")
            .param("note", "hi there")
            .param("link", "https://example.com/a?b=c");
        let query = spec.query(Some("tok"));
        assert_eq!(
            query,
            "access_token=tok&board=b1&note=hi%20there&link=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc"
        );
    }

    #[test]
    fn test_bytes_param_percent_encoded() {
        let spec = RequestSpec::post("pins").param("image", vec![0xffu8, b'a', 0x00]);
        assert_eq!(spec.query(None), "image=%FFa%00");
    }

    #[test]
    fn test_delete_no_params() {
        let spec = RequestSpec::delete("pins/p1");
        assert_eq!(spec.query(Some("tok")), "access_token=tok");
        assert_eq!(spec.query(None), "");
    }

    #[test]
    fn test_image_source_params() {
        let (key, value) = ImageSource::Url("https://img.example/x.jpg".into()).into_param();
        assert_eq!(key, "image_url");
        assert_eq!(value, ParamValue::Text("https://img.example/x.jpg".into()));

        let (key, value) = ImageSource::Bytes(vec![1, 2, 3]).into_param();
        assert_eq!(key, "image");
        assert_eq!(value, ParamValue::Bytes(vec![1, 2, 3]));
    }
}
