use crm_proc_macro::api_derive;

#[api_derive(endpoint = true)]
#[endpoint(path = "user/me")]
#[derive(Clone, Copy)]
pub struct Request;

/// Display data of the authenticated user.
#[api_derive(fake = true)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Response {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
#[coverage(off)]
mod tests {
    use rstest::rstest;
    use serde_json::{from_value, json, to_value};

    use super::*;
    use crate::common::JsonURL;

    #[test]
    fn test_url() {
        assert_eq!(Request::URL_JSON, "/api/user/me");
    }

    #[rstest]
    #[case(
        json!({ "full_name": "Jane Doe", "role": "manager" }),
        Response { full_name: Some("Jane Doe".into()), role: Some("manager".into()) }
    )]
    #[case(json!({ "role": "sales" }), Response { full_name: None, role: Some("sales".into()) })]
    #[case(json!({ "full_name": null }), Response::default())]
    #[case(
        json!({ "full_name": "Jane Doe", "email": "jane@example.com", "id": "abc" }),
        Response { full_name: Some("Jane Doe".into()), role: None }
    )]
    fn test_deserialize(#[case] input: serde_json::Value, #[case] result: Response) {
        assert_eq!(from_value::<Response>(input).unwrap(), result);
    }

    #[test]
    fn test_serialize_request() {
        assert_eq!(to_value(Request).unwrap(), json!(null));
    }
}
