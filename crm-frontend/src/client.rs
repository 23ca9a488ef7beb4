use std::sync::Arc;

use concat_string::concat_string;
use crm_api::common::JsonEndpoint;
use gloo_net::http;

use crate::{Error, config, error};

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Arc<str>,
}

impl Client {
    pub fn new(config: &config::Api) -> Self {
        Self { base_url: config.base_url.trim_end_matches('/').into() }
    }

    pub fn url<R: JsonEndpoint>(&self) -> String {
        concat_string!(self.base_url, R::URL_JSON)
    }

    pub async fn json<R: JsonEndpoint>(&self, request: &R) -> Result<R::Response, Error> {
        let response = http::Request::post(&self.url::<R>()).json(request)?.send().await?;
        if response.ok() {
            Ok(response.json().await?)
        } else {
            Err(error::Http { code: response.status(), text: response.text().await? }.into())
        }
    }
}
