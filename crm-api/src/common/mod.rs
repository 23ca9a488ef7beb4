use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait JsonURL {
    const URL_JSON: &'static str;
}

pub trait JsonEndpoint: JsonURL + Serialize {
    type Response: Serialize + DeserializeOwned;
}
