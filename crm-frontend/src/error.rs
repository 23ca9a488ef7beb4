use std::sync::Arc;

#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error(transparent)]
    GlooNet(#[from] Arc<gloo_net::Error>),
    #[error(transparent)]
    Http(#[from] Http),
    #[error(transparent)]
    Config(#[from] Arc<figment::Error>),
    #[error("Could not parse log filter due to {0}")]
    TracingFilter(String),
    #[error("Could not install tracing subscriber due to {0}")]
    TracingInit(String),
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{code} {text}")]
pub struct Http {
    pub code: u16,
    pub text: String,
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Arc::new(value).into()
    }
}

impl From<figment::Error> for Error {
    fn from(value: figment::Error) -> Self {
        Arc::new(value).into()
    }
}

impl From<tracing_subscriber::filter::ParseError> for Error {
    fn from(value: tracing_subscriber::filter::ParseError) -> Self {
        Self::TracingFilter(value.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for Error {
    fn from(value: tracing_subscriber::util::TryInitError) -> Self {
        Self::TracingInit(value.to_string())
    }
}
