use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("Network failure {0}")]
    Network(#[from] SystemError),
    #[error("Server responded with status {0}")]
    Http(u16),
    #[error("JSON {0}")]
    Json(String),
}

/// This error type implements From's for the non cloneable transport errors and keeps them behind an Rc
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(not(target_arch = "wasm32"))]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(target_arch = "wasm32")]
    GlooError(Rc<gloo_net::Error>),
    Anyhow(Rc<anyhow::Error>),
}

impl From<anyhow::Error> for SystemError {
    fn from(value: anyhow::Error) -> Self {
        Self::Anyhow(Rc::new(value))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::Network(value.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(not(target_arch = "wasm32"))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(target_arch = "wasm32")]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::Anyhow(anyhow) => write!(f, "{}", anyhow),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(not(target_arch = "wasm32"))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(target_arch = "wasm32")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::Anyhow(anyhow) => Some(anyhow.root_cause()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_types() {
        let err: AppError = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, AppError::Network(SystemError::Anyhow(_))));
        assert_eq!(err.to_string(), "Network failure connection refused");

        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Json(_)));

        assert_eq!(
            AppError::Http(503).to_string(),
            "Server responded with status 503"
        );
    }
}
