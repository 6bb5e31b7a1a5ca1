use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service response is not valid JSON")]
    Decode(#[source] std::io::Error),

    #[error("service error: {}", messages.join("; "))]
    Api { messages: Vec<String> },

    #[error("service response is missing {0}")]
    MissingField(String),

    #[error("{kind} {id:?} not found")]
    NotFound { kind: &'static str, id: String },
}
