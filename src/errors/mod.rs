use thiserror::Error;

/// Failure while acquiring the team payload
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("Failed to fetch from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Team endpoint {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("Failed to parse team payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AcquisitionError {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub fn decode(url: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.to_string(),
            source,
        }
    }
}
