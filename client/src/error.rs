use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
}
