// Centralized error handling for the sweeper

use thiserror::Error;

/// Errors raised while talking to the Transmission RPC endpoint
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to reach Transmission at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Transmission returned error status: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Transmission answered 409 without a session id")]
    MissingSessionId,

    #[error("Transmission kept rejecting the session id")]
    SessionRejected,

    #[error("Failed to parse JSON response from Transmission: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Transmission rejected `{method}`: {result}")]
    Rejected { method: String, result: String },
}

/// Errors that abort a sweep
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Lost connection to transfer service: {0}")]
    Connectivity(#[source] RpcError),

    #[error("Failed to stop transfer {id} `{name}`: {source}")]
    Command {
        id: i64,
        name: String,
        #[source]
        source: RpcError,
    },

    #[error("Failed to write sweep output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = RpcError::Rejected {
            method: "torrent-stop".to_string(),
            result: "invalid argument".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transmission rejected `torrent-stop`: invalid argument"
        );
    }

    #[test]
    fn test_command_error_names_transfer() {
        let err = SweepError::Command {
            id: 7,
            name: "debian.iso".to_string(),
            source: RpcError::MissingSessionId,
        };
        let message = err.to_string();
        assert!(message.contains("7"));
        assert!(message.contains("debian.iso"));
    }
}
