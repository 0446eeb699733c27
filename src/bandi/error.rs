use reqwest::StatusCode;
use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// dataset is downloaded, decoded, or written to disk.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when the endpoint answers with a non-success status code.
    #[error("API request to {url} failed with status {status}")]
    Request { url: String, status: StatusCode },

    /// Transport-level failures such as DNS, connection, or body read errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Raised when the response body is not the expected JSON shape.
    #[error("JSON deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook read back from disk lacks the expected sheet.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Coarse failure family of a [`ToolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The endpoint could not be reached or answered with an error status.
    Request,
    /// The response body could not be decoded into records.
    Deserialization,
    /// Reading or writing local files failed.
    Io,
}

impl ToolError {
    /// Classifies the error so callers can tell network, parsing, and disk
    /// failures apart without inspecting the message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::Request { .. } => ErrorKind::Request,
            ToolError::Http(err) if err.is_decode() => ErrorKind::Deserialization,
            ToolError::Http(_) => ErrorKind::Request,
            ToolError::Deserialization(_) => ErrorKind::Deserialization,
            ToolError::Io(_)
            | ToolError::ExcelWrite(_)
            | ToolError::ExcelRead(_)
            | ToolError::InvalidWorkbook(_)
            | ToolError::Logging(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message_carries_status_code() {
        let error = ToolError::Request {
            url: "http://localhost/resource.json".into(),
            status: StatusCode::NOT_FOUND,
        };

        assert!(error.to_string().contains("404"));
        assert_eq!(error.kind(), ErrorKind::Request);
    }

    #[test]
    fn json_and_disk_failures_are_classified() {
        let json = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        assert_eq!(ToolError::from(json).kind(), ErrorKind::Deserialization);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ToolError::from(io).kind(), ErrorKind::Io);
        assert_eq!(
            ToolError::InvalidWorkbook("missing sheet 'Bandi'".into()).kind(),
            ErrorKind::Io
        );
    }
}
