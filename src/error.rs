use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Root path {} doesn't exist", .root.display())]
    ConfigurationMissing { root: PathBuf },
    #[error("Failed to read classpath file: {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file: {}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Library table XML writer failed: {0}")]
    XmlWrite(#[source] std::io::Error),
    #[error("Library table XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
