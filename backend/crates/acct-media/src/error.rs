use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Media request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Media host rejected upload ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Media host response has no url {location}")]
    MissingUrl { location: ErrorLocation },

    #[error("Invalid media file: {message} {location}")]
    InvalidFile {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for MediaError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MediaError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
