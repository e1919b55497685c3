use reqwest::StatusCode;
use thiserror::Error;

/// Classification of a non-2xx answer from the config service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("internal error")]
    Internal,

    #[error("unexpected status {0}")]
    Unexpected(u16),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest,
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            s if s.is_server_error() => ApiError::Internal,
            s => ApiError::Unexpected(s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_variants() {
        assert_eq!(ApiError::from_status(StatusCode::NOT_FOUND), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(StatusCode::BAD_GATEWAY),
            ApiError::Internal
        );
        assert_eq!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT),
            ApiError::Unexpected(418)
        );
    }
}
