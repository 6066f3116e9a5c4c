use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Remote operations exposed by [`crate::api::UsersClient`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    ListUsers,
    CreateUser,
    UpdateUser,
    DeleteUser,
}

impl Operation {
    /// Fixed user-facing message reported when the operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListUsers => "Failed to fetch users",
            Operation::CreateUser => "Failed to create user",
            Operation::UpdateUser => "Failed to update user",
            Operation::DeleteUser => "Failed to delete user",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// A failed request against the users endpoint.
///
/// All variants display the same per-operation message; the variant and its
/// fields only matter for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{op}")]
    Status { op: Operation, status: u16 },

    #[error("{op}")]
    Transport {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op}")]
    Decode {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn operation(&self) -> Operation {
        match self {
            FetchError::Status { op, .. }
            | FetchError::Transport { op, .. }
            | FetchError::Decode { op, .. } => *op,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Rejected client configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_fixed_message() {
        let err = FetchError::Status { op: Operation::ListUsers, status: 503 };
        assert_eq!(err.to_string(), "Failed to fetch users");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.operation(), Operation::ListUsers);
    }

    #[test]
    fn every_operation_has_its_own_message() {
        let msgs = [
            Operation::ListUsers,
            Operation::CreateUser,
            Operation::UpdateUser,
            Operation::DeleteUser,
        ]
        .map(Operation::failure_message);
        assert_eq!(msgs[1], "Failed to create user");
        assert_eq!(msgs[2], "Failed to update user");
        assert_eq!(msgs[3], "Failed to delete user");
    }
}
