//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use serde_json::Error as JsonError;
use talentdesk_domain::TalentDeskError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TalentDeskError);

impl From<InfraError> for TalentDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TalentDeskError> for InfraError {
    fn from(value: TalentDeskError) -> Self {
        Self(value)
    }
}

trait IntoTalentDeskError {
    fn into_talentdesk(self) -> TalentDeskError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TalentDeskError */
/* -------------------------------------------------------------------------- */

impl IntoTalentDeskError for IoError {
    fn into_talentdesk(self) -> TalentDeskError {
        match self.kind() {
            ErrorKind::NotFound => TalentDeskError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                TalentDeskError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => TalentDeskError::Storage(format!("invalid data: {self}")),
            _ => TalentDeskError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_talentdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → TalentDeskError */
/* -------------------------------------------------------------------------- */

impl IntoTalentDeskError for JsonError {
    fn into_talentdesk(self) -> TalentDeskError {
        if self.is_io() {
            TalentDeskError::Storage(self.to_string())
        } else {
            TalentDeskError::Config(format!("Invalid JSON format: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_talentdesk())
    }
}

impl IntoTalentDeskError for TomlError {
    fn into_talentdesk(self) -> TalentDeskError {
        TalentDeskError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_talentdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err: TalentDeskError = InfraError::from(IoError::from(ErrorKind::NotFound)).into();
        assert!(matches!(err, TalentDeskError::NotFound(_)));
    }

    #[test]
    fn io_permission_maps_to_storage() {
        let err: TalentDeskError =
            InfraError::from(IoError::from(ErrorKind::PermissionDenied)).into();
        assert!(matches!(err, TalentDeskError::Storage(msg) if msg.contains("permission denied")));
    }

    #[test]
    fn json_syntax_error_maps_to_config() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: TalentDeskError = InfraError::from(parse_err).into();
        assert!(matches!(err, TalentDeskError::Config(msg) if msg.starts_with("Invalid JSON")));
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse_err = toml::from_str::<toml::Table>("key = ").unwrap_err();
        let err: TalentDeskError = InfraError::from(parse_err).into();
        assert!(matches!(err, TalentDeskError::Config(msg) if msg.starts_with("Invalid TOML")));
    }
}
