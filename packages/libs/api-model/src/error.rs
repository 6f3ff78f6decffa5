//! 공통 에러 타입
//!
//! 스키마 로딩과 엔티티 조회에서 사용되는 에러 타입을 정의합니다.
//! 등록 콜백(`ModelRegistrar`)의 에러는 여기로 감싸지 않고 그대로 전달됩니다.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Schema Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("schema validation error: {message}")]
    SchemaValidation { message: String },

    #[error("duplicate table name: {name}")]
    DuplicateTable { name: String },

    #[error("table '{table}' extends unknown table '{parent}'")]
    UnknownParentTable { table: String, parent: String },

    #[error("inheritance cycle detected at table '{table}'")]
    InheritanceCycle { table: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Model Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("duplicate model name: {name}")]
    DuplicateModel { name: String },

    #[error("{table} was not found: {cause}")]
    EntityNotFound {
        table: String,
        cause: MissingEntityCause,
    },

    // ─────────────────────────────────────────────────────────────────────────────
    // IO/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 엔티티 조회 실패 시 추정 원인
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntityCause {
    /// 팩토리 생성 시점에 해당 테이블이 입력에 없었음
    /// (추상 테이블이거나, 팩토리 생성 후에 모델이 등록됨)
    NotRegistered,
}

impl fmt::Display for MissingEntityCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingEntityCause::NotRegistered => f.write_str(
                "check that the table models were registered before the schema factory was constructed",
            ),
        }
    }
}

impl Error {
    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::SchemaValidation { .. } => "SCHEMA_VALIDATION_ERROR",
            Error::DuplicateTable { .. } => "DUPLICATE_TABLE",
            Error::UnknownParentTable { .. } => "UNKNOWN_PARENT_TABLE",
            Error::InheritanceCycle { .. } => "INHERITANCE_CYCLE",
            Error::DuplicateModel { .. } => "DUPLICATE_MODEL",
            Error::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            Error::Yaml(_) => "YAML_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }

    /// 조회 실패 에러 생성
    pub(crate) fn entity_not_found(table: &str) -> Self {
        Error::EntityNotFound {
            table: table.to_string(),
            cause: MissingEntityCause::NotRegistered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_not_found_message() {
        let err = Error::entity_not_found("fake");
        let message = err.to_string();

        assert!(message.starts_with("fake was not found"));
        assert!(message.contains("before the schema factory was constructed"));
        assert_eq!(err.code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_schema_error_codes() {
        let cases = [
            (
                Error::SchemaValidation {
                    message: "empty".to_string(),
                },
                "SCHEMA_VALIDATION_ERROR",
            ),
            (
                Error::DuplicateTable {
                    name: "users".to_string(),
                },
                "DUPLICATE_TABLE",
            ),
            (
                Error::UnknownParentTable {
                    table: "posts".to_string(),
                    parent: "base".to_string(),
                },
                "UNKNOWN_PARENT_TABLE",
            ),
            (
                Error::InheritanceCycle {
                    table: "a".to_string(),
                },
                "INHERITANCE_CYCLE",
            ),
            (
                Error::DuplicateModel {
                    name: "person".to_string(),
                },
                "DUPLICATE_MODEL",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code, "{err}");
        }
    }

    #[test]
    fn test_entity_not_found_fields() {
        match Error::entity_not_found("object") {
            Error::EntityNotFound { table, cause } => {
                assert_eq!(table, "object");
                assert_eq!(cause, MissingEntityCause::NotRegistered);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
