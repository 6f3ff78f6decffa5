//! 팩토리 설정

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 스키마 팩토리 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactoryConfig {
    /// 타입 해석 시 우선할 DB 방언 (예: `sqlite`, `postgresql`)
    ///
    /// 지정하지 않으면 variant 타입은 항상 기본(구현) 타입으로 해석됩니다.
    #[serde(default)]
    pub dialect: Option<String>,
}

impl FactoryConfig {
    /// 방언 지정
    pub fn with_dialect(dialect: impl Into<String>) -> Self {
        Self {
            dialect: Some(dialect.into()),
        }
    }

    /// YAML 문자열에서 로드
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// JSON 문자열에서 로드
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }
}
