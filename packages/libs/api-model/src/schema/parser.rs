//! 선언 스키마 YAML 로더
//!
//! YAML로 선언된 테이블 정의를 파싱하여 팩토리 입력(`TableDefinition` 목록)으로 변환합니다.
//! 추상 테이블(`abstract: true`)은 결과에서 제외되지만, `extends`로 상속하는
//! 테이블에는 컬럼이 포함됩니다.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::column::ColumnDescriptor;
use super::table::TableDefinition;
use super::types::ColumnType;
use crate::error::{Error, Result};

/// 파싱된 테이블 정의 집합
#[derive(Debug, Clone, Default)]
pub struct TableSource {
    tables: Vec<TableDefinition>,
    abstract_tables: Vec<String>,
}

impl TableSource {
    /// 단일 YAML 문자열 파싱
    pub fn parse_yaml(yaml: &str) -> Result<Self> {
        Self::parse_multiple(&[yaml])
    }

    /// 여러 YAML 문서를 하나의 집합으로 파싱
    ///
    /// 테이블 이름은 문서 전체에서 유일해야 하며, `extends`는 다른 문서의 테이블도 참조할 수 있습니다.
    pub fn parse_multiple(yamls: &[&str]) -> Result<Self> {
        let mut raw_tables = Vec::new();

        for yaml in yamls {
            let raw: RawSchema = serde_yaml::from_str(yaml)?;
            raw_tables.extend(raw.tables);
        }

        Self::convert_raw_tables(raw_tables)
    }

    /// 구체 테이블 목록 (선언 순서)
    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    /// 구체 테이블 목록으로 변환
    pub fn into_tables(self) -> Vec<TableDefinition> {
        self.tables
    }

    /// 제외된 추상 테이블 이름
    pub fn abstract_tables(&self) -> &[String] {
        &self.abstract_tables
    }

    /// Raw 테이블들을 변환 (중복 검사 + 상속 해석)
    fn convert_raw_tables(raw_tables: Vec<RawTable>) -> Result<Self> {
        let mut by_name: HashMap<&str, &RawTable> = HashMap::new();

        for raw in &raw_tables {
            if raw.name.trim().is_empty() {
                return Err(Error::SchemaValidation {
                    message: "table name must not be empty".to_string(),
                });
            }
            if by_name.insert(raw.name.as_str(), raw).is_some() {
                return Err(Error::DuplicateTable {
                    name: raw.name.clone(),
                });
            }
        }

        let mut source = TableSource::default();

        for raw in &raw_tables {
            let mut chain = Vec::new();
            let columns = Self::resolve_columns(raw, &by_name, &mut chain)?;

            if raw.is_abstract {
                source.abstract_tables.push(raw.name.clone());
                continue;
            }

            source.tables.push(TableDefinition {
                name: raw.name.clone(),
                schema: raw.schema.clone(),
                columns,
            });
        }

        Ok(source)
    }

    /// 상속 체인을 따라 컬럼 목록 구성 (부모 컬럼이 먼저)
    fn resolve_columns<'a>(
        raw: &'a RawTable,
        by_name: &HashMap<&str, &'a RawTable>,
        chain: &mut Vec<&'a str>,
    ) -> Result<Vec<ColumnDescriptor>> {
        if chain.contains(&raw.name.as_str()) {
            return Err(Error::InheritanceCycle {
                table: raw.name.clone(),
            });
        }
        chain.push(raw.name.as_str());

        let mut columns = match &raw.extends {
            Some(parent_name) => {
                let parent: &'a RawTable = by_name
                    .get(parent_name.as_str())
                    .copied()
                    .ok_or_else(|| Error::UnknownParentTable {
                        table: raw.name.clone(),
                        parent: parent_name.clone(),
                    })?;
                Self::resolve_columns(parent, by_name, chain)?
            }
            None => Vec::new(),
        };

        for raw_column in &raw.columns {
            let column = Self::convert_raw_column(&raw.name, raw_column)?;

            // 같은 이름의 부모 컬럼은 자식 정의로 대체
            match columns.iter_mut().find(|c| c.name == column.name) {
                Some(existing) => *existing = column,
                None => columns.push(column),
            }
        }

        chain.pop();
        Ok(columns)
    }

    /// Raw 컬럼 변환
    fn convert_raw_column(table: &str, raw: &RawColumn) -> Result<ColumnDescriptor> {
        if raw.name.trim().is_empty() {
            return Err(Error::SchemaValidation {
                message: format!("table '{}' has a column with an empty name", table),
            });
        }

        let primary_key = raw.primary_key.unwrap_or(false);

        Ok(ColumnDescriptor {
            name: raw.name.clone(),
            column_type: Self::parse_column_type(raw),
            nullable: raw.nullable.unwrap_or(!primary_key),
            doc: raw.doc.clone(),
        })
    }

    /// 컬럼 타입 파싱 (알 수 없는 타입은 `Unknown`으로 보존)
    fn parse_column_type(raw: &RawColumn) -> ColumnType {
        let type_str = raw.column_type.as_deref().unwrap_or("string");
        let base = ColumnType::from_type_str(type_str);

        raw.variants
            .iter()
            .flatten()
            .fold(base, |column_type, (dialect, variant)| {
                column_type.with_variant(dialect.clone(), ColumnType::from_type_str(variant))
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw YAML 구조체 (serde 역직렬화용)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default = "default_version")]
    #[allow(dead_code)]
    version: u32,
    #[serde(default)]
    tables: Vec<RawTable>,
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct RawTable {
    name: String,
    schema: Option<String>,
    #[serde(rename = "abstract", default)]
    is_abstract: bool,
    extends: Option<String>,
    #[serde(default)]
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    column_type: Option<String>,
    variants: Option<BTreeMap<String, String>>,
    nullable: Option<bool>,
    primary_key: Option<bool>,
    doc: Option<String>,
}
