//! 테이블 정의

use super::column::ColumnDescriptor;

/// 테이블 정의
///
/// 이름과 순서가 있는 컬럼 목록으로 구성됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    /// 테이블 이름
    pub name: String,

    /// DB 스키마 (예: `public`)
    pub schema: Option<String>,

    /// 컬럼 목록 (선언 순서)
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            columns: Vec::new(),
        }
    }

    /// DB 스키마 지정
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// 컬럼 추가
    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// 전체 이름 (`schema.name`, 스키마가 없으면 `name`)
    pub fn fullname(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }

    /// 컬럼 찾기
    pub fn find_column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}
