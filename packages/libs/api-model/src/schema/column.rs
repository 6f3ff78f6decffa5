//! 컬럼 정의
//!
//! 테이블의 컬럼 메타데이터를 정의합니다.

use super::types::ColumnType;

/// 컬럼 정의
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// 컬럼 이름 (테이블 내에서 유일)
    pub name: String,

    /// 컬럼 타입
    pub column_type: ColumnType,

    /// NULL 허용 여부
    pub nullable: bool,

    /// 문서 문자열
    pub doc: Option<String>,
}

impl ColumnDescriptor {
    /// NULL 허용 컬럼 생성
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            nullable: true,
            doc: None,
        }
    }

    /// NULL 허용 여부 지정
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// 문서 문자열 지정
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}
