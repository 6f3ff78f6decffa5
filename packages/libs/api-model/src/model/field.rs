//! 필드 디스크립터와 스키마 매핑
//!
//! 컬럼 하나는 `FieldDescriptor` 하나로 변환되며, 테이블 단위로 `SchemaMapping`에 모입니다.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::schema::{ColumnDescriptor, ColumnType, RuntimeType, TableDefinition};

/// 읽기 전용으로 표시되는 컬럼 이름
const READ_ONLY_COLUMN: &str = "id";

/// API 필드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    DateTime,
    Date,
    String,
}

impl FieldKind {
    /// 런타임 타입에서 필드 종류 결정
    ///
    /// Boolean은 Integer와 별도로 먼저 판별합니다. 해석되지 않은 타입은 String입니다.
    pub fn from_runtime(runtime_type: Option<RuntimeType>) -> Self {
        match runtime_type {
            Some(RuntimeType::Boolean) => FieldKind::Boolean,
            Some(RuntimeType::Integer) => FieldKind::Integer,
            Some(RuntimeType::Float) => FieldKind::Float,
            Some(RuntimeType::DateTime) => FieldKind::DateTime,
            Some(RuntimeType::Date) => FieldKind::Date,
            _ => FieldKind::String,
        }
    }

    /// 논리 타입에서 필드 종류 추론
    pub fn infer(column_type: &ColumnType, dialect: Option<&str>) -> Self {
        let resolved = column_type.resolve(dialect);
        if resolved.is_none() {
            tracing::trace!(
                column_type = %column_type.type_name(),
                "unresolved column type, falling back to String"
            );
        }
        Self::from_runtime(resolved)
    }

    /// Swagger 타입/포맷
    pub fn swagger_type(&self) -> (&'static str, Option<&'static str>) {
        match self {
            FieldKind::Integer => ("integer", None),
            FieldKind::Float => ("number", None),
            FieldKind::Boolean => ("boolean", None),
            FieldKind::DateTime => ("string", Some("date-time")),
            FieldKind::Date => ("string", Some("date")),
            FieldKind::String => ("string", None),
        }
    }
}

/// API 필드 디스크립터
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// 필드 종류
    pub kind: FieldKind,

    /// 읽기 전용 여부 (컬럼 이름이 정확히 `id`인 경우)
    pub read_only: bool,

    /// 필수 여부 (NULL 불가 컬럼)
    pub required: bool,

    /// 설명 (컬럼 문서 문자열)
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// 컬럼에서 디스크립터 생성
    pub fn from_column(column: &ColumnDescriptor, dialect: Option<&str>) -> Self {
        Self {
            kind: FieldKind::infer(&column.column_type, dialect),
            read_only: column.name == READ_ONLY_COLUMN,
            required: !column.nullable,
            description: column.doc.clone(),
        }
    }
}

/// 테이블 하나의 필드 매핑 (컬럼 이름 → 디스크립터, 선언 순서 유지)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMapping {
    fields: Vec<(String, FieldDescriptor)>,
}

impl SchemaMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// 테이블 정의에서 매핑 생성
    pub fn from_table(table: &TableDefinition, dialect: Option<&str>) -> Self {
        let mut mapping = Self::new();
        for column in &table.columns {
            mapping.insert(column.name.clone(), FieldDescriptor::from_column(column, dialect));
        }
        mapping
    }

    /// 필드 추가 (같은 이름이 있으면 그 자리에서 교체)
    pub fn insert(&mut self, name: String, field: FieldDescriptor) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = field,
            None => self.fields.push((name, field)),
        }
    }

    /// 필드 조회
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    /// 모든 필드 (선언 순서)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// 필수 필드 이름
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, f)| f.required).map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for SchemaMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}
