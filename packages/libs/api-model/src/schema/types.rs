//! 논리적 컬럼 타입 정의
//!
//! 컬럼 타입은 닫힌 열거형(`ColumnType`)으로 표현됩니다.
//! 각 타입은 런타임 값 타입(`RuntimeType`)으로 해석되며,
//! 해석할 수 없는 타입은 `None`이 되어 문자열 필드로 처리됩니다.

use std::collections::BTreeMap;

/// 구체적인 SQL 컬럼 타입
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    /// 32비트 정수
    Integer,

    /// 64비트 정수
    BigInteger,

    /// 16비트 정수
    SmallInteger,

    /// 부동소수점
    Float,

    /// 고정 소수점
    Numeric {
        precision: Option<u8>,
        scale: Option<u8>,
    },

    /// 불리언
    Boolean,

    /// 날짜
    Date,

    /// 날짜 + 시각
    DateTime,

    /// 시각
    Time,

    /// 기간
    Interval,

    /// 길이 제한 문자열 (VARCHAR)
    String { length: Option<u32> },

    /// 긴 문자열 (TEXT)
    Text,

    /// 바이트 배열
    Binary,

    /// JSON/JSONB
    Json,

    /// UUID
    Uuid,
}

/// 컬럼 값이 런타임에 갖는 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Duration,
    Text,
    Bytes,
    Json,
    Uuid,
}

impl SqlType {
    /// 런타임 타입 (모든 SQL 타입에 대해 정의됨)
    pub fn runtime_type(&self) -> RuntimeType {
        match self {
            SqlType::Integer | SqlType::BigInteger | SqlType::SmallInteger => RuntimeType::Integer,
            SqlType::Float => RuntimeType::Float,
            SqlType::Numeric { .. } => RuntimeType::Decimal,
            SqlType::Boolean => RuntimeType::Boolean,
            SqlType::Date => RuntimeType::Date,
            SqlType::DateTime => RuntimeType::DateTime,
            SqlType::Time => RuntimeType::Time,
            SqlType::Interval => RuntimeType::Duration,
            SqlType::String { .. } | SqlType::Text => RuntimeType::Text,
            SqlType::Binary => RuntimeType::Bytes,
            SqlType::Json => RuntimeType::Json,
            SqlType::Uuid => RuntimeType::Uuid,
        }
    }

    /// 타입 문자열에서 파싱
    ///
    /// `string(100)`, `numeric(10,2)`처럼 괄호 인자를 허용합니다.
    /// 인식할 수 없으면 `None`을 반환합니다.
    pub fn from_type_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let (base, args) = match s.split_once('(') {
            Some((base, rest)) => (base.trim(), Some(rest.strip_suffix(')')?)),
            None => (s, None),
        };
        let base = base.to_ascii_lowercase();
        let args: Vec<&str> = args
            .map(|a| a.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let sql_type = match (base.as_str(), args.as_slice()) {
            ("int" | "integer", []) => SqlType::Integer,
            ("bigint", []) => SqlType::BigInteger,
            ("smallint", []) => SqlType::SmallInteger,
            ("float" | "real" | "double", []) => SqlType::Float,
            ("numeric" | "decimal", []) => SqlType::Numeric {
                precision: None,
                scale: None,
            },
            ("numeric" | "decimal", [precision]) => SqlType::Numeric {
                precision: Some(precision.parse().ok()?),
                scale: None,
            },
            ("numeric" | "decimal", [precision, scale]) => SqlType::Numeric {
                precision: Some(precision.parse().ok()?),
                scale: Some(scale.parse().ok()?),
            },
            ("bool" | "boolean", []) => SqlType::Boolean,
            ("date", []) => SqlType::Date,
            ("datetime" | "timestamp", []) => SqlType::DateTime,
            ("time", []) => SqlType::Time,
            ("interval", []) => SqlType::Interval,
            ("string" | "varchar", []) => SqlType::String { length: None },
            ("string" | "varchar", [length]) => SqlType::String {
                length: Some(length.parse().ok()?),
            },
            ("text", []) => SqlType::Text,
            ("bytes" | "binary" | "blob", []) => SqlType::Binary,
            ("json" | "jsonb", []) => SqlType::Json,
            ("uuid", []) => SqlType::Uuid,
            _ => return None,
        };

        Some(sql_type)
    }
}

/// 논리적 컬럼 타입
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// 단일 SQL 타입
    Primitive(SqlType),

    /// 방언별 대체 타입을 가진 래퍼 타입
    ///
    /// `base`는 구현 타입이고, `variants`는 방언 이름 → 대체 타입입니다.
    Variant {
        base: Box<ColumnType>,
        variants: BTreeMap<String, ColumnType>,
    },

    /// 알 수 없는 타입 (원래 타입 이름만 보존)
    Unknown { name: String },
}

impl ColumnType {
    /// 타입 문자열에서 변환 (인식할 수 없는 타입은 `Unknown`)
    pub fn from_type_str(s: &str) -> Self {
        match SqlType::from_type_str(s) {
            Some(sql_type) => ColumnType::Primitive(sql_type),
            None => ColumnType::Unknown {
                name: s.trim().to_string(),
            },
        }
    }

    /// 방언별 대체 타입 추가
    pub fn with_variant(self, dialect: impl Into<String>, variant: ColumnType) -> Self {
        match self {
            ColumnType::Variant { base, mut variants } => {
                variants.insert(dialect.into(), variant);
                ColumnType::Variant { base, variants }
            }
            base => ColumnType::Variant {
                base: Box::new(base),
                variants: BTreeMap::from([(dialect.into(), variant)]),
            },
        }
    }

    /// 런타임 타입 해석
    ///
    /// 1. Variant: 지정된 방언의 대체 타입이 있으면 그것을, 없으면 기본 타입을 해석
    /// 2. Primitive: SQL 타입의 런타임 타입
    /// 3. Unknown: `None`
    pub fn resolve(&self, dialect: Option<&str>) -> Option<RuntimeType> {
        match self {
            ColumnType::Variant { base, variants } => {
                match dialect.and_then(|d| variants.get(d)) {
                    Some(variant) => variant.resolve(dialect),
                    None => base.resolve(dialect),
                }
            }
            ColumnType::Primitive(sql_type) => Some(sql_type.runtime_type()),
            ColumnType::Unknown { .. } => None,
        }
    }

    /// 표시용 타입 이름
    pub fn type_name(&self) -> String {
        match self {
            ColumnType::Primitive(sql_type) => format!("{:?}", sql_type),
            ColumnType::Variant { base, .. } => format!("Variant({})", base.type_name()),
            ColumnType::Unknown { name } => name.clone(),
        }
    }
}

impl From<SqlType> for ColumnType {
    fn from(sql_type: SqlType) -> Self {
        ColumnType::Primitive(sql_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type_parsing() {
        assert_eq!(SqlType::from_type_str("int"), Some(SqlType::Integer));
        assert_eq!(SqlType::from_type_str("BIGINT"), Some(SqlType::BigInteger));
        assert_eq!(SqlType::from_type_str("bool"), Some(SqlType::Boolean));
        assert_eq!(SqlType::from_type_str("timestamp"), Some(SqlType::DateTime));
        assert_eq!(SqlType::from_type_str("geometry"), None);
    }

    #[test]
    fn test_parameterized_type_parsing() {
        assert_eq!(
            SqlType::from_type_str("string(100)"),
            Some(SqlType::String { length: Some(100) })
        );
        assert_eq!(
            SqlType::from_type_str("numeric(10, 4)"),
            Some(SqlType::Numeric {
                precision: Some(10),
                scale: Some(4)
            })
        );
        assert_eq!(SqlType::from_type_str("string(abc)"), None);
        assert_eq!(SqlType::from_type_str("string(100"), None);
        assert_eq!(SqlType::from_type_str("int(4)"), None);
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let column_type = ColumnType::from_type_str("geometry(point)");
        assert_eq!(
            column_type,
            ColumnType::Unknown {
                name: "geometry(point)".to_string()
            }
        );
        assert_eq!(column_type.resolve(None), None);
        assert_eq!(column_type.resolve(Some("sqlite")), None);
    }

    #[test]
    fn test_runtime_type_mapping() {
        assert_eq!(SqlType::SmallInteger.runtime_type(), RuntimeType::Integer);
        assert_eq!(
            SqlType::Numeric {
                precision: None,
                scale: None
            }
            .runtime_type(),
            RuntimeType::Decimal
        );
        assert_eq!(SqlType::Text.runtime_type(), RuntimeType::Text);
        assert_eq!(SqlType::Interval.runtime_type(), RuntimeType::Duration);
    }

    #[test]
    fn test_variant_resolution() {
        let column_type = ColumnType::from(SqlType::BigInteger)
            .with_variant("sqlite", ColumnType::from(SqlType::Integer))
            .with_variant("legacy", ColumnType::from(SqlType::Text));

        // 방언이 없으면 기본 타입
        assert_eq!(column_type.resolve(None), Some(RuntimeType::Integer));
        assert_eq!(column_type.resolve(Some("postgresql")), Some(RuntimeType::Integer));
        assert_eq!(column_type.resolve(Some("legacy")), Some(RuntimeType::Text));
    }

    #[test]
    fn test_variant_of_unknown_base() {
        let column_type = ColumnType::from_type_str("money")
            .with_variant("postgresql", ColumnType::from(SqlType::Float));

        assert_eq!(column_type.resolve(None), None);
        assert_eq!(column_type.resolve(Some("postgresql")), Some(RuntimeType::Float));
    }
}
