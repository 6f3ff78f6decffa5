//! 테이블 메타데이터
//!
//! # 개요
//!
//! 팩토리가 소비하는 입력 형태입니다. ORM 레지스트리를 직접 탐색하지 않고,
//! 호출자가 `TableDefinition` 목록을 명시적으로 넘깁니다.
//!
//! # 모듈 구조
//!
//! - `types`: 논리적 타입 정의와 런타임 타입 해석
//! - `table`: 테이블 정의
//! - `column`: 컬럼 정의
//! - `parser`: 선언 스키마(YAML) 로딩

mod column;
mod parser;
mod table;
mod types;

pub use column::ColumnDescriptor;
pub use parser::TableSource;
pub use table::TableDefinition;
pub use types::{ColumnType, RuntimeType, SqlType};
