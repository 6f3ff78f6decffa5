//! stk-api-model: 테이블 메타데이터 → API 스키마 모델 변환 라이브러리
//!
//! 테이블/컬럼 정의를 읽어 API 문서화 계층이 사용하는 필드 디스크립터를 만들고,
//! 등록 결과를 테이블 이름으로 조회할 수 있게 합니다.
//!
//! # 모듈 구조
//!
//! - `schema`: 테이블/컬럼 정의와 논리 타입, 선언 스키마(YAML) 로더
//! - `model`: 필드 디스크립터, 스키마 매핑, 기본 API 모델 레지스트리
//! - `factory`: 스키마 팩토리 (타입 추론 + 엔티티 조회)
//! - `config`: 팩토리 설정
//! - `error`: 공통 에러 타입

pub mod config;
pub mod error;
pub mod factory;
pub mod model;
pub mod schema;

pub use config::FactoryConfig;
pub use error::{Error, MissingEntityCause, Result};
pub use factory::{FnRegistrar, ModelRegistrar, SchemaFactory, SchemaFactoryBuilder};
pub use model::{ApiModel, ApiRegistry, FieldDescriptor, FieldKind, SchemaMapping};
pub use schema::{ColumnDescriptor, ColumnType, RuntimeType, SqlType, TableDefinition, TableSource};
