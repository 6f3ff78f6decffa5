//! API 스키마 모델
//!
//! - `field`: 필드 종류/디스크립터, 테이블 단위 스키마 매핑, 타입 추론
//! - `api`: 기본 등록 구현 (`ApiRegistry`) 및 Swagger 출력

mod api;
mod field;

pub use api::{ApiModel, ApiRegistry};
pub use field::{FieldDescriptor, FieldKind, SchemaMapping};
