//! 기본 API 모델 레지스트리
//!
//! 팩토리가 만든 스키마 매핑을 이름 있는 API 모델로 등록하고,
//! Swagger 2.0 `definitions` 형태로 출력합니다.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Map, Value};

use super::field::{FieldDescriptor, SchemaMapping};
use crate::error::{Error, Result};
use crate::factory::ModelRegistrar;

/// 등록된 API 모델
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiModel {
    /// 모델 이름 (테이블 전체 이름)
    pub name: String,

    /// 필드 매핑
    pub fields: SchemaMapping,
}

impl ApiModel {
    pub fn new(name: impl Into<String>, fields: SchemaMapping) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Swagger 스키마 객체로 변환
    pub fn to_swagger(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, field)| (name.to_string(), field_schema(field)))
            .collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });

        let required: Vec<&str> = self.fields.required_fields().collect();
        if !required.is_empty() {
            schema["required"] = json!(required);
        }

        schema
    }
}

/// 필드 하나의 Swagger 스키마
fn field_schema(field: &FieldDescriptor) -> Value {
    let (type_name, format) = field.kind.swagger_type();
    let mut schema = Map::new();

    schema.insert("type".to_string(), json!(type_name));
    if let Some(format) = format {
        schema.insert("format".to_string(), json!(format));
    }
    if field.read_only {
        schema.insert("readOnly".to_string(), json!(true));
    }
    if let Some(description) = &field.description {
        schema.insert("description".to_string(), json!(description));
    }

    Value::Object(schema)
}

/// API 모델 레지스트리
///
/// 모델 이름은 레지스트리 안에서 유일해야 합니다.
#[derive(Debug, Default)]
pub struct ApiRegistry {
    models: BTreeMap<String, Arc<ApiModel>>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모델 등록
    pub fn model(&mut self, name: &str, fields: SchemaMapping) -> Result<Arc<ApiModel>> {
        if self.models.contains_key(name) {
            return Err(Error::DuplicateModel {
                name: name.to_string(),
            });
        }

        let model = Arc::new(ApiModel::new(name, fields));
        self.models.insert(name.to_string(), Arc::clone(&model));
        Ok(model)
    }

    /// 모델 조회
    pub fn get(&self, name: &str) -> Option<&Arc<ApiModel>> {
        self.models.get(name)
    }

    /// 모든 모델 (이름순)
    pub fn models(&self) -> impl Iterator<Item = &Arc<ApiModel>> {
        self.models.values()
    }

    /// Swagger `definitions` 객체
    ///
    /// 모델은 이름순으로 나열됩니다. 생성 순서가 필요하면 `SchemaFactory::entities()`를 사용합니다.
    pub fn definitions(&self) -> Value {
        let definitions: Map<String, Value> = self
            .models
            .iter()
            .map(|(name, model)| (name.clone(), model.to_swagger()))
            .collect();
        Value::Object(definitions)
    }

    /// `definitions` JSON 문자열
    pub fn definitions_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.definitions())?)
    }
}

impl ModelRegistrar for ApiRegistry {
    type Model = Arc<ApiModel>;
    type Error = Error;

    fn register(&mut self, name: &str, fields: &SchemaMapping) -> Result<Self::Model> {
        self.model(name, fields.clone())
    }
}
