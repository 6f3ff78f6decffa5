//! 스키마 팩토리
//!
//! 생성 시점에 테이블 정의를 한 번 순회하여 테이블마다 `SchemaMapping`을 만들고,
//! 등록 콜백(`ModelRegistrar`)의 결과를 테이블 이름으로 보관합니다.
//! 생성 이후에는 읽기 전용입니다.

use std::borrow::Borrow;
use std::collections::HashMap;

use tracing::Dispatch;

use crate::config::FactoryConfig;
use crate::error::{Error, Result};
use crate::model::SchemaMapping;
use crate::schema::TableDefinition;

/// 모델 등록 콜백
///
/// 테이블 이름과 필드 매핑을 받아 API 계층의 모델 핸들을 돌려줍니다.
/// 팩토리는 핸들 내용을 해석하지 않습니다.
pub trait ModelRegistrar {
    type Model;
    type Error;

    fn register(
        &mut self,
        name: &str,
        fields: &SchemaMapping,
    ) -> std::result::Result<Self::Model, Self::Error>;
}

impl<R: ModelRegistrar + ?Sized> ModelRegistrar for &mut R {
    type Model = R::Model;
    type Error = R::Error;

    fn register(
        &mut self,
        name: &str,
        fields: &SchemaMapping,
    ) -> std::result::Result<Self::Model, Self::Error> {
        (**self).register(name, fields)
    }
}

/// 클로저 기반 등록 콜백
pub struct FnRegistrar<F>(F);

impl<F> FnRegistrar<F> {
    pub fn new<M, E>(f: F) -> Self
    where
        F: FnMut(&str, &SchemaMapping) -> std::result::Result<M, E>,
    {
        Self(f)
    }
}

impl<F, M, E> ModelRegistrar for FnRegistrar<F>
where
    F: FnMut(&str, &SchemaMapping) -> std::result::Result<M, E>,
{
    type Model = M;
    type Error = E;

    fn register(&mut self, name: &str, fields: &SchemaMapping) -> std::result::Result<M, E> {
        (self.0)(name, fields)
    }
}

/// 스키마 팩토리 빌더
#[derive(Debug, Clone, Default)]
pub struct SchemaFactoryBuilder {
    config: FactoryConfig,
    dispatch: Option<Dispatch>,
}

impl SchemaFactoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정 지정
    pub fn config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    /// 진단 로그를 보낼 dispatcher 지정 (없으면 전역 기본 subscriber)
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// 팩토리 생성
    ///
    /// 등록 콜백이 실패하면 그 에러를 그대로 반환하며 팩토리는 만들어지지 않습니다.
    pub fn build<R, I>(
        self,
        registrar: R,
        tables: I,
    ) -> std::result::Result<SchemaFactory<R::Model>, R::Error>
    where
        R: ModelRegistrar,
        I: IntoIterator,
        I::Item: Borrow<TableDefinition>,
    {
        let SchemaFactoryBuilder { config, dispatch } = self;

        let (schemas, entities, order) =
            with_dispatch(dispatch.as_ref(), || populate(&config, registrar, tables))?;

        Ok(SchemaFactory {
            schemas,
            entities,
            order,
            dispatch,
        })
    }
}

type Populated<M> = (HashMap<String, SchemaMapping>, HashMap<String, M>, Vec<String>);

/// 테이블 정의를 순회하며 매핑 생성 + 등록
fn populate<R, I>(
    config: &FactoryConfig,
    mut registrar: R,
    tables: I,
) -> std::result::Result<Populated<R::Model>, R::Error>
where
    R: ModelRegistrar,
    I: IntoIterator,
    I::Item: Borrow<TableDefinition>,
{
    let dialect = config.dialect();
    let mut schemas = HashMap::new();
    let mut entities = HashMap::new();
    let mut order = Vec::new();

    for table in tables {
        let table: &TableDefinition = table.borrow();
        let name = table.fullname();
        let mapping = SchemaMapping::from_table(table, dialect);

        let entity = registrar.register(&name, &mapping)?;
        tracing::debug!(table = %name, fields = mapping.len(), "registered table model");

        if entities.insert(name.clone(), entity).is_some() {
            tracing::warn!(table = %name, "duplicate table definition replaced earlier entry");
        } else {
            order.push(name.clone());
        }
        schemas.insert(name, mapping);
    }

    tracing::info!(tables = order.len(), dialect = ?dialect, "Factory online");
    Ok((schemas, entities, order))
}

fn with_dispatch<T>(dispatch: Option<&Dispatch>, f: impl FnOnce() -> T) -> T {
    match dispatch {
        Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
        None => f(),
    }
}

/// 스키마 팩토리
///
/// 테이블 이름 → (스키마 매핑, 등록된 모델 핸들)을 인스턴스 단위로 보관합니다.
#[derive(Debug)]
pub struct SchemaFactory<M> {
    schemas: HashMap<String, SchemaMapping>,
    entities: HashMap<String, M>,
    order: Vec<String>,
    dispatch: Option<Dispatch>,
}

impl<M> SchemaFactory<M> {
    /// 기본 설정으로 팩토리 생성
    pub fn new<R, I>(registrar: R, tables: I) -> std::result::Result<Self, R::Error>
    where
        R: ModelRegistrar<Model = M>,
        I: IntoIterator,
        I::Item: Borrow<TableDefinition>,
    {
        SchemaFactoryBuilder::new().build(registrar, tables)
    }

    /// 클로저를 등록 콜백으로 사용해 팩토리 생성
    pub fn from_fn<F, E, I>(f: F, tables: I) -> std::result::Result<Self, E>
    where
        F: FnMut(&str, &SchemaMapping) -> std::result::Result<M, E>,
        I: IntoIterator,
        I::Item: Borrow<TableDefinition>,
    {
        Self::new(FnRegistrar::new(f), tables)
    }

    /// 테이블 이름으로 등록된 모델 조회
    ///
    /// 생성 시점에 없던 이름이면 `Error::EntityNotFound`를 반환합니다.
    pub fn get_entity(&self, table_name: &str) -> Result<&M> {
        self.entities
            .get(table_name)
            .ok_or_else(|| self.not_found(table_name))
    }

    /// 테이블 이름으로 스키마 매핑 조회
    pub fn get_schema(&self, table_name: &str) -> Result<&SchemaMapping> {
        self.schemas
            .get(table_name)
            .ok_or_else(|| self.not_found(table_name))
    }

    /// 등록 여부
    pub fn contains(&self, table_name: &str) -> bool {
        self.entities.contains_key(table_name)
    }

    /// 등록된 테이블 이름 (생성 순서)
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// 등록된 모델 (생성 순서)
    pub fn entities(&self) -> impl Iterator<Item = (&str, &M)> {
        self.order
            .iter()
            .filter_map(|name| self.entities.get(name).map(|m| (name.as_str(), m)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn not_found(&self, table_name: &str) -> Error {
        let err = Error::entity_not_found(table_name);
        with_dispatch(self.dispatch.as_ref(), || {
            tracing::error!(table = %table_name, "{}", err);
        });
        err
    }
}
