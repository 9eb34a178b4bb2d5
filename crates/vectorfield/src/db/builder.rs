use super::Db;
use crate::schema;

use indexmap::IndexMap;
use url::Url;
use vectorfield_core::{
    schema::{self as core_schema, app, Name},
    stmt::TextSearchConfig,
    Error, Result,
};
use vectorfield_sql::Flavor;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Models as declared (references by name)
    models: Vec<schema::Model>,

    /// Schema builder
    core: core_schema::Builder,

    /// Configuration for vector fields that do not set one
    default_config: TextSearchConfig,

    /// SQL dialect of the generated statements
    flavor: Flavor,
}

impl Builder {
    pub fn register(&mut self, model: schema::Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Set the text-search configuration used by vector fields without one
    pub fn default_config(&mut self, config: impl Into<TextSearchConfig>) -> &mut Self {
        self.default_config = config.into();
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Picks the flavor from a database URL's scheme.
    pub fn from_url(&mut self, url: &str) -> Result<&mut Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("`{url}`: {err}")))?;

        self.flavor = match url.scheme() {
            "postgresql" | "postgres" => Flavor::Postgresql,
            "sqlite" => Flavor::Sqlite,
            "mysql" => Flavor::Mysql,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database `{scheme}`; url={url}"
                )))
            }
        };

        Ok(self)
    }

    /// Resolves names to ids and attaches vector content to its model.
    pub fn build_app_schema(&self) -> Result<app::Schema> {
        let mut model_ids = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            let name = model.name.upper_camel_case();
            if model_ids.insert(name.clone(), app::ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{name}` is registered more than once"
                )));
            }
        }

        let models = self
            .models
            .iter()
            .enumerate()
            .map(|(index, model)| {
                ResolveModel {
                    builder: self,
                    model_ids: &model_ids,
                    model,
                    id: app::ModelId(index),
                }
                .resolve()
            })
            .collect::<Result<Vec<_>>>()?;

        app::Schema::from_models(models)
    }

    pub fn build(&self) -> Result<Db> {
        let schema = self.core.build(self.build_app_schema()?)?;

        tracing::debug!(
            flavor = %self.flavor,
            models = self.models.len(),
            "built vectorfield schema"
        );

        Ok(Db {
            schema: Arc::new(schema),
            flavor: self.flavor,
        })
    }
}

struct ResolveModel<'a> {
    builder: &'a Builder,
    model_ids: &'a IndexMap<String, app::ModelId>,
    model: &'a schema::Model,
    id: app::ModelId,
}

impl ResolveModel<'_> {
    fn resolve(&self) -> Result<app::Model> {
        let fields = self
            .model
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| self.resolve_field(index, field))
            .collect::<Result<Vec<_>>>()?;

        let primary_key = app::PrimaryKey {
            fields: self
                .model
                .primary_key
                .iter()
                .map(|name| self.local_field(name))
                .collect::<Result<_>>()?,
        };

        Ok(app::Model {
            id: self.id,
            name: self.model.name.clone(),
            fields,
            primary_key,
            table_name: self.model.table_name.clone(),
        })
    }

    fn resolve_field(&self, index: usize, field: &schema::Field) -> Result<app::Field> {
        let ty = match &field.ty {
            schema::FieldTy::Primitive(primitive) => app::FieldTy::Primitive(primitive.clone()),
            schema::FieldTy::BelongsTo(belongs_to) => {
                let (target, target_model) = self.model(&belongs_to.target)?;

                let fields = belongs_to
                    .foreign_key
                    .iter()
                    .map(|fk_field| {
                        Ok(app::ForeignKeyField {
                            source: self.local_field(&fk_field.source)?,
                            target: field_of(target, target_model, &fk_field.target)?,
                        })
                    })
                    .collect::<Result<_>>()?;

                app::FieldTy::BelongsTo(app::BelongsTo {
                    target,
                    foreign_key: app::ForeignKey { fields },
                })
            }
            schema::FieldTy::HasOne(has_one) => {
                let (target, target_model) = self.model(&has_one.target)?;

                app::FieldTy::HasOne(app::HasOne {
                    target,
                    pair: field_of(target, target_model, &has_one.pair)?,
                })
            }
            schema::FieldTy::Vector(vector) => app::FieldTy::Vector(
                vector
                    .contribute(self.id, &self.builder.default_config)
                    .map_err(|err| {
                        err.context(format!(
                            "contributing `{}::{}`",
                            self.model.name.upper_camel_case(),
                            field.name
                        ))
                    })?,
            ),
        };

        Ok(app::Field {
            id: self.id.field(index),
            name: app::FieldName {
                app_name: field.name.clone(),
                storage_name: field.storage_name.clone(),
            },
            ty,
            nullable: field.nullable,
        })
    }

    fn model(&self, name: &str) -> Result<(app::ModelId, &schema::Model)> {
        let name = Name::new(name).upper_camel_case();

        let Some(id) = self.model_ids.get(&name) else {
            return Err(Error::invalid_schema(format!(
                "`{}` references unregistered model `{name}`",
                self.model.name.upper_camel_case()
            )));
        };

        Ok((*id, &self.builder.models[id.0]))
    }

    fn local_field(&self, name: &str) -> Result<app::FieldId> {
        field_of(self.id, self.model, name)
    }
}

fn field_of(id: app::ModelId, model: &schema::Model, name: &str) -> Result<app::FieldId> {
    model
        .field_index(name)
        .map(|index| id.field(index))
        .ok_or_else(|| Error::unknown_field(model.name.upper_camel_case(), name))
}
