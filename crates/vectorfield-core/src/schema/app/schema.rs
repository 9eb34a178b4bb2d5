use super::{Field, FieldId, FieldTy, Model, ModelId};

use crate::{stmt, Error, Result};
use indexmap::IndexMap;

/// Result of resolving a lookup path through the application schema.
#[derive(Debug)]
pub struct Resolved<'a> {
    /// The terminal field storing the value
    pub field: &'a Field,

    /// Relation fields traversed to reach `field`, in order
    pub route: Vec<FieldId>,
}

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Builds a schema from models whose ids match their position.
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Self> {
        let mut ret = Schema::default();

        for (index, model) in models.into_iter().enumerate() {
            if model.id != ModelId(index) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` has id {:?}, expected {:?}",
                    model.name.upper_camel_case(),
                    model.id,
                    ModelId(index)
                )));
            }

            ret.models.insert(model.id, model);
        }

        Ok(ret)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Find a model by its declared name
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = super::Name::new(name);
        self.models().find(|model| model.name == name)
    }

    /// Resolve a lookup path, starting at `root`, to the field storing the
    /// value.
    ///
    /// Each segment names a field on the current model. Relation fields move
    /// the walk to their target model; any other field must be the last
    /// segment. A path ending on a `BelongsTo` with a single-column foreign
    /// key resolves to that foreign key field.
    pub fn resolve_lookup(&self, root: ModelId, lookup: &stmt::Path) -> Result<Resolved<'_>> {
        if !lookup.is_well_formed() {
            return Err(Error::invalid_lookup(format!(
                "`{lookup}` has an empty or ambiguous segment"
            )));
        }

        let mut model = self.model(root);
        let mut route = vec![];
        let mut segments = lookup.segments().iter().peekable();

        while let Some(segment) = segments.next() {
            let field = model.field_by_name(segment).ok_or_else(|| {
                Error::unknown_field(model.name.upper_camel_case(), segment.as_str())
            })?;

            let last = segments.peek().is_none();

            match &field.ty {
                FieldTy::Primitive(_) if last => return Ok(Resolved { field, route }),
                FieldTy::BelongsTo(belongs_to) if last => {
                    let Some(fk_field) = belongs_to.foreign_key.single_source(self) else {
                        return Err(Error::invalid_lookup(format!(
                            "`{lookup}` ends at relation `{}` with a composite foreign key",
                            field.full_name(self)
                        )));
                    };

                    return Ok(Resolved {
                        field: fk_field,
                        route,
                    });
                }
                FieldTy::HasOne(_) if last => {
                    return Err(Error::invalid_lookup(format!(
                        "`{lookup}` ends at relation `{}`, which has no column on `{}`",
                        field.full_name(self),
                        model.name.upper_camel_case()
                    )));
                }
                FieldTy::Vector(_) if last => {
                    return Err(Error::invalid_lookup(format!(
                        "`{lookup}` ends at vector field `{}`",
                        field.full_name(self)
                    )));
                }
                FieldTy::BelongsTo(belongs_to) => {
                    route.push(field.id);
                    model = self.model(belongs_to.target);
                }
                FieldTy::HasOne(has_one) => {
                    route.push(field.id);
                    model = self.model(has_one.target);
                }
                FieldTy::Primitive(_) | FieldTy::Vector(_) => {
                    return Err(Error::non_traversable_field(
                        model.name.upper_camel_case(),
                        field.name.app_name.as_str(),
                        lookup.to_string(),
                    ));
                }
            }
        }

        // `is_well_formed` guarantees at least one segment, and the last one
        // always returns.
        Err(Error::invalid_lookup(format!("`{lookup}` is empty")))
    }
}
