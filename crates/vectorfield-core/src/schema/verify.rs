use super::{
    app::{self, FieldTy, Model},
    Schema,
};
use crate::{Error, Result};

use std::collections::HashSet;

impl app::Schema {
    /// Checks the application schema before it is lowered to tables.
    pub(super) fn verify(&self) -> Result<()> {
        // Relations are checked against target keys, so every key first
        for model in self.models() {
            self.verify_primary_key(model)?;
        }

        for model in self.models() {
            for field in &model.fields {
                match &field.ty {
                    FieldTy::BelongsTo(belongs_to) => {
                        self.verify_foreign_key(field, belongs_to)?;
                    }
                    FieldTy::HasOne(has_one) => self.verify_has_one_pair(field, has_one)?,
                    FieldTy::Vector(vector) => verify_vector_content(model, field, vector)?,
                    FieldTy::Primitive(_) => {}
                }
            }
        }

        Ok(())
    }

    fn verify_primary_key(&self, model: &Model) -> Result<()> {
        if model.primary_key.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no primary key",
                model.name.upper_camel_case()
            )));
        }

        for field_id in &model.primary_key.fields {
            if !model.field(field_id).ty.is_primitive() {
                return Err(Error::invalid_schema(format!(
                    "primary key field `{}` is not a primitive field",
                    self.field(*field_id).full_name(self)
                )));
            }
        }

        Ok(())
    }

    fn verify_foreign_key(&self, field: &app::Field, belongs_to: &app::BelongsTo) -> Result<()> {
        let target = self.model(belongs_to.target);

        if belongs_to.foreign_key.fields.len() != target.primary_key.fields.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key of `{}` does not match the primary key of `{}`",
                field.full_name(self),
                target.name.upper_camel_case()
            )));
        }

        for fk_field in &belongs_to.foreign_key.fields {
            if fk_field.source.model != field.id.model
                || !fk_field.source(self).ty.is_primitive()
            {
                return Err(Error::invalid_schema(format!(
                    "foreign key of `{}` must name primitive fields of its own model",
                    field.full_name(self)
                )));
            }

            if !target.primary_key.fields.contains(&fk_field.target) {
                return Err(Error::invalid_schema(format!(
                    "foreign key of `{}` references `{}`, which is not part of the primary key",
                    field.full_name(self),
                    fk_field.target(self).full_name(self)
                )));
            }
        }

        Ok(())
    }

    fn verify_has_one_pair(&self, field: &app::Field, has_one: &app::HasOne) -> Result<()> {
        let paired = self
            .field(has_one.pair)
            .ty
            .as_belongs_to()
            .is_some_and(|belongs_to| belongs_to.target == field.id.model);

        if has_one.pair.model != has_one.target || !paired {
            return Err(Error::invalid_schema(format!(
                "`{}` must pair with a `BelongsTo` field on `{}` pointing back",
                field.full_name(self),
                self.model(has_one.target).name.upper_camel_case()
            )));
        }

        Ok(())
    }
}

fn verify_vector_content(model: &Model, field: &app::Field, vector: &app::FieldVector) -> Result<()> {
    if vector.content.is_empty() {
        return Err(Error::invalid_schema(format!(
            "vector field `{}::{}` has no content",
            model.name.upper_camel_case(),
            field.name.app_name
        )));
    }

    for leaf in vector.content.vectors() {
        if leaf.model() != Some(model.id) {
            return Err(Error::unattached_model(leaf.lookup.to_string()));
        }
    }

    Ok(())
}

impl Schema {
    /// Checks the lowered database schema.
    pub(super) fn verify(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.db.tables {
            if table.primary_key.columns.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has no primary key",
                    table.name
                )));
            }

            let mut columns = HashSet::new();
            for column in &table.columns {
                if !columns.insert(&column.name) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate column `{}` in table `{}`",
                        column.name, table.name
                    )));
                }
            }

            for index in &table.indices {
                debug_assert!(!index.columns.is_empty(), "index without columns");

                if !names.insert(&index.name) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate index name `{}`",
                        index.name
                    )));
                }
            }
        }

        Ok(())
    }
}
