use super::BuildSchema;
use crate::{
    schema::{
        app::{self, Model},
        db::{self, ColumnId, IndexId, IndexMethod, Table, TableId},
        mapping::{self, Mapping},
        Name,
    },
    Result,
};

struct BuildTableFromModel<'a> {
    app: &'a app::Schema,

    /// The table being built
    table: &'a mut Table,

    /// Schema mapping
    mapping: &'a mut Mapping,
}

impl BuildSchema<'_> {
    pub(super) fn build_table_stub_for_model(&mut self, model: &Model) -> Result<TableId> {
        let name = match &model.table_name {
            Some(table_name) => self.prefix_table_name(table_name),
            None => self.table_name_from_model(&model.name),
        };

        let id = self.register_table(&name)?;
        self.tables.push(Table::new(id, name));
        Ok(id)
    }

    pub(super) fn build_tables_from_models(&mut self, app: &app::Schema) {
        for table in &mut self.tables {
            let Some(model) = app
                .models()
                .find(|model| self.mapping.model(model.id).table == table.id)
            else {
                continue;
            };

            BuildTableFromModel {
                app,
                table,
                mapping: &mut self.mapping,
            }
            .build(model);
        }
    }

    fn table_name_from_model(&self, model_name: &Name) -> String {
        self.prefix_table_name(&model_name.snake_case())
    }

    fn prefix_table_name(&self, name: &str) -> String {
        if let Some(prefix) = &self.builder.table_name_prefix {
            format!("{prefix}{name}")
        } else {
            name.to_string()
        }
    }
}

impl BuildTableFromModel<'_> {
    fn build(&mut self, model: &Model) {
        for field in &model.fields {
            match &field.ty {
                app::FieldTy::Primitive(primitive) => {
                    let storage_ty =
                        db::Type::from_app(&primitive.ty, primitive.storage_ty.as_ref());
                    self.create_column(field, storage_ty, field.nullable, None, false);
                }
                app::FieldTy::Vector(vector) => {
                    let column = self.create_column(
                        field,
                        vector.storage_ty(),
                        true,
                        Some(vector.default_value()),
                        true,
                    );
                    self.create_index(vec![column], IndexMethod::Gin, false);
                }
                // Relations have no columns of their own. `BelongsTo` is
                // stored in its foreign key fields.
                app::FieldTy::BelongsTo(_) | app::FieldTy::HasOne(_) => {}
            }
        }

        for pk_field in &model.primary_key.fields {
            let column = self.column_for(*pk_field);
            self.table.primary_key.columns.push(column);
        }

        self.index_foreign_keys(model);
        self.update_index_names();
    }

    fn create_column(
        &mut self,
        field: &app::Field,
        storage_ty: db::Type,
        nullable: bool,
        default: Option<crate::stmt::Value>,
        computed: bool,
    ) -> ColumnId {
        let column = db::Column {
            id: ColumnId {
                table: self.table.id,
                index: self.table.columns.len(),
            },
            name: field.name.storage_name().to_owned(),
            storage_ty,
            nullable,
            default,
            computed,
        };

        let id = column.id;
        self.mapping.model_mut(field.id.model).fields[field.id.index] =
            Some(mapping::Field { column: id });
        self.table.columns.push(column);
        id
    }

    fn create_index(&mut self, columns: Vec<ColumnId>, method: IndexMethod, unique: bool) {
        self.table.indices.push(db::Index {
            id: IndexId {
                table: self.table.id,
                index: self.table.indices.len(),
            },
            name: String::new(),
            on: self.table.id,
            columns,
            unique,
            method,
        });
    }

    /// Foreign keys are looked up on every join, so each `BelongsTo` gets an
    /// index on its key columns. The index is unique when a `HasOne` pairs
    /// with the relation: at most one row may point at each owner.
    fn index_foreign_keys(&mut self, model: &Model) {
        for field in &model.fields {
            let Some(belongs_to) = field.ty.as_belongs_to() else {
                continue;
            };

            let columns = belongs_to
                .foreign_key
                .fields
                .iter()
                .map(|fk_field| self.column_for(fk_field.source))
                .collect();

            let unique = self.is_has_one_pair(field.id);
            self.create_index(columns, IndexMethod::BTree, unique);
        }
    }

    fn is_has_one_pair(&self, belongs_to: app::FieldId) -> bool {
        self.app.models().flat_map(|model| &model.fields).any(|field| {
            matches!(&field.ty, app::FieldTy::HasOne(has_one) if has_one.pair == belongs_to)
        })
    }

    // Verified before building: keys only name primitive fields.
    fn column_for(&self, field: app::FieldId) -> ColumnId {
        self.mapping.model(field.model).fields[field.index]
            .expect("key field has no column")
            .column
    }

    fn update_index_names(&mut self) {
        for index in &mut self.table.indices {
            index.name = format!("index_{}_by", self.table.name);

            for (i, column) in index.columns.iter().enumerate() {
                let column = &self.table.columns[column.index];

                if i > 0 {
                    index.name.push_str("_and");
                }

                index.name.push('_');
                index.name.push_str(&column.name);
            }
        }
    }
}
