use super::{ColumnRef, Comma, Delimited, Equals, Ident, Params, Serializer, ToSql};

use crate::stmt::RefreshVector;
use indexmap::IndexMap;
use vectorfield_core::{
    schema::{
        app::{FieldId, FieldTy},
        db::{Column, Table, TableId},
    },
    stmt::BoundVectorQuery,
    Error, Result,
};

/// Alias of the subquery computing documents when relations are joined.
const SUBQUERY: &str = "vectorfield_refresh";

/// Column of the subquery holding the computed document. Suffixed with `_`
/// while it collides with a primary key column.
const DOCUMENT: &str = "document";

pub(super) struct PreparedRefresh<'a> {
    table: &'a Table,
    vector: &'a Column,
    document: BoundVectorQuery,
    document_alias: String,
    joins: Vec<Join<'a>>,
}

/// `LEFT JOIN "table" ON ...`
struct Join<'a> {
    table: &'a Table,
    on: Vec<Equals<'a>>,
}

impl<'a> Serializer<'a> {
    pub(super) fn prepare_refresh(&self, stmt: &RefreshVector) -> Result<PreparedRefresh<'a>> {
        let schema = self.schema;
        let field = schema.app.field(stmt.field);

        let Some(vector) = field.ty.as_vector() else {
            return Err(Error::invalid_schema(format!(
                "cannot refresh `{}`: not a vector field",
                field.full_name(&schema.app)
            )));
        };

        let Some(column) = schema.column_for(stmt.field) else {
            return Err(Error::invalid_schema(format!(
                "vector field `{}` has no column",
                field.full_name(&schema.app)
            )));
        };

        let document = vector.content.bind(schema).map_err(|err| {
            err.context(format!("refreshing `{}`", field.full_name(&schema.app)))
        })?;

        let table = self.table(column.id.table);
        let joins = self.joins_for(table, &document)?;

        Ok(PreparedRefresh {
            table,
            vector: column,
            document,
            document_alias: document_alias(table),
            joins,
        })
    }

    /// One join per distinct relation route, in the order routes are first
    /// used. Columns are qualified with table names, so every table may be
    /// joined only once.
    fn joins_for(&self, owner: &'a Table, document: &BoundVectorQuery) -> Result<Vec<Join<'a>>> {
        let mut routes: IndexMap<Vec<FieldId>, Join<'a>> = IndexMap::new();
        let mut tables: IndexMap<TableId, Vec<FieldId>> = IndexMap::new();

        for vector in document.vectors() {
            for depth in 1..=vector.route.len() {
                let route = &vector.route[..depth];

                if routes.contains_key(route) {
                    continue;
                }

                let join = self.join_for(route[depth - 1])?;

                if join.table.id == owner.id {
                    return Err(Error::unsupported_feature(format!(
                        "vector lookup `{}` joins table `{}` with itself",
                        self.route_name(route),
                        owner.name
                    )));
                }

                if let Some(other) = tables.get(&join.table.id) {
                    return Err(Error::unsupported_feature(format!(
                        "table `{}` is reached by both `{}` and `{}`",
                        join.table.name,
                        self.route_name(other),
                        self.route_name(route)
                    )));
                }

                tracing::trace!(route = %self.route_name(route), table = %join.table.name, "join");

                tables.insert(join.table.id, route.to_vec());
                routes.insert(route.to_vec(), join);
            }
        }

        Ok(routes.into_values().collect())
    }

    fn join_for(&self, relation: FieldId) -> Result<Join<'a>> {
        let schema = self.schema;
        let field = schema.app.field(relation);

        match &field.ty {
            FieldTy::BelongsTo(belongs_to) => {
                let source = self.table(schema.table_id_for(field.id.model));
                let target = self.table(schema.table_id_for(belongs_to.target));

                let on = belongs_to
                    .foreign_key
                    .fields
                    .iter()
                    .map(|fk_field| {
                        Ok(Equals(
                            self.column_ref(source, fk_field.source)?,
                            self.column_ref(target, fk_field.target)?,
                        ))
                    })
                    .collect::<Result<_>>()?;

                Ok(Join { table: target, on })
            }
            FieldTy::HasOne(has_one) => {
                let source = self.table(schema.table_id_for(field.id.model));
                let target = self.table(schema.table_id_for(has_one.target));

                let on = has_one
                    .foreign_key(&schema.app)
                    .fields
                    .iter()
                    .map(|fk_field| {
                        Ok(Equals(
                            self.column_ref(source, fk_field.target)?,
                            self.column_ref(target, fk_field.source)?,
                        ))
                    })
                    .collect::<Result<_>>()?;

                Ok(Join { table: target, on })
            }
            _ => Err(Error::invalid_schema(format!(
                "`{}` is not a relation",
                field.full_name(&schema.app)
            ))),
        }
    }

    fn column_ref(&self, table: &'a Table, field: FieldId) -> Result<ColumnRef<'a>> {
        let Some(column) = self.schema.column_for(field) else {
            return Err(Error::invalid_schema(format!(
                "key field `{}` has no column",
                self.schema.app.field(field).full_name(&self.schema.app)
            )));
        };

        Ok(ColumnRef::new(&table.name, &column.name))
    }

    /// Renders a relation route the way lookups are written.
    fn route_name(&self, route: &[FieldId]) -> String {
        route
            .iter()
            .map(|id| self.schema.app.field(*id).name.app_name.as_str())
            .collect::<Vec<_>>()
            .join("__")
    }
}

fn document_alias(table: &Table) -> String {
    let mut alias = DOCUMENT.to_string();

    while table
        .primary_key_columns()
        .any(|column| column.name == alias)
    {
        alias.push('_');
    }

    alias
}

impl ToSql for &Join<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            " LEFT JOIN ",
            Ident(&self.table.name),
            " ON ",
            Delimited(self.on.iter().copied(), " AND ")
        );
    }
}

impl ToSql for &PreparedRefresh<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table.name;
        let vector = Ident(&self.vector.name);

        if self.joins.is_empty() {
            fmt!(f, "UPDATE ", Ident(table), " SET ", vector, " = ", &self.document);
            return;
        }

        let pk = || {
            self.table
                .primary_key_columns()
                .map(|column| column.name.as_str())
        };

        let select = Comma(pk().map(|column| ColumnRef::new(table, column)));
        let matches = pk().map(|column| {
            Equals(
                ColumnRef::new(table, column),
                ColumnRef::new(SUBQUERY, column),
            )
        });

        fmt!(
            f,
            "UPDATE ",
            Ident(table),
            " SET ",
            vector,
            " = ",
            ColumnRef::new(SUBQUERY, &self.document_alias),
            " FROM (SELECT ",
            select,
            ", ",
            &self.document,
            " AS ",
            Ident(&self.document_alias),
            " FROM ",
            Ident(table),
            Delimited(&self.joins, ""),
            ") AS ",
            Ident(SUBQUERY),
            " WHERE ",
            Delimited(matches, " AND ")
        );
    }
}
