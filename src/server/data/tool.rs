use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::contains_insensitive,
    model::{
        query::Ordering,
        tool::{NewTool, ToolChanges, ToolFilter, ToolOrder},
    },
};

pub struct ToolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewTool) -> Result<entity::dim_tool::Model, DbErr> {
        let tool = entity::dim_tool::ActiveModel {
            tool_name: ActiveValue::Set(new.tool_name),
            tool_type: ActiveValue::Set(new.tool_type),
            brand: ActiveValue::Set(new.brand),
            model: ActiveValue::Set(new.model),
            current_location: ActiveValue::Set(new.current_location),
            purchase_date: ActiveValue::Set(new.purchase_date),
            last_maintenance_date: ActiveValue::Set(new.last_maintenance_date),
            is_calibrated: ActiveValue::Set(new.is_calibrated),
            discipline_id: ActiveValue::Set(new.discipline_id),
            ..Default::default()
        };

        tool.insert(self.db).await
    }

    pub async fn get_by_id(&self, tool_id: i32) -> Result<Option<entity::dim_tool::Model>, DbErr> {
        entity::prelude::DimTool::find_by_id(tool_id).one(self.db).await
    }

    pub async fn get_by_ids(&self, tool_ids: &[i32]) -> Result<Vec<entity::dim_tool::Model>, DbErr> {
        entity::prelude::DimTool::find()
            .filter(entity::dim_tool::Column::Id.is_in(tool_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn list(&self, filter: &ToolFilter) -> Result<Vec<entity::dim_tool::Model>, DbErr> {
        let mut query = entity::prelude::DimTool::find();

        if let Some(discipline_id) = filter.discipline_id {
            query = query.filter(entity::dim_tool::Column::DisciplineId.eq(discipline_id));
        }
        if let Some(tool_type) = filter.tool_type.as_deref() {
            query = query.filter(entity::dim_tool::Column::ToolType.eq(tool_type));
        }
        if let Some(brand) = filter.brand.as_deref() {
            query = query.filter(entity::dim_tool::Column::Brand.eq(brand));
        }

        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(contains_insensitive(entity::dim_tool::Column::ToolName, term))
                    .add(contains_insensitive(entity::dim_tool::Column::ToolType, term))
                    .add(contains_insensitive(entity::dim_tool::Column::Brand, term))
                    .add(contains_insensitive(entity::dim_tool::Column::Model, term)),
            );
        }

        if let Some(Ordering { field, descending }) = filter.ordering {
            let column = match field {
                ToolOrder::Id => entity::dim_tool::Column::Id,
                ToolOrder::Name => entity::dim_tool::Column::ToolName,
                ToolOrder::Type => entity::dim_tool::Column::ToolType,
                ToolOrder::Brand => entity::dim_tool::Column::Brand,
            };
            query = if descending {
                query.order_by_desc(column)
            } else {
                query.order_by_asc(column)
            };
        }

        query
            .order_by_asc(entity::dim_tool::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        tool_id: i32,
        changes: ToolChanges,
    ) -> Result<entity::dim_tool::Model, DbErr> {
        let mut tool = entity::dim_tool::ActiveModel {
            id: ActiveValue::Unchanged(tool_id),
            ..Default::default()
        };

        if let Some(name) = changes.tool_name {
            tool.tool_name = ActiveValue::Set(name);
        }
        if let Some(tool_type) = changes.tool_type {
            tool.tool_type = ActiveValue::Set(tool_type);
        }
        if let Some(brand) = changes.brand {
            tool.brand = ActiveValue::Set(brand);
        }
        if let Some(model) = changes.model {
            tool.model = ActiveValue::Set(model);
        }
        if let Some(current_location) = changes.current_location {
            tool.current_location = ActiveValue::Set(current_location);
        }
        if let Some(purchase_date) = changes.purchase_date {
            tool.purchase_date = ActiveValue::Set(purchase_date);
        }
        if let Some(last_maintenance_date) = changes.last_maintenance_date {
            tool.last_maintenance_date = ActiveValue::Set(last_maintenance_date);
        }
        if let Some(is_calibrated) = changes.is_calibrated {
            tool.is_calibrated = ActiveValue::Set(is_calibrated);
        }
        if let Some(discipline_id) = changes.discipline_id {
            tool.discipline_id = ActiveValue::Set(discipline_id);
        }

        tool.update(self.db).await
    }

    /// Deletes a tool; the store nulls `tool_id` on any transactions
    /// referencing it.
    pub async fn delete(&self, tool_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DimTool::delete_by_id(tool_id).exec(self.db).await
    }
}
