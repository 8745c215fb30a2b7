use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::contains_insensitive,
    model::{
        discipline::{DisciplineChanges, DisciplineFilter, DisciplineOrder, NewDiscipline},
        query::Ordering,
    },
};

pub struct DisciplineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DisciplineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new: NewDiscipline,
    ) -> Result<entity::dim_discipline::Model, DbErr> {
        let discipline = entity::dim_discipline::ActiveModel {
            discipline_name: ActiveValue::Set(new.discipline_name),
            discipline_description: ActiveValue::Set(new.discipline_description),
            ..Default::default()
        };

        discipline.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        discipline_id: i32,
    ) -> Result<Option<entity::dim_discipline::Model>, DbErr> {
        entity::prelude::DimDiscipline::find_by_id(discipline_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        discipline_ids: &[i32],
    ) -> Result<Vec<entity::dim_discipline::Model>, DbErr> {
        entity::prelude::DimDiscipline::find()
            .filter(entity::dim_discipline::Column::Id.is_in(discipline_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        discipline_name: &str,
    ) -> Result<Option<entity::dim_discipline::Model>, DbErr> {
        entity::prelude::DimDiscipline::find()
            .filter(entity::dim_discipline::Column::DisciplineName.eq(discipline_name))
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        filter: &DisciplineFilter,
    ) -> Result<Vec<entity::dim_discipline::Model>, DbErr> {
        let mut query = entity::prelude::DimDiscipline::find();

        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(contains_insensitive(
                        entity::dim_discipline::Column::DisciplineName,
                        term,
                    ))
                    .add(contains_insensitive(
                        entity::dim_discipline::Column::DisciplineDescription,
                        term,
                    )),
            );
        }

        if let Some(Ordering { field, descending }) = filter.ordering {
            let column = match field {
                DisciplineOrder::Id => entity::dim_discipline::Column::Id,
                DisciplineOrder::Name => entity::dim_discipline::Column::DisciplineName,
            };
            query = if descending {
                query.order_by_desc(column)
            } else {
                query.order_by_asc(column)
            };
        }

        query
            .order_by_asc(entity::dim_discipline::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        discipline_id: i32,
        changes: DisciplineChanges,
    ) -> Result<entity::dim_discipline::Model, DbErr> {
        let mut discipline = entity::dim_discipline::ActiveModel {
            id: ActiveValue::Unchanged(discipline_id),
            ..Default::default()
        };

        if let Some(name) = changes.discipline_name {
            discipline.discipline_name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.discipline_description {
            discipline.discipline_description = ActiveValue::Set(description);
        }

        discipline.update(self.db).await
    }

    /// Deletes a discipline; the store nulls `discipline_id` on any
    /// materials and tools referencing it.
    pub async fn delete(&self, discipline_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DimDiscipline::delete_by_id(discipline_id)
            .exec(self.db)
            .await
    }
}
