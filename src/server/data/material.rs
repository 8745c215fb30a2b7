use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::contains_insensitive,
    model::{
        material::{MaterialChanges, MaterialFilter, MaterialOrder, NewMaterial},
        query::Ordering,
    },
};

pub struct MaterialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewMaterial) -> Result<entity::dim_material::Model, DbErr> {
        let material = entity::dim_material::ActiveModel {
            material_name: ActiveValue::Set(new.material_name),
            material_type: ActiveValue::Set(new.material_type),
            unit_of_measure: ActiveValue::Set(new.unit_of_measure),
            brand: ActiveValue::Set(new.brand),
            color: ActiveValue::Set(new.color),
            size: ActiveValue::Set(new.size),
            discipline_id: ActiveValue::Set(new.discipline_id),
            image_url: ActiveValue::Set(new.image_url),
            ..Default::default()
        };

        material.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        material_id: i32,
    ) -> Result<Option<entity::dim_material::Model>, DbErr> {
        entity::prelude::DimMaterial::find_by_id(material_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        material_ids: &[i32],
    ) -> Result<Vec<entity::dim_material::Model>, DbErr> {
        entity::prelude::DimMaterial::find()
            .filter(entity::dim_material::Column::Id.is_in(material_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        material_name: &str,
    ) -> Result<Option<entity::dim_material::Model>, DbErr> {
        entity::prelude::DimMaterial::find()
            .filter(entity::dim_material::Column::MaterialName.eq(material_name))
            .one(self.db)
            .await
    }

    /// Lists materials with exact filters and search applied store-side.
    /// `current_stock` ordering is not handled here; the service sorts on
    /// the derived aggregate after attaching stock figures.
    pub async fn list(
        &self,
        filter: &MaterialFilter,
    ) -> Result<Vec<entity::dim_material::Model>, DbErr> {
        let mut query = entity::prelude::DimMaterial::find();

        if let Some(discipline_id) = filter.discipline_id {
            query = query.filter(entity::dim_material::Column::DisciplineId.eq(discipline_id));
        }
        if let Some(material_type) = filter.material_type.as_deref() {
            query = query.filter(entity::dim_material::Column::MaterialType.eq(material_type));
        }
        if let Some(brand) = filter.brand.as_deref() {
            query = query.filter(entity::dim_material::Column::Brand.eq(brand));
        }

        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(contains_insensitive(
                        entity::dim_material::Column::MaterialName,
                        term,
                    ))
                    .add(contains_insensitive(
                        entity::dim_material::Column::MaterialType,
                        term,
                    ))
                    .add(contains_insensitive(entity::dim_material::Column::Brand, term)),
            );
        }

        if let Some(Ordering { field, descending }) = filter.ordering {
            let column = match field {
                MaterialOrder::Id => Some(entity::dim_material::Column::Id),
                MaterialOrder::Name => Some(entity::dim_material::Column::MaterialName),
                MaterialOrder::Type => Some(entity::dim_material::Column::MaterialType),
                MaterialOrder::Brand => Some(entity::dim_material::Column::Brand),
                MaterialOrder::CurrentStock => None,
            };
            if let Some(column) = column {
                query = if descending {
                    query.order_by_desc(column)
                } else {
                    query.order_by_asc(column)
                };
            }
        }

        query
            .order_by_asc(entity::dim_material::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        material_id: i32,
        changes: MaterialChanges,
    ) -> Result<entity::dim_material::Model, DbErr> {
        let mut material = entity::dim_material::ActiveModel {
            id: ActiveValue::Unchanged(material_id),
            ..Default::default()
        };

        if let Some(name) = changes.material_name {
            material.material_name = ActiveValue::Set(name);
        }
        if let Some(material_type) = changes.material_type {
            material.material_type = ActiveValue::Set(material_type);
        }
        if let Some(unit_of_measure) = changes.unit_of_measure {
            material.unit_of_measure = ActiveValue::Set(unit_of_measure);
        }
        if let Some(brand) = changes.brand {
            material.brand = ActiveValue::Set(brand);
        }
        if let Some(color) = changes.color {
            material.color = ActiveValue::Set(color);
        }
        if let Some(size) = changes.size {
            material.size = ActiveValue::Set(size);
        }
        if let Some(discipline_id) = changes.discipline_id {
            material.discipline_id = ActiveValue::Set(discipline_id);
        }
        if let Some(image_url) = changes.image_url {
            material.image_url = ActiveValue::Set(image_url);
        }

        material.update(self.db).await
    }

    /// Deletes a material; the store nulls `material_id` on any
    /// transactions referencing it.
    pub async fn delete(&self, material_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DimMaterial::delete_by_id(material_id)
            .exec(self.db)
            .await
    }
}
