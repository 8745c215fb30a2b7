use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    query::Ordering,
    transaction::{NewTransaction, TransactionChanges, TransactionFilter, TransactionOrder},
};

pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new: NewTransaction,
    ) -> Result<entity::fact_inventory_transaction::Model, DbErr> {
        let transaction = entity::fact_inventory_transaction::ActiveModel {
            date_id: ActiveValue::Set(new.date_id),
            material_id: ActiveValue::Set(new.material_id),
            tool_id: ActiveValue::Set(new.tool_id),
            quantity_change: ActiveValue::Set(new.quantity_change),
            cost_per_unit: ActiveValue::Set(new.cost_per_unit),
            total_cost: ActiveValue::Set(new.total_cost),
            transaction_type: ActiveValue::Set(new.transaction_type),
            notes: ActiveValue::Set(new.notes),
            ..Default::default()
        };

        transaction.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        transaction_id: i32,
    ) -> Result<Option<entity::fact_inventory_transaction::Model>, DbErr> {
        entity::prelude::FactInventoryTransaction::find_by_id(transaction_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<entity::fact_inventory_transaction::Model>, DbErr> {
        let mut query = entity::prelude::FactInventoryTransaction::find();

        if let Some(date_id) = filter.date_id {
            query = query.filter(entity::fact_inventory_transaction::Column::DateId.eq(date_id));
        }
        if let Some(gte) = filter.date_id_gte {
            query = query.filter(entity::fact_inventory_transaction::Column::DateId.gte(gte));
        }
        if let Some(lte) = filter.date_id_lte {
            query = query.filter(entity::fact_inventory_transaction::Column::DateId.lte(lte));
        }
        if let Some(material_id) = filter.material_id {
            query =
                query.filter(entity::fact_inventory_transaction::Column::MaterialId.eq(material_id));
        }
        if let Some(tool_id) = filter.tool_id {
            query = query.filter(entity::fact_inventory_transaction::Column::ToolId.eq(tool_id));
        }
        if let Some(transaction_type) = filter.transaction_type.as_deref() {
            query = query.filter(
                entity::fact_inventory_transaction::Column::TransactionType.eq(transaction_type),
            );
        }

        if let Some(Ordering { field, descending }) = filter.ordering {
            let column = match field {
                TransactionOrder::Id => entity::fact_inventory_transaction::Column::Id,
                TransactionOrder::QuantityChange => {
                    entity::fact_inventory_transaction::Column::QuantityChange
                }
                TransactionOrder::TotalCost => entity::fact_inventory_transaction::Column::TotalCost,
                TransactionOrder::TransactionType => {
                    entity::fact_inventory_transaction::Column::TransactionType
                }
            };
            query = if descending {
                query.order_by_desc(column)
            } else {
                query.order_by_asc(column)
            };
        }

        query
            .order_by_asc(entity::fact_inventory_transaction::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        transaction_id: i32,
        changes: TransactionChanges,
    ) -> Result<entity::fact_inventory_transaction::Model, DbErr> {
        let mut transaction = entity::fact_inventory_transaction::ActiveModel {
            id: ActiveValue::Unchanged(transaction_id),
            ..Default::default()
        };

        if let Some(date_id) = changes.date_id {
            transaction.date_id = ActiveValue::Set(date_id);
        }
        if let Some(material_id) = changes.material_id {
            transaction.material_id = ActiveValue::Set(material_id);
        }
        if let Some(tool_id) = changes.tool_id {
            transaction.tool_id = ActiveValue::Set(tool_id);
        }
        if let Some(quantity_change) = changes.quantity_change {
            transaction.quantity_change = ActiveValue::Set(quantity_change);
        }
        if let Some(cost_per_unit) = changes.cost_per_unit {
            transaction.cost_per_unit = ActiveValue::Set(cost_per_unit);
        }
        if let Some(total_cost) = changes.total_cost {
            transaction.total_cost = ActiveValue::Set(total_cost);
        }
        if let Some(transaction_type) = changes.transaction_type {
            transaction.transaction_type = ActiveValue::Set(transaction_type);
        }
        if let Some(notes) = changes.notes {
            transaction.notes = ActiveValue::Set(notes);
        }

        transaction.update(self.db).await
    }

    pub async fn delete(&self, transaction_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FactInventoryTransaction::delete_by_id(transaction_id)
            .exec(self.db)
            .await
    }

    /// Current stock for one material: the store-side sum of signed
    /// quantity changes. Materials with no transactions yield zero.
    pub async fn stock_for_material(&self, material_id: i32) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::FactInventoryTransaction::find()
            .select_only()
            .column_as(
                entity::fact_inventory_transaction::Column::QuantityChange.sum(),
                "total_quantity",
            )
            .filter(entity::fact_inventory_transaction::Column::MaterialId.eq(material_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Per-material stock figures in one grouped aggregate, for listing
    /// endpoints. Materials without transactions are absent from the map.
    pub async fn stock_totals(&self) -> Result<Vec<(i32, f64)>, DbErr> {
        let rows: Vec<(Option<i32>, Option<f64>)> =
            entity::prelude::FactInventoryTransaction::find()
                .select_only()
                .column(entity::fact_inventory_transaction::Column::MaterialId)
                .column_as(
                    entity::fact_inventory_transaction::Column::QuantityChange.sum(),
                    "total_quantity",
                )
                .filter(entity::fact_inventory_transaction::Column::MaterialId.is_not_null())
                .group_by(entity::fact_inventory_transaction::Column::MaterialId)
                .into_tuple()
                .all(self.db)
                .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(material_id, total)| Some((material_id?, total.unwrap_or(0.0))))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use crate::server::{
        data::{
            date::DateRepository, material::MaterialRepository,
            transaction::TransactionRepository,
        },
        model::transaction::TransactionFilter,
        util::test::{
            fixture::{insert_date, insert_material, insert_stock_transaction},
            setup::test_setup_with_tables,
        },
    };

    /// Expect zero stock for a material with no transactions
    #[tokio::test]
    async fn stock_is_zero_without_transactions() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let stock = transaction_repo.stock_for_material(material.id).await?;

        assert_eq!(stock, 0.0);

        Ok(())
    }

    /// Expect stock to be the signed sum of all quantity changes
    #[tokio::test]
    async fn stock_sums_signed_quantity_changes() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        for quantity in [10.0, -3.0, 2.0] {
            insert_stock_transaction(&test.state.db, date.id, material.id, quantity).await?;
        }

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let stock = transaction_repo.stock_for_material(material.id).await?;

        assert_eq!(stock, 9.0);

        Ok(())
    }

    /// Expect grouped totals to cover every material with transactions
    #[tokio::test]
    async fn stock_totals_group_by_material() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let oak = insert_material(&test.state.db, "Oak board", None).await?;
        let pine = insert_material(&test.state.db, "Pine plank", None).await?;
        insert_material(&test.state.db, "Steel rod", None).await?;

        insert_stock_transaction(&test.state.db, date.id, oak.id, 5.0).await?;
        insert_stock_transaction(&test.state.db, date.id, oak.id, -1.0).await?;
        insert_stock_transaction(&test.state.db, date.id, pine.id, 7.5).await?;

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let mut totals = transaction_repo.stock_totals().await?;
        totals.sort_by_key(|(material_id, _)| *material_id);

        assert_eq!(totals, vec![(oak.id, 4.0), (pine.id, 7.5)]);

        Ok(())
    }

    /// Expect the date id range filter to bound inclusively on both ends
    #[tokio::test]
    async fn list_transactions_date_range() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let material = insert_material(&test.state.db, "Oak board", None).await?;
        for day in 1..=4 {
            let date = insert_date(
                &test.state.db,
                day,
                NaiveDate::from_ymd_opt(2026, 3, day as u32).unwrap(),
            )
            .await?;
            insert_stock_transaction(&test.state.db, date.id, material.id, 1.0).await?;
        }

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let filter = TransactionFilter {
            date_id_gte: Some(2),
            date_id_lte: Some(3),
            ..Default::default()
        };
        let transactions = transaction_repo.list(&filter).await?;

        assert_eq!(
            transactions.iter().map(|t| t.date_id).collect::<Vec<_>>(),
            vec![2, 3]
        );

        Ok(())
    }

    /// Expect deleting a material to null the reference on its transactions
    #[tokio::test]
    async fn delete_material_nulls_transaction_reference() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;
        let transaction =
            insert_stock_transaction(&test.state.db, date.id, material.id, 5.0).await?;

        let material_repo = MaterialRepository::new(&test.state.db);
        material_repo.delete(material.id).await?;

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let transaction = transaction_repo.get_by_id(transaction.id).await?.unwrap();

        assert_eq!(transaction.material_id, None);

        Ok(())
    }

    /// Expect deleting a date to cascade to its transactions
    #[tokio::test]
    async fn delete_date_cascades_transactions() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;
        let transaction =
            insert_stock_transaction(&test.state.db, date.id, material.id, 5.0).await?;

        let date_repo = DateRepository::new(&test.state.db);
        date_repo.delete(date.id).await?;

        let transaction_repo = TransactionRepository::new(&test.state.db);
        let found = transaction_repo.get_by_id(transaction.id).await?;

        assert!(found.is_none());

        Ok(())
    }
}
