use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        date::DateRefDto,
        discipline::DisciplineDto,
        material::MaterialDto,
        tool::ToolDto,
        transaction::{
            CreateTransactionDto, TransactionDto, TransactionListParams, UpdateTransactionDto,
        },
    },
    server::{
        data::{
            date::DateRepository, discipline::DisciplineRepository, material::MaterialRepository,
            tool::ToolRepository, transaction::TransactionRepository,
        },
        error::{validation::ValidationError, Error},
        model::{
            query::{parse_id_filter, parse_ordering},
            transaction::{
                NewTransaction, TransactionChanges, TransactionFilter, TransactionOrder,
            },
        },
        service::check_required,
    },
};

/// Derived cost of a transaction line. Zero when no per-unit cost was
/// recorded; clients never supply this value.
fn total_cost(quantity_change: f64, cost_per_unit: Option<f64>) -> f64 {
    cost_per_unit.map_or(0.0, |cost| quantity_change * cost)
}

/// Exactly one of material / tool must be referenced by a transaction.
fn check_material_xor_tool(
    material_id: Option<i32>,
    tool_id: Option<i32>,
) -> Result<(), ValidationError> {
    if material_id.is_some() == tool_id.is_some() {
        return Err(ValidationError::MaterialXorTool);
    }

    Ok(())
}

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateTransactionDto) -> Result<TransactionDto, Error> {
        check_required("transaction_type", &dto.transaction_type, 50)?;
        check_material_xor_tool(dto.material_id, dto.tool_id)?;

        if DateRepository::new(self.db)
            .get_by_id(dto.date_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference { field: "date_id" }.into());
        }
        if let Some(material_id) = dto.material_id {
            if MaterialRepository::new(self.db)
                .get_by_id(material_id)
                .await?
                .is_none()
            {
                return Err(ValidationError::UnknownReference {
                    field: "material_id",
                }
                .into());
            }
        }
        if let Some(tool_id) = dto.tool_id {
            if ToolRepository::new(self.db)
                .get_by_id(tool_id)
                .await?
                .is_none()
            {
                return Err(ValidationError::UnknownReference { field: "tool_id" }.into());
            }
        }

        let transaction = TransactionRepository::new(self.db)
            .create(NewTransaction {
                date_id: dto.date_id,
                material_id: dto.material_id,
                tool_id: dto.tool_id,
                quantity_change: dto.quantity_change,
                cost_per_unit: dto.cost_per_unit,
                total_cost: total_cost(dto.quantity_change, dto.cost_per_unit),
                transaction_type: dto.transaction_type,
                notes: dto.notes,
            })
            .await?;

        self.assemble(transaction).await
    }

    pub async fn get(&self, transaction_id: i32) -> Result<TransactionDto, Error> {
        let transaction = TransactionRepository::new(self.db)
            .get_by_id(transaction_id)
            .await?
            .ok_or(Error::NotFound("transaction"))?;

        self.assemble(transaction).await
    }

    pub async fn list(
        &self,
        params: &TransactionListParams,
    ) -> Result<Vec<TransactionDto>, Error> {
        let filter = TransactionFilter {
            date_id: parse_id_filter(params.date__date_id.as_deref()),
            date_id_gte: parse_id_filter(params.date__date_id__gte.as_deref()),
            date_id_lte: parse_id_filter(params.date__date_id__lte.as_deref()),
            material_id: parse_id_filter(params.material__material_id.as_deref()),
            tool_id: parse_id_filter(params.tool__tool_id.as_deref()),
            transaction_type: params.transaction_type.clone(),
            ordering: params
                .ordering
                .as_deref()
                .and_then(|raw| parse_ordering(raw, TransactionOrder::from_name)),
        };

        let transactions = TransactionRepository::new(self.db).list(&filter).await?;

        let date_ids: Vec<i32> = transactions.iter().map(|t| t.date_id).collect();
        let material_ids: Vec<i32> = transactions.iter().filter_map(|t| t.material_id).collect();
        let tool_ids: Vec<i32> = transactions.iter().filter_map(|t| t.tool_id).collect();

        let dates: HashMap<i32, DateRefDto> = DateRepository::new(self.db)
            .get_by_ids(&date_ids)
            .await?
            .iter()
            .map(|d| (d.id, DateRefDto::from_model(d)))
            .collect();

        let materials = MaterialRepository::new(self.db).get_by_ids(&material_ids).await?;
        let tools = ToolRepository::new(self.db).get_by_ids(&tool_ids).await?;

        let discipline_ids: Vec<i32> = materials
            .iter()
            .filter_map(|m| m.discipline_id)
            .chain(tools.iter().filter_map(|t| t.discipline_id))
            .collect();
        let disciplines: HashMap<i32, DisciplineDto> = DisciplineRepository::new(self.db)
            .get_by_ids(&discipline_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, DisciplineDto::from_model(d)))
            .collect();

        let materials: HashMap<i32, MaterialDto> = materials
            .into_iter()
            .map(|material| {
                let discipline = material
                    .discipline_id
                    .and_then(|id| disciplines.get(&id).cloned());

                (material.id, MaterialDto::from_model(material, discipline, None))
            })
            .collect();
        let tools: HashMap<i32, ToolDto> = tools
            .into_iter()
            .map(|tool| {
                let discipline = tool
                    .discipline_id
                    .and_then(|id| disciplines.get(&id).cloned());

                (tool.id, ToolDto::from_model(tool, discipline))
            })
            .collect();

        transactions
            .into_iter()
            .map(|transaction| {
                let date = dates.get(&transaction.date_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "Transaction ID {} references date ID {} which does not exist",
                        transaction.id, transaction.date_id
                    ))
                })?;

                Ok(TransactionDto {
                    transaction_id: transaction.id,
                    date,
                    material: transaction
                        .material_id
                        .and_then(|id| materials.get(&id).cloned()),
                    tool: transaction.tool_id.and_then(|id| tools.get(&id).cloned()),
                    quantity_change: transaction.quantity_change,
                    cost_per_unit: transaction.cost_per_unit,
                    total_cost: transaction.total_cost,
                    transaction_type: transaction.transaction_type,
                    notes: transaction.notes,
                })
            })
            .collect()
    }

    pub async fn update(
        &self,
        transaction_id: i32,
        dto: UpdateTransactionDto,
    ) -> Result<TransactionDto, Error> {
        let transaction_repo = TransactionRepository::new(self.db);

        let existing = transaction_repo
            .get_by_id(transaction_id)
            .await?
            .ok_or(Error::NotFound("transaction"))?;

        if let Some(transaction_type) = dto.transaction_type.as_deref() {
            check_required("transaction_type", transaction_type, 50)?;
        }

        // The exactly-one rule holds for the row as it will be after the
        // patch, not just for the fields present in the payload
        let effective_material_id = dto.material_id.unwrap_or(existing.material_id);
        let effective_tool_id = dto.tool_id.unwrap_or(existing.tool_id);
        check_material_xor_tool(effective_material_id, effective_tool_id)?;

        if let Some(date_id) = dto.date_id {
            if DateRepository::new(self.db).get_by_id(date_id).await?.is_none() {
                return Err(ValidationError::UnknownReference { field: "date_id" }.into());
            }
        }
        if let Some(Some(material_id)) = dto.material_id {
            if MaterialRepository::new(self.db)
                .get_by_id(material_id)
                .await?
                .is_none()
            {
                return Err(ValidationError::UnknownReference {
                    field: "material_id",
                }
                .into());
            }
        }
        if let Some(Some(tool_id)) = dto.tool_id {
            if ToolRepository::new(self.db)
                .get_by_id(tool_id)
                .await?
                .is_none()
            {
                return Err(ValidationError::UnknownReference { field: "tool_id" }.into());
            }
        }

        let effective_quantity = dto.quantity_change.unwrap_or(existing.quantity_change);
        let effective_cost = dto.cost_per_unit.unwrap_or(existing.cost_per_unit);

        let transaction = transaction_repo
            .update(
                transaction_id,
                TransactionChanges {
                    date_id: dto.date_id,
                    material_id: dto.material_id,
                    tool_id: dto.tool_id,
                    quantity_change: dto.quantity_change,
                    cost_per_unit: dto.cost_per_unit,
                    total_cost: Some(total_cost(effective_quantity, effective_cost)),
                    transaction_type: dto.transaction_type,
                    notes: dto.notes,
                },
            )
            .await?;

        self.assemble(transaction).await
    }

    pub async fn delete(&self, transaction_id: i32) -> Result<(), Error> {
        let result = TransactionRepository::new(self.db).delete(transaction_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("transaction"));
        }

        Ok(())
    }

    /// Embeds the referenced dimensions into a single transaction response.
    /// The nested material is rendered without its stock aggregate.
    async fn assemble(
        &self,
        transaction: entity::fact_inventory_transaction::Model,
    ) -> Result<TransactionDto, Error> {
        let date = DateRepository::new(self.db)
            .get_by_id(transaction.date_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Transaction ID {} references date ID {} which does not exist",
                    transaction.id, transaction.date_id
                ))
            })?;

        let material = match transaction.material_id {
            Some(material_id) => {
                let material = MaterialRepository::new(self.db)
                    .get_by_id(material_id)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Transaction ID {} references material ID {} which does not exist",
                            transaction.id, material_id
                        ))
                    })?;
                let discipline = self.fetch_discipline(material.discipline_id).await?;

                Some(MaterialDto::from_model(material, discipline, None))
            }
            None => None,
        };

        let tool = match transaction.tool_id {
            Some(tool_id) => {
                let tool = ToolRepository::new(self.db)
                    .get_by_id(tool_id)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "Transaction ID {} references tool ID {} which does not exist",
                            transaction.id, tool_id
                        ))
                    })?;
                let discipline = self.fetch_discipline(tool.discipline_id).await?;

                Some(ToolDto::from_model(tool, discipline))
            }
            None => None,
        };

        Ok(TransactionDto {
            transaction_id: transaction.id,
            date: DateRefDto::from_model(&date),
            material,
            tool,
            quantity_change: transaction.quantity_change,
            cost_per_unit: transaction.cost_per_unit,
            total_cost: transaction.total_cost,
            transaction_type: transaction.transaction_type,
            notes: transaction.notes,
        })
    }

    async fn fetch_discipline(
        &self,
        discipline_id: Option<i32>,
    ) -> Result<Option<DisciplineDto>, Error> {
        let Some(discipline_id) = discipline_id else {
            return Ok(None);
        };

        let discipline = DisciplineRepository::new(self.db)
            .get_by_id(discipline_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Referenced discipline ID {} does not exist",
                    discipline_id
                ))
            })?;

        Ok(Some(DisciplineDto::from_model(discipline)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        model::transaction::{CreateTransactionDto, UpdateTransactionDto},
        server::{
            error::{validation::ValidationError, Error},
            service::transaction::TransactionService,
            util::test::{
                fixture::{insert_date, insert_material},
                setup::test_setup_with_tables,
            },
        },
    };

    fn receipt(date_id: i32, material_id: Option<i32>, tool_id: Option<i32>) -> CreateTransactionDto {
        CreateTransactionDto {
            date_id,
            material_id,
            tool_id,
            quantity_change: 5.0,
            cost_per_unit: None,
            transaction_type: "receipt".to_string(),
            notes: None,
        }
    }

    /// Expect total cost to be quantity times cost per unit
    #[tokio::test]
    async fn create_transaction_computes_total_cost() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let mut dto = receipt(date.id, Some(material.id), None);
        dto.cost_per_unit = Some(2.50);

        let transaction = transaction_service.create(dto).await?;

        assert_eq!(transaction.total_cost, 12.50);

        Ok(())
    }

    /// Expect zero total cost when no per-unit cost is recorded
    #[tokio::test]
    async fn create_transaction_total_cost_zero_without_unit_cost() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let transaction = transaction_service
            .create(receipt(date.id, Some(material.id), None))
            .await?;

        assert_eq!(transaction.total_cost, 0.0);

        Ok(())
    }

    /// Expect rejection when neither material nor tool is referenced
    #[tokio::test]
    async fn create_transaction_neither_reference() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let result = transaction_service.create(receipt(date.id, None, None)).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MaterialXorTool))
        ));

        Ok(())
    }

    /// Expect rejection when both material and tool are referenced
    #[tokio::test]
    async fn create_transaction_both_references() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let result = transaction_service.create(receipt(date.id, Some(1), Some(1))).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MaterialXorTool))
        ));

        Ok(())
    }

    /// Expect an unknown date id in the payload to be a client error
    #[tokio::test]
    async fn create_transaction_unknown_date() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let result = transaction_service
            .create(receipt(99, Some(material.id), None))
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::UnknownReference {
                field: "date_id"
            }))
        ));

        Ok(())
    }

    /// Expect the nested material to omit the stock aggregate
    #[tokio::test]
    async fn transaction_nested_material_has_no_stock() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let transaction = transaction_service
            .create(receipt(date.id, Some(material.id), None))
            .await?;

        let nested = transaction.material.expect("material should be embedded");
        assert_eq!(nested.current_stock, None);
        assert_eq!(transaction.date.full_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        Ok(())
    }

    /// Expect a quantity patch to recompute the stored total cost
    #[tokio::test]
    async fn update_transaction_recomputes_total_cost() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let mut dto = receipt(date.id, Some(material.id), None);
        dto.cost_per_unit = Some(2.0);
        let transaction = transaction_service.create(dto).await?;
        assert_eq!(transaction.total_cost, 10.0);

        let updated = transaction_service
            .update(
                transaction.transaction_id,
                UpdateTransactionDto {
                    quantity_change: Some(3.0),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.total_cost, 6.0);
        assert_eq!(updated.cost_per_unit, Some(2.0));

        Ok(())
    }

    /// Expect a patch that would leave both references set to be rejected
    #[tokio::test]
    async fn update_transaction_both_references_after_patch() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;

        let transaction_service = TransactionService::new(&test.state.db);
        let transaction = transaction_service
            .create(receipt(date.id, Some(material.id), None))
            .await?;

        let result = transaction_service
            .update(
                transaction.transaction_id,
                UpdateTransactionDto {
                    tool_id: Some(Some(1)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MaterialXorTool))
        ));

        Ok(())
    }
}
