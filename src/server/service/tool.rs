use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        discipline::DisciplineDto,
        tool::{CreateToolDto, ToolDto, ToolListParams, UpdateToolDto},
    },
    server::{
        data::{discipline::DisciplineRepository, tool::ToolRepository},
        error::{validation::ValidationError, Error},
        model::{
            query::{parse_id_filter, parse_ordering},
            tool::{NewTool, ToolChanges, ToolFilter, ToolOrder},
        },
        service::{check_length, check_required},
    },
};

pub struct ToolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateToolDto) -> Result<ToolDto, Error> {
        check_required("tool_name", &dto.tool_name, 100)?;
        if let Some(tool_type) = dto.tool_type.as_deref() {
            check_length("tool_type", tool_type, 50)?;
        }
        if let Some(brand) = dto.brand.as_deref() {
            check_length("brand", brand, 50)?;
        }
        if let Some(model) = dto.model.as_deref() {
            check_length("model", model, 50)?;
        }
        if let Some(current_location) = dto.current_location.as_deref() {
            check_length("current_location", current_location, 100)?;
        }

        let discipline = self.resolve_discipline(dto.discipline_id).await?;

        let tool = ToolRepository::new(self.db)
            .create(NewTool {
                tool_name: dto.tool_name,
                tool_type: dto.tool_type,
                brand: dto.brand,
                model: dto.model,
                current_location: dto.current_location,
                purchase_date: dto.purchase_date,
                last_maintenance_date: dto.last_maintenance_date,
                is_calibrated: dto.is_calibrated.unwrap_or(false),
                discipline_id: dto.discipline_id,
            })
            .await?;

        Ok(ToolDto::from_model(tool, discipline))
    }

    pub async fn get(&self, tool_id: i32) -> Result<ToolDto, Error> {
        let tool = ToolRepository::new(self.db)
            .get_by_id(tool_id)
            .await?
            .ok_or(Error::NotFound("tool"))?;

        let discipline = self.fetch_discipline(tool.discipline_id).await?;

        Ok(ToolDto::from_model(tool, discipline))
    }

    pub async fn list(&self, params: &ToolListParams) -> Result<Vec<ToolDto>, Error> {
        let filter = ToolFilter {
            discipline_id: parse_id_filter(params.discipline__discipline_id.as_deref()),
            tool_type: params.tool_type.clone(),
            brand: params.brand.clone(),
            search: params.search.clone(),
            ordering: params
                .ordering
                .as_deref()
                .and_then(|raw| parse_ordering(raw, ToolOrder::from_name)),
        };

        let tools = ToolRepository::new(self.db).list(&filter).await?;

        let discipline_ids: Vec<i32> = tools.iter().filter_map(|t| t.discipline_id).collect();
        let disciplines: HashMap<i32, DisciplineDto> = DisciplineRepository::new(self.db)
            .get_by_ids(&discipline_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, DisciplineDto::from_model(d)))
            .collect();

        Ok(tools
            .into_iter()
            .map(|tool| {
                let discipline = tool
                    .discipline_id
                    .and_then(|id| disciplines.get(&id).cloned());

                ToolDto::from_model(tool, discipline)
            })
            .collect())
    }

    pub async fn update(&self, tool_id: i32, dto: UpdateToolDto) -> Result<ToolDto, Error> {
        let tool_repo = ToolRepository::new(self.db);

        let existing = tool_repo
            .get_by_id(tool_id)
            .await?
            .ok_or(Error::NotFound("tool"))?;

        if let Some(tool_name) = dto.tool_name.as_deref() {
            check_required("tool_name", tool_name, 100)?;
        }
        if let Some(Some(tool_type)) = dto.tool_type.as_ref() {
            check_length("tool_type", tool_type, 50)?;
        }
        if let Some(Some(brand)) = dto.brand.as_ref() {
            check_length("brand", brand, 50)?;
        }
        if let Some(Some(model)) = dto.model.as_ref() {
            check_length("model", model, 50)?;
        }
        if let Some(Some(current_location)) = dto.current_location.as_ref() {
            check_length("current_location", current_location, 100)?;
        }
        if let Some(Some(discipline_id)) = dto.discipline_id {
            self.resolve_discipline(Some(discipline_id)).await?;
        }

        let changes = ToolChanges {
            tool_name: dto.tool_name,
            tool_type: dto.tool_type,
            brand: dto.brand,
            model: dto.model,
            current_location: dto.current_location,
            purchase_date: dto.purchase_date,
            last_maintenance_date: dto.last_maintenance_date,
            is_calibrated: dto.is_calibrated,
            discipline_id: dto.discipline_id,
        };
        let tool = if changes.is_empty() {
            existing
        } else {
            tool_repo.update(tool_id, changes).await?
        };

        let discipline = self.fetch_discipline(tool.discipline_id).await?;

        Ok(ToolDto::from_model(tool, discipline))
    }

    pub async fn delete(&self, tool_id: i32) -> Result<(), Error> {
        let result = ToolRepository::new(self.db).delete(tool_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("tool"));
        }

        Ok(())
    }

    async fn resolve_discipline(
        &self,
        discipline_id: Option<i32>,
    ) -> Result<Option<DisciplineDto>, Error> {
        let Some(discipline_id) = discipline_id else {
            return Ok(None);
        };

        let discipline = DisciplineRepository::new(self.db)
            .get_by_id(discipline_id)
            .await?
            .ok_or(ValidationError::UnknownReference {
                field: "discipline_id",
            })?;

        Ok(Some(DisciplineDto::from_model(discipline)))
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
                    "Tool references discipline ID {} which does not exist",
                    discipline_id
                ))
            })?;

        Ok(Some(DisciplineDto::from_model(discipline)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::tool::{CreateToolDto, UpdateToolDto},
        server::{
            error::{validation::ValidationError, Error},
            service::tool::ToolService,
            util::test::{fixture::insert_discipline, setup::test_setup_with_tables},
        },
    };

    fn create_dto(tool_name: &str) -> CreateToolDto {
        CreateToolDto {
            tool_name: tool_name.to_string(),
            tool_type: None,
            brand: None,
            model: None,
            current_location: None,
            purchase_date: None,
            last_maintenance_date: None,
            is_calibrated: None,
            discipline_id: None,
        }
    }

    /// Expect the calibration flag to default to false when omitted
    #[tokio::test]
    async fn create_tool_calibration_defaults_false() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let tool_service = ToolService::new(&test.state.db);

        let tool = tool_service.create(create_dto("Laser level")).await?;

        assert!(!tool.is_calibrated);

        Ok(())
    }

    /// Expect an unknown discipline id in the payload to be a client error
    #[tokio::test]
    async fn create_tool_unknown_discipline() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let tool_service = ToolService::new(&test.state.db);

        let mut dto = create_dto("Cordless drill");
        dto.discipline_id = Some(7);
        let result = tool_service.create(dto).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::UnknownReference {
                field: "discipline_id"
            }))
        ));

        Ok(())
    }

    /// Expect reassigning a tool to another discipline to embed the new one
    #[tokio::test]
    async fn update_tool_reassign_discipline() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let carpentry = insert_discipline(&test.state.db, "Carpentry").await?;
        let electrical = insert_discipline(&test.state.db, "Electrical").await?;

        let tool_service = ToolService::new(&test.state.db);
        let mut dto = create_dto("Multimeter");
        dto.discipline_id = Some(carpentry.id);
        let tool = tool_service.create(dto).await?;

        let updated = tool_service
            .update(
                tool.tool_id,
                UpdateToolDto {
                    discipline_id: Some(Some(electrical.id)),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(
            updated.discipline.map(|d| d.discipline_name),
            Some("Electrical".to_string())
        );

        Ok(())
    }

    /// Expect a blank tool name to be rejected
    #[tokio::test]
    async fn create_tool_blank_name() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let tool_service = ToolService::new(&test.state.db);

        let result = tool_service.create(create_dto("  ")).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::Empty {
                field: "tool_name"
            }))
        ));

        Ok(())
    }
}
