use sea_orm::DatabaseConnection;

use crate::{
    model::discipline::{CreateDisciplineDto, DisciplineDto, DisciplineListParams, UpdateDisciplineDto},
    server::{
        data::discipline::DisciplineRepository,
        error::{validation::ValidationError, Error},
        model::{
            discipline::{DisciplineChanges, DisciplineFilter, DisciplineOrder, NewDiscipline},
            query::parse_ordering,
        },
        service::check_required,
    },
};

pub struct DisciplineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DisciplineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateDisciplineDto) -> Result<DisciplineDto, Error> {
        check_required("discipline_name", &dto.discipline_name, 50)?;

        let discipline_repo = DisciplineRepository::new(self.db);

        if discipline_repo
            .get_by_name(&dto.discipline_name)
            .await?
            .is_some()
        {
            return Err(ValidationError::Duplicate {
                field: "discipline_name",
            }
            .into());
        }

        let discipline = discipline_repo
            .create(NewDiscipline {
                discipline_name: dto.discipline_name,
                discipline_description: dto.discipline_description,
            })
            .await?;

        Ok(DisciplineDto::from_model(discipline))
    }

    pub async fn get(&self, discipline_id: i32) -> Result<DisciplineDto, Error> {
        let discipline = DisciplineRepository::new(self.db)
            .get_by_id(discipline_id)
            .await?
            .ok_or(Error::NotFound("discipline"))?;

        Ok(DisciplineDto::from_model(discipline))
    }

    pub async fn list(&self, params: &DisciplineListParams) -> Result<Vec<DisciplineDto>, Error> {
        let filter = DisciplineFilter {
            search: params.search.clone(),
            ordering: params
                .ordering
                .as_deref()
                .and_then(|raw| parse_ordering(raw, DisciplineOrder::from_name)),
        };

        let disciplines = DisciplineRepository::new(self.db).list(&filter).await?;

        Ok(disciplines
            .into_iter()
            .map(DisciplineDto::from_model)
            .collect())
    }

    pub async fn update(
        &self,
        discipline_id: i32,
        dto: UpdateDisciplineDto,
    ) -> Result<DisciplineDto, Error> {
        let discipline_repo = DisciplineRepository::new(self.db);

        let existing = discipline_repo
            .get_by_id(discipline_id)
            .await?
            .ok_or(Error::NotFound("discipline"))?;

        if let Some(name) = dto.discipline_name.as_deref() {
            check_required("discipline_name", name, 50)?;

            // Renaming to an existing name is rejected; keeping the current
            // name is not a conflict
            if let Some(existing) = discipline_repo.get_by_name(name).await? {
                if existing.id != discipline_id {
                    return Err(ValidationError::Duplicate {
                        field: "discipline_name",
                    }
                    .into());
                }
            }
        }

        let changes = DisciplineChanges {
            discipline_name: dto.discipline_name,
            discipline_description: dto.discipline_description,
        };
        if changes.is_empty() {
            return Ok(DisciplineDto::from_model(existing));
        }

        let discipline = discipline_repo.update(discipline_id, changes).await?;

        Ok(DisciplineDto::from_model(discipline))
    }

    pub async fn delete(&self, discipline_id: i32) -> Result<(), Error> {
        let result = DisciplineRepository::new(self.db).delete(discipline_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("discipline"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::discipline::{CreateDisciplineDto, UpdateDisciplineDto},
        server::{
            error::{validation::ValidationError, Error},
            service::discipline::DisciplineService,
            util::test::{fixture::insert_discipline, setup::test_setup_with_tables},
        },
    };

    /// Expect a duplicate discipline name to be rejected before insertion
    #[tokio::test]
    async fn create_discipline_duplicate_name() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let discipline_service = DisciplineService::new(&test.state.db);

        insert_discipline(&test.state.db, "Carpentry").await?;

        let result = discipline_service
            .create(CreateDisciplineDto {
                discipline_name: "Carpentry".to_string(),
                discipline_description: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::Duplicate {
                field: "discipline_name"
            }))
        ));

        Ok(())
    }

    /// Expect an over-long discipline name to be rejected
    #[tokio::test]
    async fn create_discipline_name_too_long() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let discipline_service = DisciplineService::new(&test.state.db);

        let result = discipline_service
            .create(CreateDisciplineDto {
                discipline_name: "x".repeat(51),
                discipline_description: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::TooLong {
                field: "discipline_name",
                max: 50
            }))
        ));

        Ok(())
    }

    /// Expect an update keeping the current name to pass the conflict check
    #[tokio::test]
    async fn update_discipline_same_name_not_conflict() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let discipline_service = DisciplineService::new(&test.state.db);

        let discipline = insert_discipline(&test.state.db, "Masonry").await?;

        let updated = discipline_service
            .update(
                discipline.id,
                UpdateDisciplineDto {
                    discipline_name: Some("Masonry".to_string()),
                    discipline_description: Some(Some("Brick and stone".to_string())),
                },
            )
            .await?;

        assert_eq!(updated.discipline_name, "Masonry");
        assert_eq!(updated.discipline_description.as_deref(), Some("Brick and stone"));

        Ok(())
    }

    /// Expect 404-style error when updating an unknown discipline
    #[tokio::test]
    async fn update_discipline_unknown() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let discipline_service = DisciplineService::new(&test.state.db);

        let result = discipline_service
            .update(42, UpdateDisciplineDto::default())
            .await;

        assert!(matches!(result, Err(Error::NotFound("discipline"))));

        Ok(())
    }
}
