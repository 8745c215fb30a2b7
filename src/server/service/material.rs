use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        discipline::DisciplineDto,
        material::{CreateMaterialDto, MaterialDto, MaterialListParams, UpdateMaterialDto},
    },
    server::{
        data::{
            discipline::DisciplineRepository, material::MaterialRepository,
            transaction::TransactionRepository,
        },
        error::{validation::ValidationError, Error},
        model::{
            material::{MaterialChanges, MaterialFilter, MaterialOrder, NewMaterial},
            query::{parse_id_filter, parse_ordering, Ordering},
        },
        service::{check_length, check_required},
    },
};

pub struct MaterialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateMaterialDto) -> Result<MaterialDto, Error> {
        check_required("material_name", &dto.material_name, 100)?;
        check_required("unit_of_measure", &dto.unit_of_measure, 20)?;
        if let Some(material_type) = dto.material_type.as_deref() {
            check_length("material_type", material_type, 50)?;
        }
        if let Some(brand) = dto.brand.as_deref() {
            check_length("brand", brand, 50)?;
        }
        if let Some(color) = dto.color.as_deref() {
            check_length("color", color, 50)?;
        }
        if let Some(size) = dto.size.as_deref() {
            check_length("size", size, 50)?;
        }
        if let Some(image_url) = dto.image_url.as_deref() {
            check_length("image_url", image_url, 500)?;
        }

        let material_repo = MaterialRepository::new(self.db);

        if material_repo
            .get_by_name(&dto.material_name)
            .await?
            .is_some()
        {
            return Err(ValidationError::Duplicate {
                field: "material_name",
            }
            .into());
        }

        let discipline = self.resolve_discipline(dto.discipline_id).await?;

        let material = material_repo
            .create(NewMaterial {
                material_name: dto.material_name,
                material_type: dto.material_type,
                unit_of_measure: dto.unit_of_measure,
                brand: dto.brand,
                color: dto.color,
                size: dto.size,
                discipline_id: dto.discipline_id,
                image_url: dto.image_url,
            })
            .await?;

        Ok(MaterialDto::from_model(material, discipline, Some(0.0)))
    }

    pub async fn get(&self, material_id: i32) -> Result<MaterialDto, Error> {
        let material = MaterialRepository::new(self.db)
            .get_by_id(material_id)
            .await?
            .ok_or(Error::NotFound("material"))?;

        let discipline = self.fetch_discipline(material.discipline_id).await?;
        let stock = TransactionRepository::new(self.db)
            .stock_for_material(material.id)
            .await?;

        Ok(MaterialDto::from_model(material, discipline, Some(stock)))
    }

    pub async fn list(&self, params: &MaterialListParams) -> Result<Vec<MaterialDto>, Error> {
        let ordering = params
            .ordering
            .as_deref()
            .and_then(|raw| parse_ordering(raw, MaterialOrder::from_name));

        let filter = MaterialFilter {
            discipline_id: parse_id_filter(params.discipline__discipline_id.as_deref()),
            material_type: params.material_type.clone(),
            brand: params.brand.clone(),
            search: params.search.clone(),
            ordering,
        };

        let materials = MaterialRepository::new(self.db).list(&filter).await?;

        let discipline_ids: Vec<i32> = materials.iter().filter_map(|m| m.discipline_id).collect();
        let disciplines: HashMap<i32, DisciplineDto> = DisciplineRepository::new(self.db)
            .get_by_ids(&discipline_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, DisciplineDto::from_model(d)))
            .collect();

        let stock_by_material: HashMap<i32, f64> = TransactionRepository::new(self.db)
            .stock_totals()
            .await?
            .into_iter()
            .collect();

        let mut dtos: Vec<MaterialDto> = materials
            .into_iter()
            .map(|material| {
                let discipline = material
                    .discipline_id
                    .and_then(|id| disciplines.get(&id).cloned());
                let stock = stock_by_material.get(&material.id).copied().unwrap_or(0.0);

                MaterialDto::from_model(material, discipline, Some(stock))
            })
            .collect();

        // The stock aggregate is not a column, so ordering on it happens
        // here; the stable sort keeps the repository's id tiebreak
        if let Some(Ordering {
            field: MaterialOrder::CurrentStock,
            descending,
        }) = ordering
        {
            dtos.sort_by(|a, b| {
                let left = a.current_stock.unwrap_or(0.0);
                let right = b.current_stock.unwrap_or(0.0);
                let ordering = left.partial_cmp(&right).unwrap_or(std::cmp::Ordering::Equal);

                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        Ok(dtos)
    }

    pub async fn update(
        &self,
        material_id: i32,
        dto: UpdateMaterialDto,
    ) -> Result<MaterialDto, Error> {
        let material_repo = MaterialRepository::new(self.db);

        let existing = material_repo
            .get_by_id(material_id)
            .await?
            .ok_or(Error::NotFound("material"))?;

        if let Some(name) = dto.material_name.as_deref() {
            check_required("material_name", name, 100)?;

            if let Some(existing) = material_repo.get_by_name(name).await? {
                if existing.id != material_id {
                    return Err(ValidationError::Duplicate {
                        field: "material_name",
                    }
                    .into());
                }
            }
        }
        if let Some(unit_of_measure) = dto.unit_of_measure.as_deref() {
            check_required("unit_of_measure", unit_of_measure, 20)?;
        }
        if let Some(Some(material_type)) = dto.material_type.as_ref() {
            check_length("material_type", material_type, 50)?;
        }
        if let Some(Some(brand)) = dto.brand.as_ref() {
            check_length("brand", brand, 50)?;
        }
        if let Some(Some(color)) = dto.color.as_ref() {
            check_length("color", color, 50)?;
        }
        if let Some(Some(size)) = dto.size.as_ref() {
            check_length("size", size, 50)?;
        }
        if let Some(Some(image_url)) = dto.image_url.as_ref() {
            check_length("image_url", image_url, 500)?;
        }
        if let Some(Some(discipline_id)) = dto.discipline_id {
            self.resolve_discipline(Some(discipline_id)).await?;
        }

        let changes = MaterialChanges {
            material_name: dto.material_name,
            material_type: dto.material_type,
            unit_of_measure: dto.unit_of_measure,
            brand: dto.brand,
            color: dto.color,
            size: dto.size,
            discipline_id: dto.discipline_id,
            image_url: dto.image_url,
        };
        let material = if changes.is_empty() {
            existing
        } else {
            material_repo.update(material_id, changes).await?
        };

        let discipline = self.fetch_discipline(material.discipline_id).await?;
        let stock = TransactionRepository::new(self.db)
            .stock_for_material(material.id)
            .await?;

        Ok(MaterialDto::from_model(material, discipline, Some(stock)))
    }

    pub async fn delete(&self, material_id: i32) -> Result<(), Error> {
        let result = MaterialRepository::new(self.db).delete(material_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("material"));
        }

        Ok(())
    }

    /// Resolves a payload-supplied discipline id, rejecting unknown ids as a
    /// client error rather than letting the FK constraint surface as a 500.
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

    /// Fetches a stored discipline reference for embedding in a response.
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
                    "Material references discipline ID {} which does not exist",
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
        model::material::{CreateMaterialDto, MaterialListParams, UpdateMaterialDto},
        server::{
            error::{validation::ValidationError, Error},
            service::material::MaterialService,
            util::test::{
                fixture::{insert_date, insert_discipline, insert_material, insert_stock_transaction},
                setup::test_setup_with_tables,
            },
        },
    };

    fn create_dto(material_name: &str, discipline_id: Option<i32>) -> CreateMaterialDto {
        CreateMaterialDto {
            material_name: material_name.to_string(),
            material_type: None,
            unit_of_measure: "piece".to_string(),
            brand: None,
            color: None,
            size: None,
            discipline_id,
            image_url: None,
        }
    }

    /// Expect an unknown discipline id in the payload to be a client error
    #[tokio::test]
    async fn create_material_unknown_discipline() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let material_service = MaterialService::new(&test.state.db);

        let result = material_service.create(create_dto("Oak board", Some(99))).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::UnknownReference {
                field: "discipline_id"
            }))
        ));

        Ok(())
    }

    /// Expect the embedded discipline and a zero opening stock on create
    #[tokio::test]
    async fn create_material_embeds_discipline() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let discipline = insert_discipline(&test.state.db, "Carpentry").await?;

        let material_service = MaterialService::new(&test.state.db);
        let material = material_service
            .create(create_dto("Oak board", Some(discipline.id)))
            .await?;

        assert_eq!(
            material.discipline.map(|d| d.discipline_name),
            Some("Carpentry".to_string())
        );
        assert_eq!(material.current_stock, Some(0.0));

        Ok(())
    }

    /// Expect retrieval to attach the derived stock figure
    #[tokio::test]
    async fn get_material_attaches_stock() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let material = insert_material(&test.state.db, "Oak board", None).await?;
        insert_stock_transaction(&test.state.db, date.id, material.id, 10.0).await?;
        insert_stock_transaction(&test.state.db, date.id, material.id, -3.0).await?;

        let material_service = MaterialService::new(&test.state.db);
        let dto = material_service.get(material.id).await?;

        assert_eq!(dto.current_stock, Some(7.0));

        Ok(())
    }

    /// Expect ordering on the derived stock aggregate, descending
    #[tokio::test]
    async fn list_materials_ordered_by_stock() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let date = insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;
        let oak = insert_material(&test.state.db, "Oak board", None).await?;
        let pine = insert_material(&test.state.db, "Pine plank", None).await?;
        let steel = insert_material(&test.state.db, "Steel rod", None).await?;

        insert_stock_transaction(&test.state.db, date.id, oak.id, 2.0).await?;
        insert_stock_transaction(&test.state.db, date.id, pine.id, 9.0).await?;
        insert_stock_transaction(&test.state.db, date.id, steel.id, 5.0).await?;

        let material_service = MaterialService::new(&test.state.db);
        let params = MaterialListParams {
            ordering: Some("-current_stock".to_string()),
            ..Default::default()
        };

        let materials = material_service.list(&params).await?;
        let names: Vec<_> = materials.iter().map(|m| m.material_name.as_str()).collect();

        assert_eq!(names, vec!["Pine plank", "Steel rod", "Oak board"]);

        Ok(())
    }

    /// Expect an explicit null to clear the discipline reference while an
    /// absent field retains it
    #[tokio::test]
    async fn update_material_clears_discipline_on_null() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        let discipline = insert_discipline(&test.state.db, "Carpentry").await?;
        let material = insert_material(&test.state.db, "Oak board", Some(discipline.id)).await?;

        let material_service = MaterialService::new(&test.state.db);

        let retained = material_service
            .update(
                material.id,
                UpdateMaterialDto {
                    brand: Some(Some("Acme".to_string())),
                    ..Default::default()
                },
            )
            .await?;
        assert!(retained.discipline.is_some());

        let cleared = material_service
            .update(
                material.id,
                UpdateMaterialDto {
                    discipline_id: Some(None),
                    ..Default::default()
                },
            )
            .await?;
        assert!(cleared.discipline.is_none());
        assert_eq!(cleared.brand.as_deref(), Some("Acme"));

        Ok(())
    }
}
