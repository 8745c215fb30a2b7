use chrono::{Datelike, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        date::DateRepository, discipline::DisciplineRepository, material::MaterialRepository,
        transaction::TransactionRepository,
    },
    model::{
        date::NewDate, discipline::NewDiscipline, material::NewMaterial, tool::NewTool,
        transaction::NewTransaction,
    },
};

pub fn new_date(id: i32, full_date: NaiveDate) -> NewDate {
    let quarter_number = (full_date.month0() / 3 + 1) as i32;

    NewDate {
        id,
        full_date,
        year: full_date.year(),
        month_number: full_date.month() as i32,
        month_name: full_date.format("%B").to_string(),
        day_of_month: full_date.day() as i32,
        weekday_number: full_date.weekday().number_from_monday() as i32,
        weekday_name: full_date.format("%A").to_string(),
        quarter_number: Some(quarter_number),
        quarter_name: Some(format!("Q{}", quarter_number)),
    }
}

pub fn new_material(material_name: &str, discipline_id: Option<i32>) -> NewMaterial {
    NewMaterial {
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

pub fn new_tool(tool_name: &str) -> NewTool {
    NewTool {
        tool_name: tool_name.to_string(),
        tool_type: None,
        brand: None,
        model: None,
        current_location: None,
        purchase_date: None,
        last_maintenance_date: None,
        is_calibrated: false,
        discipline_id: None,
    }
}

pub async fn insert_date(
    db: &DatabaseConnection,
    id: i32,
    full_date: NaiveDate,
) -> Result<entity::dim_date::Model, DbErr> {
    DateRepository::new(db).create(new_date(id, full_date)).await
}

pub async fn insert_discipline(
    db: &DatabaseConnection,
    discipline_name: &str,
) -> Result<entity::dim_discipline::Model, DbErr> {
    DisciplineRepository::new(db)
        .create(NewDiscipline {
            discipline_name: discipline_name.to_string(),
            discipline_description: None,
        })
        .await
}

pub async fn insert_material(
    db: &DatabaseConnection,
    material_name: &str,
    discipline_id: Option<i32>,
) -> Result<entity::dim_material::Model, DbErr> {
    MaterialRepository::new(db)
        .create(new_material(material_name, discipline_id))
        .await
}

/// Inserts a receipt-style transaction for a material with no cost figures
pub async fn insert_stock_transaction(
    db: &DatabaseConnection,
    date_id: i32,
    material_id: i32,
    quantity_change: f64,
) -> Result<entity::fact_inventory_transaction::Model, DbErr> {
    TransactionRepository::new(db)
        .create(NewTransaction {
            date_id,
            material_id: Some(material_id),
            tool_id: None,
            quantity_change,
            cost_per_unit: None,
            total_cost: 0.0,
            transaction_type: "receipt".to_string(),
            notes: None,
        })
        .await
}
