use sea_orm::{ConnectionTrait, Database, DbBackend, DbErr, Schema};

use crate::server::model::app::AppState;

pub struct TestSetup {
    pub state: AppState,
}

/// Returns an [`AppState`] backed by an in-memory database, used across
/// repository and service tests
pub async fn test_setup() -> Result<TestSetup, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    let state = AppState {
        db,
        api_token: None,
    };

    Ok(TestSetup { state })
}

/// Like [`test_setup`] but with every table created, referenced tables
/// first so foreign keys resolve
pub async fn test_setup_with_tables() -> Result<TestSetup, DbErr> {
    let test = test_setup().await?;

    let schema = Schema::new(DbBackend::Sqlite);
    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::DimDate),
        schema.create_table_from_entity(entity::prelude::DimDiscipline),
        schema.create_table_from_entity(entity::prelude::DimMaterial),
        schema.create_table_from_entity(entity::prelude::DimTool),
        schema.create_table_from_entity(entity::prelude::FactInventoryTransaction),
    ];

    for stmt in stmts {
        test.state.db.execute(&stmt).await?;
    }

    Ok(test)
}
