use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::json;

use ironfish_api::db::SeaOrmLedger;
use ironfish_api::entity::asset_descriptions::{self, AssetDescriptionType};
use ironfish_api::entity::{assets, transactions};
use ironfish_api::models::{BurnDto, MintDto, TransactionDto};
use ironfish_api::services::asset_loader::{AssetLoader, AssetLoaderError};

fn transaction_model() -> transactions::Model {
    let now = Utc::now();
    transactions::Model {
        id: 3,
        hash: "t1".to_string(),
        fee: 1,
        size: 100,
        notes: json!([]),
        spends: json!([]),
        created_at: now,
        updated_at: now,
    }
}

fn asset_model(supply: i64) -> assets::Model {
    let now = Utc::now();
    assets::Model {
        id: 7,
        identifier: "A".to_string(),
        name: "Coin".to_string(),
        metadata: "".to_string(),
        owner: "o".to_string(),
        supply: Decimal::from(supply),
        created_transaction_id: 3,
        created_at: now,
        updated_at: now,
    }
}

fn description_model(kind: AssetDescriptionType, value: i64) -> asset_descriptions::Model {
    asset_descriptions::Model {
        id: 11,
        r#type: kind,
        value: Decimal::from(value),
        asset_id: 7,
        transaction_id: 3,
        created_at: Utc::now(),
    }
}

fn descriptor(mints: Vec<MintDto>, burns: Vec<BurnDto>) -> TransactionDto {
    TransactionDto {
        hash: "t1".to_string(),
        fee: 1,
        size: 100,
        notes: vec![],
        spends: vec![],
        mints,
        burns,
    }
}

fn rows_affected(count: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: count,
    }
}

/// Run one reconcile call and return it with the rendered transaction log
async fn reconcile(
    db: MockDatabase,
    is_main_chain: bool,
    transaction: TransactionDto,
) -> (Result<(), AssetLoaderError>, Vec<String>) {
    let conn = Arc::new(db.into_connection());
    let loader = AssetLoader::new(SeaOrmLedger::new(Arc::clone(&conn)));

    let result = loader.load_descriptions(is_main_chain, &transaction).await;
    drop(loader);

    let conn: DatabaseConnection = match Arc::try_unwrap(conn) {
        Ok(conn) => conn,
        Err(_) => panic!("connection still shared"),
    };
    let log = conn
        .into_transaction_log()
        .iter()
        .map(|t| format!("{:?}", t).replace("\\\"", "\""))
        .collect();
    (result, log)
}

#[tokio::test]
async fn mint_inserts_asset_once_and_adds_supply_in_sql() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![transaction_model()]])
        .append_query_results([Vec::<asset_descriptions::Model>::new()])
        .append_query_results([vec![asset_model(0)]])
        .append_query_results([vec![description_model(AssetDescriptionType::Mint, 10)]])
        .append_exec_results([rows_affected(1), rows_affected(1)]);

    let mint = MintDto {
        id: "A".to_string(),
        metadata: "".to_string(),
        name: "Coin".to_string(),
        owner: "o".to_string(),
        value: "10".to_string(),
    };
    let (result, log) = reconcile(db, true, descriptor(vec![mint], vec![])).await;

    assert!(result.is_ok());
    assert_eq!(log.len(), 1);
    let unit = &log[0];
    assert!(unit.contains(r#"sql: "BEGIN""#));
    assert!(unit.contains(r#"ON CONFLICT ("identifier") DO NOTHING"#));
    assert!(unit.contains(r#"INSERT INTO "asset_descriptions""#));
    assert!(unit.contains(r#""supply" = "supply" + $1"#));
    assert!(unit.contains("Decimal(Some(10))"));
    assert!(unit.contains(r#"sql: "COMMIT""#));
    assert!(!unit.contains("ROLLBACK"));
}

#[tokio::test]
async fn burn_of_unknown_asset_rolls_the_unit_back() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![transaction_model()]])
        .append_query_results([Vec::<asset_descriptions::Model>::new()])
        .append_query_results([Vec::<assets::Model>::new()]);

    let burn = BurnDto {
        id: "A".to_string(),
        value: "4".to_string(),
    };
    let (result, log) = reconcile(db, true, descriptor(vec![], vec![burn])).await;

    assert!(matches!(result, Err(AssetLoaderError::AssetNotFound(id)) if id == "A"));
    assert_eq!(log.len(), 1);
    let unit = &log[0];
    assert!(unit.contains(r#"sql: "ROLLBACK""#));
    assert!(!unit.contains("COMMIT"));
    assert!(!unit.contains("UPDATE"));
    assert!(!unit.contains("INSERT"));
}

#[tokio::test]
async fn disconnect_reverses_supply_and_deletes_descriptions() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![transaction_model()]])
        .append_query_results([vec![description_model(AssetDescriptionType::Mint, 10)]])
        .append_query_results([vec![asset_model(10)]])
        .append_exec_results([rows_affected(1), rows_affected(1)]);

    let (result, log) = reconcile(db, false, descriptor(vec![], vec![])).await;

    assert!(result.is_ok());
    let unit = &log[0];
    assert!(unit.contains(r#""supply" = "supply" + $1"#));
    assert!(unit.contains("Decimal(Some(-10))"));
    assert!(unit.contains(r#"DELETE FROM "asset_descriptions""#));
    assert!(unit.contains(r#"sql: "COMMIT""#));
}

#[tokio::test]
async fn unknown_transaction_commits_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<transactions::Model>::new()]);

    let (result, log) = reconcile(db, true, descriptor(vec![], vec![])).await;

    assert!(matches!(result, Err(AssetLoaderError::TransactionNotFound(_))));
    assert!(log[0].contains(r#"sql: "ROLLBACK""#));
    assert!(!log[0].contains("COMMIT"));
}
