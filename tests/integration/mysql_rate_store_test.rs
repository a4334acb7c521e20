// Integration tests for the MySQL rate store
//
// Uses a real MySQL server (TEST_DATABASE_URL); ignored by default.

use rust_decimal_macros::dec;
use tax_updater::cli::{BufferedOutput, RateUpdateArgs, Severity};
use tax_updater::taxes::{MySqlRateStore, RateFilter, RateStore, RateUpdateCommand};
use tax_updater::{AppError, ExitStatus};

mod database_setup;
use database_setup::setup_test_db;

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_get_existing_and_missing_rate() {
    let db = setup_test_db().await;
    let id = db.seed_rate("DE", "DE-19%", dec!(19)).await;
    let store = MySqlRateStore::new(db.pool.clone(), "tax_calculation_rate");

    let rate = store.get(id).await.unwrap();
    assert_eq!(rate.id, id);
    assert_eq!(rate.country_code, "DE");
    assert_eq!(rate.code, "DE-19%");
    assert_eq!(rate.percent, dec!(19.0000));

    let missing = store.get(id + 1000).await.unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_find_combines_filters() {
    let db = setup_test_db().await;
    let de_standard = db.seed_rate("DE", "DE-19%", dec!(19)).await;
    db.seed_rate("DE", "DE-7%", dec!(7)).await;
    let at_standard = db.seed_rate("AT", "AT-19%", dec!(19)).await;
    let store = MySqlRateStore::new(db.pool.clone(), "tax_calculation_rate");

    let both = RateFilter::new().with_country("DE").with_percent(dec!(19));
    let ids: Vec<_> = store.find(&both).await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![de_standard]);

    let by_percent = RateFilter::new().with_percent(dec!(19));
    let ids: Vec<_> = store
        .find(&by_percent)
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![de_standard, at_standard]);

    assert_eq!(store.find(&RateFilter::new()).await.unwrap().len(), 3);
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_save_persists_code_and_percent() {
    let db = setup_test_db().await;
    let id = db.seed_rate("DE", "DE-19%", dec!(19)).await;
    let store = MySqlRateStore::new(db.pool.clone(), "tax_calculation_rate");

    let mut rate = store.get(id).await.unwrap();
    rate.code = "DE-16%".to_string();
    rate.percent = dec!(16);
    store.save(&rate).await.unwrap();

    let reloaded = store.get(id).await.unwrap();
    assert_eq!(reloaded.code, "DE-16%");
    assert_eq!(reloaded.percent, dec!(16));
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_save_duplicate_code_is_a_validation_error() {
    let db = setup_test_db().await;
    let id = db.seed_rate("DE", "DE-19%", dec!(19)).await;
    db.seed_rate("DE", "DE-7%", dec!(7)).await;
    let store = MySqlRateStore::new(db.pool.clone(), "tax_calculation_rate");

    let mut rate = store.get(id).await.unwrap();
    rate.code = "DE-7%".to_string();

    let err = store.save(&rate).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
#[ignore] // Requires MySQL connection
async fn test_update_command_against_mysql() {
    let db = setup_test_db().await;
    let first = db.seed_rate("DE", "DE-19%", dec!(19)).await;
    // Updating this one to 7% collides with the existing DE-Shop-7% code
    let second = db.seed_rate("DE", "DE-Shop-19%", dec!(19)).await;
    db.seed_rate("DE", "DE-Shop-7%", dec!(7)).await;
    let store = MySqlRateStore::new(db.pool.clone(), "tax_calculation_rate");

    let args = RateUpdateArgs {
        country: Some("DE".to_string()),
        old_rate: Some("19".to_string()),
        new_rate: Some("7".to_string()),
        ..Default::default()
    };
    let mut output = BufferedOutput::new();
    let status = RateUpdateCommand::new(&store)
        .execute(&args, &mut output)
        .await
        .unwrap();

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(store.get(first).await.unwrap().code, "DE-7%");
    assert_eq!(store.get(second).await.unwrap().percent, dec!(19));
    assert_eq!(output.messages(Severity::Error).len(), 1);
    assert_eq!(output.messages(Severity::Info).len(), 2);
}
