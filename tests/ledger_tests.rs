use std::sync::Arc;

use kinofox::db::{create_pool, SqliteUsageLedger, UsageLedger};
use uuid::Uuid;

fn temp_database_url() -> (String, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("kinofox-ledger-{}.db", Uuid::new_v4()));
    (format!("sqlite:{}?mode=rwc", path.display()), path)
}

#[tokio::test]
async fn test_counts_survive_reconnect() {
    let (url, path) = temp_database_url();

    {
        let ledger = SqliteUsageLedger::new(create_pool(&url, 2).await.unwrap());
        ledger.record_usage("Alien").await.unwrap();
        ledger.record_usage("Alien").await.unwrap();
    }

    let ledger = SqliteUsageLedger::new(create_pool(&url, 2).await.unwrap());
    assert_eq!(ledger.count_for("Alien").await.unwrap(), Some(2));

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_pooled_concurrent_writers_lose_nothing() {
    let (url, path) = temp_database_url();
    let ledger = Arc::new(SqliteUsageLedger::new(create_pool(&url, 4).await.unwrap()));

    let names = ["Inception", "Heat", "Dark"];
    let mut tasks = Vec::new();
    for i in 0..30 {
        let ledger = ledger.clone();
        let name = names[i % names.len()];
        tasks.push(tokio::spawn(async move { ledger.record_usage(name).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let snapshot = ledger.ranked_snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.iter().all(|record| record.count == 10));
    let ordered: Vec<&str> = snapshot.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(ordered, vec!["Dark", "Heat", "Inception"]);

    let _ = std::fs::remove_file(path);
}
