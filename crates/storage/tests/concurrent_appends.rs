use std::sync::Arc;

use shared::protocol::RequestFields;
use storage::{MemoryStore, RequestStore, Storage};

fn request(n: usize) -> RequestFields {
    RequestFields {
        name: format!("customer-{n}"),
        contact: format!("555-{n:04}"),
        appliance: "Microwave".into(),
        issue: format!("issue #{n}"),
    }
}

async fn append_concurrently(store: Arc<dyn RequestStore>, count: usize) {
    let mut handles = Vec::with_capacity(count);
    for n in 0..count {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.append(request(n)).await }));
    }
    for handle in handles {
        handle.await.expect("join").expect("append");
    }
}

fn assert_all_present(records: &[shared::protocol::ServiceRequest], count: usize) {
    assert_eq!(records.len(), count);
    for n in 0..count {
        assert!(
            records.iter().any(|r| r.fields == request(n)),
            "missing customer-{n}"
        );
    }
    assert!(records.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn memory_store_keeps_every_concurrent_append() {
    let store: Arc<dyn RequestStore> = Arc::new(MemoryStore::new());
    append_concurrently(store.clone(), 64).await;

    let records = store.list_all().await.expect("list");
    assert_all_present(&records, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sqlite_store_keeps_every_concurrent_append() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("requests.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));
    let store: Arc<dyn RequestStore> = Arc::new(Storage::new(&database_url).await.expect("db"));

    append_concurrently(store.clone(), 16).await;

    let records = store.list_all().await.expect("list");
    assert_all_present(&records, 16);
}
