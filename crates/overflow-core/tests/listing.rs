//! Listing pipeline behavior against the in-memory store.

use async_trait::async_trait;
use serde_json::json;

use overflow_core::error::StoreError;
use overflow_core::listing::{self, ListQuery, Resource};
use overflow_core::traits::Mutation;
use overflow_core::{
    Collection, Error, Filter, FindQuery, ListParams, ListingConfig, MemoryStore, Record,
    RecordId, Store, Tag,
};

fn question(n: usize, title: &str, text: &str, tags: &[&str], blocked: bool) -> Record {
    Record::new(json!({
        "id": format!("q{:03}", n),
        "created": format!("2024-01-01T00:00:{:02}.000000Z", n % 60),
        "title": title,
        "text": text,
        "tags": tags,
        "score": n as i64,
        "isBlocked": blocked,
        "author": "u1",
    }))
    .unwrap()
}

async fn store_with(records: Vec<Record>) -> MemoryStore {
    let store = MemoryStore::new();
    for record in records {
        store.insert(Collection::Questions, record).await.unwrap();
    }
    store
}

fn query(resource: Resource, params: ListParams) -> ListQuery {
    ListQuery::build(&resource, &params, &ListingConfig::default())
}

#[tokio::test]
async fn third_page_of_twenty_five() {
    let store = store_with(
        (0..25)
            .map(|n| question(n, "title", "some text", &[], false))
            .collect(),
    )
    .await;

    let q = query(Resource::Questions, ListParams::new().page("3").limit("10"));
    let page = listing::list(&store, &q).await.unwrap();

    assert_eq!(page.status, "success");
    assert_eq!(page.page, 3);
    assert_eq!(page.count, 5);
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.pages, 3);
    assert_eq!(page.total, 25);
}

#[tokio::test]
async fn no_matches_gives_empty_envelope() {
    let store = MemoryStore::new();
    let q = query(Resource::Questions, ListParams::new().key("anything"));
    let page = listing::list(&store, &q).await.unwrap();

    assert_eq!(page.count, 0);
    assert_eq!(page.pages, 0);
    assert_eq!(page.total, 0);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn page_past_the_end_is_empty_but_counts_total() {
    let store = store_with((0..3).map(|n| question(n, "t", "x", &[], false)).collect()).await;
    let q = query(Resource::Questions, ListParams::new().page("5"));
    let page = listing::list(&store, &q).await.unwrap();

    assert_eq!(page.page, 5);
    assert_eq!(page.count, 0);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 1);
}

#[tokio::test]
async fn key_matches_title_or_text_case_insensitively() {
    let store = store_with(vec![
        question(1, "All about FOO", "body", &[], false),
        question(2, "Other", "mentions foo here", &[], false),
        question(3, "Unrelated", "nothing", &[], false),
    ])
    .await;

    let q = query(Resource::Questions, ListParams::new().key("foo"));
    let page = listing::list(&store, &q).await.unwrap();

    let mut ids: Vec<_> = page.data.iter().map(|r| r.id().to_string()).collect();
    ids.sort();
    assert_eq!(ids, vec!["q001", "q002"]);
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn tag_filter_requires_every_tag() {
    let store = store_with(vec![
        question(1, "t", "x", &["a", "b", "c"], false),
        question(2, "t", "x", &["a"], false),
        question(3, "t", "x", &["b", "a"], false),
    ])
    .await;

    let resource = Resource::TaggedQuestions {
        tags: Tag::parse_list("a,b").unwrap(),
    };
    let page = listing::list(&store, &query(resource, ListParams::new()))
        .await
        .unwrap();

    // default sort is -score
    let ids: Vec<_> = page.data.iter().map(|r| r.id().to_string()).collect();
    assert_eq!(ids, vec!["q003", "q001"]);
}

#[tokio::test]
async fn blocked_filter_composes_at_call_site() {
    let store = store_with(vec![
        question(1, "t", "x", &[], false),
        question(2, "t", "x", &[], true),
    ])
    .await;

    let q = query(Resource::Questions, ListParams::new()).and_filter(Filter::not_blocked());
    let page = listing::list(&store, &q).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].id().as_str(), "q001");
}

#[tokio::test]
async fn identical_inputs_give_identical_output() {
    let store = store_with((0..12).map(|n| question(n, "t", "x", &[], false)).collect()).await;
    let q = query(Resource::Questions, ListParams::new().page("2").sort_type("score"));

    let first = listing::list(&store, &q).await.unwrap();
    let second = listing::list(&store, &q).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_key_is_the_same_as_no_key() {
    let store = store_with((0..4).map(|n| question(n, "t", "x", &[], false)).collect()).await;

    let without = listing::list(&store, &query(Resource::Questions, ListParams::new()))
        .await
        .unwrap();
    let empty = listing::list(&store, &query(Resource::Questions, ListParams::new().key("")))
        .await
        .unwrap();
    assert_eq!(without, empty);
}

#[tokio::test]
async fn garbage_parameters_fall_back() {
    let store = store_with((0..8).map(|n| question(n, "t", "x", &[], false)).collect()).await;
    let q = query(
        Resource::Questions,
        ListParams::new().page("-1").limit("lots").sort_type("???"),
    );
    let page = listing::list(&store, &q).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.count, 6);
    assert_eq!(page.pages, 2);
    // newest first
    assert_eq!(page.data[0].id().as_str(), "q007");
}

struct BrokenStore;

#[async_trait]
impl Store for BrokenStore {
    async fn count(&self, _: Collection, _: &Filter) -> overflow_core::Result<u64> {
        Err(StoreError::Io {
            message: "connection reset".to_string(),
        }
        .into())
    }

    async fn find(&self, _: Collection, _: &FindQuery) -> overflow_core::Result<Vec<Record>> {
        Ok(Vec::new())
    }

    async fn get(&self, _: Collection, _: &RecordId) -> overflow_core::Result<Option<Record>> {
        Ok(None)
    }

    async fn insert(&self, _: Collection, _: Record) -> overflow_core::Result<()> {
        Ok(())
    }

    async fn replace(&self, _: Collection, _: Record) -> overflow_core::Result<()> {
        Ok(())
    }

    async fn update(
        &self,
        _: Collection,
        _: &RecordId,
        _: Mutation,
    ) -> overflow_core::Result<Option<Record>> {
        Ok(None)
    }

    async fn delete(&self, _: Collection, _: &RecordId) -> overflow_core::Result<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn store_failure_propagates() {
    let q = query(Resource::Blogs, ListParams::new());
    let err = listing::list(&BrokenStore, &q).await.unwrap_err();

    assert!(matches!(err, Error::Store(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_body()["message"], "Internal server error.");
}
