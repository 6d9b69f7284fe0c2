//! Diesel repository behaviour against embedded PostgreSQL.
//!
//! Opt-in: `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

mod support;

use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use travel_backend::domain::ports::{
    ContactRepository, FavouriteRepository, FavouriteRepositoryError,
};
use travel_backend::domain::{ContactDraft, FavouriteDraft, FavouriteId};
use travel_backend::outbound::persistence::{
    DbPool, DieselContactRepository, DieselFavouriteRepository, PoolConfig, apply_migrations,
};
use uuid::Uuid;

use support::{create_database, embedded_postgres_enabled};

fn provision(cluster: &TestCluster) -> String {
    let connection = cluster.connection();
    let name = format!("travel_{}", Uuid::new_v4().simple());
    create_database(&connection.database_url("postgres"), &name).expect("create database");
    let url = connection.database_url(&name);
    let applied = apply_migrations(&url).expect("apply migrations");
    assert_eq!(applied, 2);
    assert_eq!(apply_migrations(&url).expect("re-apply migrations"), 0);
    url
}

async fn pool_for(url: &str) -> DbPool {
    DbPool::new(PoolConfig::new(url).with_connection_timeout(Duration::from_secs(5)))
        .await
        .expect("pool")
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_repositories_round_trip() {
    if !embedded_postgres_enabled() {
        return;
    }

    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = provision(&cluster);
    let runtime = tokio::runtime::Runtime::new().expect("runtime");

    runtime.block_on(async {
        let pool = pool_for(&url).await;
        let contacts = DieselContactRepository::new(pool.clone());
        let favourites = DieselFavouriteRepository::new(pool);

        for name in ["first", "second"] {
            let draft = ContactDraft::validate(Some(name), Some("a@b.com"), Some("hi"))
                .expect("valid draft");
            contacts.insert(&draft).await.expect("insert contact");
        }
        let listed = contacts.list_newest_first().await.expect("list contacts");
        let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);

        let paris = FavouriteDraft::try_new(Some("Paris"), Some("City")).expect("valid");
        let saved = favourites.insert(&paris).await.expect("insert favourite");
        let found = favourites
            .find_by_name("Paris")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found.id, saved.id);

        let err = favourites.insert(&paris).await.expect_err("unique index");
        assert!(matches!(err, FavouriteRepositoryError::DuplicateName { .. }));

        let rome = FavouriteDraft::try_new(Some("Rome"), Some("Eternal")).expect("valid");
        favourites.insert(&rome).await.expect("insert rome");
        let listed = favourites.list_newest_first().await.expect("list favourites");
        let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Rome", "Paris"]);

        assert!(favourites.delete(&saved.id).await.expect("delete"));
        assert!(
            !favourites
                .delete(&FavouriteId::random())
                .await
                .expect("delete unknown")
        );
        assert!(favourites.find_by_name("Paris").await.expect("lookup").is_none());
    });
}
