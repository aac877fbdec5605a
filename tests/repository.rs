use chrono::Utc;
use diesel::prelude::*;
use drone_inventory::domain::center::{CenterInfoUpdate, NewCenterInfo};
use drone_inventory::domain::types::{
    Address, CenterId, CenterName, ManagerName, PhoneNumber, PostalCode, StorageCapacity, Version,
};
use drone_inventory::repository::{
    CenterInfoReader, CenterInfoWriter, CenterListQuery, DieselRepository, StockReader,
};
use drone_inventory::schema::{center_info, stock_info};

mod common;

fn new_center(name: &str, address: &str, current_capacity: i32) -> NewCenterInfo {
    let now = Utc::now().naive_utc();
    NewCenterInfo {
        name: CenterName::new(name).expect("valid center name"),
        postal_code: PostalCode::new("123-4567").expect("valid postal code"),
        address: Address::new(address).expect("valid address"),
        phone_number: PhoneNumber::new("03-1234-5678").expect("valid phone number"),
        manager_name: ManagerName::new("Aoi Tanaka").expect("valid manager name"),
        max_storage_capacity: StorageCapacity::new(1000).expect("valid capacity"),
        current_storage_capacity: StorageCapacity::new(current_capacity)
            .expect("valid capacity"),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_update(name: &str) -> CenterInfoUpdate {
    CenterInfoUpdate {
        name: CenterName::new(name).expect("valid center name"),
        postal_code: PostalCode::new("765-4321").expect("valid postal code"),
        address: Address::new("4-5-6 Naniwa, Osaka").expect("valid address"),
        phone_number: PhoneNumber::new("06-1234-5678").expect("valid phone number"),
        manager_name: ManagerName::new("Ren Sato").expect("valid manager name"),
        max_storage_capacity: StorageCapacity::new(800).expect("valid capacity"),
        current_storage_capacity: StorageCapacity::new(400).expect("valid capacity"),
        notes: None,
        updated_at: Utc::now().naive_utc(),
    }
}

fn insert_stock(repo_pool: &drone_inventory::db::DbPool, center_id: CenterId, name: &str) {
    let mut conn = repo_pool.get().expect("should acquire DB connection");
    let now = Utc::now().naive_utc();
    diesel::insert_into(stock_info::table)
        .values((
            stock_info::name.eq(name),
            stock_info::center_id.eq(center_id.get()),
            stock_info::amount.eq(5),
            stock_info::create_date.eq(now),
            stock_info::update_date.eq(now),
        ))
        .execute(&mut conn)
        .expect("should create stock row");
}

#[test]
fn create_center_assigns_id_and_initial_version() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let stored = repo
        .create_center(&new_center("North Hub", "1-2-3 Chiyoda, Tokyo", 300))
        .expect("should create center");

    assert!(stored.id.get() > 0);
    assert_eq!(stored.version, Version::initial());
    assert!(!stored.deleted);

    let fetched = repo
        .get_center_by_id(stored.id)
        .expect("should fetch center")
        .expect("inserted center should exist");
    assert_eq!(fetched.name, CenterName::new("North Hub").unwrap());
}

#[test]
fn search_applies_name_region_and_capacity_filters() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_center(&new_center("North Hub", "1-2-3 Chiyoda, Tokyo", 300))
        .expect("should create center");
    repo.create_center(&new_center("North Annex", "4-5-6 Naniwa, Osaka", 300))
        .expect("should create center");
    repo.create_center(&new_center("South Hub", "7-8-9 Chuo, Tokyo", 300))
        .expect("should create center");
    repo.create_center(&new_center("North Depot", "9-9-9 Minato, Tokyo", 900))
        .expect("should create center");

    let query = CenterListQuery::default()
        .name("north")
        .region("Tokyo")
        .capacity_from(100)
        .capacity_to(500);
    let results = repo.search_centers(query).expect("should search centers");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, CenterName::new("North Hub").unwrap());
}

#[test]
fn search_without_filters_returns_all_live_centers_ordered_by_name() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_center(&new_center("South Hub", "Osaka", 300))
        .expect("should create center");
    repo.create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");

    let results = repo
        .search_centers(CenterListQuery::default())
        .expect("should search centers");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, CenterName::new("North Hub").unwrap());
    assert_eq!(results[1].name, CenterName::new("South Hub").unwrap());
}

#[test]
fn search_excludes_suspended_and_soft_deleted_centers() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let suspended = repo
        .create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");
    let deleted = repo
        .create_center(&new_center("North Annex", "Tokyo", 300))
        .expect("should create center");

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    diesel::update(center_info::table.filter(center_info::center_id.eq(suspended.id.get())))
        .set(center_info::operational_status.eq(1))
        .execute(&mut conn)
        .expect("should suspend center");

    let affected = repo
        .soft_delete_center(deleted.id, deleted.version, Utc::now().naive_utc())
        .expect("should soft delete center");
    assert_eq!(affected, 1);

    let results = repo
        .search_centers(CenterListQuery::default().name("North"))
        .expect("should search centers");
    assert!(results.is_empty());
}

#[test]
fn update_center_overwrites_fields_and_bumps_version() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let stored = repo
        .create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");

    let updated = repo
        .update_center(stored.id, stored.version, &sample_update("Renamed Hub"))
        .expect("should update center")
        .expect("matching version should update");

    assert_eq!(updated.name, CenterName::new("Renamed Hub").unwrap());
    assert_eq!(updated.version.get(), stored.version.get() + 1);
    assert_eq!(updated.current_storage_capacity.get(), 400);
}

#[test]
fn update_center_with_stale_version_leaves_row_unchanged() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let stored = repo
        .create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");

    let stale = Version::new(stored.version.get() + 5).unwrap();
    let outcome = repo
        .update_center(stored.id, stale, &sample_update("Renamed Hub"))
        .expect("update should not error");
    assert!(outcome.is_none());

    let fetched = repo
        .get_center_by_id(stored.id)
        .expect("should fetch center")
        .expect("center should still exist");
    assert_eq!(fetched.name, CenterName::new("North Hub").unwrap());
    assert_eq!(fetched.version, stored.version);
}

#[test]
fn soft_delete_requires_a_matching_version() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let stored = repo
        .create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");

    let stale = Version::new(stored.version.get() + 1).unwrap();
    let affected = repo
        .soft_delete_center(stored.id, stale, Utc::now().naive_utc())
        .expect("delete should not error");
    assert_eq!(affected, 0);

    let affected = repo
        .soft_delete_center(stored.id, stored.version, Utc::now().naive_utc())
        .expect("should soft delete center");
    assert_eq!(affected, 1);

    // Soft-deleted rows are invisible to lookups.
    assert!(repo
        .get_center_by_id(stored.id)
        .expect("should fetch center")
        .is_none());
}

#[test]
fn stock_rows_are_counted_and_listed_per_center() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_center(&new_center("North Hub", "Tokyo", 300))
        .expect("should create center");
    let second = repo
        .create_center(&new_center("South Hub", "Osaka", 300))
        .expect("should create center");

    let pool = test_db.pool();
    insert_stock(&pool, first.id, "Propeller blade");
    insert_stock(&pool, first.id, "Battery pack");

    assert_eq!(
        repo.count_stocks_by_center(first.id)
            .expect("should count stocks"),
        2
    );
    assert_eq!(
        repo.count_stocks_by_center(second.id)
            .expect("should count stocks"),
        0
    );

    let stocks = repo
        .list_stocks_by_center(first.id)
        .expect("should list stocks");
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].name.as_str(), "Battery pack");
    assert!(stocks.iter().all(|s| s.center_id == first.id));
}
