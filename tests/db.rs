use diesel::prelude::*;
use drone_inventory::schema::{center_info, stock_info};

mod common;

#[test]
fn migrations_create_empty_inventory_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db
        .pool()
        .get()
        .expect("should acquire DB connection");

    let centers = center_info::table
        .count()
        .get_result::<i64>(&mut conn)
        .expect("center_info should be queryable");
    let stocks = stock_info::table
        .count()
        .get_result::<i64>(&mut conn)
        .expect("stock_info should be queryable");

    assert_eq!(centers, 0);
    assert_eq!(stocks, 0);
}
