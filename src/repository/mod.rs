use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::center::{CenterInfo, CenterInfoUpdate, NewCenterInfo};
use crate::domain::stock::Stock;
use crate::domain::types::{CenterId, Version};
use crate::repository::errors::RepositoryResult;

pub mod center;
pub mod errors;
pub mod stock;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when searching inventory centers.
///
/// Absent filters mean "no constraint"; the capacity range defaults to the
/// full `i32` domain.
#[derive(Debug, Clone, Default)]
pub struct CenterListQuery {
    /// Case-insensitive substring over the center name.
    pub name: Option<String>,
    /// Substring over the address.
    pub region: Option<String>,
    /// Inclusive lower bound on current storage capacity.
    pub capacity_from: Option<i32>,
    /// Inclusive upper bound on current storage capacity.
    pub capacity_to: Option<i32>,
}

impl CenterListQuery {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
    pub fn capacity_from(mut self, from: i32) -> Self {
        self.capacity_from = Some(from);
        self
    }
    pub fn capacity_to(mut self, to: i32) -> Self {
        self.capacity_to = Some(to);
        self
    }
}

/// Read-only operations for center entities.
pub trait CenterInfoReader {
    /// List live, operational centers matching the supplied query
    /// parameters.
    fn search_centers(&self, query: CenterListQuery) -> RepositoryResult<Vec<CenterInfo>>;
    /// Retrieve a live center by its identifier.
    fn get_center_by_id(&self, id: CenterId) -> RepositoryResult<Option<CenterInfo>>;
}

/// Write operations for center entities.
pub trait CenterInfoWriter {
    /// Persist a new center and return the stored record including its
    /// generated id and initial version.
    fn create_center(&self, center: &NewCenterInfo) -> RepositoryResult<CenterInfo>;
    /// Overwrite the mutable fields of a center provided the stored version
    /// still matches. Returns `None` when no row with the expected version
    /// exists; the version increments exactly once on success.
    fn update_center(
        &self,
        id: CenterId,
        expected_version: Version,
        update: &CenterInfoUpdate,
    ) -> RepositoryResult<Option<CenterInfo>>;
    /// Soft-delete a center provided the stored version still matches.
    /// Returns the number of rows affected (zero on a version mismatch).
    fn soft_delete_center(
        &self,
        id: CenterId,
        expected_version: Version,
        deleted_at: NaiveDateTime,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for stock entities.
pub trait StockReader {
    /// Count stock rows referencing the given center.
    fn count_stocks_by_center(&self, center_id: CenterId) -> RepositoryResult<i64>;
    /// List stock rows owned by the given center.
    fn list_stocks_by_center(&self, center_id: CenterId) -> RepositoryResult<Vec<Stock>>;
}
