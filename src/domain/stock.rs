use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CenterId, StockId, StockName};

/// A stock record owned by an inventory center.
///
/// Read-only from this subsystem; stock rows are only counted and listed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stock {
    pub id: StockId,
    pub category_id: Option<CategoryId>,
    pub name: StockName,
    pub center_id: CenterId,
    pub description: Option<String>,
    pub amount: i32,
    pub deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
