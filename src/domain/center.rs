use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Address, CenterId, CenterName, ManagerName, Notes, OperationalStatus, PhoneNumber, PostalCode,
    StorageCapacity, Version,
};

/// An inventory center record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterInfo {
    pub id: CenterId,
    pub name: CenterName,
    pub postal_code: PostalCode,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub manager_name: ManagerName,
    pub operational_status: OperationalStatus,
    pub max_storage_capacity: StorageCapacity,
    pub current_storage_capacity: StorageCapacity,
    pub notes: Option<Notes>,
    pub deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Optimistic-lock counter; incremented by every successful mutation.
    pub version: Version,
}

/// Information required to create a new [`CenterInfo`].
///
/// Status, delete flag and version are initialized by the repository, not
/// supplied by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCenterInfo {
    pub name: CenterName,
    pub postal_code: PostalCode,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub manager_name: ManagerName,
    pub max_storage_capacity: StorageCapacity,
    pub current_storage_capacity: StorageCapacity,
    pub notes: Option<Notes>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Mutable fields overwritten by an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterInfoUpdate {
    pub name: CenterName,
    pub postal_code: PostalCode,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub manager_name: ManagerName,
    pub max_storage_capacity: StorageCapacity,
    pub current_storage_capacity: StorageCapacity,
    pub notes: Option<Notes>,
    pub updated_at: NaiveDateTime,
}
