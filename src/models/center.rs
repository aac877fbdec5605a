use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::center::{
    CenterInfo as DomainCenterInfo, CenterInfoUpdate as DomainCenterInfoUpdate,
    NewCenterInfo as DomainNewCenterInfo,
};
use crate::domain::types::{
    Address, CenterName, ManagerName, Notes, PhoneNumber, PostalCode, TypeConstraintError,
};

/// Diesel model representing the `center_info` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::center_info)]
#[diesel(primary_key(center_id))]
pub struct CenterInfo {
    pub center_id: i32,
    pub center_name: String,
    pub post_code: String,
    pub address: String,
    pub phone_number: String,
    pub manager_name: String,
    pub operational_status: i32,
    pub max_storage_capacity: i32,
    pub current_storage_capacity: i32,
    pub notes: Option<String>,
    pub delete_flag: i32,
    pub create_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
    pub version: i64,
}

/// Insertable form of [`CenterInfo`].
///
/// Status, delete flag and version come from the column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::center_info)]
pub struct NewCenterInfo {
    pub center_name: String,
    pub post_code: String,
    pub address: String,
    pub phone_number: String,
    pub manager_name: String,
    pub max_storage_capacity: i32,
    pub current_storage_capacity: i32,
    pub notes: Option<String>,
    pub create_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

/// Changeset overwriting the mutable columns of a center row.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::center_info)]
pub struct CenterInfoChangeset {
    pub center_name: String,
    pub post_code: String,
    pub address: String,
    pub phone_number: String,
    pub manager_name: String,
    pub max_storage_capacity: i32,
    pub current_storage_capacity: i32,
    // Always write notes, including back to NULL.
    pub notes: Option<Option<String>>,
    pub update_date: NaiveDateTime,
}

impl TryFrom<CenterInfo> for DomainCenterInfo {
    type Error = TypeConstraintError;

    fn try_from(center: CenterInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: center.center_id.try_into()?,
            name: CenterName::new(center.center_name)?,
            postal_code: PostalCode::new(center.post_code)?,
            address: Address::new(center.address)?,
            phone_number: PhoneNumber::new(center.phone_number)?,
            manager_name: ManagerName::new(center.manager_name)?,
            operational_status: center.operational_status.try_into()?,
            max_storage_capacity: center.max_storage_capacity.try_into()?,
            current_storage_capacity: center.current_storage_capacity.try_into()?,
            notes: center.notes.map(Notes::new).transpose()?,
            deleted: center.delete_flag != 0,
            created_at: center.create_date,
            updated_at: center.update_date,
            version: center.version.try_into()?,
        })
    }
}

impl From<DomainNewCenterInfo> for NewCenterInfo {
    fn from(center: DomainNewCenterInfo) -> Self {
        Self {
            center_name: center.name.into_inner(),
            post_code: center.postal_code.into_inner(),
            address: center.address.into_inner(),
            phone_number: center.phone_number.into_inner(),
            manager_name: center.manager_name.into_inner(),
            max_storage_capacity: center.max_storage_capacity.get(),
            current_storage_capacity: center.current_storage_capacity.get(),
            notes: center.notes.map(Notes::into_inner),
            create_date: center.created_at,
            update_date: center.updated_at,
        }
    }
}

impl From<DomainCenterInfoUpdate> for CenterInfoChangeset {
    fn from(update: DomainCenterInfoUpdate) -> Self {
        Self {
            center_name: update.name.into_inner(),
            post_code: update.postal_code.into_inner(),
            address: update.address.into_inner(),
            phone_number: update.phone_number.into_inner(),
            manager_name: update.manager_name.into_inner(),
            max_storage_capacity: update.max_storage_capacity.get(),
            current_storage_capacity: update.current_storage_capacity.get(),
            notes: Some(update.notes.map(Notes::into_inner)),
            update_date: update.updated_at,
        }
    }
}
