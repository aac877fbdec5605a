use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::center::{CenterInfo, CenterInfoUpdate, NewCenterInfo};
use crate::domain::types::{CenterId, OperationalStatus, Version};
use crate::models::center::{
    CenterInfo as DbCenterInfo, CenterInfoChangeset, NewCenterInfo as DbNewCenterInfo,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CenterInfoReader, CenterInfoWriter, CenterListQuery, DieselRepository};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

impl CenterInfoReader for DieselRepository {
    fn search_centers(&self, query: CenterListQuery) -> RepositoryResult<Vec<CenterInfo>> {
        use crate::schema::center_info;

        let mut conn = self.conn()?;

        let mut items = center_info::table
            .filter(center_info::delete_flag.eq(0))
            .filter(center_info::operational_status.eq(OperationalStatus::Active.as_i32()))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(name) = query.name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            items = items.filter(
                lower(center_info::center_name).like(format!("%{}%", name.to_lowercase())),
            );
        }

        if let Some(region) = query
            .region
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            items = items.filter(center_info::address.like(format!("%{region}%")));
        }

        let capacity_from = query.capacity_from.unwrap_or(i32::MIN);
        let capacity_to = query.capacity_to.unwrap_or(i32::MAX);
        items = items
            .filter(center_info::current_storage_capacity.ge(capacity_from))
            .filter(center_info::current_storage_capacity.le(capacity_to));

        let items = items
            .order(center_info::center_name.asc())
            .load::<DbCenterInfo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CenterInfo>, _>>()?;

        Ok(items)
    }

    fn get_center_by_id(&self, id: CenterId) -> RepositoryResult<Option<CenterInfo>> {
        use crate::schema::center_info;

        let mut conn = self.conn()?;

        let center = center_info::table
            .filter(center_info::center_id.eq(id.get()))
            .filter(center_info::delete_flag.eq(0))
            .first::<DbCenterInfo>(&mut conn)
            .optional()?;

        let center = center.map(TryInto::try_into).transpose()?;
        Ok(center)
    }
}

impl CenterInfoWriter for DieselRepository {
    fn create_center(&self, center: &NewCenterInfo) -> RepositoryResult<CenterInfo> {
        use crate::schema::center_info;

        let mut conn = self.conn()?;
        let db_center: DbNewCenterInfo = center.clone().into();

        let stored = diesel::insert_into(center_info::table)
            .values(db_center)
            .returning(DbCenterInfo::as_returning())
            .get_result::<DbCenterInfo>(&mut conn)?;

        Ok(stored.try_into()?)
    }

    fn update_center(
        &self,
        id: CenterId,
        expected_version: Version,
        update: &CenterInfoUpdate,
    ) -> RepositoryResult<Option<CenterInfo>> {
        use crate::schema::center_info;

        let mut conn = self.conn()?;
        let changes: CenterInfoChangeset = update.clone().into();

        // The version filter is the optimistic lock: a concurrent mutation
        // leaves no row to update.
        let stored = diesel::update(
            center_info::table
                .filter(center_info::center_id.eq(id.get()))
                .filter(center_info::version.eq(expected_version.get()))
                .filter(center_info::delete_flag.eq(0)),
        )
        .set((changes, center_info::version.eq(center_info::version + 1)))
        .returning(DbCenterInfo::as_returning())
        .get_result::<DbCenterInfo>(&mut conn)
        .optional()?;

        let stored = stored.map(TryInto::try_into).transpose()?;
        Ok(stored)
    }

    fn soft_delete_center(
        &self,
        id: CenterId,
        expected_version: Version,
        deleted_at: NaiveDateTime,
    ) -> RepositoryResult<usize> {
        use crate::schema::center_info;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            center_info::table
                .filter(center_info::center_id.eq(id.get()))
                .filter(center_info::version.eq(expected_version.get()))
                .filter(center_info::delete_flag.eq(0)),
        )
        .set((
            center_info::delete_flag.eq(1),
            center_info::update_date.eq(deleted_at),
            center_info::version.eq(center_info::version + 1),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
