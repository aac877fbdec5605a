use diesel::prelude::*;

use crate::domain::stock::Stock;
use crate::domain::types::CenterId;
use crate::models::stock::Stock as DbStock;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, StockReader};

impl StockReader for DieselRepository {
    fn count_stocks_by_center(&self, center_id: CenterId) -> RepositoryResult<i64> {
        use crate::schema::stock_info;

        let mut conn = self.conn()?;

        let total = stock_info::table
            .filter(stock_info::center_id.eq(center_id.get()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    fn list_stocks_by_center(&self, center_id: CenterId) -> RepositoryResult<Vec<Stock>> {
        use crate::schema::stock_info;

        let mut conn = self.conn()?;

        let items = stock_info::table
            .filter(stock_info::center_id.eq(center_id.get()))
            .order(stock_info::name.asc())
            .load::<DbStock>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Stock>, _>>()?;

        Ok(items)
    }
}
