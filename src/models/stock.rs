use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::stock::Stock as DomainStock;
use crate::domain::types::{StockName, TypeConstraintError};

/// Diesel model representing the `stock_info` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::stock_info)]
#[diesel(primary_key(stock_id))]
pub struct Stock {
    pub stock_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub center_id: i32,
    pub description: Option<String>,
    pub amount: i32,
    pub delete_flag: i32,
    pub create_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl TryFrom<Stock> for DomainStock {
    type Error = TypeConstraintError;

    fn try_from(stock: Stock) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stock.stock_id.try_into()?,
            category_id: stock.category_id.map(TryInto::try_into).transpose()?,
            name: StockName::new(stock.name)?,
            center_id: stock.center_id.try_into()?,
            description: stock.description,
            amount: stock.amount,
            deleted: stock.delete_flag != 0,
            created_at: stock.create_date,
            updated_at: stock.update_date,
        })
    }
}
