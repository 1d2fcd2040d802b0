//! `SeaORM` entity definitions.

pub mod branches;
pub mod cost_centers;
pub mod financial_transactions;
pub mod sea_orm_active_enums;
