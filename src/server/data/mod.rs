//! Data access layer repositories.
//!
//! One repository per entity, each a thin wrapper over the SeaORM
//! connection. Repositories own the mapping between plain records
//! ([`crate::server::model`]) and the store; services above them never
//! touch ActiveModels directly.

pub mod date;
pub mod discipline;
pub mod material;
pub mod tool;
pub mod transaction;

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, ExprTrait,
};

/// Case-insensitive substring predicate for `search` parameters, pushed to
/// the store as `LOWER(col) LIKE '%term%'`. LIKE metacharacters in the
/// term match literally.
pub(crate) fn contains_insensitive<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    let pattern = format!("%{}%", escaped);

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}
