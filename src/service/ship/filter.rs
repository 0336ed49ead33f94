//! Dynamic filter composition for ship listings.
//!
//! Each optional query parameter contributes at most one predicate fragment;
//! fragments are combined with logical AND via [`Condition::all`]. Absent
//! parameters add nothing, so an empty parameter set matches every ship.

use entity::ship;
use sea_orm::{sea_query::SimpleExpr, ColumnTrait, Condition, Value};

use crate::{
    error::ship::ShipError,
    model::ship::ShipFilterParams,
    service::ship::millis_to_datetime,
};

pub fn build_condition(params: &ShipFilterParams) -> Result<Condition, ShipError> {
    let after = params.after.map(millis_to_datetime).transpose()?;
    let before = params.before.map(millis_to_datetime).transpose()?;

    Ok(Condition::all()
        .add_option(
            params
                .name
                .as_deref()
                .map(|name| ship::Column::Name.contains(name)),
        )
        .add_option(
            params
                .planet
                .as_deref()
                .map(|planet| ship::Column::Planet.contains(planet)),
        )
        .add_option(
            params
                .ship_type
                .map(|ship_type| ship::Column::ShipType.eq(ship_type)),
        )
        .add_option(range(ship::Column::ProdDate, after, before))
        .add_option(params.is_used.map(|is_used| ship::Column::IsUsed.eq(is_used)))
        .add_option(range(ship::Column::Speed, params.min_speed, params.max_speed))
        .add_option(range(
            ship::Column::CrewSize,
            params.min_crew_size,
            params.max_crew_size,
        ))
        .add_option(range(
            ship::Column::Rating,
            params.min_rating,
            params.max_rating,
        )))
}

/// Inclusive range fragment: bound-only comparisons when one side is absent,
/// BETWEEN when both are present, nothing when neither is.
fn range<V>(column: ship::Column, min: Option<V>, max: Option<V>) -> Option<SimpleExpr>
where
    V: Into<Value>,
{
    match (min, max) {
        (None, None) => None,
        (Some(min), None) => Some(column.gte(min)),
        (None, Some(max)) => Some(column.lte(max)),
        (Some(min), Some(max)) => Some(column.between(min, max)),
    }
}
