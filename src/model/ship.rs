use entity::ship::{self, ShipType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A registered ship as returned by the API.
///
/// `prodDate` is exchanged as milliseconds since the Unix epoch; `rating` is
/// derived server-side and never accepted from callers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    pub id: i64,
    pub name: String,
    pub planet: String,
    #[schema(value_type = String, example = "TRANSPORT")]
    pub ship_type: ShipType,
    /// Production date as milliseconds since the Unix epoch
    pub prod_date: i64,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl From<ship::Model> for ShipDto {
    fn from(model: ship::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            planet: model.planet,
            ship_type: model.ship_type,
            prod_date: model.prod_date.and_utc().timestamp_millis(),
            is_used: model.is_used,
            speed: model.speed,
            crew_size: model.crew_size,
            rating: model.rating,
        }
    }
}

/// Request body for creating or editing a ship.
///
/// Every field is optional: creation rejects missing required fields, while
/// edits treat an absent field as "keep the stored value".
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipPayloadDto {
    pub name: Option<String>,
    pub planet: Option<String>,
    #[schema(value_type = Option<String>, example = "TRANSPORT")]
    pub ship_type: Option<ShipType>,
    /// Production date as milliseconds since the Unix epoch
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

/// Optional filter parameters for listing and counting ships.
///
/// Absent parameters contribute no filter fragment; present ones are combined
/// with logical AND.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ShipFilterParams {
    /// Substring match on the ship name
    pub name: Option<String>,
    /// Substring match on the planet
    pub planet: Option<String>,
    #[param(value_type = Option<String>, example = "TRANSPORT")]
    pub ship_type: Option<ShipType>,
    /// Earliest production date, milliseconds since the Unix epoch (inclusive)
    pub after: Option<i64>,
    /// Latest production date, milliseconds since the Unix epoch (inclusive)
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

/// Pagination and ordering parameters for ship listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index, defaults to 0
    pub page_number: Option<u64>,
    /// Page size, defaults to 3
    pub page_size: Option<u64>,
    /// Field to order by, defaults to ID
    pub order: Option<ShipOrder>,
    /// Sort direction, defaults to ASC
    pub direction: Option<SortDirection>,
}

/// Fields a ship listing can be ordered by.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    pub fn column(self) -> ship::Column {
        match self {
            Self::Id => ship::Column::Id,
            Self::Speed => ship::Column::Speed,
            Self::Date => ship::Column::ProdDate,
            Self::Rating => ship::Column::Rating,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn order(self) -> sea_orm::Order {
        match self {
            Self::Asc => sea_orm::Order::Asc,
            Self::Desc => sea_orm::Order::Desc,
        }
    }
}
