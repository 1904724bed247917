//! Typed query-string parameters for the `/joyas` routes.
//!
//! The raw parameter structs accept anything the client sends as text; the
//! `TryFrom` conversions validate it before any SQL is built.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_LIMITS: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ORDER_BY: &str = "id_ASC";

/// Columns a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Nombre,
    Categoria,
    Metal,
    Precio,
    Stock,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Nombre => "nombre",
            SortField::Categoria => "categoria",
            SortField::Metal => "metal",
            SortField::Precio => "precio",
            SortField::Stock => "stock",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "nombre" => Ok(SortField::Nombre),
            "categoria" => Ok(SortField::Categoria),
            "metal" => Ok(SortField::Metal),
            "precio" => Ok(SortField::Precio),
            "stock" => Ok(SortField::Stock),
            _ => Err(AppError::InvalidInput(format!(
                "order_by field must be one of: id, nombre, categoria, metal, precio, stock (got '{}')",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(AppError::InvalidInput(format!(
                "order_by direction must be ASC or DESC (got '{}')",
                s
            )))
        }
    }
}

/// `<field>_<direction>`, split on the first underscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for OrderBy {
    fn default() -> Self {
        OrderBy {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl FromStr for OrderBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once('_').ok_or_else(|| {
            AppError::InvalidInput(format!(
                "order_by must look like <field>_<ASC|DESC> (got '{}')",
                s
            ))
        })?;

        Ok(OrderBy {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.column(), self.direction.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limits: i64,
    pub page: i64,
    offset: i64,
}

impl Pagination {
    pub fn new(limits: i64, page: i64) -> AppResult<Self> {
        if limits < 1 {
            return Err(AppError::InvalidInput(
                "limits must be a positive integer".to_string(),
            ));
        }
        if page < 1 {
            return Err(AppError::InvalidInput(
                "page must be a positive integer".to_string(),
            ));
        }
        let offset = (page - 1)
            .checked_mul(limits)
            .ok_or_else(|| AppError::InvalidInput("page is out of range".to_string()))?;

        Ok(Pagination {
            limits,
            page,
            offset,
        })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limits: DEFAULT_LIMITS,
            page: DEFAULT_PAGE,
            offset: 0,
        }
    }
}

/// Raw `GET /joyas` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListJoyasParams {
    pub limits: Option<String>,
    pub page: Option<String>,
    pub order_by: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListJoyasQuery {
    pub pagination: Pagination,
    pub order_by: OrderBy,
}

impl TryFrom<ListJoyasParams> for ListJoyasQuery {
    type Error = AppError;

    fn try_from(params: ListJoyasParams) -> Result<Self, Self::Error> {
        let limits = match present(params.limits) {
            Some(v) => parse_integer("limits", &v)?,
            None => DEFAULT_LIMITS,
        };
        let page = match present(params.page) {
            Some(v) => parse_integer("page", &v)?,
            None => DEFAULT_PAGE,
        };
        let order_by = present(params.order_by)
            .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string())
            .parse()?;

        Ok(ListJoyasQuery {
            pagination: Pagination::new(limits, page)?,
            order_by,
        })
    }
}

/// Raw `GET /joyas/filtros` query string.
#[derive(Debug, Default, Deserialize)]
pub struct FilterJoyasParams {
    pub precio_min: Option<String>,
    pub precio_max: Option<String>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

/// `None` on any field means the column is not constrained.
#[derive(Debug, Clone, PartialEq)]
pub struct JoyaFilter {
    pub precio_min: f64,
    pub precio_max: Option<f64>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

impl Default for JoyaFilter {
    fn default() -> Self {
        JoyaFilter {
            precio_min: 0.0,
            precio_max: None,
            categoria: None,
            metal: None,
        }
    }
}

impl TryFrom<FilterJoyasParams> for JoyaFilter {
    type Error = AppError;

    fn try_from(params: FilterJoyasParams) -> Result<Self, Self::Error> {
        let precio_min = match present(params.precio_min) {
            Some(v) => parse_price("precio_min", &v)?,
            None => 0.0,
        };
        let precio_max = present(params.precio_max)
            .map(|v| parse_price("precio_max", &v))
            .transpose()?;

        Ok(JoyaFilter {
            precio_min,
            precio_max,
            categoria: present(params.categoria),
            metal: present(params.metal),
        })
    }
}

/// Empty query values (`?categoria=`) count as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_integer(name: &str, value: &str) -> AppResult<i64> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("{} must be a positive integer", name)))
}

fn parse_price(name: &str, value: &str) -> AppResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| AppError::InvalidInput(format!("{} must be a number", name)))
}
