use sea_orm::Order;

use super::DetailError;
use crate::entity::pet_type_detail;
use crate::models::pet_type_detail::PetTypeDetailListQuery;

const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest LIMIT/OFFSET the database drivers accept (they bind signed 64-bit).
pub const MAX_ROW_BOUND: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    PetType,
    Temperament,
    Length,
    Weight,
    CreatedAt,
}

impl SortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "petType" | "petTypeId" => Some(Self::PetType),
            "temperament" => Some(Self::Temperament),
            "length" => Some(Self::Length),
            "weight" => Some(Self::Weight),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::PetType => "petType",
            Self::Temperament => "temperament",
            Self::Length => "length",
            Self::Weight => "weight",
            Self::CreatedAt => "createdAt",
        }
    }

    pub fn column(self) -> pet_type_detail::Column {
        match self {
            Self::Id => pet_type_detail::Column::Id,
            Self::PetType => pet_type_detail::Column::PetTypeId,
            Self::Temperament => pet_type_detail::Column::Temperament,
            Self::Length => pet_type_detail::Column::Length,
            Self::Weight => pet_type_detail::Column::Weight,
            Self::CreatedAt => pet_type_detail::Column::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Parses `field[,direction]`. Any direction other than `desc`
    /// (case-insensitive) sorts ascending; an empty field means `id`.
    pub fn parse(raw: &str) -> Result<Self, DetailError> {
        let mut parts = raw.split(',').map(str::trim);
        let field = match parts.next() {
            None | Some("") => SortField::Id,
            Some(name) => SortField::parse(name).ok_or_else(|| {
                DetailError::InvalidArgument(format!(
                    "Cannot sort by '{name}': expected one of id, petType, temperament, length, weight, createdAt"
                ))
            })?,
        };
        let direction = match parts.next() {
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Ok(Self { field, direction })
    }
}

/// Validated list parameters. Also the signature the list cache is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailListRequest {
    pub name: Option<String>,
    pub page: u64,
    pub size: u64,
    pub sort: SortSpec,
}

impl Default for DetailListRequest {
    fn default() -> Self {
        Self {
            name: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortSpec::default(),
        }
    }
}

impl DetailListRequest {
    /// Lower-cased name filter, or `None` when the filter is absent or blank.
    pub fn name_filter(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Rows to skip, clamped to [`MAX_ROW_BOUND`]. A clamped offset lies past
    /// any real table, so the page comes back empty.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_ROW_BOUND)
    }

    pub fn cache_key(&self) -> String {
        format!(
            "name={:?}&page={}&size={}&sort={},{}",
            self.name,
            self.page,
            self.size,
            self.sort.field.as_str(),
            self.sort.direction.as_str()
        )
    }
}

impl TryFrom<PetTypeDetailListQuery> for DetailListRequest {
    type Error = DetailError;

    fn try_from(query: PetTypeDetailListQuery) -> Result<Self, Self::Error> {
        let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(DetailError::InvalidArgument(
                "Page size must not be less than one".into(),
            ));
        }
        if size > MAX_ROW_BOUND {
            return Err(DetailError::InvalidArgument(format!(
                "Page size must not be greater than {MAX_ROW_BOUND}"
            )));
        }
        let sort = match query.sort.as_deref() {
            Some(raw) => SortSpec::parse(raw)?,
            None => SortSpec::default(),
        };
        Ok(Self {
            name: query.name,
            page: query.page.unwrap_or(0),
            size,
            sort,
        })
    }
}
