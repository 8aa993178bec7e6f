//! User domain entity.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ADULT_AGE_YEARS;

/// User domain entity.
///
/// Values arrive from the HTTP layer unvalidated; every text field may still
/// carry surrounding whitespace and `base_salary` may be absent. A user
/// returned by the persistence layer always has an `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Identifier assigned on save
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "1b4e28ba-2fa1-11d2-883f-0016d3cca427"))]
    pub id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Juan"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Pérez"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "1990-05-15"))]
    pub birth_date: Option<NaiveDate>,
    #[cfg_attr(feature = "openapi", schema(example = "Calle 123 #45-67"))]
    pub address: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "+57 300 123 4567"))]
    pub phone: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "juan.perez@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = 2500000))]
    pub base_salary: Option<Decimal>,
}

impl User {
    /// Check if the user is at least 18 years old today
    pub fn is_adult(&self) -> bool {
        self.is_adult_on(Utc::now().date_naive())
    }

    /// Check if the user is at least 18 years old on the given date.
    ///
    /// A user without a birth date is never an adult.
    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.birth_date
            .and_then(|birth| today.years_since(birth))
            .is_some_and(|age| age >= ADULT_AGE_YEARS)
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
