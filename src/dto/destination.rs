//! Primary destination transfer record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::Nullable;
use crate::dto::{LittleD1DepartDto, LittleDepartDto};

/// Destination-side bundle of user-ish attributes plus two department
/// sub-records.
///
/// Like the other records in this crate it enforces nothing: `age` takes
/// any value, `is_true`/`is_yn` are unrelated flags, and `reg_dt` is a
/// local date-time with no timezone attached. Absent sub-records stay
/// `None`; this record never constructs them itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination1Dto {
    pub name: Option<String>,
    pub age: i32,
    pub hp_no: Option<String>,
    pub is_true: bool,
    pub reg_dt: Option<NaiveDateTime>,
    pub is_yn: bool,
    pub depart_dto: Option<LittleDepartDto>,
    pub d1_depart_dto: Option<LittleD1DepartDto>,
}

impl Destination1Dto {
    /// Build a fully populated record. Arguments follow field declaration
    /// order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        age: i32,
        hp_no: Option<String>,
        is_true: bool,
        reg_dt: Option<NaiveDateTime>,
        is_yn: bool,
        depart_dto: Option<LittleDepartDto>,
        d1_depart_dto: Option<LittleD1DepartDto>,
    ) -> Self {
        Self {
            name,
            age,
            hp_no,
            is_true,
            reg_dt,
            is_yn,
            depart_dto,
            d1_depart_dto,
        }
    }

    /// Start a builder with every field at its default.
    pub fn builder() -> Destination1DtoBuilder {
        Destination1DtoBuilder::default()
    }
}

impl fmt::Display for Destination1Dto {
    /// Renders every field in declaration order. `regDt` prints as
    /// ISO-8601 seconds precision (`2023-01-01T09:30:00`); absent values
    /// print as `null`; sub-records print via their own `Display`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destination1Dto(name={}, age={}, hpNo={}, isTrue={}, regDt={}, isYn={}, departDto={}, d1DepartDto={})",
            Nullable(&self.name),
            self.age,
            Nullable(&self.hp_no),
            self.is_true,
            Nullable(&self.reg_dt.map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())),
            self.is_yn,
            Nullable(&self.depart_dto),
            Nullable(&self.d1_depart_dto),
        )
    }
}

/// Chainable accumulator for [`Destination1Dto`]. `build` snapshots the
/// values accumulated so far without consuming the builder.
#[derive(Debug, Clone, Default)]
pub struct Destination1DtoBuilder {
    name: Option<String>,
    age: i32,
    hp_no: Option<String>,
    is_true: bool,
    reg_dt: Option<NaiveDateTime>,
    is_yn: bool,
    depart_dto: Option<LittleDepartDto>,
    d1_depart_dto: Option<LittleD1DepartDto>,
}

impl Destination1DtoBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn age(mut self, value: i32) -> Self {
        self.age = value;
        self
    }

    pub fn hp_no(mut self, value: impl Into<String>) -> Self {
        self.hp_no = Some(value.into());
        self
    }

    pub fn is_true(mut self, value: bool) -> Self {
        self.is_true = value;
        self
    }

    pub fn reg_dt(mut self, value: NaiveDateTime) -> Self {
        self.reg_dt = Some(value);
        self
    }

    pub fn is_yn(mut self, value: bool) -> Self {
        self.is_yn = value;
        self
    }

    pub fn depart_dto(mut self, value: LittleDepartDto) -> Self {
        self.depart_dto = Some(value);
        self
    }

    pub fn d1_depart_dto(mut self, value: LittleD1DepartDto) -> Self {
        self.d1_depart_dto = Some(value);
        self
    }

    /// Produce a record from the values accumulated so far. Unset fields
    /// keep their defaults (None / 0 / false).
    pub fn build(&self) -> Destination1Dto {
        Destination1Dto {
            name: self.name.clone(),
            age: self.age,
            hp_no: self.hp_no.clone(),
            is_true: self.is_true,
            reg_dt: self.reg_dt,
            is_yn: self.is_yn,
            depart_dto: self.depart_dto.clone(),
            d1_depart_dto: self.d1_depart_dto.clone(),
        }
    }
}
