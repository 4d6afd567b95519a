//! Department sub-records aggregated by [`Destination1Dto`].
//!
//! [`Destination1Dto`]: crate::dto::Destination1Dto

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::Nullable;

/// Department attributes carried alongside a destination record. Callers
/// construct these themselves; the aggregating record only holds a value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LittleDepartDto {
    pub depart_id: Option<String>,
    pub depart_name: Option<String>,
}

impl LittleDepartDto {
    pub fn new(depart_id: Option<String>, depart_name: Option<String>) -> Self {
        Self {
            depart_id,
            depart_name,
        }
    }

    pub fn builder() -> LittleDepartDtoBuilder {
        LittleDepartDtoBuilder::default()
    }
}

impl fmt::Display for LittleDepartDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LittleDepartDto(departId={}, departName={})",
            Nullable(&self.depart_id),
            Nullable(&self.depart_name),
        )
    }
}

/// Chainable accumulator for [`LittleDepartDto`].
#[derive(Debug, Clone, Default)]
pub struct LittleDepartDtoBuilder {
    depart_id: Option<String>,
    depart_name: Option<String>,
}

impl LittleDepartDtoBuilder {
    pub fn depart_id(mut self, value: impl Into<String>) -> Self {
        self.depart_id = Some(value.into());
        self
    }

    pub fn depart_name(mut self, value: impl Into<String>) -> Self {
        self.depart_name = Some(value.into());
        self
    }

    pub fn build(&self) -> LittleDepartDto {
        LittleDepartDto {
            depart_id: self.depart_id.clone(),
            depart_name: self.depart_name.clone(),
        }
    }
}

/// Variant of [`LittleDepartDto`] used by the d1 destination shape. Same
/// contract, separate type so the two references stay distinguishable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LittleD1DepartDto {
    pub depart_id: Option<String>,
    pub depart_name: Option<String>,
}

impl LittleD1DepartDto {
    pub fn new(depart_id: Option<String>, depart_name: Option<String>) -> Self {
        Self {
            depart_id,
            depart_name,
        }
    }

    pub fn builder() -> LittleD1DepartDtoBuilder {
        LittleD1DepartDtoBuilder::default()
    }
}

impl fmt::Display for LittleD1DepartDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LittleD1DepartDto(departId={}, departName={})",
            Nullable(&self.depart_id),
            Nullable(&self.depart_name),
        )
    }
}

/// Chainable accumulator for [`LittleD1DepartDto`].
#[derive(Debug, Clone, Default)]
pub struct LittleD1DepartDtoBuilder {
    depart_id: Option<String>,
    depart_name: Option<String>,
}

impl LittleD1DepartDtoBuilder {
    pub fn depart_id(mut self, value: impl Into<String>) -> Self {
        self.depart_id = Some(value.into());
        self
    }

    pub fn depart_name(mut self, value: impl Into<String>) -> Self {
        self.depart_name = Some(value.into());
        self
    }

    pub fn build(&self) -> LittleD1DepartDto {
        LittleD1DepartDto {
            depart_id: self.depart_id.clone(),
            depart_name: self.depart_name.clone(),
        }
    }
}
