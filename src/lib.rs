//! Shared data models for the model-mapper project.
//!
//! This crate holds the domain entities and the transfer records that move
//! between layers. The records here are plain data holders: every field is
//! public and independently settable, construction is available all-at-once,
//! field-by-field, or through a builder, and each record renders itself as
//! `TypeName(field=value, ...)` for logging and debugging.
//!
//! No validation or mapping logic lives here; callers own both.

pub mod domain;
pub mod dto;

mod display;

pub use domain::{User, UserBuilder};
pub use dto::{
    Destination1Dto, Destination1DtoBuilder, LittleD1DepartDto, LittleD1DepartDtoBuilder,
    LittleDepartDto, LittleDepartDtoBuilder,
};
