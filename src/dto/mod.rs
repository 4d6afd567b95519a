//! Transfer records moved between layers.

mod depart;
mod destination;

pub use depart::{
    LittleD1DepartDto, LittleD1DepartDtoBuilder, LittleDepartDto, LittleDepartDtoBuilder,
};
pub use destination::{Destination1Dto, Destination1DtoBuilder};
