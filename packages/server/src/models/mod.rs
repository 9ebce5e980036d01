pub mod pet_type_detail;
pub mod shared;
