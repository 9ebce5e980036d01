pub mod pet_type;
pub mod pet_type_detail;
