pub mod pet_type_detail;
