pub mod properties;
pub mod property_dto;
pub mod property_list_response;
pub mod property_response;
