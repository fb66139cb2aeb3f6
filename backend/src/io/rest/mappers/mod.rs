pub mod client_mapper;
