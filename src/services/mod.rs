pub mod joyas_service;

pub use joyas_service::JoyasService;
