mod camp_service;

pub use camp_service::CampService;
