pub mod activity_service;
