pub mod ordering_service;
