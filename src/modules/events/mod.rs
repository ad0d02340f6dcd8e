pub mod controller;
pub mod extractor;
pub mod router;
pub mod service;
