pub mod route_controller;

pub use route_controller::RouteController;
