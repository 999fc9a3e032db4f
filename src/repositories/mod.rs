pub mod memory_route_repository;
pub mod route_repository;

pub use memory_route_repository::InMemoryRouteRepository;
pub use route_repository::{DynRouteRepository, PgRouteRepository, RouteRepository};
