//! Services module
//! 
//! Este módulo contiene la lógica de negocio que no depende de la
//! persistencia ni de HTTP.

pub mod map_links;

pub use map_links::{MapLinkBuilder, MapProvider, Waypoint};
