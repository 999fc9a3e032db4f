//! Generador de enlaces de mapas
//!
//! Construye enlaces de direcciones para proveedores externos a partir de los
//! extremos de una ruta. Solo formatea cadenas, nunca llama a la red.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Route;

const GOOGLE_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";
const MAPBOX_DIRECTIONS_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

/// Proveedor de mapas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// URL con query string (`origin=...&destination=...`)
    #[default]
    Google,
    /// URL con el trayecto en el path, firmada con el token de Mapbox
    Mapbox,
}

/// Extremo de una ruta: texto libre y coordenadas opcionales
#[derive(Debug, Clone, Copy)]
pub struct Waypoint<'a> {
    pub location: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl<'a> Waypoint<'a> {
    pub fn new(location: &'a str, lat: Option<f64>, lng: Option<f64>) -> Self {
        Self { location, lat, lng }
    }

    /// Token que identifica el extremo dentro de la URL.
    ///
    /// Las coordenadas solo se usan si ambas existen y son distintas de cero;
    /// un valor exacto de 0.0 cuenta como ausente.
    fn token(&self) -> String {
        match (non_zero(self.lat), non_zero(self.lng)) {
            (Some(lat), Some(lng)) => format!("{},{}", format_coordinate(lat), format_coordinate(lng)),
            _ => urlencoding::encode(self.location).into_owned(),
        }
    }
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// `{:?}` conserva el `.0` de los valores enteros: 1.0 -> "1.0".
///
/// Por debajo de 1e-4 pasa a notación exponencial sin relleno en el
/// exponente (`1e-7`, no `1e-07`). Ninguna coordenada real cae ahí salvo
/// ruido numérico alrededor de 0.
fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}

/// Generador de enlaces; solo conoce la clave de Mapbox
#[derive(Debug, Clone)]
pub struct MapLinkBuilder {
    mapbox_access_token: String,
}

impl MapLinkBuilder {
    pub fn new(mapbox_access_token: String) -> Self {
        Self { mapbox_access_token }
    }

    /// Construir la URL de direcciones entre dos extremos
    pub fn directions_url(&self, provider: MapProvider, start: &Waypoint<'_>, end: &Waypoint<'_>) -> String {
        let origin = start.token();
        let destination = end.token();

        match provider {
            MapProvider::Google => format!(
                "{}&origin={}&destination={}",
                GOOGLE_DIRECTIONS_URL, origin, destination
            ),
            MapProvider::Mapbox => format!(
                "{}/{};{}?access_token={}",
                MAPBOX_DIRECTIONS_URL, origin, destination, self.mapbox_access_token
            ),
        }
    }

    /// Atajo para una ruta persistida
    pub fn route_url(&self, provider: MapProvider, route: &Route) -> String {
        let start = Waypoint::new(&route.start_location, route.start_lat, route.start_lng);
        let end = Waypoint::new(&route.end_location, route.end_lat, route.end_lng);
        self.directions_url(provider, &start, &end)
    }
}
