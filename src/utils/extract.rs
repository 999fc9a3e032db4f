//! Extractores de axum con rechazo propio
//!
//! Envuelven `Json`, `Query` y `Path` para que cualquier rechazo pase por
//! `AppError` y el cliente reciba siempre el JSON con `detail`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::AppError;

/// Body JSON; un body inválido responde 422
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string; un parámetro inválido responde 400
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Parámetros de path; un id no numérico responde 400
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
