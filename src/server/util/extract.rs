//! Extractors whose rejections render as the application's JSON error body.
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies; these wrappers
//! route the rejection through `AppError` so clients always receive `{"error": "..."}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
