// src/extract.rs
//! Request extractors whose rejections render as `{"error": ...}` like every other failure

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);
