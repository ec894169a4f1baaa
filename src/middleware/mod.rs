/*
 * Responsibility
 * - Middleware public interface
 * - auth: token verifier + role authorizer, pipeline: composes them per route group
 * - cors / http: cross-cutting layers applied in app.rs
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod pipeline;
