//! Chat persistence abstractions and the chat service.
//!
//! `ChatRepository` is the append/list port the infrastructure layer
//! implements; `ChatService` relays a message to the provider and records
//! the exchange.

pub mod repository;
pub mod service;
