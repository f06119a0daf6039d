//! Wishlist API Library
//!
//! Wishlist backend for an e-commerce storefront platform: customer
//! wishlists with private/public/shared visibility, ephemeral guest
//! wishlists that merge into an account at login, and share grants for
//! collaborative lists.
//!
//! The two decision kernels are pure functions:
//! [`services::wishlist::merge::merge_items`] reconciles two item
//! collections by product identity, and [`services::wishlist::visibility`]
//! answers can-view/can-edit/can-share for a wishlist snapshot and an actor.
//! Everything around them (services, commands, queries) is the persistence
//! and eventing shell that loads snapshots, applies decisions, and commits.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod queries;
pub mod services;

use crate::config::AppConfig;
use crate::events::EventSender;
use crate::services::WishlistService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared application state wiring the database, configuration, event
/// channel, and services together for a host embedding this crate.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
    pub event_sender: Arc<EventSender>,
    pub wishlist_service: WishlistService,
}

impl AppState {
    /// Assembles application state around an established connection pool.
    ///
    /// Returns the state and the receiving end of the event channel; the
    /// caller decides where to run [`events::process_events`].
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: AppConfig,
        event_buffer: usize,
    ) -> (Self, mpsc::Receiver<events::Event>) {
        let (tx, rx) = mpsc::channel(event_buffer);
        let event_sender = Arc::new(EventSender::new(tx));
        let config = Arc::new(config);

        let wishlist_service =
            WishlistService::new(db.clone(), event_sender.clone(), config.clone());

        (
            Self {
                db,
                config,
                event_sender,
                wishlist_service,
            },
            rx,
        )
    }
}
