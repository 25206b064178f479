//! PushCourier - background push-payload to notification dispatcher
//!
//! This crate converts already-delivered push payloads (JSON) into
//! notification requests and hands each one to a display backend.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Payload/request value objects, signing resolution, errors
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, stdin, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
