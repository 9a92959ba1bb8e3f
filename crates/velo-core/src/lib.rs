//! Hardware-independent core library for velo-rs
//!
//! This crate contains all platform-agnostic logic for the velo touchscreen
//! dashboard: swipe-driven screen navigation, the bounded gauge model, the
//! UI widget system, and screen rendering.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets (ESP32-S3) and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod gauge;
pub mod navigation;
pub mod screens;
pub mod ui;
