//! ESP32-S3 firmware-specific modules for velo-rs
//!
//! Hardware-facing code that cannot compile on desktop targets: the FT6336U
//! touch controller driver and the peripheral bring-up in the binary.

#![no_std]

pub mod touch;
