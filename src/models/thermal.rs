//! Thermal systems models.
//!
//! This module contains models for heat transfer experiments and related
//! components.

pub mod natural_convection;
