//! User interface layer: render targets and state-driven rendering.
//!
//! This module owns the boundary between the sidebar state machine and the
//! hosting page. The controller never talks to the host directly; it renders
//! through the [`Element`]/[`Page`] traits, which the host implements over its
//! real elements and tests implement with recording fakes.
//!
//! # Architecture
//!
//! ```text
//! SidebarState → renderer::apply → class toggles on RenderTargets
//! ```
//!
//! # Modules
//!
//! - [`classes`]: the fixed class and icon vocabulary shared with the stylesheet
//! - [`targets`]: render-target traits and the optional-target container
//! - [`renderer`]: full-state apply and toggle-icon refresh

pub mod classes;
pub mod renderer;
pub mod targets;

pub use targets::{Element, Page, RenderTargets};
