// SPDX-License-Identifier: MPL-2.0
//! Editor sub-state modules (transform, session, routing, persistence).

pub mod persistence;
pub mod routing;
pub mod session;
pub mod transform;

pub use session::{EditSession, ImageOrigin, LoadTicket, RenderTrigger};
pub use transform::{Constraints, Transform, TransformState};
