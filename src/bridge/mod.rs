//! Model Generation Bridge Module
//!
//! Forwards 3D model generation requests to the bridge service, a separate
//! process reachable over a local HTTP endpoint. The bridge does the actual
//! mesh generation; this side only relays the request and classifies failures.
//!
//! ## Failure Model
//! - **Unavailable**: the bridge could not be reached or did not answer within the timeout.
//! - **Upstream**: the bridge answered with a non-success status or a malformed body.
//!
//! Requests are never retried, and a failing bridge has no effect on the
//! search endpoints.
//!
//! ## Submodules
//! - **`client`**: The `ModelBridge` seam and its HTTP implementation.
//! - **`handlers`**: The `/generate_model` endpoint.
//! - **`protocol`**: Request/response contracts shared with the bridge.

pub mod client;
pub mod handlers;
pub mod protocol;
