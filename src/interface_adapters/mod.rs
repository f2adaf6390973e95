// Interface adapters: HTTP surface and record store client.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::{AppState, SystemClock};
