//! Console front end: prompts, screen text, the session loop, logging.
//!
//! Everything here is generic over `BufRead` / `Write`, so the whole game can
//! be played against in-memory buffers.

pub mod input;
pub mod logging;
pub mod render;
pub mod session;

pub use input::Prompter;
pub use session::{Round, Session, SessionReport, Stage};
