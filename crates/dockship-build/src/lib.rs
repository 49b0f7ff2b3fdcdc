//! Flask app and Dockerfile scaffolding for dockship.
//!
//! # Deploy pipeline
//!
//! ```text
//! dockship
//!   1. Entry point ── <app>/app.py
//!   2. Dockerfile  ── <app>/Dockerfile
//!   3. Build       ── docker build -t <image> <app>
//!   4. Run         ── docker run -d --name <container> -p <port>:5000 <image>
//! ```
//!
//! Steps 1 and 2 live in this crate; both overwrite whatever is already
//! in the app directory.

pub mod app;
pub mod dockerfile;
pub mod scaffold;

pub use app::FlaskAppGenerator;
pub use dockerfile::DockerfileGenerator;
pub use scaffold::{ScaffoldError, Scaffolded, scaffold, write_build_descriptor, write_entry_point};
