//! Core library for the express-starter scaffolder.
//!
//! Reproduces a bundled template tree at a new project location. The pieces:
//! - [`exclude::ExclusionPolicy`]: which directory and file names are never copied
//! - [`materialize::Materializer`]: recursive copy under that policy
//! - [`manifest`]: rewrites `package.json` for the new project
//! - [`env`]: derives `.env` from `.env.example` once, without overwriting
//! - [`project::create_project`]: runs all of the above for one invocation
//!
//! Nothing here terminates the process or reads the working directory; the
//! binary crate decides what a failure means for the exit code.

pub mod env;
pub mod error;
pub mod exclude;
pub mod layout;
pub mod manifest;
pub mod materialize;
pub mod name;
pub mod project;
pub mod template;
