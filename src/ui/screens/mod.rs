//! One screen per session phase.

pub mod loading;
pub mod question;
pub mod result;
pub mod start;
