pub mod db_utils;
pub mod error;
pub mod log_sink;
pub mod patch;
pub mod response;
pub mod scope;
pub mod validation;
