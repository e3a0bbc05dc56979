//! mt-addrlist: MikroTik address-list script generator
//!
//! A library for compiling a declarative catalog of named address lists
//! (static entries, local files, remote URLs) into RouterOS scripts that
//! replace the contents of the matching `/ip/firewall/address-list`.

pub mod config;
pub mod generator;
pub mod server;
pub mod source;
