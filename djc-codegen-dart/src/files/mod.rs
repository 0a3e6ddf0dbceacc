//! Fixed support files shipped next to generated classes.

mod jsonbase;

pub use jsonbase::JsonBaseDart;
