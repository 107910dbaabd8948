mod kv;
mod prefs;

pub use kv::Store;
