//! Vector types generated by this package’s build script, with the additional `stpq` alphabet.

#![allow(missing_docs, clippy::exhaustive_structs, reason = "generated code")]

pub mod texcoord {
    include!(concat!(env!("OUT_DIR"), "/texcoord.rs"));
}
