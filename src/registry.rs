//! registry.rs
//!
//! Cache of materialized indirect objects keyed by `(number, generation)`.
//! Registering an `ObjStm` stream transparently unpacks every object it
//! contains, each at generation 0.

use std::collections::HashMap;

use crate::object::{Object, ObjectId};
use crate::parser::BasicParser;

#[derive(Default)]
pub struct Registry {
    objects: HashMap<ObjectId, Object>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn is_registered(&self, num: u32, gen: u16) -> bool {
        self.objects.contains_key(&(num, gen))
    }

    pub fn get(&self, num: u32, gen: u16) -> Option<&Object> {
        self.objects.get(&(num, gen))
    }

    /// Inserts unless the key is already known; `force` overwrites (used by
    /// the xref-driven re-read path). Object streams are unpacked on the
    /// way in.
    pub fn register(&mut self, num: u32, gen: u16, value: Object, force: bool) {
        if !force && self.is_registered(num, gen) {
            return;
        }
        let unpack = match value.as_stream() {
            Some(s) if s.type_name() == Some("ObjStm") => {
                let first = s.dict.get_i64("First").unwrap_or(0);
                let n = s.dict.get_i64("N").unwrap_or(0);
                match s.filtered() {
                    Ok(data) => Some((data, first, n)),
                    Err(e) => {
                        log::error!("cannot unpack ObjStm ({}, {}): {}", num, gen, e);
                        None
                    }
                }
            }
            _ => None,
        };
        log::debug!("indirect object registered: ({}, {})", num, gen);
        self.objects.insert((num, gen), value);
        if let Some((data, first, n)) = unpack {
            log::debug!("registering ObjStm ({}, {})", num, gen);
            for (obj_num, obj) in unpack_object_stream(data, first, n) {
                self.register(obj_num, 0, obj, false);
                log::debug!("compressed object registered {} 0", obj_num);
            }
        }
    }
}

/// The leading section of a decoded object stream is `n` pairs of
/// non-negative integers `(object number, relative offset)`; the objects
/// themselves sit at `first + offset`.
fn unpack_object_stream(data: Vec<u8>, first: i64, n: i64) -> Vec<(u32, Object)> {
    let mut parser = BasicParser::from_bytes(data);
    parser.indirect_references_allowed = false;

    let mut pairs = Vec::with_capacity(n as usize);
    for _ in 0..n {
        parser.maybe_spaces_or_comments();
        let num = match parser.non_negative_int() {
            Ok(v) => v,
            Err(e) => {
                log::error!("broken ObjStm header: {}", e);
                return Vec::new();
            }
        };
        parser.maybe_spaces_or_comments();
        let offset = match parser.non_negative_int() {
            Ok(v) => v,
            Err(e) => {
                log::error!("broken ObjStm header: {}", e);
                return Vec::new();
            }
        };
        pairs.push((num as u32, offset));
    }

    let mut objects = Vec::with_capacity(pairs.len());
    for (num, offset) in pairs {
        if parser.buffer.reset(first + offset).is_err() {
            log::error!("ObjStm offset {} out of range", first + offset);
            continue;
        }
        match parser.object() {
            Ok(obj) => objects.push((num, obj)),
            Err(e) => log::error!("broken object {} in ObjStm: {}", num, e),
        }
    }
    objects
}
