//! resources.rs
//!
//! Page resource dictionaries (Font, XObject, ExtGState, ...) with
//! page-tree inheritance: walk from the page up through `Parent` nodes and
//! merge, a child's entry shadowing its parent's.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::document::PdfDocument;
use crate::object::{Dictionary, Object, ObjectId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    pub ext_g_state: BTreeMap<String, Object>,
    pub color_space: BTreeMap<String, Object>,
    pub pattern: BTreeMap<String, Object>,
    pub shading: BTreeMap<String, Object>,
    pub xobject: BTreeMap<String, Object>,
    pub font: BTreeMap<String, Object>,
    pub properties: BTreeMap<String, Object>,
    pub proc_set: BTreeSet<String>,
}

impl Resources {
    /// Resources effective on `page`. `extra` holds dictionaries that
    /// shadow everything inherited — a Form XObject passes its own
    /// `/Resources` here.
    pub fn from_page(doc: &mut PdfDocument, page: &Dictionary, extra: &[Dictionary]) -> Resources {
        // collect from the most specific outward
        let mut stack: Vec<Dictionary> = extra.to_vec();
        let mut visited: HashSet<ObjectId> = HashSet::new();
        let mut node = page.clone();
        loop {
            if let Some(res) = node.get("Resources").cloned() {
                if let Some(dict) = doc.resolve(&res).as_dict() {
                    stack.push(dict.clone());
                }
            }
            match node.get("Parent").cloned() {
                Some(parent) => {
                    if let Some(id) = parent.as_reference() {
                        if !visited.insert(id) {
                            break;
                        }
                    }
                    match doc.resolve(&parent).as_dict() {
                        Some(dict) => node = dict.clone(),
                        None => break,
                    }
                }
                None => break,
            }
        }

        // apply root-most first so children win
        let mut resources = Resources::default();
        while let Some(dict) = stack.pop() {
            resources.merge_from(doc, &dict);
        }
        resources
    }

    fn merge_from(&mut self, doc: &mut PdfDocument, dict: &Dictionary) {
        for (entry, value) in dict.iter() {
            let value = doc.resolve(value);
            let target = match entry.as_str() {
                "ExtGState" => &mut self.ext_g_state,
                "ColorSpace" => &mut self.color_space,
                "Pattern" => &mut self.pattern,
                "Shading" => &mut self.shading,
                "XObject" => &mut self.xobject,
                "Font" => &mut self.font,
                "Properties" => &mut self.properties,
                "ProcSet" => {
                    if let Some(items) = value.as_array() {
                        for item in items {
                            if let Some(name) = item.as_name() {
                                self.proc_set.insert(name.to_string());
                            }
                        }
                    }
                    continue;
                }
                other => {
                    log::debug!("skipping unexpected resources entry {}", other);
                    continue;
                }
            };
            match value {
                Object::Dictionary(d) => {
                    for (k, v) in d.iter() {
                        target.insert(k.clone(), v.clone());
                    }
                }
                other => log::debug!(
                    "skipping resources entry {} of type {}",
                    entry,
                    other.type_name()
                ),
            }
        }
    }
}
