//! predefined.rs
//!
//! Predefined CMap names and the character collections they belong to
//! (PDF 1.7, table 118). `Identity-H`/`Identity-V` are synthesized; the
//! CJK collection data files are not packaged, so those names currently
//! decode through the identity shape with a log line.

use crate::cmap::CMap;

/// Canonical CMap name to character collection.
pub static PREDEFINED_CMAP_NAMES: &[(&str, &str)] = &[
    // Chinese (simplified)
    ("GB-EUC-H", "Adobe-GB1-0"),
    ("GB-EUC-V", "Adobe-GB1-0"),
    ("GBpc-EUC-H", "Adobe-GB1-0"),
    ("GBpc-EUC-V", "Adobe-GB1-0"),
    ("GBK-EUC-H", "Adobe-GB1-2"),
    ("GBKp-EUC-V", "Adobe-GB1-2"),
    ("GBK2K-EUC-H", "Adobe-GB1-4"),
    ("GBK2K-EUC-V", "Adobe-GB1-4"),
    ("UniGB-UCS2-H", "Adobe-GB1-4"),
    ("UniGB-UCS2-V", "Adobe-GB1-4"),
    ("UniGB-UTF16-H", "Adobe-GB1-4"),
    ("UniGB-UTF16-V", "Adobe-GB1-4"),
    // Chinese (traditional)
    ("B5pc-H", "Adobe-CNS1-0"),
    ("B5pc-V", "Adobe-CNS1-0"),
    ("HKscs-B5-H", "Adobe-CNS1-3"),
    ("HKscs-B5-V", "Adobe-CNS1-3"),
    ("ETen-B5-H", "Adobe-CNS1-0"),
    ("ETen-B5-V", "Adobe-CNS1-0"),
    ("ETenms-B5-H", "Adobe-CNS1-0"),
    ("ETenms-B5-V", "Adobe-CNS1-0"),
    ("CNS-EUC-H", "Adobe-CNS1-0"),
    ("CNS-EUC-V", "Adobe-CNS1-0"),
    ("UniCNS-UCS2-H", "Adobe-CNS1-3"),
    ("UniCNS-UCS2-V", "Adobe-CNS1-3"),
    ("UniCNS-UTF16-H", "Adobe-CNS1-4"),
    ("UniCNS-UTF16-V", "Adobe-CNS1-4"),
    // Japanese
    ("83pv-RKSJ-H", "Adobe-Japan1-1"),
    ("83pv-RKSJ-V", "Adobe-Japan1-1"),
    ("90ms-RKSJ-H", "Adobe-Japan1-2"),
    ("90ms-RKSJ-V", "Adobe-Japan1-2"),
    ("90msp-RKSJ-H", "Adobe-Japan1-2"),
    ("90msp-RKSJ-V", "Adobe-Japan1-2"),
    ("90pv-RKSJ-H", "Adobe-Japan1-1"),
    ("90pv-RKSJ-V", "Adobe-Japan1-1"),
    ("Add-RKSJ-H", "Adobe-Japan1-1"),
    ("Add-RKSJ-V", "Adobe-Japan1-1"),
    ("EUC-H", "Adobe-Japan1-1"),
    ("EUC-V", "Adobe-Japan1-1"),
    ("Ext-RKSJ-H", "Adobe-Japan1-2"),
    ("Ext-RKSJ-V", "Adobe-Japan1-2"),
    ("H", "Adobe-Japan1-1"),
    ("V", "Adobe-Japan1-1"),
    ("UniJIS-UCS2-H", "Adobe-Japan1-4"),
    ("UniJIS-UCS2-V", "Adobe-Japan1-4"),
    ("UniJIS-UCS2-HW-H", "Adobe-Japan1-4"),
    ("UniJIS-UCS2-HW-V", "Adobe-Japan1-4"),
    ("UniJIS-UTF16-H", "Adobe-Japan1-5"),
    ("UniJIS-UTF16-V", "Adobe-Japan1-5"),
    // Korean
    ("KSC-EUC-H", "Adobe-Korea1-0"),
    ("KSC-EUC-V", "Adobe-Korea1-0"),
    ("KSCms-UHC-H", "Adobe-Korea1-1"),
    ("KSCms-UHC-V", "Adobe-Korea1-1"),
    ("KSCms-UHC-HW-H", "Adobe-Korea1-1"),
    ("KSCms-UHC-HW-V", "Adobe-Korea1-1"),
    ("KSCpc-EUC-H", "Adobe-Korea1-0"),
    ("KSCpc-EUC-V", "Adobe-Korea1-0"),
    ("UniKS-UCS2-H", "Adobe-Korea1-1"),
    ("UniKS-UCS2-V", "Adobe-Korea1-1"),
    ("UniKS-UTF16-H", "Adobe-Korea1-2"),
    ("UniKS-UTF16-V", "Adobe-Korea1-2"),
    // Generic
    ("Identity-H", "Identity-H"),
    ("Identity-V", "Identity-H"),
];

pub fn is_predefined(name: &str) -> bool {
    PREDEFINED_CMAP_NAMES.iter().any(|(n, _)| *n == name)
}

/// Loads a predefined CMap by name, `None` when the name is unknown.
pub fn load(name: &str) -> Option<CMap> {
    let collection = PREDEFINED_CMAP_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)?;
    if !collection.starts_with("Identity") {
        log::warn!(
            "character collection {} for CMap {} is not packaged, using identity",
            collection, name
        );
    }
    Some(CMap::identity(name))
}
