//! StandardEncoding, PDF 1.7 Appendix D.2

/// Byte to glyph name; `None` slots are unassigned codes.
pub static STANDARD_ENCODING: [Option<&str>; 256] = [
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    Some("space"), Some("exclam"), Some("quotedbl"), Some("numbersign"), Some("dollar"), Some("percent"), Some("ampersand"), Some("quoteright"),
    Some("parenleft"), Some("parenright"), Some("asterisk"), Some("plus"), Some("comma"), Some("hyphen"), Some("period"), Some("slash"),
    Some("zero"), Some("one"), Some("two"), Some("three"), Some("four"), Some("five"), Some("six"), Some("seven"),
    Some("eight"), Some("nine"), Some("colon"), Some("semicolon"), Some("less"), Some("equal"), Some("greater"), Some("question"),
    Some("at"), Some("A"), Some("B"), Some("C"), Some("D"), Some("E"), Some("F"), Some("G"),
    Some("H"), Some("I"), Some("J"), Some("K"), Some("L"), Some("M"), Some("N"), Some("O"),
    Some("P"), Some("Q"), Some("R"), Some("S"), Some("T"), Some("U"), Some("V"), Some("W"),
    Some("X"), Some("Y"), Some("Z"), Some("bracketleft"), Some("backslash"), Some("bracketright"), Some("asciicircum"), Some("underscore"),
    Some("quoteleft"), Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"), Some("g"),
    Some("h"), Some("i"), Some("j"), Some("k"), Some("l"), Some("m"), Some("n"), Some("o"),
    Some("p"), Some("q"), Some("r"), Some("s"), Some("t"), Some("u"), Some("v"), Some("w"),
    Some("x"), Some("y"), Some("z"), Some("braceleft"), Some("bar"), Some("braceright"), Some("asciitilde"), None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, Some("exclamdown"), Some("cent"), Some("sterling"), Some("fraction"), Some("yen"), Some("florin"), Some("section"),
    Some("currency"), Some("quotesingle"), Some("quotedblleft"), Some("guillemotleft"), Some("guilsinglleft"), Some("guilsinglright"), Some("fi"), Some("fl"),
    None, Some("endash"), Some("dagger"), Some("daggerdbl"), Some("periodcentered"), None, Some("paragraph"), Some("bullet"),
    Some("quotesinglbase"), Some("quotedblbase"), Some("quotedblright"), Some("guillemotright"), Some("ellipsis"), Some("perthousand"), None, Some("questiondown"),
    None, Some("grave"), Some("acute"), Some("circumflex"), Some("tilde"), Some("macron"), Some("breve"), Some("dotaccent"),
    Some("dieresis"), None, Some("degree"), Some("cedilla"), None, Some("hungarumlaut"), Some("ogonek"), Some("caron"),
    Some("emdash"), None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, Some("AE"), None, Some("ordfeminine"), None, None, None, None,
    Some("Lslash"), Some("Oslash"), Some("OE"), Some("ordmasculine"), None, None, None, None,
    None, Some("ae"), None, None, None, Some("dotlessi"), None, None,
    Some("lslash"), Some("oslash"), Some("oe"), Some("germandbls"), None, None, None, None,
];
