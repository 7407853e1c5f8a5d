//! MacRomanEncoding, PDF 1.7 Appendix D.2

/// Byte to glyph name; `None` slots are unassigned codes.
pub static MAC_ROMAN_ENCODING: [Option<&str>; 256] = [
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    Some("space"), Some("exclam"), Some("quotedbl"), Some("numbersign"), Some("dollar"), Some("percent"), Some("ampersand"), Some("quotesingle"),
    Some("parenleft"), Some("parenright"), Some("asterisk"), Some("plus"), Some("comma"), Some("hyphen"), Some("period"), Some("slash"),
    Some("zero"), Some("one"), Some("two"), Some("three"), Some("four"), Some("five"), Some("six"), Some("seven"),
    Some("eight"), Some("nine"), Some("colon"), Some("semicolon"), Some("less"), Some("equal"), Some("greater"), Some("question"),
    Some("at"), Some("A"), Some("B"), Some("C"), Some("D"), Some("E"), Some("F"), Some("G"),
    Some("H"), Some("I"), Some("J"), Some("K"), Some("L"), Some("M"), Some("N"), Some("O"),
    Some("P"), Some("Q"), Some("R"), Some("S"), Some("T"), Some("U"), Some("V"), Some("W"),
    Some("X"), Some("Y"), Some("Z"), Some("bracketleft"), Some("backslash"), Some("bracketright"), Some("asciicircum"), Some("underscore"),
    Some("grave"), Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"), Some("g"),
    Some("h"), Some("i"), Some("j"), Some("k"), Some("l"), Some("m"), Some("n"), Some("o"),
    Some("p"), Some("q"), Some("r"), Some("s"), Some("t"), Some("u"), Some("v"), Some("w"),
    Some("x"), Some("y"), Some("z"), Some("braceleft"), Some("bar"), Some("braceright"), Some("asciitilde"), None,
    Some("Adieresis"), Some("Aring"), Some("Ccedilla"), Some("Eacute"), Some("Ntilde"), Some("Odieresis"), Some("Udieresis"), Some("aacute"),
    Some("agrave"), Some("acircumflex"), Some("adieresis"), Some("atilde"), Some("aring"), Some("ccedilla"), Some("eacute"), Some("egrave"),
    Some("ecircumflex"), Some("edieresis"), Some("iacute"), Some("igrave"), Some("icircumflex"), Some("idieresis"), Some("ntilde"), Some("oacute"),
    Some("ograve"), Some("ocircumflex"), Some("odieresis"), Some("otilde"), Some("uacute"), Some("ugrave"), Some("ucircumflex"), Some("udieresis"),
    Some("dagger"), None, Some("cent"), Some("sterling"), Some("section"), Some("bullet"), Some("paragraph"), Some("germandbls"),
    Some("registered"), Some("copyright"), Some("trademark"), Some("acute"), Some("dieresis"), None, Some("AE"), Some("Oslash"),
    None, Some("plusminus"), None, None, Some("yen"), Some("mu"), None, None,
    None, None, None, Some("ordfeminine"), Some("ordmasculine"), None, Some("ae"), Some("oslash"),
    Some("questiondown"), Some("exclamdown"), Some("logicalnot"), None, Some("florin"), None, None, Some("guillemotleft"),
    Some("guillemotright"), Some("ellipsis"), None, Some("Agrave"), Some("Atilde"), Some("Otilde"), Some("OE"), Some("oe"),
    Some("endash"), Some("emdash"), Some("quotedblleft"), Some("quotedblright"), Some("quoteleft"), Some("quoteright"), Some("divide"), None,
    Some("ydieresis"), Some("Ydieresis"), Some("fraction"), Some("currency"), Some("guilsinglleft"), Some("guilsinglright"), Some("fi"), Some("fl"),
    Some("daggerdbl"), Some("periodcentered"), Some("quotesinglbase"), Some("quotedblbase"), Some("perthousand"), Some("Acircumflex"), Some("Ecircumflex"), Some("Aacute"),
    Some("Edieresis"), Some("Egrave"), Some("Iacute"), Some("Icircumflex"), Some("Idieresis"), Some("Igrave"), Some("Oacute"), Some("Ocircumflex"),
    None, Some("Ograve"), Some("Uacute"), Some("Ucircumflex"), Some("Ugrave"), Some("dotlessi"), Some("circumflex"), Some("tilde"),
    Some("macron"), Some("breve"), Some("dotaccent"), Some("degree"), Some("cedilla"), Some("hungarumlaut"), Some("ogonek"), Some("caron"),
];
