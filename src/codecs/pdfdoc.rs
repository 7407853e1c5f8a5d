//! PDFDocEncoding, PDF 1.7 Appendix D.3

/// Byte to glyph name; `None` slots are unassigned codes.
pub static PDF_DOC_ENCODING: [Option<&str>; 256] = [
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    Some("breve"), Some("caron"), Some("circumflex"), Some("dotaccent"), Some("hungarumlaut"), Some("ogonek"), Some("degree"), Some("tilde"),
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
    Some("bullet"), Some("dagger"), Some("daggerdbl"), Some("ellipsis"), Some("emdash"), Some("endash"), Some("florin"), Some("fraction"),
    Some("guilsinglleft"), Some("guilsinglright"), Some("minus"), Some("perthousand"), Some("quotedblbase"), Some("quotedblleft"), Some("quotedblright"), Some("quoteleft"),
    Some("quoteright"), Some("quotesinglbase"), Some("trademark"), Some("fi"), Some("fl"), Some("Lslash"), Some("OE"), Some("Scaron"),
    Some("Ydieresis"), Some("Zcaron"), Some("dotlessi"), Some("lslash"), Some("oe"), Some("scaron"), Some("zcaron"), None,
    Some("Euro"), Some("exclamdown"), Some("cent"), Some("sterling"), Some("currency"), Some("yen"), Some("brokenbar"), Some("section"),
    Some("dieresis"), Some("copyright"), Some("ordfeminine"), Some("guillemotleft"), Some("logicalnot"), None, Some("registered"), Some("macron"),
    None, Some("plusminus"), Some("twosuperior"), Some("threesuperior"), Some("acute"), Some("mu"), Some("paragraph"), Some("periodcentered"),
    Some("cedilla"), Some("onesuperior"), Some("ordmasculine"), Some("guillemotright"), Some("onequarter"), Some("onehalf"), Some("threequarters"), Some("questiondown"),
    Some("Agrave"), Some("Aacute"), Some("Acircumflex"), Some("Atilde"), Some("Adieresis"), Some("Aring"), Some("AE"), Some("Ccedilla"),
    Some("Egrave"), Some("Eacute"), Some("Ecircumflex"), Some("Edieresis"), Some("Igrave"), Some("Iacute"), Some("Icircumflex"), Some("Idieresis"),
    Some("Eth"), Some("Ntilde"), Some("Ograve"), Some("Oacute"), Some("Ocircumflex"), Some("Otilde"), Some("Odieresis"), Some("multiply"),
    Some("Oslash"), Some("Ugrave"), Some("Uacute"), Some("Ucircumflex"), Some("Udieresis"), Some("Yacute"), Some("Thorn"), Some("germandbls"),
    Some("agrave"), Some("aacute"), Some("acircumflex"), Some("atilde"), Some("adieresis"), Some("aring"), Some("ae"), Some("ccedilla"),
    Some("egrave"), Some("eacute"), Some("ecircumflex"), Some("edieresis"), Some("igrave"), Some("iacute"), Some("icircumflex"), Some("idieresis"),
    Some("eth"), Some("ntilde"), Some("ograve"), Some("oacute"), Some("ocircumflex"), Some("otilde"), Some("odieresis"), Some("divide"),
    Some("oslash"), Some("ugrave"), Some("uacute"), Some("ucircumflex"), Some("udieresis"), Some("yacute"), Some("thorn"), Some("ydieresis"),
];
