//! Adobe Glyph List — the portion covering the standard Latin
//! encodings, Greek, and the symbol repertoire the simple fonts use.

/// Sorted by glyph name for binary search.
pub static ADOBE_GLYPH_LIST: &[(&str, &str)] = &[
    ("A", "A"),
    ("AE", "\u{c6}"),
    ("Aacute", "\u{c1}"),
    ("Abreve", "\u{0102}"),
    ("Acircumflex", "\u{c2}"),
    ("Adieresis", "\u{c4}"),
    ("Agrave", "\u{c0}"),
    ("Alpha", "\u{0391}"),
    ("Amacron", "\u{0100}"),
    ("Aogonek", "\u{0104}"),
    ("Aring", "\u{c5}"),
    ("Atilde", "\u{c3}"),
    ("B", "B"),
    ("Beta", "\u{0392}"),
    ("C", "C"),
    ("Cacute", "\u{0106}"),
    ("Ccaron", "\u{010c}"),
    ("Ccedilla", "\u{c7}"),
    ("Chi", "\u{03a7}"),
    ("D", "D"),
    ("Dcaron", "\u{010e}"),
    ("Dcroat", "\u{0110}"),
    ("Delta", "\u{2206}"),
    ("E", "E"),
    ("Eacute", "\u{c9}"),
    ("Ecaron", "\u{011a}"),
    ("Ecircumflex", "\u{ca}"),
    ("Edieresis", "\u{cb}"),
    ("Edotaccent", "\u{0116}"),
    ("Egrave", "\u{c8}"),
    ("Emacron", "\u{0112}"),
    ("Eogonek", "\u{0118}"),
    ("Epsilon", "\u{0395}"),
    ("Eta", "\u{0397}"),
    ("Eth", "\u{d0}"),
    ("Euro", "\u{20ac}"),
    ("F", "F"),
    ("G", "G"),
    ("Gamma", "\u{0393}"),
    ("Gbreve", "\u{011e}"),
    ("Gcommaaccent", "\u{0122}"),
    ("H", "H"),
    ("I", "I"),
    ("Iacute", "\u{cd}"),
    ("Icircumflex", "\u{ce}"),
    ("Idieresis", "\u{cf}"),
    ("Idotaccent", "\u{0130}"),
    ("Ifraktur", "\u{2111}"),
    ("Igrave", "\u{cc}"),
    ("Imacron", "\u{012a}"),
    ("Iogonek", "\u{012e}"),
    ("Iota", "\u{0399}"),
    ("J", "J"),
    ("K", "K"),
    ("Kappa", "\u{039a}"),
    ("Kcommaaccent", "\u{0136}"),
    ("L", "L"),
    ("Lacute", "\u{0139}"),
    ("Lambda", "\u{039b}"),
    ("Lcaron", "\u{013d}"),
    ("Lcommaaccent", "\u{013b}"),
    ("Lslash", "\u{0141}"),
    ("M", "M"),
    ("Mu", "\u{039c}"),
    ("N", "N"),
    ("Nacute", "\u{0143}"),
    ("Ncaron", "\u{0147}"),
    ("Ncommaaccent", "\u{0145}"),
    ("Ntilde", "\u{d1}"),
    ("Nu", "\u{039d}"),
    ("O", "O"),
    ("OE", "\u{0152}"),
    ("Oacute", "\u{d3}"),
    ("Ocircumflex", "\u{d4}"),
    ("Odieresis", "\u{d6}"),
    ("Ograve", "\u{d2}"),
    ("Ohorn", "\u{01a0}"),
    ("Ohungarumlaut", "\u{0150}"),
    ("Omacron", "\u{014c}"),
    ("Omega", "\u{2126}"),
    ("Omicron", "\u{039f}"),
    ("Oslash", "\u{d8}"),
    ("Otilde", "\u{d5}"),
    ("P", "P"),
    ("Phi", "\u{03a6}"),
    ("Pi", "\u{03a0}"),
    ("Psi", "\u{03a8}"),
    ("Q", "Q"),
    ("R", "R"),
    ("Racute", "\u{0154}"),
    ("Rcaron", "\u{0158}"),
    ("Rcommaaccent", "\u{0156}"),
    ("Rfraktur", "\u{211c}"),
    ("Rho", "\u{03a1}"),
    ("S", "S"),
    ("Sacute", "\u{015a}"),
    ("Scaron", "\u{0160}"),
    ("Scedilla", "\u{015e}"),
    ("Schwa", "\u{018f}"),
    ("Sigma", "\u{03a3}"),
    ("T", "T"),
    ("Tau", "\u{03a4}"),
    ("Tcaron", "\u{0164}"),
    ("Theta", "\u{0398}"),
    ("Thorn", "\u{de}"),
    ("U", "U"),
    ("Uacute", "\u{da}"),
    ("Ucircumflex", "\u{db}"),
    ("Udieresis", "\u{dc}"),
    ("Ugrave", "\u{d9}"),
    ("Uhorn", "\u{01af}"),
    ("Uhungarumlaut", "\u{0170}"),
    ("Umacron", "\u{016a}"),
    ("Uogonek", "\u{0172}"),
    ("Upsilon", "\u{03a5}"),
    ("Upsilon1", "\u{03d2}"),
    ("Uring", "\u{016e}"),
    ("V", "V"),
    ("W", "W"),
    ("Wcircumflex", "\u{0174}"),
    ("X", "X"),
    ("Xi", "\u{039e}"),
    ("Y", "Y"),
    ("Yacute", "\u{dd}"),
    ("Ycircumflex", "\u{0176}"),
    ("Ydieresis", "\u{0178}"),
    ("Z", "Z"),
    ("Zacute", "\u{0179}"),
    ("Zcaron", "\u{017d}"),
    ("Zdotaccent", "\u{017b}"),
    ("Zeta", "\u{0396}"),
    ("a", "a"),
    ("aacute", "\u{e1}"),
    ("abreve", "\u{0103}"),
    ("acircumflex", "\u{e2}"),
    ("acute", "\u{b4}"),
    ("adieresis", "\u{e4}"),
    ("ae", "\u{e6}"),
    ("afii299", "\u{200e}"),
    ("afii300", "\u{200f}"),
    ("afii301", "\u{200d}"),
    ("afii61664", "\u{200c}"),
    ("agrave", "\u{e0}"),
    ("aleph", "\u{2135}"),
    ("alpha", "\u{03b1}"),
    ("amacron", "\u{0101}"),
    ("ampersand", "&"),
    ("angle", "\u{2220}"),
    ("aogonek", "\u{0105}"),
    ("apple", "\u{f8ff}"),
    ("approxequal", "\u{2248}"),
    ("aring", "\u{e5}"),
    ("arrowboth", "\u{2194}"),
    ("arrowdblboth", "\u{21d4}"),
    ("arrowdbldown", "\u{21d3}"),
    ("arrowdblleft", "\u{21d0}"),
    ("arrowdblright", "\u{21d2}"),
    ("arrowdblup", "\u{21d1}"),
    ("arrowdown", "\u{2193}"),
    ("arrowleft", "\u{2190}"),
    ("arrowright", "\u{2192}"),
    ("arrowup", "\u{2191}"),
    ("arrowupdn", "\u{2195}"),
    ("asciicircum", "^"),
    ("asciitilde", "~"),
    ("asterisk", "*"),
    ("asteriskmath", "\u{2217}"),
    ("at", "@"),
    ("atilde", "\u{e3}"),
    ("b", "b"),
    ("backslash", "\\"),
    ("bar", "|"),
    ("beta", "\u{03b2}"),
    ("blackcircle", "\u{25cf}"),
    ("blacksquare", "\u{25a0}"),
    ("braceleft", "{"),
    ("braceright", "}"),
    ("bracketleft", "["),
    ("bracketright", "]"),
    ("breve", "\u{02d8}"),
    ("brokenbar", "\u{a6}"),
    ("bullet", "\u{2022}"),
    ("c", "c"),
    ("cacute", "\u{0107}"),
    ("caron", "\u{02c7}"),
    ("carriagereturn", "\u{21b5}"),
    ("ccaron", "\u{010d}"),
    ("ccedilla", "\u{e7}"),
    ("cedilla", "\u{b8}"),
    ("cent", "\u{a2}"),
    ("centinferior", "\u{f6e0}"),
    ("chi", "\u{03c7}"),
    ("circle", "\u{25cb}"),
    ("circlemultiply", "\u{2297}"),
    ("circleplus", "\u{2295}"),
    ("circumflex", "\u{02c6}"),
    ("club", "\u{2663}"),
    ("colon", ":"),
    ("colonmonetary", "\u{20a1}"),
    ("colonsign", "\u{20a1}"),
    ("comma", ","),
    ("commaaccent", "\u{f6c3}"),
    ("congruent", "\u{2245}"),
    ("copyright", "\u{a9}"),
    ("cruzeiro", "\u{20a2}"),
    ("currency", "\u{a4}"),
    ("d", "d"),
    ("dagger", "\u{2020}"),
    ("daggerdbl", "\u{2021}"),
    ("dcaron", "\u{010f}"),
    ("dcroat", "\u{0111}"),
    ("degree", "\u{b0}"),
    ("delta", "\u{03b4}"),
    ("diamond", "\u{2666}"),
    ("dieresis", "\u{a8}"),
    ("divide", "\u{f7}"),
    ("dollar", "$"),
    ("dollarinferior", "\u{f6e3}"),
    ("dong", "\u{20ab}"),
    ("dotaccent", "\u{02d9}"),
    ("dotlessi", "\u{0131}"),
    ("dotmath", "\u{22c5}"),
    ("e", "e"),
    ("eacute", "\u{e9}"),
    ("ecaron", "\u{011b}"),
    ("ecircumflex", "\u{ea}"),
    ("edieresis", "\u{eb}"),
    ("edotaccent", "\u{0117}"),
    ("egrave", "\u{e8}"),
    ("eight", "8"),
    ("eightinferior", "\u{2088}"),
    ("eightsuperior", "\u{2078}"),
    ("element", "\u{2208}"),
    ("ellipsis", "\u{2026}"),
    ("emacron", "\u{0113}"),
    ("emdash", "\u{2014}"),
    ("emptyset", "\u{2205}"),
    ("endash", "\u{2013}"),
    ("eogonek", "\u{0119}"),
    ("epsilon", "\u{03b5}"),
    ("equal", "="),
    ("equivalence", "\u{2261}"),
    ("estimated", "\u{212e}"),
    ("eta", "\u{03b7}"),
    ("eth", "\u{f0}"),
    ("exclam", "!"),
    ("exclamdbl", "\u{203c}"),
    ("exclamdown", "\u{a1}"),
    ("existential", "\u{2203}"),
    ("f", "f"),
    ("female", "\u{2640}"),
    ("ff", "\u{fb00}"),
    ("ffi", "\u{fb03}"),
    ("ffl", "\u{fb04}"),
    ("fi", "\u{fb01}"),
    ("figuredash", "\u{2012}"),
    ("filledbox", "\u{25a0}"),
    ("five", "5"),
    ("fiveeighths", "\u{215d}"),
    ("fiveinferior", "\u{2085}"),
    ("fivesuperior", "\u{2075}"),
    ("fl", "\u{fb02}"),
    ("florin", "\u{0192}"),
    ("four", "4"),
    ("fourinferior", "\u{2084}"),
    ("foursuperior", "\u{2074}"),
    ("fraction", "\u{2044}"),
    ("fractionslash", "\u{2215}"),
    ("franc", "\u{20a3}"),
    ("g", "g"),
    ("gamma", "\u{03b3}"),
    ("gbreve", "\u{011f}"),
    ("gcommaaccent", "\u{0123}"),
    ("germandbls", "\u{df}"),
    ("gradient", "\u{2207}"),
    ("grave", "`"),
    ("greater", ">"),
    ("greaterequal", "\u{2265}"),
    ("guillemotleft", "\u{ab}"),
    ("guillemotright", "\u{bb}"),
    ("guilsinglleft", "\u{2039}"),
    ("guilsinglright", "\u{203a}"),
    ("h", "h"),
    ("heart", "\u{2665}"),
    ("horizontalbar", "\u{2015}"),
    ("hungarumlaut", "\u{02dd}"),
    ("hyphen", "-"),
    ("i", "i"),
    ("iacute", "\u{ed}"),
    ("icircumflex", "\u{ee}"),
    ("idieresis", "\u{ef}"),
    ("igrave", "\u{ec}"),
    ("imacron", "\u{012b}"),
    ("infinity", "\u{221e}"),
    ("integral", "\u{222b}"),
    ("interrobang", "\u{203d}"),
    ("intersection", "\u{2229}"),
    ("invbullet", "\u{25d8}"),
    ("invcircle", "\u{25d9}"),
    ("invsmileface", "\u{263b}"),
    ("iogonek", "\u{012f}"),
    ("iota", "\u{03b9}"),
    ("j", "j"),
    ("k", "k"),
    ("kappa", "\u{03ba}"),
    ("kcommaaccent", "\u{0137}"),
    ("l", "l"),
    ("lacute", "\u{013a}"),
    ("lambda", "\u{03bb}"),
    ("lcaron", "\u{013e}"),
    ("lcommaaccent", "\u{013c}"),
    ("less", "<"),
    ("lessequal", "\u{2264}"),
    ("lira", "\u{20a4}"),
    ("logicaland", "\u{2227}"),
    ("logicalnot", "\u{ac}"),
    ("logicalor", "\u{2228}"),
    ("longs", "\u{017f}"),
    ("lozenge", "\u{25ca}"),
    ("lslash", "\u{0142}"),
    ("m", "m"),
    ("macron", "\u{af}"),
    ("male", "\u{2642}"),
    ("middot", "\u{b7}"),
    ("minus", "\u{2212}"),
    ("mu", "\u{b5}"),
    ("multiply", "\u{d7}"),
    ("musicalnote", "\u{266a}"),
    ("musicalnotedbl", "\u{266b}"),
    ("n", "n"),
    ("nacute", "\u{0144}"),
    ("nbspace", "\u{a0}"),
    ("ncaron", "\u{0148}"),
    ("ncommaaccent", "\u{0146}"),
    ("newsheqel", "\u{20aa}"),
    ("nine", "9"),
    ("nineinferior", "\u{2089}"),
    ("ninesuperior", "\u{2079}"),
    ("notelement", "\u{2209}"),
    ("notequal", "\u{2260}"),
    ("notsubset", "\u{2284}"),
    ("nsuperior", "\u{207f}"),
    ("ntilde", "\u{f1}"),
    ("nu", "\u{03bd}"),
    ("numbersign", "#"),
    ("o", "o"),
    ("oacute", "\u{f3}"),
    ("ocircumflex", "\u{f4}"),
    ("odieresis", "\u{f6}"),
    ("oe", "\u{0153}"),
    ("ogonek", "\u{02db}"),
    ("ograve", "\u{f2}"),
    ("ohorn", "\u{01a1}"),
    ("ohungarumlaut", "\u{0151}"),
    ("omacron", "\u{014d}"),
    ("omega", "\u{03c9}"),
    ("omega1", "\u{03d6}"),
    ("omicron", "\u{03bf}"),
    ("one", "1"),
    ("onedotenleader", "\u{2024}"),
    ("oneeighth", "\u{215b}"),
    ("onehalf", "\u{bd}"),
    ("oneinferior", "\u{2081}"),
    ("onequarter", "\u{bc}"),
    ("onesuperior", "\u{b9}"),
    ("onethird", "\u{2153}"),
    ("openbullet", "\u{25e6}"),
    ("ordfeminine", "\u{aa}"),
    ("ordmasculine", "\u{ba}"),
    ("oslash", "\u{f8}"),
    ("otilde", "\u{f5}"),
    ("p", "p"),
    ("paragraph", "\u{b6}"),
    ("parenleft", "("),
    ("parenleftsuperior", "\u{207d}"),
    ("parenright", ")"),
    ("parenrightsuperior", "\u{207e}"),
    ("partialdiff", "\u{2202}"),
    ("percent", "%"),
    ("period", "."),
    ("periodcentered", "\u{b7}"),
    ("perpendicular", "\u{22a5}"),
    ("perthousand", "\u{2030}"),
    ("peseta", "\u{20a7}"),
    ("phi", "\u{03c6}"),
    ("phi1", "\u{03d5}"),
    ("pi", "\u{03c0}"),
    ("plus", "+"),
    ("plusminus", "\u{b1}"),
    ("prime", "\u{2032}"),
    ("product", "\u{220f}"),
    ("propersubset", "\u{2282}"),
    ("propersuperset", "\u{2283}"),
    ("proportional", "\u{221d}"),
    ("psi", "\u{03c8}"),
    ("q", "q"),
    ("question", "?"),
    ("questiondown", "\u{bf}"),
    ("quotedbl", "\""),
    ("quotedblbase", "\u{201e}"),
    ("quotedblleft", "\u{201c}"),
    ("quotedblright", "\u{201d}"),
    ("quoteleft", "\u{2018}"),
    ("quotereversed", "\u{201b}"),
    ("quoteright", "\u{2019}"),
    ("quotesinglbase", "\u{201a}"),
    ("quotesingle", "'"),
    ("r", "r"),
    ("racute", "\u{0155}"),
    ("radical", "\u{221a}"),
    ("rcaron", "\u{0159}"),
    ("rcommaaccent", "\u{0157}"),
    ("reflexsubset", "\u{2286}"),
    ("reflexsuperset", "\u{2287}"),
    ("registered", "\u{ae}"),
    ("rho", "\u{03c1}"),
    ("ring", "\u{02da}"),
    ("s", "s"),
    ("sacute", "\u{015b}"),
    ("scaron", "\u{0161}"),
    ("scedilla", "\u{015f}"),
    ("schwa", "\u{0259}"),
    ("second", "\u{2033}"),
    ("section", "\u{a7}"),
    ("semicolon", ";"),
    ("seven", "7"),
    ("seveneighths", "\u{215e}"),
    ("seveninferior", "\u{2087}"),
    ("sevensuperior", "\u{2077}"),
    ("sfthyphen", "\u{ad}"),
    ("sigma", "\u{03c3}"),
    ("sigma1", "\u{03c2}"),
    ("similar", "\u{223c}"),
    ("six", "6"),
    ("sixinferior", "\u{2086}"),
    ("sixsuperior", "\u{2076}"),
    ("slash", "/"),
    ("smileface", "\u{263a}"),
    ("space", " "),
    ("spade", "\u{2660}"),
    ("sterling", "\u{a3}"),
    ("suchthat", "\u{220b}"),
    ("summation", "\u{2211}"),
    ("sun", "\u{263c}"),
    ("t", "t"),
    ("tau", "\u{03c4}"),
    ("tcaron", "\u{0165}"),
    ("therefore", "\u{2234}"),
    ("theta", "\u{03b8}"),
    ("theta1", "\u{03d1}"),
    ("thorn", "\u{fe}"),
    ("three", "3"),
    ("threeeighths", "\u{215c}"),
    ("threeinferior", "\u{2083}"),
    ("threequarters", "\u{be}"),
    ("threesuperior", "\u{b3}"),
    ("tilde", "\u{02dc}"),
    ("trademark", "\u{2122}"),
    ("triagdn", "\u{25bc}"),
    ("triaglf", "\u{25c4}"),
    ("triagrt", "\u{25ba}"),
    ("triagup", "\u{25b2}"),
    ("two", "2"),
    ("twodotenleader", "\u{2025}"),
    ("twoinferior", "\u{2082}"),
    ("twosuperior", "\u{b2}"),
    ("twothirds", "\u{2154}"),
    ("u", "u"),
    ("uacute", "\u{fa}"),
    ("ucircumflex", "\u{fb}"),
    ("udieresis", "\u{fc}"),
    ("ugrave", "\u{f9}"),
    ("uhorn", "\u{01b0}"),
    ("uhungarumlaut", "\u{0171}"),
    ("umacron", "\u{016b}"),
    ("underscore", "_"),
    ("underscoredbl", "\u{2017}"),
    ("union", "\u{222a}"),
    ("universal", "\u{2200}"),
    ("uogonek", "\u{0173}"),
    ("upsilon", "\u{03c5}"),
    ("uring", "\u{016f}"),
    ("v", "v"),
    ("w", "w"),
    ("wcircumflex", "\u{0175}"),
    ("weierstrass", "\u{2118}"),
    ("whitebox", "\u{25a1}"),
    ("whitecircle", "\u{25cb}"),
    ("whitesquare", "\u{25a1}"),
    ("won", "\u{20a9}"),
    ("x", "x"),
    ("xi", "\u{03be}"),
    ("y", "y"),
    ("yacute", "\u{fd}"),
    ("ycircumflex", "\u{0177}"),
    ("ydieresis", "\u{ff}"),
    ("yen", "\u{a5}"),
    ("z", "z"),
    ("zacute", "\u{017a}"),
    ("zcaron", "\u{017e}"),
    ("zdotaccent", "\u{017c}"),
    ("zero", "0"),
    ("zeroinferior", "\u{2080}"),
    ("zerosuperior", "\u{2070}"),
    ("zeta", "\u{03b6}"),
];
