//! ZapfDingbats glyph list — maps the font's `aN` glyph names into
//! the Unicode dingbats block.

/// Sorted by glyph name for binary search.
pub static ZAPF_DINGBATS_GLYPH_LIST: &[(&str, char)] = &[
    ("a1", '\u{2701}'),
    ("a10", '\u{2721}'),
    ("a100", '\u{275e}'),
    ("a101", '\u{2761}'),
    ("a102", '\u{2762}'),
    ("a103", '\u{2763}'),
    ("a104", '\u{2764}'),
    ("a105", '\u{2710}'),
    ("a106", '\u{2765}'),
    ("a107", '\u{2766}'),
    ("a108", '\u{2767}'),
    ("a109", '\u{2660}'),
    ("a11", '\u{261b}'),
    ("a110", '\u{2666}'),
    ("a111", '\u{2665}'),
    ("a112", '\u{2663}'),
    ("a117", '\u{2709}'),
    ("a118", '\u{2708}'),
    ("a119", '\u{2707}'),
    ("a12", '\u{261e}'),
    ("a120", '\u{2460}'),
    ("a121", '\u{2461}'),
    ("a122", '\u{2462}'),
    ("a123", '\u{2463}'),
    ("a124", '\u{2464}'),
    ("a125", '\u{2465}'),
    ("a126", '\u{2466}'),
    ("a127", '\u{2467}'),
    ("a128", '\u{2468}'),
    ("a129", '\u{2469}'),
    ("a13", '\u{270c}'),
    ("a130", '\u{2776}'),
    ("a131", '\u{2777}'),
    ("a132", '\u{2778}'),
    ("a133", '\u{2779}'),
    ("a134", '\u{277a}'),
    ("a135", '\u{277b}'),
    ("a136", '\u{277c}'),
    ("a137", '\u{277d}'),
    ("a138", '\u{277e}'),
    ("a139", '\u{277f}'),
    ("a14", '\u{270d}'),
    ("a140", '\u{2780}'),
    ("a141", '\u{2781}'),
    ("a142", '\u{2782}'),
    ("a143", '\u{2783}'),
    ("a144", '\u{2784}'),
    ("a145", '\u{2785}'),
    ("a146", '\u{2786}'),
    ("a147", '\u{2787}'),
    ("a148", '\u{2788}'),
    ("a149", '\u{2789}'),
    ("a15", '\u{270e}'),
    ("a150", '\u{278a}'),
    ("a151", '\u{278b}'),
    ("a152", '\u{278c}'),
    ("a153", '\u{278d}'),
    ("a154", '\u{278e}'),
    ("a155", '\u{278f}'),
    ("a156", '\u{2790}'),
    ("a157", '\u{2791}'),
    ("a158", '\u{2792}'),
    ("a159", '\u{2793}'),
    ("a16", '\u{270f}'),
    ("a160", '\u{2794}'),
    ("a161", '\u{2192}'),
    ("a162", '\u{27a3}'),
    ("a163", '\u{2194}'),
    ("a164", '\u{2195}'),
    ("a165", '\u{2799}'),
    ("a166", '\u{279b}'),
    ("a167", '\u{279c}'),
    ("a168", '\u{279d}'),
    ("a169", '\u{279e}'),
    ("a17", '\u{2711}'),
    ("a170", '\u{279f}'),
    ("a171", '\u{27a0}'),
    ("a172", '\u{27a1}'),
    ("a173", '\u{27a2}'),
    ("a174", '\u{27a4}'),
    ("a175", '\u{27a5}'),
    ("a176", '\u{27a6}'),
    ("a177", '\u{27a7}'),
    ("a178", '\u{27a8}'),
    ("a179", '\u{27a9}'),
    ("a18", '\u{2712}'),
    ("a180", '\u{27ab}'),
    ("a181", '\u{27ad}'),
    ("a182", '\u{27af}'),
    ("a183", '\u{27b2}'),
    ("a184", '\u{27b3}'),
    ("a185", '\u{27b5}'),
    ("a186", '\u{27b8}'),
    ("a187", '\u{27ba}'),
    ("a188", '\u{27bb}'),
    ("a189", '\u{27bc}'),
    ("a19", '\u{2713}'),
    ("a190", '\u{27bd}'),
    ("a191", '\u{27be}'),
    ("a192", '\u{279a}'),
    ("a193", '\u{27aa}'),
    ("a194", '\u{27b6}'),
    ("a195", '\u{27b9}'),
    ("a196", '\u{2798}'),
    ("a197", '\u{27b4}'),
    ("a198", '\u{27b7}'),
    ("a199", '\u{27ac}'),
    ("a2", '\u{2702}'),
    ("a20", '\u{2714}'),
    ("a200", '\u{27ae}'),
    ("a201", '\u{27b1}'),
    ("a202", '\u{2703}'),
    ("a203", '\u{2750}'),
    ("a204", '\u{2752}'),
    ("a21", '\u{2715}'),
    ("a22", '\u{2716}'),
    ("a23", '\u{2717}'),
    ("a24", '\u{2718}'),
    ("a25", '\u{2719}'),
    ("a26", '\u{271a}'),
    ("a27", '\u{271b}'),
    ("a28", '\u{271c}'),
    ("a29", '\u{2722}'),
    ("a3", '\u{2704}'),
    ("a30", '\u{2723}'),
    ("a31", '\u{2724}'),
    ("a32", '\u{2725}'),
    ("a33", '\u{2726}'),
    ("a34", '\u{2727}'),
    ("a35", '\u{2605}'),
    ("a36", '\u{2729}'),
    ("a37", '\u{272a}'),
    ("a38", '\u{272b}'),
    ("a39", '\u{272c}'),
    ("a4", '\u{260e}'),
    ("a40", '\u{272d}'),
    ("a41", '\u{272e}'),
    ("a42", '\u{272f}'),
    ("a43", '\u{2730}'),
    ("a44", '\u{2731}'),
    ("a45", '\u{2732}'),
    ("a46", '\u{2733}'),
    ("a47", '\u{2734}'),
    ("a48", '\u{2735}'),
    ("a49", '\u{2736}'),
    ("a5", '\u{2706}'),
    ("a50", '\u{2737}'),
    ("a51", '\u{2738}'),
    ("a52", '\u{2739}'),
    ("a53", '\u{273a}'),
    ("a54", '\u{273b}'),
    ("a55", '\u{273c}'),
    ("a56", '\u{273d}'),
    ("a57", '\u{273e}'),
    ("a58", '\u{273f}'),
    ("a59", '\u{2740}'),
    ("a6", '\u{271d}'),
    ("a60", '\u{2741}'),
    ("a61", '\u{2742}'),
    ("a62", '\u{2743}'),
    ("a63", '\u{2744}'),
    ("a64", '\u{2745}'),
    ("a65", '\u{2746}'),
    ("a66", '\u{2747}'),
    ("a67", '\u{2748}'),
    ("a68", '\u{2749}'),
    ("a69", '\u{274a}'),
    ("a7", '\u{271e}'),
    ("a70", '\u{274b}'),
    ("a71", '\u{25cf}'),
    ("a72", '\u{274d}'),
    ("a73", '\u{25a0}'),
    ("a74", '\u{274f}'),
    ("a75", '\u{2751}'),
    ("a76", '\u{25b2}'),
    ("a77", '\u{25bc}'),
    ("a78", '\u{25c6}'),
    ("a79", '\u{2756}'),
    ("a8", '\u{271f}'),
    ("a81", '\u{25d7}'),
    ("a82", '\u{2758}'),
    ("a83", '\u{2759}'),
    ("a84", '\u{275a}'),
    ("a9", '\u{2720}'),
    ("a97", '\u{275b}'),
    ("a98", '\u{275c}'),
    ("a99", '\u{275d}'),
    ("space", ' '),
];
