// Character-range predicates for Japanese/English script detection.
//
// Every predicate is total over `char`, pure, and branch-cheap: a single
// `matches!` over code point ranges, no tables, no allocation. The ranges
// follow common Japanese text-processing practice (zenkaku = fullwidth,
// hankaku = halfwidth).

// ASCII space only. Tabs/newlines are deliberately not spaces here;
// they fall through the cascade to "other".
#[inline(always)]
pub const fn is_en_space(c: char) -> bool {
    c == ' '
}

// Ideographic (fullwidth) space.
#[inline(always)]
pub const fn is_ja_space(c: char) -> bool {
    c == '\u{3000}'
}

#[inline(always)]
pub const fn is_en_num(c: char) -> bool {
    c.is_ascii_digit()
}

// Zenkaku digits ０-９.
#[inline(always)]
pub const fn is_ja_num(c: char) -> bool {
    matches!(c as u32, 0xFF10..=0xFF19)
}

// ASCII punctuation blocks plus curly quotes. Note U+0020 is included:
// classifiers that care about spaces must test for them first.
#[inline(always)]
pub const fn is_en_punctuation(c: char) -> bool {
    matches!(c as u32,
        0x0020..=0x002F | // space ! " # $ % & ' ( ) * + , - . /
        0x003A..=0x003F | // : ; < = > ? (@ excluded with the letters)
        0x005B..=0x0060 | // [ \ ] ^ _ `
        0x007B..=0x007E | // { | } ~
        0x2018..=0x2019 | // ‘ ’
        0x201C..=0x201D   // “ ”
    )
}

// Japanese punctuation: CJK symbols, zenkaku punctuation blocks, hankaku
// kana punctuation, and the katakana middle dot / prolonged sound mark.
// Note U+3000 (ideographic space) is included, same caveat as above.
#[inline(always)]
pub const fn is_ja_punctuation(c: char) -> bool {
    matches!(c as u32,
        0x3000..=0x303F | // CJK symbols & punctuation 、 。 「 」
        0x30FB..=0x30FC | // ・ ー
        0xFF01..=0xFF0F | // ！ ＃ ％ … ／
        0xFF1A..=0xFF1F | // ： ； ＜ ＝ ＞ ？
        0xFF3B..=0xFF3F | // ［ ＼ ］ ＾ ＿
        0xFF5B..=0xFF60 | // ｛ ｜ ｝ ～ ｟ ｠
        0xFF61..=0xFF65 | // ｡ ｢ ｣ ､ ･
        0xFFE0..=0xFFEE   // fullwidth currency & symbols
    )
}

// Common-use ideographs only. The rare-kanji extension block is covered by
// `is_japanese` but is not reported as kanji.
#[inline(always)]
pub const fn is_kanji(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FAF)
}

// Hiragana proper, plus the prolonged sound mark ー which occurs inside
// hiragana words (らーめん) even though it lives in the katakana block.
#[inline(always)]
pub const fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3041..=0x3096 | 0x30FC)
}

#[inline(always)]
pub const fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A1..=0x30FC)
}

// Latin letters as used for romanized Japanese: Basic Latin plus the five
// Hepburn macron vowels Āā Ēē Īī Ōō Ūū.
#[inline(always)]
pub const fn is_romaji(c: char) -> bool {
    matches!(c as u32,
        0x0000..=0x007F | // Basic Latin
        0x0100..=0x0101 | // Ā ā
        0x0112..=0x0113 | // Ē ē
        0x012A..=0x012B | // Ī ī
        0x014C..=0x014D | // Ō ō
        0x016A..=0x016B   // Ū ū
    )
}

// Any scalar Japanese text is made of: kana (zenkaku and hankaku),
// ideographs, Japanese punctuation, and the zenkaku forms of Latin letters
// and digits.
#[inline(always)]
pub const fn is_japanese(c: char) -> bool {
    matches!(c as u32,
        0x3000..=0x303F | // CJK symbols & punctuation
        0x3040..=0x309F | // Hiragana
        0x30A0..=0x30FF | // Katakana
        0x3400..=0x4DBF | // CJK Ext A (rare kanji)
        0x4E00..=0x9FFF | // CJK unified ideographs
        0xFF01..=0xFF0F | // zenkaku punctuation
        0xFF10..=0xFF19 | // zenkaku digits
        0xFF1A..=0xFF1F | // zenkaku punctuation
        0xFF21..=0xFF3A | // zenkaku uppercase Latin
        0xFF3B..=0xFF3F | // zenkaku punctuation
        0xFF41..=0xFF5A | // zenkaku lowercase Latin
        0xFF5B..=0xFF60 | // zenkaku punctuation
        0xFF61..=0xFF65 | // hankaku kana punctuation
        0xFF66..=0xFF9F | // hankaku katakana
        0xFFE0..=0xFFEE   // fullwidth currency & symbols
    )
}
