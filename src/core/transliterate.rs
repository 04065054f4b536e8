//! Romaji to kana transducer.
//!
//! Greedy longest match over a romaji table, with the usual input-method
//! conventions layered on top: doubled consonants become a small tsu, `n` is
//! resolved against its right context, `-` and macron vowels mark long vowels.

use crate::domain::model::KanaScript;
use crate::domain::ports::Transliterator;
use std::collections::HashMap;

const MAX_KEY_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct RomajiTransliterator {
    table: HashMap<&'static str, &'static str>,
    script: KanaScript,
}

impl RomajiTransliterator {
    pub fn new(script: KanaScript) -> Self {
        Self {
            table: ROMAJI_TABLE.iter().copied().collect(),
            script,
        }
    }

    pub fn hiragana() -> Self {
        Self::new(KanaScript::Hiragana)
    }

    pub fn script(&self) -> KanaScript {
        self.script
    }

    fn convert(&self, romaji: &str) -> String {
        let chars = normalize(romaji);
        let mut result = String::with_capacity(romaji.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            // n 的處理取決於後一個字母
            if c == 'n' {
                let after_next = chars.get(i + 2).copied();
                match next {
                    Some('\'') => {
                        self.push_kana(&mut result, "ん");
                        i += 2;
                        continue;
                    }
                    Some('n') if !after_next.is_some_and(starts_syllable_after_n) => {
                        self.push_kana(&mut result, "ん");
                        i += 2;
                        continue;
                    }
                    Some(n) if starts_syllable_after_n(n) => {}
                    _ => {
                        self.push_kana(&mut result, "ん");
                        i += 1;
                        continue;
                    }
                }
            }

            // 促音：重複子音或 tch
            if is_consonant(c) && c != 'n' && next == Some(c) {
                self.push_kana(&mut result, "っ");
                i += 1;
                continue;
            }
            if c == 't' && next == Some('c') && chars.get(i + 2) == Some(&'h') {
                self.push_kana(&mut result, "っ");
                i += 1;
                continue;
            }

            if c == '-' {
                result.push('ー');
                i += 1;
                continue;
            }

            // itoh -> いとう
            if c == 'h' && next.is_none() && i > 0 && is_vowel(chars[i - 1]) {
                self.push_kana(&mut result, "う");
                i += 1;
                continue;
            }

            match self.longest_match(&chars[i..]) {
                Some((kana, len)) => {
                    self.push_kana(&mut result, kana);
                    i += len;
                }
                None => {
                    result.push(c);
                    i += 1;
                }
            }
        }

        result
    }

    /// 只轉換由表產生的假名，輸入中原有的文字保持不變
    fn push_kana(&self, out: &mut String, kana: &str) {
        match self.script {
            KanaScript::Hiragana => out.push_str(kana),
            KanaScript::Katakana => out.push_str(&to_katakana(kana)),
        }
    }

    fn longest_match(&self, rest: &[char]) -> Option<(&'static str, usize)> {
        (1..=MAX_KEY_LEN.min(rest.len())).rev().find_map(|len| {
            let key: String = rest[..len].iter().collect();
            self.table.get(key.as_str()).map(|kana| (*kana, len))
        })
    }
}

impl Default for RomajiTransliterator {
    fn default() -> Self {
        Self::hiragana()
    }
}

impl Transliterator for RomajiTransliterator {
    fn transliterate(&self, romaji: &str) -> String {
        self.convert(romaji)
    }
}

/// Convert hiragana to katakana, leaving everything else untouched.
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// 小寫化並展開長音符號
fn normalize(romaji: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(romaji.len());
    for c in romaji.chars() {
        match c {
            'ā' | 'â' | 'Ā' | 'Â' => chars.extend(['a', 'a']),
            'ī' | 'î' | 'Ī' | 'Î' => chars.extend(['i', 'i']),
            'ū' | 'û' | 'Ū' | 'Û' => chars.extend(['u', 'u']),
            'ē' | 'ê' | 'Ē' | 'Ê' => chars.extend(['e', 'e']),
            'ō' | 'ô' | 'Ō' | 'Ô' => chars.extend(['o', 'u']),
            other => chars.push(other.to_ascii_lowercase()),
        }
    }
    chars
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

fn starts_syllable_after_n(c: char) -> bool {
    is_vowel(c) || c == 'y'
}

#[rustfmt::skip]
const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    // k
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"), ("kye", "きぇ"),
    // s
    ("sa", "さ"), ("shi", "し"), ("si", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"), ("she", "しぇ"),
    ("sya", "しゃ"), ("syu", "しゅ"), ("syo", "しょ"),
    // t
    ("ta", "た"), ("chi", "ち"), ("ti", "ち"), ("tsu", "つ"), ("tu", "つ"), ("te", "て"), ("to", "と"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"), ("che", "ちぇ"),
    ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tyo", "ちょ"),
    ("tsa", "つぁ"), ("tsi", "つぃ"), ("tse", "つぇ"), ("tso", "つぉ"),
    ("thi", "てぃ"), ("twu", "とぅ"),
    // n
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"), ("n", "ん"),
    // h / f
    ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("hu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("fa", "ふぁ"), ("fi", "ふぃ"), ("fe", "ふぇ"), ("fo", "ふぉ"), ("fyu", "ふゅ"),
    // m
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    // y
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"), ("ye", "いぇ"),
    // r
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    // w
    ("wa", "わ"), ("wi", "うぃ"), ("we", "うぇ"), ("wo", "を"),
    // g
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    // z / j
    ("za", "ざ"), ("ji", "じ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"), ("je", "じぇ"),
    ("jya", "じゃ"), ("jyu", "じゅ"), ("jyo", "じょ"),
    ("zya", "じゃ"), ("zyu", "じゅ"), ("zyo", "じょ"),
    // d
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("dzu", "づ"), ("de", "で"), ("do", "ど"),
    ("dya", "ぢゃ"), ("dyu", "ぢゅ"), ("dyo", "ぢょ"), ("dhi", "でぃ"),
    // b
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    // p
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    // v
    ("vu", "ゔ"), ("va", "ゔぁ"), ("vi", "ゔぃ"), ("ve", "ゔぇ"), ("vo", "ゔぉ"),
    // small kana
    ("xa", "ぁ"), ("xi", "ぃ"), ("xu", "ぅ"), ("xe", "ぇ"), ("xo", "ぉ"),
    ("la", "ぁ"), ("li", "ぃ"), ("lu", "ぅ"), ("le", "ぇ"), ("lo", "ぉ"),
    ("xya", "ゃ"), ("xyu", "ゅ"), ("xyo", "ょ"),
    ("lya", "ゃ"), ("lyu", "ゅ"), ("lyo", "ょ"),
    ("xtu", "っ"), ("ltu", "っ"), ("xtsu", "っ"), ("ltsu", "っ"),
    ("xwa", "ゎ"), ("lwa", "ゎ"), ("xn", "ん"),
];
