//! Devanagari to Latin transliteration.
//!
//! Each lookup table yields `[itrans, iast]`. Consonants carry an inherent
//! `a` unless a vowel sign or virama follows. Characters outside the
//! Devanagari block pass through untouched.
//!
//! The diacritic column writes vocalic r and l the ISO 15919 way (`r̥`, `l̥`),
//! keeping them distinct from the flapped `ṛ` (ड़) and retroflex `ḷ` (ळ).

use std::iter::Peekable;
use std::str::Chars;

use super::interface::TransliterateInterface;
use crate::config_manager::TransliterationScheme;

const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

type Pair = [&'static str; 2];

const INHERENT_A: Pair = ["a", "a"];

pub struct DevanagariTransliterator {
    scheme: TransliterationScheme,
}

impl DevanagariTransliterator {
    pub fn new(scheme: TransliterationScheme) -> Self {
        tracing::info!("Initialized DevanagariTransliterator: scheme={:?}", scheme);
        Self { scheme }
    }

    fn pick(&self, pair: Pair) -> &'static str {
        match self.scheme {
            TransliterationScheme::Itrans => pair[0],
            TransliterationScheme::Iast => pair[1],
        }
    }

    pub fn romanize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some(letter) = take_consonant(c, &mut chars) {
                out.push_str(self.pick(letter));
                match chars.peek().copied() {
                    Some(VIRAMA) => {
                        chars.next();
                    }
                    Some(next) => match vowel_sign(next) {
                        Some(sign) => {
                            chars.next();
                            out.push_str(self.pick(sign));
                        }
                        None => out.push_str(self.pick(INHERENT_A)),
                    },
                    None => out.push_str(self.pick(INHERENT_A)),
                }
            } else if let Some(v) = vowel(c).or_else(|| vowel_sign(c)).or_else(|| sign(c)) {
                out.push_str(self.pick(v));
            } else if let Some(d) = digit(c) {
                out.push(d);
            } else if matches!(c, NUKTA | VIRAMA | ZWNJ | ZWJ) {
                // stray combining marks carry no sound of their own
            } else {
                out.push(c);
            }
        }

        out
    }
}

impl TransliterateInterface for DevanagariTransliterator {
    fn transliterate(&self, text: &str) -> Result<String, anyhow::Error> {
        Ok(self.romanize(text))
    }
}

/// Consume a consonant (with any following nukta) and return its letter
fn take_consonant(c: char, chars: &mut Peekable<Chars<'_>>) -> Option<Pair> {
    if let Some(base) = decompose_nukta(c) {
        return nukta_consonant(base).or_else(|| consonant(base));
    }
    let plain = consonant(c)?;
    if chars.peek() == Some(&NUKTA) {
        chars.next();
        return Some(nukta_consonant(c).unwrap_or(plain));
    }
    Some(plain)
}

fn consonant(c: char) -> Option<Pair> {
    let pair = match c {
        'क' => ["k", "k"],
        'ख' => ["kh", "kh"],
        'ग' => ["g", "g"],
        'घ' => ["gh", "gh"],
        'ङ' => ["~N", "ṅ"],
        'च' => ["ch", "c"],
        'छ' => ["Ch", "ch"],
        'ज' => ["j", "j"],
        'झ' => ["jh", "jh"],
        'ञ' => ["~n", "ñ"],
        'ट' => ["T", "ṭ"],
        'ठ' => ["Th", "ṭh"],
        'ड' => ["D", "ḍ"],
        'ढ' => ["Dh", "ḍh"],
        'ण' => ["N", "ṇ"],
        'त' => ["t", "t"],
        'थ' => ["th", "th"],
        'द' => ["d", "d"],
        'ध' => ["dh", "dh"],
        'न' => ["n", "n"],
        'प' => ["p", "p"],
        'फ' => ["ph", "ph"],
        'ब' => ["b", "b"],
        'भ' => ["bh", "bh"],
        'म' => ["m", "m"],
        'य' => ["y", "y"],
        'र' => ["r", "r"],
        'ल' => ["l", "l"],
        'ळ' => ["L", "ḷ"],
        'व' => ["v", "v"],
        'श' => ["sh", "ś"],
        'ष' => ["Sh", "ṣ"],
        'स' => ["s", "s"],
        'ह' => ["h", "h"],
        _ => return None,
    };
    Some(pair)
}

/// Letter for a base consonant written with a nukta
fn nukta_consonant(base: char) -> Option<Pair> {
    let pair = match base {
        'क' => ["q", "q"],
        'ख' => ["K", "k͟h"],
        'ग' => ["G", "ġ"],
        'ज' => ["z", "z"],
        'ड' => [".D", "ṛ"],
        'ढ' => [".Dh", "ṛh"],
        'फ' => ["f", "f"],
        'य' => ["Y", "ẏ"],
        _ => return None,
    };
    Some(pair)
}

/// Precomposed nukta letters (U+0958..U+095F) to their base consonant
fn decompose_nukta(c: char) -> Option<char> {
    let base = match c {
        '\u{0958}' => 'क',
        '\u{0959}' => 'ख',
        '\u{095A}' => 'ग',
        '\u{095B}' => 'ज',
        '\u{095C}' => 'ड',
        '\u{095D}' => 'ढ',
        '\u{095E}' => 'फ',
        '\u{095F}' => 'य',
        _ => return None,
    };
    Some(base)
}

fn vowel(c: char) -> Option<Pair> {
    let pair = match c {
        'अ' => ["a", "a"],
        'आ' => ["A", "ā"],
        'इ' => ["i", "i"],
        'ई' => ["I", "ī"],
        'उ' => ["u", "u"],
        'ऊ' => ["U", "ū"],
        'ऋ' => ["RRi", "r̥"],
        'ॠ' => ["RRI", "r̥̄"],
        'ऌ' => ["LLi", "l̥"],
        'ॡ' => ["LLI", "l̥̄"],
        'ऍ' => ["e.c", "ê"],
        'ए' => ["e", "e"],
        'ऐ' => ["ai", "ai"],
        'ऑ' => ["A.c", "ô"],
        'ओ' => ["o", "o"],
        'औ' => ["au", "au"],
        _ => return None,
    };
    Some(pair)
}

fn vowel_sign(c: char) -> Option<Pair> {
    let pair = match c {
        'ा' => ["A", "ā"],
        'ि' => ["i", "i"],
        'ी' => ["I", "ī"],
        'ु' => ["u", "u"],
        'ू' => ["U", "ū"],
        'ृ' => ["RRi", "r̥"],
        'ॄ' => ["RRI", "r̥̄"],
        'ॢ' => ["LLi", "l̥"],
        'ॣ' => ["LLI", "l̥̄"],
        'ॅ' => ["e.c", "ê"],
        'े' => ["e", "e"],
        'ै' => ["ai", "ai"],
        'ॉ' => ["A.c", "ô"],
        'ो' => ["o", "o"],
        'ौ' => ["au", "au"],
        _ => return None,
    };
    Some(pair)
}

fn sign(c: char) -> Option<Pair> {
    let pair = match c {
        'ँ' => [".N", "m̐"],
        'ं' => ["M", "ṃ"],
        'ः' => ["H", "ḥ"],
        'ऽ' => [".a", "'"],
        'ॐ' => ["OM", "oṃ"],
        '।' => ["|", "|"],
        '॥' => ["||", "||"],
        _ => return None,
    };
    Some(pair)
}

fn digit(c: char) -> Option<char> {
    match c {
        '०'..='९' => char::from_digit(c as u32 - '०' as u32, 10),
        _ => None,
    }
}
