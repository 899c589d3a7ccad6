// libhanzi/libpinyin/src/tone.rs
//
// Tone codec between the two written forms of a pinyin syllable:
//
//   hao3  <->  hǎo
//
// Decoding (`parse_pinyin_tone`) strips one diacritic and reports its tone
// number. Encoding (`convert_pinyin_with_tone_number_to_tone_mark`) places
// the mark on the conventional vowel:
//
// 1. `a` or `e` takes the mark;
// 2. in `ou` the `o` takes it;
// 3. otherwise, of two adjacent vowels the second takes it;
// 4. a lone vowel takes it.
//
// Tone 5 (neutral) is written without a mark. `v` is accepted as a keyboard
// spelling of `ü` and always renders as `ü`.

use phf::phf_map;

/// Glyphs for each vowel: tones 1 to 4, then the unmarked vowel.
static TONE_GLYPHS: phf::Map<char, [char; 5]> = phf_map! {
    'a' => ['ā', 'á', 'ǎ', 'à', 'a'],
    'e' => ['ē', 'é', 'ě', 'è', 'e'],
    'i' => ['ī', 'í', 'ǐ', 'ì', 'i'],
    'o' => ['ō', 'ó', 'ǒ', 'ò', 'o'],
    'u' => ['ū', 'ú', 'ǔ', 'ù', 'u'],
    'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü'],
    'v' => ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü'],
};

/// Decode precedence. `ü` precedes `v` so shared glyphs decode to `ü`.
const VOWEL_ORDER: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'ü', 'v'];

/// Neutral tone, also reported when a syllable carries no mark.
pub const NEUTRAL_TONE: u8 = 5;

/// True for the letters that can carry a tone mark (`a e i o u ü` and `v`).
pub fn is_pinyin_vowel(ch: char) -> bool {
    TONE_GLYPHS.contains_key(&ch)
}

/// Glyph for `vowel` in `tone` (1 to 5); `None` for non-vowels or bad tones.
///
/// ```
/// use libpinyin::tone::tone_mark;
///
/// assert_eq!(tone_mark('a', 3), Some('ǎ'));
/// assert_eq!(tone_mark('v', 5), Some('ü'));
/// assert_eq!(tone_mark('b', 1), None);
/// ```
pub fn tone_mark(vowel: char, tone: u8) -> Option<char> {
    let row = TONE_GLYPHS.get(&vowel)?;
    match tone {
        1..=5 => Some(row[usize::from(tone) - 1]),
        _ => None,
    }
}

fn plain(vowel: char) -> char {
    tone_mark(vowel, NEUTRAL_TONE).unwrap_or(vowel)
}

/// Split a tone-marked syllable into its toneless spelling and tone number.
///
/// Vowels are tried in `a e i o u ü` order and tones 1 to 4 within each;
/// the first glyph present anywhere in the syllable wins and only its first
/// occurrence is replaced. Without any marked vowel the syllable comes back
/// unchanged with tone 5.
///
/// ```
/// use libpinyin::parse_pinyin_tone;
///
/// assert_eq!(parse_pinyin_tone("niú"), ("niu".to_string(), 2));
/// assert_eq!(parse_pinyin_tone("ma"), ("ma".to_string(), 5));
/// ```
pub fn parse_pinyin_tone(pinyin: &str) -> (String, u8) {
    for vowel in VOWEL_ORDER {
        let Some(row) = TONE_GLYPHS.get(&vowel) else {
            continue;
        };
        for (glyph, tone) in row[..4].iter().zip(1u8..) {
            if pinyin.contains(*glyph) {
                let mut buf = [0u8; 4];
                let toneless = pinyin.replacen(*glyph, row[4].encode_utf8(&mut buf), 1);
                return (toneless, tone);
            }
        }
    }
    (pinyin.to_string(), NEUTRAL_TONE)
}

/// Render a numbered syllable (`hao3`) with its tone mark (`hǎo`).
///
/// A trailing `0` to `5` is consumed; `0` and `5` leave every vowel
/// unmarked. Input without a trailing digit only has `v` rewritten to `ü`.
pub fn convert_pinyin_with_tone_number_to_tone_mark(pinyin: &str) -> String {
    let chars: Vec<char> = pinyin.chars().collect();
    let (body, mut pending) = match chars.split_last() {
        Some((last, rest)) if ('0'..='5').contains(last) => {
            let tone = *last as u8 - b'0';
            (rest, (1..=4).contains(&tone).then_some(tone))
        }
        _ => (&chars[..], None),
    };

    let mut out = String::with_capacity(pinyin.len() + 2);
    let mut i = 0;
    while i < body.len() {
        let ch = body[i];
        let next = body.get(i + 1).copied();
        i += 1;

        if !is_pinyin_vowel(ch) {
            out.push(ch);
            continue;
        }
        let Some(tone) = pending else {
            out.push(plain(ch));
            continue;
        };

        if ch == 'a' || ch == 'e' || (ch == 'o' && next == Some('u')) {
            out.push(tone_mark(ch, tone).unwrap_or(ch));
        } else if let Some(second) = next.filter(|c| is_pinyin_vowel(*c)) {
            out.push(plain(ch));
            out.push(tone_mark(second, tone).unwrap_or(second));
            i += 1;
        } else {
            out.push(tone_mark(ch, tone).unwrap_or(ch));
        }
        pending = None;
    }
    out
}
