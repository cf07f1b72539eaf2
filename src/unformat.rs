//! Best-effort parsing of formatted numerals back to canonical decimal strings.
//!
//! [`unformat`] is the inverse of formatting in the loose sense: it recognizes the digit glyphs of
//! every built-in system, normalizes multiplicative power marks (Chinese/Japanese-style 十/百/千,
//! Ge'ez ፻/፼, Tamil ௰/௱/௲) into positional digit sequences, detects base-20 and dozenal glyph
//! sets, and converts whatever remains from the detected base down to base ten. The result is
//! returned as a string to preserve precision beyond machine-integer width.
//!
//! The inversion is heuristic. Positional output round-trips exactly; multiplicative and additive
//! renderings are recovered on a best-effort basis and some (Roman and Hebrew letter values, for
//! instance) are not recognized at all and collapse to `"0"`. Callers needing exactness should
//! keep the canonical value rather than re-deriving it from display text.
//!
//! ## Examples
//!
//! ```rust
//! use numera::unformat;
//!
//! assert_eq!(unformat("1,234,567", "", 10), "1234567");
//! assert_eq!(unformat("١٬٢٣٤٫٥٦", "٫", 10), "1234.56");
//! assert_eq!(unformat("一千二百三十四", "", 10), "1234");
//! assert_eq!(unformat("ff", "", 16), "255");
//! assert_eq!(unformat("", "", 10), "0");
//! ```

use crate::radix::{self, convert_fraction, convert_integer, symbol_for};

/// Glyph variants for each decimal digit, aggregated across every recognizable system.
/// `Z` is the placeholder the power-mark normalization emits for absent digits, and the
/// Tamil ten (`௰`) folds to zero so that `digit ten` pairs read positionally.
static DIGIT_GLYPHS: &[(char, &[char])] = &[
    ('0', &[
        '٠', '۰', '০', '०', '૦', '੦', '೦', '౦', '၀', '០', '๐', '໐', '꧐', '୦', '༠', '᠐', '０',
        '᱐', '〇', '零', 'Z', '௰',
    ]),
    ('1', &[
        '١', '۱', '১', '१', '૧', '੧', '೧', '౧', '၁', '១', '๑', '໑', '꧑', '୧', '༡', '᠑', '１',
        '᱑', '一', '壹', '፩', '፲', '௧',
    ]),
    ('2', &[
        '٢', '۲', '২', '२', '૨', '੨', '೨', '౨', '၂', '២', '๒', '໒', '꧒', '୨', '༢', '᠒', '２',
        '᱒', '二', '贰', '貳', '፪', '፳', '௨',
    ]),
    ('3', &[
        '٣', '۳', '৩', '३', '૩', '੩', '೩', '౩', '၃', '៣', '๓', '໓', '꧓', '୩', '༣', '᠓', '３',
        '᱓', '三', '叁', '叄', '፫', '፴', '௩',
    ]),
    ('4', &[
        '٤', '۴', '৪', '४', '૪', '੪', '೪', '౪', '၄', '៤', '๔', '໔', '꧔', '୪', '༤', '᠔', '４',
        '᱔', '四', '肆', '፬', '፵', '௪',
    ]),
    ('5', &[
        '٥', '۵', '৫', '५', '૫', '੫', '೫', '౫', '၅', '៥', '๕', '໕', '꧕', '୫', '༥', '᠕', '５',
        '᱕', '五', '伍', '፭', '፶', '௫',
    ]),
    ('6', &[
        '٦', '۶', '৬', '६', '૬', '੬', '೬', '౬', '၆', '៦', '๖', '໖', '꧖', '୬', '༦', '᠖', '６',
        '᱖', '六', '陆', '陸', '፮', '፷', '௬',
    ]),
    ('7', &[
        '٧', '۷', '৭', '७', '૭', '੭', '೭', '౭', '၇', '៧', '๗', '໗', '꧗', '୭', '༧', '᠗', '７',
        '᱗', '七', '柒', '፯', '፸', '௭',
    ]),
    ('8', &[
        '٨', '۸', '৮', '८', '૮', '੮', '೮', '౮', '၈', '៨', '๘', '໘', '꧘', '୮', '༨', '᠘', '８',
        '᱘', '八', '捌', '፰', '፹', '௮',
    ]),
    ('9', &[
        '٩', '۹', '৯', '९', '૯', '੯', '೯', '౯', '၉', '៩', '๙', '໙', '꧙', '୯', '༩', '᠙', '９',
        '᱙', '九', '玖', '፱', '፺', '௯',
    ]),
];

/// Kaktovik and Mayan glyphs per base-20 digit symbol. Finding any of these raises the working
/// base to at least 20.
static BASE20_GLYPHS: &[(char, [char; 2])] = &[
    ('0', ['𝋀', '𝋠']),
    ('1', ['𝋁', '𝋡']),
    ('2', ['𝋂', '𝋢']),
    ('3', ['𝋃', '𝋣']),
    ('4', ['𝋄', '𝋤']),
    ('5', ['𝋅', '𝋥']),
    ('6', ['𝋆', '𝋦']),
    ('7', ['𝋇', '𝋧']),
    ('8', ['𝋈', '𝋨']),
    ('9', ['𝋉', '𝋩']),
    ('a', ['𝋊', '𝋪']),
    ('b', ['𝋋', '𝋫']),
    ('c', ['𝋌', '𝋬']),
    ('d', ['𝋍', '𝋭']),
    ('e', ['𝋎', '𝋮']),
    ('f', ['𝋏', '𝋯']),
    ('g', ['𝋐', '𝋰']),
    ('h', ['𝋑', '𝋱']),
    ('i', ['𝋒', '𝋲']),
    ('j', ['𝋓', '𝋳']),
];

/// Pitman dozenal glyphs. Finding either raises the working base to at least 12.
static DOZENAL_GLYPHS: &[(char, char)] = &[('a', '↊'), ('b', '↋')];

/// Power marks that take an implicit leading one when no digit precedes them.
const POWER_MARKS: &[char] = &['十', '百', '千', '拾', '万', '億', '兆', '京', '垓'];

/// Characters whose presence before a power mark means the mark already has its digit.
const MARK_PRECEDERS: &[char] = &[
    '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', '百', '千',
];

/// Marks that imply a leading one when they open the string (Ge'ez and Tamil powers included).
const LEADING_MARKS: &[char] = &[
    '፻', '፼', '十', '百', '千', '拾', '万', '億', '兆', '京', '垓', '௰', '௱', '௲',
];

const GEEZ_ONES: &[char] = &['፩', '፪', '፫', '፬', '፭', '፮', '፯', '፰', '፱'];
const GEEZ_TENS: &[char] = &['፲', '፳', '፴', '፵', '፶', '፷', '፸', '፹', '፺'];

/// Parses formatted numeral text into a canonical base-ten numeric string.
///
/// `decimal_separator` names the fractional marker to split on; when empty, no fractional part is
/// recovered. `min_base` is the smallest base the text should be interpreted in; it is clamped to
/// `2..=35` and raised automatically when glyphs of a larger base (base-20 sets, dozenal digits,
/// or stray `a`-`z` symbols) appear in the text. Input that yields nothing parseable returns
/// `"0"`.
///
/// # Examples
///
/// ```rust
/// use numera::unformat;
///
/// // Grouped decimal text.
/// assert_eq!(unformat("12,34,567", "", 10), "1234567");
///
/// // Multiplicative systems are normalized positionally.
/// assert_eq!(unformat("二十", "", 10), "20");
/// assert_eq!(unformat("፻፳፫", "", 10), "123");
///
/// // Letter symbols raise the working base.
/// assert_eq!(unformat("ffg", "", 10), "255");
/// ```
#[must_use]
pub fn unformat(number: &str, decimal_separator: &str, min_base: u32) -> String {
    let mut min_base = min_base.clamp(2, 35);

    let (mut whole, mut fraction) = split_fraction(number, decimal_separator);

    if !decimal_separator.is_empty() {
        if has_non_digit(&fraction) {
            fraction = substitute_digits(&fraction);
            (fraction, min_base) = fold_base20(fraction, min_base);
            (fraction, min_base) = fold_dozenal(fraction, min_base);
            min_base = scan_symbols(&fraction, min_base);
        }
        fraction = fraction.trim_end_matches('0').to_string();
    }

    if has_non_digit(&whole) {
        whole = normalize_power_marks(&whole);
        whole = substitute_digits(&whole);
        (whole, min_base) = fold_base20(whole, min_base);
        (whole, min_base) = fold_dozenal(whole, min_base);
        min_base = scan_symbols(&whole, min_base);
        whole = whole.trim_start_matches('0').to_string();
    }

    match min_base {
        10 => {
            whole.retain(|c| c.is_ascii_digit());
            fraction.retain(|c| c.is_ascii_digit());
        }
        base if base > 10 => {
            let top = symbol_for(base).unwrap_or('z');
            let keep = |c: char| c.is_ascii_digit() || ('a'..=top).contains(&c);
            whole.retain(keep);
            fraction.retain(keep);
            if !fraction.is_empty() {
                fraction = convert_fraction(&fraction, base, 10, 50);
            }
            if !whole.is_empty() {
                whole = convert_integer(&whole, base, 10);
            }
        }
        base => {
            if !fraction.is_empty() {
                fraction = convert_fraction(&fraction, base, 10, 50);
            }
            if !whole.is_empty() {
                whole = convert_integer(&whole, base, 10);
            }
        }
    }

    match (whole.is_empty(), fraction.is_empty()) {
        (true, true) => String::from("0"),
        (false, true) => whole,
        (true, false) => format!("0.{fraction}"),
        (false, false) => format!("{whole}.{fraction}"),
    }
}

/// Splits off the fractional suffix at the last occurrence of the separator.
fn split_fraction(number: &str, decimal_separator: &str) -> (String, String) {
    if decimal_separator.is_empty() {
        return (number.to_string(), String::new());
    }
    match number.rfind(decimal_separator) {
        Some(pos) => (
            number[..pos].to_string(),
            number[pos + decimal_separator.len()..].to_string(),
        ),
        None => (number.to_string(), String::new()),
    }
}

fn has_non_digit(text: &str) -> bool {
    text.chars().any(|c| !c.is_ascii_digit())
}

/// Replaces every known digit glyph with its ASCII digit.
fn substitute_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            DIGIT_GLYPHS
                .iter()
                .find(|(_, glyphs)| glyphs.contains(&c))
                .map_or(c, |(digit, _)| *digit)
        })
        .collect()
}

/// Replaces Kaktovik/Mayan glyphs with base-20 digit symbols, raising the base if any matched.
fn fold_base20(text: String, min_base: u32) -> (String, u32) {
    let folded: String = text
        .chars()
        .map(|c| {
            BASE20_GLYPHS
                .iter()
                .find(|(_, glyphs)| glyphs.contains(&c))
                .map_or(c, |(digit, _)| *digit)
        })
        .collect();
    if folded != text {
        (folded, min_base.max(20))
    } else {
        (text, min_base)
    }
}

/// Replaces Pitman dozenal glyphs with `a`/`b`, raising the base if any matched.
fn fold_dozenal(text: String, min_base: u32) -> (String, u32) {
    let folded: String = text
        .chars()
        .map(|c| {
            DOZENAL_GLYPHS
                .iter()
                .find(|(_, glyph)| *glyph == c)
                .map_or(c, |(digit, _)| *digit)
        })
        .collect();
    if folded != text {
        (folded, min_base.max(12))
    } else {
        (text, min_base)
    }
}

/// Raises the working base to cover any stray `a`-`z` digit symbols present in the text.
fn scan_symbols(text: &str, min_base: u32) -> u32 {
    let mut highest = min_base;
    for base in min_base.max(10)..radix::MAX_BASE {
        if let Some(symbol) = symbol_for(base) {
            if text.contains(symbol) {
                highest = base;
            }
        }
    }
    highest
}

/// Rewrites multiplicative power marks into a positional digit sequence.
///
/// Four passes, applied in order:
///
/// 1. a power mark with no digit in front gains an implicit leading `1`
///    (`十` reads as `1十`), likewise any Ge'ez or Tamil power opening the string;
/// 2. Ge'ez hundred/myriad marks and tens glyphs gain a `Z` placeholder for each
///    digit position they leave empty;
/// 3. a trailing power mark expands into its run of zeros (`二十` ends as `20`);
/// 4. leftover marks between digits are dropped later by the non-digit strip.
fn normalize_power_marks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    // Pass 1: implicit leading ones.
    let mut implicit = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if POWER_MARKS.contains(&c) && (i == 0 || !MARK_PRECEDERS.contains(&chars[i - 1])) {
            implicit.push('1');
        }
        implicit.push(c);
    }
    if implicit.chars().next().is_some_and(|c| LEADING_MARKS.contains(&c)) {
        implicit.insert(0, '1');
    }

    // Pass 2: placeholder zeros for Ge'ez positions left empty.
    let text = mark_missing_geez_digits(&implicit);

    // Pass 3: trailing power marks become their zero runs.
    expand_trailing_power(text)
}

fn mark_missing_geez_digits(text: &str) -> String {
    // A hundred/myriad mark not followed by a tens glyph or digit is missing its tens.
    let chars: Vec<char> = text.chars().collect();
    let mut tens_marked = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        tens_marked.push(c);
        if c == '፻' || c == '፼' {
            let next = chars.get(i + 1);
            if !next.is_some_and(|n| GEEZ_TENS.contains(n) || n.is_ascii_digit()) {
                tens_marked.push('Z');
            }
        }
    }

    // A hundred/myriad mark plus one digit with no ones glyph after is missing its ones.
    let chars: Vec<char> = tens_marked.chars().collect();
    let mut ones_marked = String::with_capacity(tens_marked.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        ones_marked.push(c);
        if c == '፻' || c == '፼' {
            if let Some(&digit) = chars.get(i + 1) {
                if digit.is_ascii_digit() || digit == 'Z' {
                    ones_marked.push(digit);
                    let after = chars.get(i + 2);
                    if !after.is_some_and(|a| GEEZ_ONES.contains(a) || a.is_ascii_digit()) {
                        ones_marked.push('Z');
                    }
                    i += 2;
                    continue;
                }
            }
        }
        i += 1;
    }

    // A tens glyph with no ones glyph following is missing its ones.
    let chars: Vec<char> = ones_marked.chars().collect();
    let mut out = String::with_capacity(ones_marked.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if GEEZ_TENS.contains(&c) {
            let next = chars.get(i + 1);
            if !next.is_some_and(|n| GEEZ_ONES.contains(n)) {
                out.push('Z');
            }
        }
    }
    out
}

fn expand_trailing_power(mut text: String) -> String {
    let expansions: &[(&[char], &str)] = &[
        (&['十', '拾'], "0"),
        (&['፻', '百'], "00"),
        (&['千'], "000"),
        (&['፼'], "0000"),
    ];
    for (marks, zeros) in expansions {
        if text.chars().last().is_some_and(|c| marks.contains(&c)) {
            text.pop();
            text.push_str(zeros);
        }
    }
    text
}
