//! Static conversion tables for every built-in numeral system.
//!
//! Pure data. The key syntax ("^2+3", "Hundreds", "=0", parity prefixes, and the rest) is
//! documented in [`crate::notation`]; the lookup precedence that consumes these keys lives in
//! [`crate::format`]. Glyph sets that only override part of the digit range (the dozenal pair,
//! the multiplicative systems with empty entries) rely on the raw-character fallback for
//! everything they leave out.

use crate::macros::table;
use crate::system::ConversionTable;

/// Western Arabic digits. Deliberately empty: this is the canonical representation,
/// so every lookup falls back to the raw character.
pub(crate) static WESTERN: ConversionTable = table!();

/// Eastern Arabic numerals.
pub(crate) static EASTERN: ConversionTable = table!(
    "0" => "٠", "1" => "١", "2" => "٢", "3" => "٣", "4" => "٤",
    "5" => "٥", "6" => "٦", "7" => "٧", "8" => "٨", "9" => "٩",
);

/// Persian/Urdu numerals.
pub(crate) static PERSIAN: ConversionTable = table!(
    "0" => "۰", "1" => "۱", "2" => "۲", "3" => "۳", "4" => "۴",
    "5" => "۵", "6" => "۶", "7" => "۷", "8" => "۸", "9" => "۹",
);

/// Bengali/Bangla numerals.
pub(crate) static NAGARI: ConversionTable = table!(
    "0" => "০", "1" => "১", "2" => "২", "3" => "৩", "4" => "৪",
    "5" => "৫", "6" => "৬", "7" => "৭", "8" => "৮", "9" => "৯",
);

/// Devanagari numerals.
pub(crate) static DEVANAGARI: ConversionTable = table!(
    "0" => "०", "1" => "१", "2" => "२", "3" => "३", "4" => "४",
    "5" => "५", "6" => "६", "7" => "७", "8" => "८", "9" => "९",
);

/// Gujarati numerals.
pub(crate) static GUJARATI: ConversionTable = table!(
    "0" => "૦", "1" => "૧", "2" => "૨", "3" => "૩", "4" => "૪",
    "5" => "૫", "6" => "૬", "7" => "૭", "8" => "૮", "9" => "૯",
);

/// Gurmukhi numerals.
pub(crate) static GURMUKHI: ConversionTable = table!(
    "0" => "੦", "1" => "੧", "2" => "੨", "3" => "੩", "4" => "੪",
    "5" => "੫", "6" => "੬", "7" => "੭", "8" => "੮", "9" => "੯",
);

/// Kannada numerals.
pub(crate) static KANNADA: ConversionTable = table!(
    "0" => "೦", "1" => "೧", "2" => "೨", "3" => "೩", "4" => "೪",
    "5" => "೫", "6" => "೬", "7" => "೭", "8" => "೮", "9" => "೯",
);

/// Telugu numerals.
pub(crate) static TELUGU: ConversionTable = table!(
    "0" => "౦", "1" => "౧", "2" => "౨", "3" => "౩", "4" => "౪",
    "5" => "౫", "6" => "౬", "7" => "౭", "8" => "౮", "9" => "౯",
);

/// Burmese numerals.
pub(crate) static BURMESE: ConversionTable = table!(
    "0" => "၀", "1" => "၁", "2" => "၂", "3" => "၃", "4" => "၄",
    "5" => "၅", "6" => "၆", "7" => "၇", "8" => "၈", "9" => "၉",
);

/// Khmer numerals.
pub(crate) static KHMER: ConversionTable = table!(
    "0" => "០", "1" => "១", "2" => "២", "3" => "៣", "4" => "៤",
    "5" => "៥", "6" => "៦", "7" => "៧", "8" => "៨", "9" => "៩",
);

/// Thai numerals.
pub(crate) static THAI: ConversionTable = table!(
    "0" => "๐", "1" => "๑", "2" => "๒", "3" => "๓", "4" => "๔",
    "5" => "๕", "6" => "๖", "7" => "๗", "8" => "๘", "9" => "๙",
);

/// Lao numerals.
pub(crate) static LAO: ConversionTable = table!(
    "0" => "໐", "1" => "໑", "2" => "໒", "3" => "໓", "4" => "໔",
    "5" => "໕", "6" => "໖", "7" => "໗", "8" => "໘", "9" => "໙",
);

/// Mayan numerals. Twenty glyphs, for use with base 20.
pub(crate) static MAYAN: ConversionTable = table!(
    "0" => "𝋠", "1" => "𝋡", "2" => "𝋢", "3" => "𝋣", "4" => "𝋤",
    "5" => "𝋥", "6" => "𝋦", "7" => "𝋧", "8" => "𝋨", "9" => "𝋩",
    "a" => "𝋪", "b" => "𝋫", "c" => "𝋬", "d" => "𝋭", "e" => "𝋮",
    "f" => "𝋯", "g" => "𝋰", "h" => "𝋱", "i" => "𝋲", "j" => "𝋳",
);

/// Japanese numerals. Multiplicative: power glyphs up to 千垓 (10^23) plus named
/// fractional powers down to 埃 (10^-10). Ones and leading zeros render empty.
pub(crate) static JAPANESE: ConversionTable = table!(
    "+0" => "",
    "-+0" => "",
    "1" => "",
    "2" => "二",
    "3" => "三",
    "4" => "四",
    "5" => "五",
    "6" => "六",
    "7" => "七",
    "8" => "八",
    "9" => "九",
    "^0+1" => "一",
    "^1" => "十",
    "^2" => "百",
    "^3" => "千",
    "^4" => "万",
    "^5" => "十万",
    "^6" => "百万",
    "^7" => "千万",
    "^8" => "億",
    "^9" => "十億",
    "^10" => "百億",
    "^11" => "千億",
    "^12" => "兆",
    "^13" => "十兆",
    "^14" => "百兆",
    "^15" => "千兆",
    "^16" => "京",
    "^17" => "十京",
    "^18" => "百京",
    "^19" => "千京",
    "^20" => "垓",
    "^21" => "十垓",
    "^22" => "百垓",
    "^23" => "千垓",
    "^-1" => "分",
    "^-2" => "厘",
    "^-3" => "毛",
    "^-4" => "糸",
    "^-5" => "忽",
    "^-6" => "微",
    "^-7" => "繊",
    "^-8" => "沙",
    "^-9" => "塵",
    "^-10" => "埃",
);

/// Tamil numerals. Additive, with dedicated glyphs for ten, hundred, and thousand
/// that compose for the higher powers.
pub(crate) static TAMIL: ConversionTable = table!(
    additive;
    "+0" => "",
    "1" => "",
    "2" => "௨",
    "3" => "௩",
    "4" => "௪",
    "5" => "௫",
    "6" => "௬",
    "7" => "௭",
    "8" => "௮",
    "9" => "௯",
    "^0+1" => "௧",
    "^1" => "௰",
    "^2" => "௱",
    "^3" => "௲",
    "^4" => "௰௲",
    "^5" => "௱௲",
    "^6" => "௲௲",
    "^7" => "௰௲௲",
    "^8" => "௱௲௲",
    "^9" => "௲௲௲",
    "^10" => "௰௲௲௲",
    "^11" => "௱௲௲௲",
    "^12" => "௲௲௲௲",
    "^13" => "௰௲௲௲௲",
    "^14" => "௱௲௲௲௲",
    "^15" => "௲௲௲௲௲",
    "^16" => "௰௲௲௲௲௲",
    "^17" => "௱௲௲௲௲௲",
    "^18" => "௲௲௲௲௲௲",
    "^19" => "௰௲௲௲௲௲௲",
    "^20" => "௱௲௲௲௲௲௲",
    "^21" => "௲௲௲௲௲௲௲",
    "^22" => "௰௲௲௲௲௲௲௲",
    "^23" => "௱௲௲௲௲௲௲௲",
);

/// Javanese numerals.
pub(crate) static JAVANESE: ConversionTable = table!(
    "0" => "꧐", "1" => "꧑", "2" => "꧒", "3" => "꧓", "4" => "꧔",
    "5" => "꧕", "6" => "꧖", "7" => "꧗", "8" => "꧘", "9" => "꧙",
);

/// Roman numerals in modern standard form. Compound keys carry the whole
/// subtractive pattern per position; vinculum overlines (U+0305) extend the range
/// through the millions.
pub(crate) static ROMAN: ConversionTable = table!(
    additive;
    "0" => "",
    "1" => "",
    "2" => "",
    "3" => "",
    "4" => "",
    "5" => "",
    "6" => "",
    "7" => "",
    "8" => "",
    "9" => "",
    "^0+1" => "I",
    "^0+2" => "II",
    "^0+3" => "III",
    "^0+4" => "IV",
    "^0+5" => "V",
    "^0+6" => "VI",
    "^0+7" => "VII",
    "^0+8" => "VIII",
    "^0+9" => "IX",
    "^1+1" => "X",
    "^1+2" => "XX",
    "^1+3" => "XXX",
    "^1+4" => "XL",
    "^1+5" => "L",
    "^1+6" => "LX",
    "^1+7" => "LXX",
    "^1+8" => "LXXX",
    "^1+9" => "XC",
    "^2+1" => "C",
    "^2+2" => "CC",
    "^2+3" => "CCC",
    "^2+4" => "CD",
    "^2+5" => "D",
    "^2+6" => "DC",
    "^2+7" => "DCC",
    "^2+8" => "DCCC",
    "^2+9" => "CM",
    "^3+1" => "M",
    "^3+2" => "MM",
    "^3+3" => "MMM",
    "^3+4" => "I̅V̅",
    "^3+5" => "V̅",
    "^3+6" => "V̅I̅",
    "^3+7" => "V̅I̅I̅",
    "^3+8" => "V̅I̅I̅I̅",
    "^3+9" => "I̅X̅",
    "^4+1" => "X̅",
    "^4+2" => "X̅X̅",
    "^4+3" => "X̅X̅X̅",
    "^4+4" => "X̅L̅",
    "^4+5" => "L̅",
    "^4+6" => "L̅X̅",
    "^4+7" => "L̅X̅X̅",
    "^4+8" => "L̅X̅X̅X̅",
    "^4+9" => "X̅C̅",
    "^5+1" => "C̅",
    "^5+2" => "C̅C̅",
    "^5+3" => "C̅C̅C̅",
    "^5+4" => "C̅D̅",
    "^5+5" => "D̅",
    "^5+6" => "D̅C̅",
    "^5+7" => "D̅C̅C̅",
    "^5+8" => "D̅C̅C̅C̅",
    "^5+9" => "C̅M̅",
    "^6+1" => "M̅",
    "^6+2" => "M̅M̅",
    "^6+3" => "M̅M̅M̅",
);

/// Odia numerals.
pub(crate) static ODIA: ConversionTable = table!(
    "0" => "୦", "1" => "୧", "2" => "୨", "3" => "୩", "4" => "୪",
    "5" => "୫", "6" => "୬", "7" => "୭", "8" => "୮", "9" => "୯",
);

/// Tibetan numerals.
pub(crate) static TIBETAN: ConversionTable = table!(
    "0" => "༠", "1" => "༡", "2" => "༢", "3" => "༣", "4" => "༤",
    "5" => "༥", "6" => "༦", "7" => "༧", "8" => "༨", "9" => "༩",
);

/// Mongolian numerals.
pub(crate) static MONGOLIAN: ConversionTable = table!(
    "0" => "᠐", "1" => "᠑", "2" => "᠒", "3" => "᠓", "4" => "᠔",
    "5" => "᠕", "6" => "᠖", "7" => "᠗", "8" => "᠘", "9" => "᠙",
);

/// Hebrew numerals in modern standard form. Letters carry values additively; the
/// 15 and 16 pairs avoid spelling the divine name, and geresh marks count thousands.
pub(crate) static HEBREW: ConversionTable = table!(
    additive;
    "+0" => "",
    "1" => "א",
    "2" => "ב",
    "3" => "ג",
    "4" => "ד",
    "5" => "ה",
    "6" => "ו",
    "7" => "ז",
    "8" => "ח",
    "9" => "ט",
    "^0+10" => "י",
    "^0+11" => "יא",
    "^0+12" => "יב",
    "^0+13" => "יג",
    "^0+14" => "יד",
    "^0+15" => "ט״ו",
    "^0+16" => "ט״ז",
    "^0+17" => "יז",
    "^0+18" => "יח",
    "^0+19" => "יט",
    "^1+1" => "",
    "^1+2" => "כ",
    "^1+3" => "ל",
    "^1+4" => "מ",
    "^1+5" => "נ",
    "^1+6" => "ס",
    "^1+7" => "ע",
    "^1+8" => "פ",
    "^1+9" => "צ",
    "^2+1" => "ק",
    "^2+2" => "ר",
    "^2+3" => "ש",
    "^2+4" => "ת",
    "^2+5" => "ך",
    "^2+6" => "ם",
    "^2+7" => "ן",
    "^2+8" => "ף",
    "^2+9" => "ץ",
    "^3" => "׳",
    "^4" => "׳י",
    "^5" => "׳ק",
    "^6" => "׳׳",
    "^7" => "׳י׳",
    "^8" => "׳ק׳",
    "^9" => "׳׳׳",
    "^10" => "׳י׳׳",
    "^11" => "׳ק׳׳",
    "^12" => "׳׳׳׳",
    "^13" => "׳י׳׳׳",
    "^14" => "׳ק׳׳׳",
    "^15" => "׳׳׳׳׳",
);

/// Armenian numerals in historic form. Overlines (U+0305) mark the myriads.
pub(crate) static ARMENIAN: ConversionTable = table!(
    additive;
    "0" => "",
    "1" => "",
    "2" => "",
    "3" => "",
    "4" => "",
    "5" => "",
    "6" => "",
    "7" => "",
    "8" => "",
    "9" => "",
    "^0+1" => "Ա",
    "^0+2" => "Բ",
    "^0+3" => "Գ",
    "^0+4" => "Դ",
    "^0+5" => "Ե",
    "^0+6" => "Զ",
    "^0+7" => "Է",
    "^0+8" => "Ը",
    "^0+9" => "Թ",
    "^1+1" => "Ժ",
    "^1+2" => "Ի",
    "^1+3" => "Լ",
    "^1+4" => "Խ",
    "^1+5" => "Ծ",
    "^1+6" => "Կ",
    "^1+7" => "Հ",
    "^1+8" => "Ձ",
    "^1+9" => "Ղ",
    "^2+1" => "Ճ",
    "^2+2" => "Մ",
    "^2+3" => "Յ",
    "^2+4" => "Ն",
    "^2+5" => "Շ",
    "^2+6" => "Ո",
    "^2+7" => "Չ",
    "^2+8" => "Պ",
    "^2+9" => "Ջ",
    "^3+1" => "Ռ",
    "^3+2" => "Ս",
    "^3+3" => "Վ",
    "^3+4" => "Տ",
    "^3+5" => "Ր",
    "^3+6" => "Ց",
    "^3+7" => "Ւ",
    "^3+8" => "Փ",
    "^3+9" => "Ք",
    "^4+1" => "Ա̅",
    "^4+2" => "Բ̅",
    "^4+3" => "Գ̅",
    "^4+4" => "Դ̅",
    "^4+5" => "Ե̅",
    "^4+6" => "Զ̅",
    "^4+7" => "Է̅",
    "^4+8" => "Ը̅",
    "^4+9" => "Թ̅",
    "^5+1" => "Ժ̅",
    "^5+2" => "Ի̅",
    "^5+3" => "Լ̅",
    "^5+4" => "Խ̅",
    "^5+5" => "Ծ̅",
    "^5+6" => "Կ̅",
    "^5+7" => "Հ̅",
    "^5+8" => "Ձ̅",
    "^5+9" => "Ղ̅",
    "^6+1" => "Ճ̅",
    "^6+2" => "Մ̅",
    "^6+3" => "Յ̅",
    "^6+4" => "Ն̅",
    "^6+5" => "Շ̅",
    "^6+6" => "Ո̅",
    "^6+7" => "Չ̅",
    "^6+8" => "Պ̅",
    "^6+9" => "Ջ̅",
    "^7+1" => "Ռ̅",
    "^7+2" => "Ս̅",
    "^7+3" => "Վ̅",
    "^7+4" => "Տ̅",
    "^7+5" => "Ր̅",
    "^7+6" => "Ց̅",
    "^7+7" => "Ւ̅",
    "^7+8" => "Փ̅",
    "^7+9" => "Ք̅",
);

/// Standard simplified Chinese numerals.
pub(crate) static CHINESE_SIMPLIFIED: ConversionTable = table!(
    "+0" => "",
    "-0" => "〇",
    "=0" => "〇",
    "1" => "一",
    "2" => "二",
    "3" => "三",
    "4" => "四",
    "5" => "五",
    "6" => "六",
    "7" => "七",
    "8" => "八",
    "9" => "九",
    "^1+1" => "十",
    "^1" => "十",
    "Hundreds" => "百",
    "^3" => "千",
    "^4" => "万",
    "^5" => "十",
    "^7" => "千",
    "^8" => "亿",
    "^9" => "十",
    "^11" => "千",
    "^12" => "兆",
    "^13" => "十",
    "^15" => "千",
    "^16" => "京",
    "^17" => "十",
    "^19" => "千",
    "^20" => "垓",
    "^21" => "十",
    "^23" => "千",
    "^24" => "秭",
    "^25" => "十",
    "^27" => "千",
    "^28" => "穰",
    "^29" => "十",
    "^31" => "千",
    "^32" => "沟",
    "^33" => "十",
    "^35" => "千",
    "^36" => "涧",
    "^37" => "十",
    "^39" => "千",
    "^40" => "正",
    "^41" => "十",
    "^43" => "千",
    "^44" => "载",
    "^45" => "十",
    "^47" => "千",
);

/// Standard traditional Chinese numerals.
pub(crate) static CHINESE_TRADITIONAL: ConversionTable = table!(
    "+0" => "",
    "-0" => "零",
    "=0" => "零",
    "1" => "一",
    "2" => "二",
    "3" => "三",
    "4" => "四",
    "5" => "五",
    "6" => "六",
    "7" => "七",
    "8" => "八",
    "9" => "九",
    "^1+1" => "十",
    "^1" => "十",
    "Hundreds" => "百",
    "^3" => "千",
    "^4" => "萬",
    "^5" => "十",
    "^7" => "千",
    "^8" => "億",
    "^9" => "十",
    "^11" => "千",
    "^12" => "兆",
    "^13" => "十",
    "^15" => "千",
    "^16" => "京",
    "^17" => "十",
    "^19" => "千",
    "^20" => "垓",
    "^21" => "十",
    "^23" => "千",
    "^24" => "秭",
    "^25" => "十",
    "^27" => "千",
    "^28" => "穰",
    "^29" => "十",
    "^31" => "千",
    "^32" => "溝",
    "^33" => "十",
    "^35" => "千",
    "^36" => "澗",
    "^37" => "十",
    "^39" => "千",
    "^40" => "正",
    "^41" => "十",
    "^43" => "千",
    "^44" => "載",
    "^45" => "十",
    "^47" => "千",
);

/// Financial simplified Chinese numerals, using the fraud-resistant digit forms.
pub(crate) static CHINESE_SIMPLIFIED_FINANCIAL: ConversionTable = table!(
    "+0" => "",
    "-0" => "零",
    "=0" => "零",
    "1" => "壹",
    "2" => "贰",
    "3" => "叁",
    "4" => "肆",
    "5" => "伍",
    "6" => "陆",
    "7" => "柒",
    "8" => "捌",
    "9" => "玖",
    "^1+1" => "拾",
    "^1" => "拾",
    "Hundreds" => "佰",
    "^3" => "仟",
    "^4" => "萬",
    "^5" => "拾",
    "^7" => "仟",
    "^8" => "億",
    "^9" => "拾",
    "^11" => "仟",
    "^12" => "兆",
    "^13" => "拾",
    "^15" => "仟",
    "^16" => "京",
    "^17" => "拾",
    "^19" => "仟",
    "^20" => "垓",
    "^21" => "拾",
    "^23" => "仟",
    "^24" => "秭",
    "^25" => "拾",
    "^27" => "仟",
    "^28" => "穰",
    "^29" => "拾",
    "^31" => "仟",
    "^32" => "沟",
    "^33" => "拾",
    "^35" => "仟",
    "^36" => "涧",
    "^37" => "拾",
    "^39" => "仟",
    "^40" => "正",
    "^41" => "拾",
    "^43" => "仟",
    "^44" => "载",
    "^45" => "拾",
    "^47" => "仟",
);

/// Financial traditional Chinese numerals.
pub(crate) static CHINESE_TRADITIONAL_FINANCIAL: ConversionTable = table!(
    "+0" => "",
    "-0" => "零",
    "=0" => "零",
    "1" => "壹",
    "2" => "貳",
    "3" => "叄",
    "4" => "肆",
    "5" => "伍",
    "6" => "陸",
    "7" => "柒",
    "8" => "捌",
    "9" => "玖",
    "^1+1" => "拾",
    "^1" => "拾",
    "Hundreds" => "佰",
    "^3" => "仟",
    "^4" => "萬",
    "^5" => "拾",
    "^7" => "仟",
    "^8" => "億",
    "^9" => "拾",
    "^11" => "仟",
    "^12" => "兆",
    "^13" => "拾",
    "^15" => "仟",
    "^16" => "京",
    "^17" => "拾",
    "^19" => "仟",
    "^20" => "垓",
    "^21" => "拾",
    "^23" => "仟",
    "^24" => "秭",
    "^25" => "拾",
    "^27" => "仟",
    "^28" => "穰",
    "^29" => "拾",
    "^31" => "仟",
    "^32" => "沟",
    "^33" => "拾",
    "^35" => "仟",
    "^36" => "涧",
    "^37" => "拾",
    "^39" => "仟",
    "^40" => "正",
    "^41" => "拾",
    "^43" => "仟",
    "^44" => "载",
    "^45" => "拾",
    "^47" => "仟",
);

/// Dozenal overlay (Dwiggins transcription): only ten and eleven need new glyphs.
pub(crate) static DWIGGINS: ConversionTable = table!(
    "a" => "X",
    "b" => "E",
);

/// Dozenal overlay (Pitman transcription).
pub(crate) static PITMAN: ConversionTable = table!(
    "a" => "↊",
    "b" => "↋",
);

/// Fullwidth forms of the ASCII digits and letters.
pub(crate) static FULLWIDTH: ConversionTable = table!(
    "0" => "０", "1" => "１", "2" => "２", "3" => "３", "4" => "４",
    "5" => "５", "6" => "６", "7" => "７", "8" => "８", "9" => "９",
    "a" => "ａ", "b" => "ｂ", "c" => "ｃ", "d" => "ｄ", "e" => "ｅ",
    "f" => "ｆ", "g" => "ｇ", "h" => "ｈ", "i" => "ｉ", "j" => "ｊ",
    "k" => "ｋ", "l" => "ｌ", "m" => "ｍ", "n" => "ｎ", "o" => "ｏ",
    "p" => "ｐ", "q" => "ｑ", "r" => "ｒ", "s" => "ｓ", "t" => "ｔ",
    "u" => "ｕ", "v" => "ｖ", "w" => "ｗ", "x" => "ｘ", "y" => "ｙ",
    "z" => "ｚ",
);

/// Ol Chiki numerals.
pub(crate) static OL_CHIKI: ConversionTable = table!(
    "0" => "᱐", "1" => "᱑", "2" => "᱒", "3" => "᱓", "4" => "᱔",
    "5" => "᱕", "6" => "᱖", "7" => "᱗", "8" => "᱘", "9" => "᱙",
);

/// Kaktovik numerals. Twenty glyphs, for use with base 20.
pub(crate) static KAKTOVIK: ConversionTable = table!(
    "0" => "𝋀", "1" => "𝋁", "2" => "𝋂", "3" => "𝋃", "4" => "𝋄",
    "5" => "𝋅", "6" => "𝋆", "7" => "𝋇", "8" => "𝋈", "9" => "𝋉",
    "a" => "𝋊", "b" => "𝋋", "c" => "𝋌", "d" => "𝋍", "e" => "𝋎",
    "f" => "𝋏", "g" => "𝋐", "h" => "𝋑", "i" => "𝋒", "j" => "𝋓",
);

/// Ge'ez/Ethiopic numerals. Additive, with distinct glyph rows for odd (ones) and
/// even (tens) positions and generic hundred/myriad power glyphs; a power glyph
/// standing alone for one hundred or ten thousand drops its leading one.
pub(crate) static GEEZ: ConversionTable = table!(
    additive;
    "0" => "",
    "o1" => "፩",
    "o2" => "፪",
    "o3" => "፫",
    "o4" => "፬",
    "o5" => "፭",
    "o6" => "፮",
    "o7" => "፯",
    "o8" => "፰",
    "o9" => "፱",
    "e1" => "፲",
    "e2" => "፳",
    "e3" => "፴",
    "e4" => "፵",
    "e5" => "፶",
    "e6" => "፷",
    "e7" => "፸",
    "e8" => "፹",
    "e9" => "፺",
    "Hundreds" => "፻",
    "Hundreds+1" => "",
    "Myriads" => "፼",
    "Myriads+1" => "",
);
