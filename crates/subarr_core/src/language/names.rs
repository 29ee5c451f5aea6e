//! Language reference table.
//!
//! One row per language: ISO 639-1 code (empty when the language has none),
//! ISO 639-2/T, ISO 639-2/B, English name, native name. Used both to map
//! three-letter codes onto their shortest form and to recognize language
//! names written in track titles.

/// A row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub alpha3_b: &'static str,
    pub english: &'static str,
    pub native: &'static str,
}

impl LanguageEntry {
    /// Shortest code: ISO 639-1 when it exists, else ISO 639-2/T.
    pub fn code(&self) -> &'static str {
        if self.alpha2.is_empty() {
            self.alpha3
        } else {
            self.alpha2
        }
    }
}

const fn lang(
    alpha2: &'static str,
    alpha3: &'static str,
    alpha3_b: &'static str,
    english: &'static str,
    native: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        alpha2,
        alpha3,
        alpha3_b,
        english,
        native,
    }
}

pub const LANGUAGES: &[LanguageEntry] = &[
    lang("af", "afr", "afr", "Afrikaans", "Afrikaans"),
    lang("ak", "aka", "aka", "Akan", "Akan"),
    lang("am", "amh", "amh", "Amharic", "አማርኛ"),
    lang("ar", "ara", "ara", "Arabic", "العربية"),
    lang("az", "aze", "aze", "Azerbaijani", "azərbaycan"),
    lang("be", "bel", "bel", "Belarusian", "беларуская"),
    lang("bg", "bul", "bul", "Bulgarian", "български"),
    lang("bn", "ben", "ben", "Bangla", "বাংলা"),
    lang("bs", "bos", "bos", "Bosnian", "bosanski"),
    lang("ca", "cat", "cat", "Catalan", "català"),
    lang("cs", "ces", "cze", "Czech", "čeština"),
    lang("cy", "cym", "wel", "Welsh", "Cymraeg"),
    lang("da", "dan", "dan", "Danish", "dansk"),
    lang("de", "deu", "ger", "German", "Deutsch"),
    lang("el", "ell", "gre", "Greek", "Ελληνικά"),
    lang("en", "eng", "eng", "English", "English"),
    lang("eo", "epo", "epo", "Esperanto", "esperanto"),
    lang("es", "spa", "spa", "Spanish", "español"),
    lang("et", "est", "est", "Estonian", "eesti"),
    lang("eu", "eus", "baq", "Basque", "euskara"),
    lang("fa", "fas", "per", "Persian", "فارسی"),
    lang("fi", "fin", "fin", "Finnish", "suomi"),
    lang("", "fil", "fil", "Filipino", "Filipino"),
    lang("fr", "fra", "fre", "French", "français"),
    lang("ga", "gle", "gle", "Irish", "Gaeilge"),
    lang("gl", "glg", "glg", "Galician", "galego"),
    lang("gu", "guj", "guj", "Gujarati", "ગુજરાતી"),
    lang("he", "heb", "heb", "Hebrew", "עברית"),
    lang("hi", "hin", "hin", "Hindi", "हिन्दी"),
    lang("hr", "hrv", "hrv", "Croatian", "hrvatski"),
    lang("hu", "hun", "hun", "Hungarian", "magyar"),
    lang("hy", "hye", "arm", "Armenian", "հայերեն"),
    lang("id", "ind", "ind", "Indonesian", "Indonesia"),
    lang("is", "isl", "ice", "Icelandic", "íslenska"),
    lang("it", "ita", "ita", "Italian", "italiano"),
    lang("ja", "jpn", "jpn", "Japanese", "日本語"),
    lang("jv", "jav", "jav", "Javanese", "Jawa"),
    lang("ka", "kat", "geo", "Georgian", "ქართული"),
    lang("kk", "kaz", "kaz", "Kazakh", "қазақ тілі"),
    lang("km", "khm", "khm", "Khmer", "ខ្មែរ"),
    lang("kn", "kan", "kan", "Kannada", "ಕನ್ನಡ"),
    lang("ko", "kor", "kor", "Korean", "한국어"),
    lang("la", "lat", "lat", "Latin", "Latina"),
    lang("lo", "lao", "lao", "Lao", "ລາວ"),
    lang("lt", "lit", "lit", "Lithuanian", "lietuvių"),
    lang("lv", "lav", "lav", "Latvian", "latviešu"),
    lang("mk", "mkd", "mac", "Macedonian", "македонски"),
    lang("ml", "mal", "mal", "Malayalam", "മലയാളം"),
    lang("mn", "mon", "mon", "Mongolian", "монгол"),
    lang("mr", "mar", "mar", "Marathi", "मराठी"),
    lang("ms", "msa", "may", "Malay", "Melayu"),
    lang("my", "mya", "bur", "Burmese", "မြန်မာ"),
    lang("nb", "nob", "nob", "Norwegian Bokmål", "norsk bokmål"),
    lang("ne", "nep", "nep", "Nepali", "नेपाली"),
    lang("nl", "nld", "dut", "Dutch", "Nederlands"),
    lang("nn", "nno", "nno", "Norwegian Nynorsk", "norsk nynorsk"),
    lang("no", "nor", "nor", "Norwegian", "norsk"),
    lang("or", "ori", "ori", "Odia", "ଓଡ଼ିଆ"),
    lang("pa", "pan", "pan", "Punjabi", "ਪੰਜਾਬੀ"),
    lang("pl", "pol", "pol", "Polish", "polski"),
    lang("pt", "por", "por", "Portuguese", "português"),
    lang("ro", "ron", "rum", "Romanian", "română"),
    lang("ru", "rus", "rus", "Russian", "русский"),
    lang("si", "sin", "sin", "Sinhala", "සිංහල"),
    lang("sk", "slk", "slo", "Slovak", "slovenčina"),
    lang("sl", "slv", "slv", "Slovenian", "slovenščina"),
    lang("sn", "sna", "sna", "Shona", "chiShona"),
    lang("sq", "sqi", "alb", "Albanian", "shqip"),
    lang("sr", "srp", "srp", "Serbian", "српски"),
    lang("sv", "swe", "swe", "Swedish", "svenska"),
    lang("sw", "swa", "swa", "Swahili", "Kiswahili"),
    lang("ta", "tam", "tam", "Tamil", "தமிழ்"),
    lang("te", "tel", "tel", "Telugu", "తెలుగు"),
    lang("th", "tha", "tha", "Thai", "ไทย"),
    lang("tk", "tuk", "tuk", "Turkmen", "türkmen dili"),
    lang("tl", "tgl", "tgl", "Tagalog", "Tagalog"),
    lang("tr", "tur", "tur", "Turkish", "Türkçe"),
    lang("uk", "ukr", "ukr", "Ukrainian", "українська"),
    lang("ur", "urd", "urd", "Urdu", "اردو"),
    lang("uz", "uzb", "uzb", "Uzbek", "o‘zbek"),
    lang("vi", "vie", "vie", "Vietnamese", "Tiếng Việt"),
    lang("yi", "yid", "yid", "Yiddish", "ייִדיש"),
    lang("zh", "zho", "chi", "Chinese", "中文"),
    lang("zu", "zul", "zul", "Zulu", "isiZulu"),
];

/// Codes that are not the canonical T/B codes of a table row but should
/// collapse onto one (individual-language codes, deprecated ISO 639-1).
const CODE_ALIASES: &[(&str, &str)] = &[
    ("cmn", "zh"),
    ("yue", "zh"),
    ("pes", "fa"),
    ("prs", "fa"),
    ("arb", "ar"),
    ("zsm", "ms"),
    ("iw", "he"),
    ("in", "id"),
    ("ji", "yi"),
    ("mo", "ro"),
    ("tw", "ak"),
];

/// Alternate names seen in release track titles, mapped to a full tag.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("castilian", "es-ES"),
    ("castellano", "es-ES"),
    ("latino", "es-419"),
    ("latin american spanish", "es-419"),
    ("brazilian", "pt-BR"),
    ("brazilian portuguese", "pt-BR"),
    ("flemish", "nl-BE"),
    ("mandarin", "zh"),
    ("cantonese", "zh"),
    ("farsi", "fa"),
    ("simplified chinese", "zh-Hans"),
    ("traditional chinese", "zh-Hant"),
    ("canadian french", "fr-CA"),
    ("québécois", "fr-CA"),
    ("vf", "fr-FR"),
    ("vostfr", "fr-FR"),
];

/// Look up a row by any of its codes (case-insensitive).
pub fn entry_for_code(code: &str) -> Option<&'static LanguageEntry> {
    let code = code.to_ascii_lowercase();
    let code = CODE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, target)| *target)
        .unwrap_or(code.as_str());

    LANGUAGES.iter().find(|entry| {
        (!entry.alpha2.is_empty() && entry.alpha2 == code)
            || entry.alpha3 == code
            || entry.alpha3_b == code
    })
}

/// Find the language a free-text name refers to.
///
/// The whole (lower-cased) name is tried first against English names,
/// native names and aliases; then each alphabetic word on its own. Returns
/// a tag string ready for standardization.
pub fn find_by_name(name: &str) -> Option<String> {
    let lowered = name.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    if let Some(tag) = match_name(&lowered) {
        return Some(tag);
    }

    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() > 2)
        .find_map(match_name)
}

fn match_name(candidate: &str) -> Option<String> {
    if let Some((_, tag)) = NAME_ALIASES.iter().find(|(alias, _)| *alias == candidate) {
        return Some(tag.to_string());
    }

    LANGUAGES
        .iter()
        .find(|entry| {
            entry.english.to_lowercase() == candidate || entry.native.to_lowercase() == candidate
        })
        .map(|entry| entry.code().to_string())
}
