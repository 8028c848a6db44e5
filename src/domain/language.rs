use std::fmt;
use std::str::FromStr;

/// Recognition locale passed through to the remote service unmodified.
/// Closed set; callers selecting anything else are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    EnUs,
    EnGb,
    EsEs,
    FrFr,
    DeDe,
    HiIn,
    ZhCn,
    JaJp,
    KoKr,
    PtBr,
    RuRu,
    ItIt,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::EnUs,
        Language::EnGb,
        Language::EsEs,
        Language::FrFr,
        Language::DeDe,
        Language::HiIn,
        Language::ZhCn,
        Language::JaJp,
        Language::KoKr,
        Language::PtBr,
        Language::RuRu,
        Language::ItIt,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EnGb => "en-GB",
            Language::EsEs => "es-ES",
            Language::FrFr => "fr-FR",
            Language::DeDe => "de-DE",
            Language::HiIn => "hi-IN",
            Language::ZhCn => "zh-CN",
            Language::JaJp => "ja-JP",
            Language::KoKr => "ko-KR",
            Language::PtBr => "pt-BR",
            Language::RuRu => "ru-RU",
            Language::ItIt => "it-IT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English (US)",
            Language::EnGb => "English (UK)",
            Language::EsEs => "Spanish",
            Language::FrFr => "French",
            Language::DeDe => "German",
            Language::HiIn => "Hindi",
            Language::ZhCn => "Chinese",
            Language::JaJp => "Japanese",
            Language::KoKr => "Korean",
            Language::PtBr => "Portuguese",
            Language::RuRu => "Russian",
            Language::ItIt => "Italian",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .find(|l| l.as_tag().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unsupported language tag: {}", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
