//! Voice presets offered by the generation form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Voice preset applied to the eBook prompt.
///
/// The display form is the label shown to the user and embedded verbatim in
/// the prompt. Parsing accepts the label or the lowercase variant name.
///
/// # Examples
///
/// ```
/// use scriptorium_core::Tone;
///
/// let tone: Tone = "Persuasivo (Vendas)".parse().unwrap();
/// assert_eq!(tone, Tone::Persuasive);
/// assert_eq!("persuasive".parse::<Tone>().unwrap(), Tone::Persuasive);
/// assert_eq!(Tone::default().to_string(), "Profissional e Educativo");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Tone {
    /// Professional and educational
    #[default]
    #[strum(to_string = "Profissional e Educativo", serialize = "professional")]
    #[serde(rename = "Profissional e Educativo", alias = "professional")]
    Professional,
    /// Inspiring and motivational
    #[strum(to_string = "Inspirador e Motivacional", serialize = "inspirational")]
    #[serde(rename = "Inspirador e Motivacional", alias = "inspirational")]
    Inspirational,
    /// Relaxed and youthful
    #[strum(to_string = "Descontraído e Jovem", serialize = "casual")]
    #[serde(rename = "Descontraído e Jovem", alias = "casual")]
    Casual,
    /// Technical and academic
    #[strum(to_string = "Técnico e Acadêmico", serialize = "academic")]
    #[serde(rename = "Técnico e Acadêmico", alias = "academic")]
    Academic,
    /// Persuasive, sales oriented
    #[strum(to_string = "Persuasivo (Vendas)", serialize = "persuasive")]
    #[serde(rename = "Persuasivo (Vendas)", alias = "persuasive")]
    Persuasive,
}

impl Tone {
    /// User-facing label, identical to the `Display` output.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Profissional e Educativo",
            Tone::Inspirational => "Inspirador e Motivacional",
            Tone::Casual => "Descontraído e Jovem",
            Tone::Academic => "Técnico e Acadêmico",
            Tone::Persuasive => "Persuasivo (Vendas)",
        }
    }

    /// English name, also accepted by `FromStr`.
    ///
    /// ```
    /// use scriptorium_core::Tone;
    ///
    /// assert_eq!(Tone::Academic.name(), "academic");
    /// assert_eq!(Tone::Academic.name().parse::<Tone>().unwrap(), Tone::Academic);
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Inspirational => "inspirational",
            Tone::Casual => "casual",
            Tone::Academic => "academic",
            Tone::Persuasive => "persuasive",
        }
    }

    /// All presets in form order.
    pub fn all() -> Vec<Tone> {
        Tone::iter().collect()
    }
}
