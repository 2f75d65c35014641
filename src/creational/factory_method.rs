// Pattern: Factory Method - creators decide which Localizer the client gets.
// Two forms: one factory type per language, and an enum-keyed lookup.

use std::collections::HashMap;
use std::io::Write;

use crate::error::Result;

// ============================================================================
// Products
// ============================================================================

pub trait Localizer {
    /// Translates `msg`, or returns it unchanged when no translation exists.
    fn localize(&self, msg: &str) -> String;
}

/// Word-table localizer backing the French and Spanish products.
struct TableLocalizer {
    translations: HashMap<&'static str, &'static str>,
}

impl TableLocalizer {
    fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            translations: pairs.iter().copied().collect(),
        }
    }
}

impl Localizer for TableLocalizer {
    fn localize(&self, msg: &str) -> String {
        self.translations
            .get(msg)
            .copied()
            .unwrap_or(msg)
            .to_string()
    }
}

pub struct FrenchLocalizer(TableLocalizer);

impl FrenchLocalizer {
    pub fn new() -> Self {
        Self(TableLocalizer::new(&[
            ("car", "voiture"),
            ("bike", "bicyclette"),
            ("cycle", "cyclette"),
        ]))
    }
}

impl Default for FrenchLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for FrenchLocalizer {
    fn localize(&self, msg: &str) -> String {
        self.0.localize(msg)
    }
}

pub struct SpanishLocalizer(TableLocalizer);

impl SpanishLocalizer {
    pub fn new() -> Self {
        Self(TableLocalizer::new(&[
            ("car", "coche"),
            ("bike", "bicicleta"),
            ("cycle", "ciclo"),
        ]))
    }
}

impl Default for SpanishLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for SpanishLocalizer {
    fn localize(&self, msg: &str) -> String {
        self.0.localize(msg)
    }
}

pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn localize(&self, msg: &str) -> String {
        msg.to_string()
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait LocalizerFactory {
    fn create_localizer(&self) -> Box<dyn Localizer>;
}

pub struct FrenchLocalizerFactory;
impl LocalizerFactory for FrenchLocalizerFactory {
    fn create_localizer(&self) -> Box<dyn Localizer> {
        Box::new(FrenchLocalizer::new())
    }
}

pub struct SpanishLocalizerFactory;
impl LocalizerFactory for SpanishLocalizerFactory {
    fn create_localizer(&self) -> Box<dyn Localizer> {
        Box::new(SpanishLocalizer::new())
    }
}

pub struct EnglishLocalizerFactory;
impl LocalizerFactory for EnglishLocalizerFactory {
    fn create_localizer(&self) -> Box<dyn Localizer> {
        Box::new(EnglishLocalizer)
    }
}

// Enum-keyed alternative: no creator types, just a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    French,
    #[default]
    English,
    Spanish,
}

pub fn create_localizer(language: Language) -> Box<dyn Localizer> {
    match language {
        Language::French => Box::new(FrenchLocalizer::new()),
        Language::English => Box::new(EnglishLocalizer),
        Language::Spanish => Box::new(SpanishLocalizer::new()),
    }
}

// ============================================================================
// Client
// ============================================================================

pub const MESSAGES: [&str; 3] = ["car", "bike", "cycle"];

/// Translates every message with localizers from the given factories, which
/// the client knows only through the creator trait.
pub fn client_code<W: Write + ?Sized>(
    french: &dyn LocalizerFactory,
    english: &dyn LocalizerFactory,
    spanish: &dyn LocalizerFactory,
    out: &mut W,
) -> Result<()> {
    let french = french.create_localizer();
    let english = english.create_localizer();
    let spanish = spanish.create_localizer();

    for msg in MESSAGES {
        writeln!(out, "Message: {msg}")?;
        writeln!(out, "French: {}", french.localize(msg))?;
        writeln!(out, "English: {}", english.localize(msg))?;
        writeln!(out, "Spanish: {}", spanish.localize(msg))?;
        writeln!(out, "{}", "-".repeat(30))?;
    }
    Ok(())
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    client_code(
        &FrenchLocalizerFactory,
        &EnglishLocalizerFactory,
        &SpanishLocalizerFactory,
        out,
    )
}
