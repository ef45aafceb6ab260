//! Comparison-only text normalization
//!
//! Lower-cases, applies canonical decomposition (NFD) and drops combining
//! marks, so "Pedído" and "pedido" compare equal. Digits, punctuation and
//! whitespace pass through untouched. The output is lossy and must not be
//! shown to users.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize text for case- and diacritic-insensitive comparison
///
/// # Examples
/// ```
/// use chat_bridge_text_processing::normalize;
/// assert_eq!(normalize("Pedído"), "pedido");
/// assert_eq!(normalize("CAMPAÑA 2024!"), "campana 2024!");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
