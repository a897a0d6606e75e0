//! Field extraction from free-text narratives (glosas).
//!
//! Each bank writes counterparty RUTs, names and document numbers into the
//! narrative in its own house style, so the rules are dialect-specific.
//! Extraction failure is an expected outcome, not an error: every function
//! returns `None` (or an empty string) and the record keeps flowing.
//!
//! Narrative shapes these rules target:
//!   BCI ledger:      "TRASPASO FDOS OTRO BCO/0000123456/12345678K/..."
//!   BCI ledger:      "CARGO POR PAGO NOMINA EN LINEA-1234567"
//!   Estado stmt:     "TRANSFERENCIA DE 12345678-9 JUAN PEREZ SOTO"
//!   Estado ledger:   "TRANSFER JUAN PEREZ/12345678K"

use std::sync::LazyLock;

use regex::Regex;

static RUT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}[kK0-9]$").unwrap());
static RUT_INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{7,8}-[kK\d]\b").unwrap());
static TRANSFER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TRANSFER\s+([A-Z\s]+)(?:/\d+)?").unwrap());
static RUT_THEN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{7,8}-[kK\d]\s+(.+)").unwrap());
static DE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DE\s+([A-ZÁÉÍÓÚÑ\s]+)").unwrap());
static AL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AL\s+([A-ZÁÉÍÓÚÑ\s]+)").unwrap());
static TRAILING_DOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*(\d{7,8})$").unwrap());

/// RUT from a BCI ledger glosa: the third slash-delimited token, if it looks
/// like digits plus a check digit/letter. Hyphen stripped, uppercased.
pub fn rut_from_bci_ledger(glosa: &str) -> Option<String> {
    let parts: Vec<&str> = glosa.split('/').collect();
    if parts.len() > 2 {
        let token = parts[2].trim();
        if RUT_TOKEN_RE.is_match(token) {
            return Some(token.replace('-', "").to_uppercase());
        }
    }
    None
}

/// Counterparty name from a BCI ledger glosa: the text after a literal
/// "TRANSFER", minus any trailing "/123..." suffix.
pub fn name_from_bci_ledger(glosa: &str) -> Option<String> {
    TRANSFER_NAME_RE
        .captures(glosa)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Document number from a BCI ledger glosa: the second slash-delimited token
/// when purely numeric, otherwise a trailing "-NNNNNNN" suffix of 7-8 digits
/// ("CARGO POR PAGO NOMINA EN LINEA-1234567").
pub fn document_from_bci_ledger(glosa: &str) -> Option<String> {
    let parts: Vec<&str> = glosa.split('/').collect();
    if parts.len() > 1 {
        let token = parts[1].trim();
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return Some(token.to_string());
        }
    }
    TRAILING_DOC_RE
        .captures(glosa)
        .map(|c| c[1].to_string())
}

/// RUT anywhere in an Estado statement description, written "12345678-9".
pub fn rut_from_estado_statement(description: &str) -> Option<String> {
    RUT_INLINE_RE
        .find(description)
        .map(|m| m.as_str().replace('-', "").to_uppercase())
}

/// Counterparty name from an Estado statement description. First preference
/// is the text right after an inline RUT; the fallbacks are the "DE ..." and
/// "AL ..." transfer phrasings, rejecting any capture that itself contains
/// the word RUT (a label fragment, not a name).
pub fn name_from_estado_statement(description: &str) -> Option<String> {
    let upper = description.to_uppercase();

    if let Some(caps) = RUT_THEN_NAME_RE.captures(&upper) {
        let name = caps[1].trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }

    for re in [&*DE_NAME_RE, &*AL_NAME_RE] {
        if let Some(caps) = re.captures(&upper) {
            let name = caps[1].trim().to_string();
            if !name.contains("RUT") && !name.is_empty() {
                return Some(name);
            }
        }
    }

    None
}

/// RUT from an Estado ledger glosa: the second slash-delimited token of the
/// uppercased text, digits plus check digit/letter.
pub fn rut_from_estado_ledger(glosa: &str) -> Option<String> {
    let upper = glosa.to_uppercase();
    let parts: Vec<&str> = upper.split('/').collect();
    if parts.len() > 1 {
        let token = parts[1].trim();
        if RUT_TOKEN_RE.is_match(token) {
            return Some(token.to_string());
        }
    }
    None
}

/// Counterparty name from an Estado ledger glosa: same TRANSFER rule as BCI,
/// applied to the uppercased text.
pub fn name_from_estado_ledger(glosa: &str) -> Option<String> {
    let upper = glosa.to_uppercase();
    TRANSFER_NAME_RE
        .captures(&upper)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
}
