//! Per-code-point case functions

/// Which case a mapping targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseKind {
    /// Upper case
    Upper,
    /// Lower case
    Lower,
    /// Title case
    Title,
}

/// Total single code point case mapping
///
/// Every method must return a value for every input; characters without a
/// mapping are returned unchanged.
pub trait CaseMapper {
    /// Map to upper case
    fn to_upper(&self, c: char) -> char;

    /// Map to lower case
    fn to_lower(&self, c: char) -> char;

    /// Map to title case
    fn to_title(&self, c: char) -> char;

    /// Map to the requested case
    fn to_case(&self, kind: CaseKind, c: char) -> char {
        match kind {
            CaseKind::Upper => self.to_upper(c),
            CaseKind::Lower => self.to_lower(c),
            CaseKind::Title => self.to_title(c),
        }
    }
}

/// Simple Unicode case mapping
///
/// Full mappings that expand to several code points (such as `'ß'` to `"SS"`)
/// do not fit a one-for-one transform, so those characters keep their value
/// unless they have a separate single code point mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeCase;

impl CaseMapper for UnicodeCase {
    fn to_upper(&self, c: char) -> char {
        if let Some(upper) = greek_iota_subscript_upper(c) {
            return upper;
        }
        single(c.to_uppercase(), c)
    }

    fn to_lower(&self, c: char) -> char {
        match c {
            // Full mapping is "i\u{307}"
            '\u{130}' => 'i',
            _ => single(c.to_lowercase(), c),
        }
    }

    fn to_title(&self, c: char) -> char {
        match c {
            '\u{1C4}'..='\u{1C6}' => '\u{1C5}',
            '\u{1C7}'..='\u{1C9}' => '\u{1C8}',
            '\u{1CA}'..='\u{1CC}' => '\u{1CB}',
            '\u{1F1}'..='\u{1F3}' => '\u{1F2}',
            // Mkhedruli is its own title case; upper case is Mtavruli
            '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => c,
            _ => self.to_upper(c),
        }
    }
}

/// The only mapping when `mapped` yields exactly one code point, else `c`.
fn single(mut mapped: impl Iterator<Item = char>, c: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => c,
    }
}

/// Greek letters with ypogegrammeni map to their prosgegrammeni forms.
fn greek_iota_subscript_upper(c: char) -> Option<char> {
    let offset = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => 8,
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => 9,
        _ => return None,
    };
    char::from_u32(c as u32 + offset)
}
