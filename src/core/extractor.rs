use once_cell::sync::Lazy;
use regex::Regex;

const KEYWORD: &str = "typedef";

/// `<return-type> (*<name>)(<params>)`
///
/// Whitespace here also covers the ASCII information separators U+001C..U+001F,
/// which Unicode `\s` leaves out.
static FUNCTION_POINTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\w[\w\s\x1C-\x1F\*]*\([\s\x1C-\x1F]*\*[\s\x1C-\x1F]*\w+[\s\x1C-\x1F]*\))[\s\x1C-\x1F]*\([\s\x1C-\x1F]*([^\)]*)[\s\x1C-\x1F]*\)",
    )
    .unwrap()
});

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TypedefKind {
    /// Plain alias such as `typedef unsigned long size_t;`
    Alias,
    /// The declaration opened a brace (struct, union or enum body)
    Aggregate,
    /// Names a function-pointer type; never emitted
    FunctionPointer,
}

/// One `typedef` keyword that reached a top-level `;`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TypedefOccurrence<'a> {
    /// Byte offset of the keyword
    pub start: usize,
    /// Byte offset of the terminating `;`
    pub end: usize,
    /// Text between the keyword and the terminator
    pub body: &'a str,
    /// Text after the last space seen before the terminator
    pub fragment: &'a str,
    pub kind: TypedefKind,
}

impl TypedefOccurrence<'_> {
    pub fn is_included(&self) -> bool {
        self.kind != TypedefKind::FunctionPointer
    }
}

/// Lexical typedef scanner. This is not a C parser: comments, string literals
/// and comma-separated declarators are not understood.
pub struct TypedefExtractor;

impl TypedefExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Type names introduced by the typedefs in `text`, in source order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.occurrences(text)
            .into_iter()
            .filter(TypedefOccurrence::is_included)
            .map(|occurrence| occurrence.fragment.to_string())
            .collect()
    }

    /// Every terminated occurrence, function-pointer typedefs included.
    ///
    /// Keyword matches are found independently of each other, so a keyword lying
    /// inside an earlier occurrence's body starts its own scan.
    pub fn occurrences<'a>(&self, text: &'a str) -> Vec<TypedefOccurrence<'a>> {
        text.match_indices(KEYWORD)
            .filter_map(|(start, _)| self.scan_occurrence(text, start))
            .collect()
    }

    fn scan_occurrence<'a>(&self, text: &'a str, start: usize) -> Option<TypedefOccurrence<'a>> {
        let keyword_end = start + KEYWORD.len();
        let bytes = text.as_bytes();

        let mut depth: isize = 0;
        let mut is_struct_def = false;
        // Not scoped to depth: spaces inside a nested body count too.
        let mut last_space = keyword_end;

        for (index, &byte) in bytes.iter().enumerate().skip(start) {
            match byte {
                b' ' => last_space = index,
                b'{' => {
                    is_struct_def = true;
                    depth += 1;
                }
                b'}' => depth -= 1,
                b';' if depth == 0 => {
                    let body = &text[keyword_end..index];
                    let kind = if is_struct_def {
                        TypedefKind::Aggregate
                    } else if FUNCTION_POINTER.is_match(body) {
                        TypedefKind::FunctionPointer
                    } else {
                        TypedefKind::Alias
                    };

                    return Some(TypedefOccurrence {
                        start,
                        end: index,
                        body,
                        fragment: fragment_after(text, last_space, index),
                        kind,
                    });
                }
                _ => {}
            }
        }

        None
    }
}

impl Default for TypedefExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Slice from the character following `marker` up to `end`; empty when that
/// character is the terminator itself or lies beyond it.
fn fragment_after(text: &str, marker: usize, end: usize) -> &str {
    let step = text[marker..]
        .chars()
        .next()
        .map_or(1, char::len_utf8);
    let from = marker + step;
    if from >= end {
        ""
    } else {
        &text[from..end]
    }
}
