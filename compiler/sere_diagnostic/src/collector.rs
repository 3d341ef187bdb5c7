//! Ordered diagnostic sink.

use crate::Diagnostic;

/// Accumulates diagnostics in emission order.
///
/// Nothing is deduplicated or truncated: every diagnostic pushed is
/// returned to the caller.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        DiagnosticCollector {
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics reported by the lexer, which come before any parser
    /// diagnostics.
    pub fn lexical(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_lexical())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Extend<Diagnostic> for DiagnosticCollector {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Diagnostic> for DiagnosticCollector {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        DiagnosticCollector {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollector {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use sere_ir::Span;

    #[test]
    fn test_keeps_emission_order_and_duplicates() {
        let mut collector = DiagnosticCollector::new();
        let diag = Diagnostic::new(ErrorCode::E1001, Span::new(4, 5));
        collector.push(diag.clone());
        collector.push(Diagnostic::new(ErrorCode::E1003, Span::new(0, 1)));
        collector.push(diag);

        assert_eq!(collector.len(), 3);
        let codes: Vec<_> = collector.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![ErrorCode::E1001, ErrorCode::E1003, ErrorCode::E1001]);
    }

    #[test]
    fn test_lexical_diagnostics() {
        let collector: DiagnosticCollector = vec![
            Diagnostic::new(ErrorCode::E0002, Span::new(4, 5)),
            Diagnostic::new(ErrorCode::E1002, Span::new(6, 7)),
        ]
        .into_iter()
        .collect();
        let codes: Vec<_> = collector.lexical().map(|d| d.code).collect();
        assert_eq!(codes, vec![ErrorCode::E0002]);
    }
}
