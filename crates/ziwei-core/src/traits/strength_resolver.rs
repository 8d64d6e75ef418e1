//! StrengthResolver trait.
//!
//! The pipeline asks a resolver which strength grade a symbol occupies in a
//! position. The shipped resolver always answers with one fixed grade; a
//! resolver backed by real brightness tables can replace it without touching
//! the pipeline.

use crate::chart::NatalChart;
use crate::types::{Position, StrengthGrade, SymbolName};

/// Resolves the positional strength grade of a symbol.
pub trait StrengthResolver: Send + Sync {
    fn resolve(&self, symbol: &SymbolName, position: Position, chart: &NatalChart)
        -> StrengthGrade;
}

/// Resolves every symbol to the same grade, `Li` unless told otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStrengthResolver {
    grade: StrengthGrade,
}

impl FixedStrengthResolver {
    pub fn new(grade: StrengthGrade) -> Self {
        Self { grade }
    }

    pub fn grade(&self) -> StrengthGrade {
        self.grade
    }
}

impl StrengthResolver for FixedStrengthResolver {
    fn resolve(&self, _: &SymbolName, _: Position, _: &NatalChart) -> StrengthGrade {
        self.grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolver_answers_li_everywhere() {
        let chart = NatalChart::builder().build();
        let resolver = FixedStrengthResolver::default();
        let symbol = SymbolName::canonical("紫微").unwrap();
        for position in Position::ALL {
            assert_eq!(resolver.resolve(&symbol, position, &chart), StrengthGrade::Li);
        }
    }

    #[test]
    fn fixed_grade_is_configurable() {
        let chart = NatalChart::builder().build();
        let resolver = FixedStrengthResolver::new(StrengthGrade::Miao);
        let symbol = SymbolName::canonical("天喜").unwrap();
        assert_eq!(
            resolver.resolve(&symbol, Position::Career, &chart),
            StrengthGrade::Miao
        );
    }

    #[test]
    fn resolver_is_object_safe() {
        let resolver: Box<dyn StrengthResolver> = Box::new(FixedStrengthResolver::default());
        let chart = NatalChart::builder().build();
        let symbol = SymbolName::canonical("天府").unwrap();
        assert_eq!(resolver.resolve(&symbol, Position::Soul, &chart), StrengthGrade::Li);
    }
}
