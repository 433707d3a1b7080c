//! Loop bracket matching.
//!
//! The dictionary grammar collects statements with loop heads and `end`
//! markers still unpaired. [`resolve_loops`] pairs every `end` with the
//! innermost open head and writes both jump indices before the statements
//! are frozen in the arena.

use mang_ir::{Handle, LocalName, Span, Statement};

use crate::ParseError;

/// A dictionary statement before jump indices are known.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawStatement {
    Plain(Statement),
    While { condition: Handle, span: Span },
    For {
        item: LocalName,
        container: LocalName,
        span: Span,
    },
    ForSimple { container: LocalName, span: Span },
    End(Span),
}

/// Pair loop heads with their `end`s.
///
/// Each head's `end` field is the index of its end statement, and each end
/// statement's `start` field is the index of its head. Indices are relative to
/// the returned vector.
pub fn resolve_loops(raw: Vec<RawStatement>) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::with_capacity(raw.len());
    let mut open: Vec<(u32, Span)> = Vec::new();

    for item in raw {
        let index = mang_ir::to_u32(statements.len(), "statements");
        let statement = match item {
            RawStatement::Plain(statement) => statement,
            RawStatement::While { condition, span } => {
                open.push((index, span));
                Statement::While { condition, end: 0 }
            }
            RawStatement::For {
                item,
                container,
                span,
            } => {
                open.push((index, span));
                Statement::For {
                    item,
                    container,
                    end: 0,
                }
            }
            RawStatement::ForSimple { container, span } => {
                open.push((index, span));
                Statement::ForSimple { container, end: 0 }
            }
            RawStatement::End(span) => {
                let Some((start, _)) = open.pop() else {
                    return Err(ParseError::unmatched_end(span));
                };
                close_loop(&mut statements, start, index)
            }
        };
        statements.push(statement);
    }

    if let Some(&(_, span)) = open.last() {
        return Err(ParseError::unclosed_loop(span));
    }
    Ok(statements)
}

/// Point the head at `start` to `end` and build the matching end statement.
fn close_loop(statements: &mut [Statement], start: u32, end_index: u32) -> Statement {
    match statements.get_mut(start as usize) {
        Some(Statement::While { end, .. }) => {
            *end = end_index;
            Statement::WhileEnd { start }
        }
        Some(Statement::For { end, .. }) => {
            *end = end_index;
            Statement::ForEnd { start }
        }
        Some(Statement::ForSimple { end, .. }) => {
            *end = end_index;
            Statement::ForSimpleEnd { start }
        }
        other => panic!("loop head index {start} points at {other:?}"),
    }
}
