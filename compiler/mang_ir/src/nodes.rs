//! Payload structs stored in the arena pools.
//!
//! Child references are [`Handle`]s; variable-length children live in the
//! shared pools and are referenced by a range type.

use crate::{
    AlternativeRange, ArgumentRange, ExprRange, Handle, Name, ReadSite, RowRange, SlotRange,
    StatementRange,
};

/// A name read lexically: symbol lookups, application callees, type names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lookup {
    pub name: Name,
    pub site: ReadSite,
}

/// A write target bound to a dense slot of its dictionary at parse time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalName {
    pub name: Name,
    pub slot: u32,
}

/// Function parameter: `name` or `Type:name`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Argument {
    pub type_name: Option<Lookup>,
    pub name: Name,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alternative {
    pub left: Handle,
    pub right: Handle,
}

/// `if a then b ... else c`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Conditional {
    pub alternatives: AlternativeRange,
    pub otherwise: Handle,
}

/// `is x a then b ... else c`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IsExpression {
    pub input: Handle,
    pub alternatives: AlternativeRange,
    pub otherwise: Handle,
}

/// Row of a table literal, before evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TableRow {
    pub key: Handle,
    pub value: Handle,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Table {
    pub rows: RowRange,
}

/// Row of an evaluated table, keyed by the serialized form of `key`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Row {
    pub label: String,
    pub key: Handle,
    pub value: Handle,
}

/// Evaluated table: rows sorted by `label`, at most one row per label.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct EvaluatedTable {
    rows: Vec<Row>,
}

impl EvaluatedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, replacing any row with the same label.
    pub fn insert(&mut self, row: Row) {
        match search_rows(&self.rows, &row.label) {
            Ok(i) => self.rows[i] = row,
            Err(i) => self.rows.insert(i, row),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Position of `label` in rows sorted by label, or where it would go.
pub(crate) fn search_rows(rows: &[Row], label: &str) -> Result<usize, usize> {
    rows.binary_search_by(|row| row.label.as_str().cmp(label))
}

/// Suffix `rows[start..]` of an evaluated table, produced by `drop`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EvaluatedTableView {
    pub table: u32,
    pub start: u32,
}

/// Dictionary literal: statements plus the slot names in slot order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnevaluatedDictionary {
    pub statements: StatementRange,
    pub slot_names: SlotRange,
}

/// Environment frame over `Arena::slots`.
///
/// The root frame's parent is an `Any` handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EvaluatedDictionary {
    pub parent: Handle,
    pub slots: SlotRange,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Slot {
    pub name: Name,
    pub value: Handle,
}

/// Tuple items, shared by `Tuple` and `EvaluatedTuple`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Tuple {
    pub items: ExprRange,
}

/// `in x out body`. `environment` is `Any` until the literal is evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    pub environment: Handle,
    pub argument: Argument,
    pub body: Handle,
}

/// `in {x y} out body` and `in (x y) out body`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionMulti {
    pub environment: Handle,
    pub arguments: ArgumentRange,
    pub body: Handle,
}

/// Native function, identified by its position in the evaluator's builtin table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionBuiltIn {
    pub id: u32,
}

/// Persistent list cell, shared by `Stack`, `EvaluatedStack` and `String`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Cons {
    pub top: Handle,
    pub rest: Handle,
}

/// `name@child`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LookupChild {
    pub name: Name,
    pub child: Handle,
}

/// `name!argument`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionApplication {
    pub callee: Lookup,
    pub argument: Handle,
}

/// `dynamic inner`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DynamicExpression {
    pub inner: Handle,
}

/// `Type:value`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypedExpression {
    pub type_name: Lookup,
    pub value: Handle,
}

/// One statement of a dictionary body.
///
/// `end` and `start` are indices relative to the dictionary's statement
/// range. `end` points at the matching end statement, `start` at the
/// matching loop head.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    /// `name=expression`
    Definition {
        target: LocalName,
        expression: Handle,
    },
    /// `name+=expression`
    PutAssignment {
        target: LocalName,
        expression: Handle,
    },
    /// `name++=expression`
    PutEachAssignment {
        target: LocalName,
        expression: Handle,
    },
    /// `name--`
    DropAssignment { target: LocalName },
    /// `while condition`
    While { condition: Handle, end: u32 },
    WhileEnd { start: u32 },
    /// `for item in container`
    For {
        item: LocalName,
        container: LocalName,
        end: u32,
    },
    ForEnd { start: u32 },
    /// `for container`
    ForSimple { container: LocalName, end: u32 },
    ForSimpleEnd { start: u32 },
    Return,
}
