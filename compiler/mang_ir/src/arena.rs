//! Structure-of-arrays arena for every node and value kind.
//!
//! # Architecture
//!
//! One append-only `Vec` per payload kind, plus shared pools for
//! variable-length children (tuple items, statements, arguments,
//! alternatives, table rows, frame slots, slot names). A [`Handle`] picks the
//! pool by its [`Kind`] and the element by its index. Payload-free kinds
//! (`Yes`, `No`, `EmptyStack`, `EmptyString`, `Any`) have no pool.
//!
//! Accessing a handle through the wrong accessor, or with an index that is
//! out of range, is an internal invariant violation and panics.

use crate::{
    Alternative, AlternativeRange, Argument, ArgumentRange, Conditional, Cons, DynamicExpression,
    EvaluatedDictionary, EvaluatedTable, EvaluatedTableView, ExprRange, Function,
    FunctionApplication, FunctionBuiltIn, FunctionMulti, Handle, IsExpression, Kind, Lookup,
    LookupChild, Name, ReadSite, Row, RowRange, Slot, SlotRange, Span, Statement,
    StatementRange, StringInterner, Table, TableRow, Tuple, TypedExpression,
    UnevaluatedDictionary,
};
use crate::nodes::search_rows;

/// Convert a pool length to a `u32` index.
///
/// # Panics
/// Panics if the pool has grown past `u32::MAX` entries.
#[inline]
pub fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena overflow: too many {what}"))
}

#[track_caller]
#[cold]
fn wrong_kind(handle: Handle, expected: Kind) -> ! {
    panic!(
        "arena access with wrong kind: expected {:?}, got {:?}",
        expected, handle
    )
}

#[track_caller]
#[cold]
fn out_of_range(what: &str, index: usize, len: usize) -> ! {
    panic!("arena index {index} out of range for {what} (len {len})")
}

#[track_caller]
#[inline]
fn get<'a, T>(pool: &'a [T], index: usize, what: &str) -> &'a T {
    match pool.get(index) {
        Some(value) => value,
        None => out_of_range(what, index, pool.len()),
    }
}

#[track_caller]
#[inline]
fn slice<'a, T>(pool: &'a [T], range: std::ops::Range<usize>, what: &str) -> &'a [T] {
    let len = pool.len();
    match pool.get(range.clone()) {
        Some(items) => items,
        None => out_of_range(what, range.end, len),
    }
}

/// Owner of all expression and value data for one run.
#[derive(Default, Debug)]
pub struct Arena {
    interner: StringInterner,
    read_sites: u32,

    numbers: Vec<f64>,
    characters: Vec<char>,
    conditionals: Vec<Conditional>,
    is_expressions: Vec<IsExpression>,
    tables: Vec<Table>,
    evaluated_tables: Vec<EvaluatedTable>,
    table_views: Vec<EvaluatedTableView>,
    dictionaries: Vec<UnevaluatedDictionary>,
    evaluated_dictionaries: Vec<EvaluatedDictionary>,
    tuples: Vec<Tuple>,
    evaluated_tuples: Vec<Tuple>,
    functions: Vec<Function>,
    function_dictionaries: Vec<FunctionMulti>,
    function_tuples: Vec<FunctionMulti>,
    builtins: Vec<FunctionBuiltIn>,
    stacks: Vec<Cons>,
    evaluated_stacks: Vec<Cons>,
    strings: Vec<Cons>,
    child_lookups: Vec<LookupChild>,
    applications: Vec<FunctionApplication>,
    symbol_lookups: Vec<Lookup>,
    dynamic_expressions: Vec<DynamicExpression>,
    typed_expressions: Vec<TypedExpression>,

    expressions: Vec<Handle>,
    statements: Vec<Statement>,
    statement_spans: Vec<Span>,
    arguments: Vec<Argument>,
    alternatives: Vec<Alternative>,
    table_rows: Vec<TableRow>,
    slots: Vec<Slot>,
    slot_names: Vec<Name>,
}

/// Generates `make_*` / accessor pairs for payload pools.
macro_rules! payload_pools {
    ($($kind:ident => $pool:ident: $ty:ty, $make:ident, $get:ident;)*) => {
        impl Arena { $(
            pub fn $make(&mut self, span: Span, payload: $ty) -> Handle {
                let index = to_u32(self.$pool.len(), stringify!($pool));
                self.$pool.push(payload);
                Handle::new(Kind::$kind, index, span)
            }

            #[track_caller]
            #[inline]
            pub fn $get(&self, handle: Handle) -> &$ty {
                if handle.kind != Kind::$kind {
                    wrong_kind(handle, Kind::$kind);
                }
                get(&self.$pool, handle.index as usize, stringify!($pool))
            }
        )* }
    };
}

payload_pools! {
    Conditional => conditionals: Conditional, make_conditional, conditional;
    Is => is_expressions: IsExpression, make_is, is_expression;
    Table => tables: Table, make_table, table;
    EvaluatedTable => evaluated_tables: EvaluatedTable, make_evaluated_table, evaluated_table;
    EvaluatedTableView => table_views: EvaluatedTableView, make_table_view, table_view;
    Dictionary => dictionaries: UnevaluatedDictionary, make_dictionary, dictionary;
    EvaluatedDictionary => evaluated_dictionaries: EvaluatedDictionary, make_frame, frame;
    Tuple => tuples: Tuple, make_tuple, tuple;
    EvaluatedTuple => evaluated_tuples: Tuple, make_evaluated_tuple, evaluated_tuple;
    Function => functions: Function, make_function, function;
    FunctionDictionary => function_dictionaries: FunctionMulti, make_function_dictionary, function_dictionary;
    FunctionTuple => function_tuples: FunctionMulti, make_function_tuple, function_tuple;
    FunctionBuiltIn => builtins: FunctionBuiltIn, make_builtin, builtin;
    Stack => stacks: Cons, make_stack, stack;
    EvaluatedStack => evaluated_stacks: Cons, make_evaluated_stack, evaluated_stack;
    String => strings: Cons, make_string, string;
    LookupChild => child_lookups: LookupChild, make_lookup_child, lookup_child;
    FunctionApplication => applications: FunctionApplication, make_application, application;
    LookupSymbol => symbol_lookups: Lookup, make_lookup_symbol, lookup_symbol;
    DynamicExpression => dynamic_expressions: DynamicExpression, make_dynamic, dynamic;
    TypedExpression => typed_expressions: TypedExpression, make_typed, typed;
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every value and name. All previously issued handles become invalid.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Names and read sites

    pub fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn name_text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Allocate a fresh read-site identity.
    pub fn new_read_site(&mut self) -> ReadSite {
        let site = ReadSite::from_raw(self.read_sites);
        self.read_sites += 1;
        site
    }

    /// Number of read sites allocated so far.
    pub fn read_site_count(&self) -> usize {
        self.read_sites as usize
    }

    // Scalars

    pub fn make_number(&mut self, span: Span, value: f64) -> Handle {
        let index = to_u32(self.numbers.len(), "numbers");
        self.numbers.push(value);
        Handle::new(Kind::Number, index, span)
    }

    #[track_caller]
    pub fn number(&self, handle: Handle) -> f64 {
        if handle.kind != Kind::Number {
            wrong_kind(handle, Kind::Number);
        }
        *get(&self.numbers, handle.index as usize, "numbers")
    }

    pub fn make_character(&mut self, span: Span, value: char) -> Handle {
        let index = to_u32(self.characters.len(), "characters");
        self.characters.push(value);
        Handle::new(Kind::Character, index, span)
    }

    #[track_caller]
    pub fn character(&self, handle: Handle) -> char {
        if handle.kind != Kind::Character {
            wrong_kind(handle, Kind::Character);
        }
        *get(&self.characters, handle.index as usize, "characters")
    }

    // Shared pools

    pub fn push_expressions(&mut self, items: impl IntoIterator<Item = Handle>) -> ExprRange {
        let start = to_u32(self.expressions.len(), "expressions");
        self.expressions.extend(items);
        let end = to_u32(self.expressions.len(), "expressions");
        ExprRange::new(start, end - start)
    }

    #[track_caller]
    pub fn expressions(&self, range: ExprRange) -> &[Handle] {
        slice(&self.expressions, range.indices(), "expressions")
    }

    /// Items of a `Tuple` or `EvaluatedTuple` handle.
    #[track_caller]
    pub fn tuple_items(&self, handle: Handle) -> &[Handle] {
        let tuple = match handle.kind {
            Kind::Tuple => self.tuple(handle),
            _ => self.evaluated_tuple(handle),
        };
        self.expressions(tuple.items)
    }

    /// Build an evaluated tuple from already evaluated items.
    pub fn make_evaluated_tuple_of(&mut self, span: Span, items: &[Handle]) -> Handle {
        let items = self.push_expressions(items.iter().copied());
        self.make_evaluated_tuple(span, Tuple { items })
    }

    /// Freeze one dictionary's statements. `spans[i]` is the source of
    /// `statements[i]`.
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub fn push_statements(
        &mut self,
        statements: Vec<Statement>,
        spans: Vec<Span>,
    ) -> StatementRange {
        assert_eq!(
            statements.len(),
            spans.len(),
            "every statement needs exactly one span"
        );
        let start = to_u32(self.statements.len(), "statements");
        let len = to_u32(statements.len(), "statements");
        self.statements.extend(statements);
        self.statement_spans.extend(spans);
        StatementRange::new(start, len)
    }

    #[track_caller]
    pub fn statements(&self, range: StatementRange) -> &[Statement] {
        slice(&self.statements, range.indices(), "statements")
    }

    /// Source spans parallel to [`Arena::statements`].
    #[track_caller]
    pub fn statement_spans(&self, range: StatementRange) -> &[Span] {
        slice(&self.statement_spans, range.indices(), "statement spans")
    }

    pub fn push_arguments(&mut self, arguments: Vec<Argument>) -> ArgumentRange {
        let start = to_u32(self.arguments.len(), "arguments");
        let len = to_u32(arguments.len(), "arguments");
        self.arguments.extend(arguments);
        ArgumentRange::new(start, len)
    }

    #[track_caller]
    pub fn arguments(&self, range: ArgumentRange) -> &[Argument] {
        slice(&self.arguments, range.indices(), "arguments")
    }

    pub fn push_alternatives(&mut self, alternatives: Vec<Alternative>) -> AlternativeRange {
        let start = to_u32(self.alternatives.len(), "alternatives");
        let len = to_u32(alternatives.len(), "alternatives");
        self.alternatives.extend(alternatives);
        AlternativeRange::new(start, len)
    }

    #[track_caller]
    pub fn alternatives(&self, range: AlternativeRange) -> &[Alternative] {
        slice(&self.alternatives, range.indices(), "alternatives")
    }

    pub fn push_table_rows(&mut self, rows: Vec<TableRow>) -> RowRange {
        let start = to_u32(self.table_rows.len(), "table rows");
        let len = to_u32(rows.len(), "table rows");
        self.table_rows.extend(rows);
        RowRange::new(start, len)
    }

    #[track_caller]
    pub fn table_rows(&self, range: RowRange) -> &[TableRow] {
        slice(&self.table_rows, range.indices(), "table rows")
    }

    pub fn push_slot_names(&mut self, names: Vec<Name>) -> SlotRange {
        let start = to_u32(self.slot_names.len(), "slot names");
        let len = to_u32(names.len(), "slot names");
        self.slot_names.extend(names);
        SlotRange::new(start, len)
    }

    #[track_caller]
    pub fn slot_names(&self, range: SlotRange) -> &[Name] {
        slice(&self.slot_names, range.indices(), "slot names")
    }

    // Frames

    pub fn push_slots(&mut self, slots: impl IntoIterator<Item = Slot>) -> SlotRange {
        let start = to_u32(self.slots.len(), "slots");
        self.slots.extend(slots);
        let end = to_u32(self.slots.len(), "slots");
        SlotRange::new(start, end - start)
    }

    /// Slots of an `EvaluatedDictionary` handle.
    #[track_caller]
    pub fn frame_slots(&self, frame: Handle) -> &[Slot] {
        let slots = self.frame(frame).slots;
        slice(&self.slots, slots.indices(), "slots")
    }

    /// Value currently stored in slot `slot` of `frame`.
    #[track_caller]
    pub fn slot_value(&self, frame: Handle, slot: u32) -> Handle {
        match self.frame_slots(frame).get(slot as usize) {
            Some(s) => s.value,
            None => out_of_range("frame slots", slot as usize, self.frame(frame).slots.len()),
        }
    }

    /// Overwrite slot `slot` of `frame`. Only the executing dictionary writes its frame.
    #[track_caller]
    pub fn set_slot(&mut self, frame: Handle, slot: u32, value: Handle) {
        let range = self.frame(frame).slots;
        if slot >= range.len {
            out_of_range("frame slots", slot as usize, range.len());
        }
        let index = (range.start + slot) as usize;
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(s) => s.value = value,
            None => out_of_range("slots", index, len),
        }
    }

    /// Linear scan of one frame for `name`.
    #[track_caller]
    pub fn frame_lookup(&self, frame: Handle, name: Name) -> Option<Handle> {
        self.frame_slots(frame)
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.value)
    }

    // Tables

    /// Rows of an `EvaluatedTable` or the visible suffix of an `EvaluatedTableView`.
    #[track_caller]
    pub fn table_rows_of(&self, handle: Handle) -> &[Row] {
        match handle.kind {
            Kind::EvaluatedTableView => {
                let view = self.table_view(handle);
                let table = get(&self.evaluated_tables, view.table as usize, "evaluated tables");
                slice(table.rows(), view.start as usize..table.len(), "table view rows")
            }
            _ => self.evaluated_table(handle).rows(),
        }
    }

    /// Row labelled `label` in a table or table view.
    #[track_caller]
    pub fn table_row(&self, handle: Handle, label: &str) -> Option<&Row> {
        let rows = self.table_rows_of(handle);
        search_rows(rows, label).ok().map(|i| &rows[i])
    }

    /// View of `handle`'s rows without the first one.
    #[track_caller]
    pub fn drop_first_row(&mut self, span: Span, handle: Handle) -> Handle {
        let view = match handle.kind {
            Kind::EvaluatedTableView => {
                let view = *self.table_view(handle);
                let len = self.table_rows_of(handle).len();
                EvaluatedTableView {
                    table: view.table,
                    start: view.start + u32::from(len > 0),
                }
            }
            _ => {
                let len = self.evaluated_table(handle).len();
                EvaluatedTableView {
                    table: handle.index,
                    start: u32::from(len > 0),
                }
            }
        };
        self.make_table_view(span, view)
    }
}
