//! Recursive printer shared by value and type serialization.

use mang_ir::{Alternative, AlternativeRange, Argument, Arena, Handle, Kind, Statement};
use mang_stack::ensure_sufficient_stack;

use crate::{format_number, Emitter};

/// Which text form to produce.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Style {
    /// Canonical source form. Values print as literals.
    Value,
    /// Type form. Scalars print as their kind name, containers by sample.
    Types,
}

/// Walks handles and writes their text form to an [`Emitter`].
pub struct Printer<'a, E> {
    arena: &'a Arena,
    out: E,
}

impl<'a, E: Emitter> Printer<'a, E> {
    pub fn new(arena: &'a Arena, out: E) -> Self {
        Printer { arena, out }
    }

    pub fn finish(self) -> E {
        self.out
    }

    pub fn print(&mut self, handle: Handle, style: Style) {
        ensure_sufficient_stack(|| match style {
            Style::Value => self.value(handle),
            Style::Types => self.types(handle),
        });
    }

    /// `open item item ... close`, or `open close` when empty.
    fn delimited<T: Copy>(
        &mut self,
        open: &str,
        close: &str,
        items: &[T],
        mut each: impl FnMut(&mut Self, T),
    ) {
        self.out.emit(open);
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.out.emit_space();
            }
            each(self, item);
        }
        self.out.emit(close);
    }

    fn name(&mut self, name: mang_ir::Name) {
        self.out.emit(self.arena.name_text(name));
    }

    fn value(&mut self, handle: Handle) {
        let arena = self.arena;
        match handle.kind {
            Kind::Character => {
                self.out.emit_char('\'');
                self.out.emit_char(arena.character(handle));
                self.out.emit_char('\'');
            }
            Kind::Number => self.out.emit(&format_number(arena.number(handle))),
            Kind::Yes => self.out.emit("yes"),
            Kind::No => self.out.emit("no"),
            Kind::EmptyStack => self.out.emit("[]"),
            Kind::String | Kind::EmptyString => self.string(handle),
            Kind::Stack | Kind::EvaluatedStack => {
                let items = stack_items(arena, handle);
                self.delimited("[", "]", &items, |p, item| p.print(item, Style::Value));
            }
            Kind::Tuple | Kind::EvaluatedTuple => {
                let items = arena.tuple_items(handle);
                self.delimited("(", ")", items, |p, item| p.print(item, Style::Value));
            }
            Kind::Table => {
                let rows = arena.table_rows(arena.table(handle).rows);
                self.delimited("<", ">", rows, |p, row| {
                    p.out.emit_char('(');
                    p.print(row.key, Style::Value);
                    p.out.emit_space();
                    p.print(row.value, Style::Value);
                    p.out.emit_char(')');
                });
            }
            Kind::EvaluatedTable | Kind::EvaluatedTableView => {
                let rows = arena.table_rows_of(handle);
                self.out.emit("<");
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        self.out.emit_space();
                    }
                    self.out.emit_char('(');
                    self.out.emit(&row.label);
                    self.out.emit_space();
                    self.print(row.value, Style::Value);
                    self.out.emit_char(')');
                }
                self.out.emit(">");
            }
            Kind::Dictionary => {
                let statements = arena.statements(arena.dictionary(handle).statements);
                self.delimited("{", "}", statements, |p, statement| p.statement(statement));
            }
            Kind::EvaluatedDictionary => self.frame(handle, Style::Value),
            Kind::Function => {
                let function = arena.function(handle);
                self.out.emit("in ");
                self.argument(function.argument);
                self.out.emit(" out ");
                self.print(function.body, Style::Value);
            }
            Kind::FunctionDictionary | Kind::FunctionTuple => {
                let (function, open, close) = if handle.kind == Kind::FunctionDictionary {
                    (arena.function_dictionary(handle), "{", "}")
                } else {
                    (arena.function_tuple(handle), "(", ")")
                };
                self.out.emit("in ");
                let arguments = arena.arguments(function.arguments);
                self.delimited(open, close, arguments, Self::argument);
                self.out.emit(" out ");
                self.print(function.body, Style::Value);
            }
            Kind::Conditional => {
                let conditional = arena.conditional(handle);
                self.out.emit("if ");
                self.alternatives(conditional.alternatives);
                self.out.emit("else ");
                self.print(conditional.otherwise, Style::Value);
            }
            Kind::Is => {
                let is = arena.is_expression(handle);
                self.out.emit("is ");
                self.print(is.input, Style::Value);
                self.out.emit_space();
                self.alternatives(is.alternatives);
                self.out.emit("else ");
                self.print(is.otherwise, Style::Value);
            }
            Kind::LookupSymbol => self.name(arena.lookup_symbol(handle).name),
            Kind::LookupChild => {
                let lookup = arena.lookup_child(handle);
                self.name(lookup.name);
                self.out.emit_char('@');
                self.print(lookup.child, Style::Value);
            }
            Kind::FunctionApplication => {
                let application = arena.application(handle);
                self.name(application.callee.name);
                self.out.emit_char('!');
                self.print(application.argument, Style::Value);
            }
            Kind::DynamicExpression => {
                self.out.emit("dynamic ");
                self.print(arena.dynamic(handle).inner, Style::Value);
            }
            Kind::TypedExpression => {
                let typed = arena.typed(handle);
                self.name(typed.type_name.name);
                self.out.emit_char(':');
                self.print(typed.value, Style::Value);
            }
            Kind::FunctionBuiltIn | Kind::Any => self.out.emit(handle.kind.name()),
        }
    }

    fn types(&mut self, handle: Handle) {
        let arena = self.arena;
        match handle.kind {
            Kind::EvaluatedDictionary => self.frame(handle, Style::Types),
            Kind::EvaluatedTuple => {
                let items = arena.tuple_items(handle);
                self.delimited("(", ")", items, |p, item| p.print(item, Style::Types));
            }
            Kind::EvaluatedStack => {
                self.out.emit_char('[');
                self.print(arena.evaluated_stack(handle).top, Style::Types);
                self.out.emit_char(']');
            }
            Kind::EvaluatedTable => match arena.evaluated_table(handle).rows().first() {
                None => self.out.emit("<>"),
                Some(row) => {
                    self.out.emit("<(");
                    self.print(row.key, Style::Types);
                    self.out.emit_space();
                    self.print(row.value, Style::Types);
                    self.out.emit(")>");
                }
            },
            kind => self.out.emit(kind.name()),
        }
    }

    /// `{name=value ...}`. Value style leaves out slots that were never written.
    fn frame(&mut self, handle: Handle, style: Style) {
        let slots: Vec<_> = self
            .arena
            .frame_slots(handle)
            .iter()
            .filter(|slot| style == Style::Types || slot.value.kind != Kind::Any)
            .copied()
            .collect();
        self.delimited("{", "}", &slots, |p, slot| {
            p.name(slot.name);
            p.out.emit_char('=');
            p.print(slot.value, style);
        });
    }

    fn string(&mut self, handle: Handle) {
        let arena = self.arena;
        self.out.emit_char('"');
        let mut current = handle;
        while current.kind == Kind::String {
            // String cells only hold characters.
            let cell = arena.string(current);
            self.out.emit_char(arena.character(cell.top));
            current = cell.rest;
        }
        self.out.emit_char('"');
    }

    fn argument(&mut self, argument: Argument) {
        if let Some(type_name) = argument.type_name {
            self.name(type_name.name);
            self.out.emit_char(':');
        }
        self.name(argument.name);
    }

    /// `left then right ` for each alternative.
    fn alternatives(&mut self, range: AlternativeRange) {
        let arena = self.arena;
        for &Alternative { left, right } in arena.alternatives(range) {
            self.print(left, Style::Value);
            self.out.emit(" then ");
            self.print(right, Style::Value);
            self.out.emit_space();
        }
    }

    fn statement(&mut self, statement: Statement) {
        match statement {
            Statement::Definition { target, expression } => {
                self.name(target.name);
                self.out.emit_char('=');
                self.print(expression, Style::Value);
            }
            Statement::PutAssignment { target, expression } => {
                self.name(target.name);
                self.out.emit("+=");
                self.print(expression, Style::Value);
            }
            Statement::PutEachAssignment { target, expression } => {
                self.name(target.name);
                self.out.emit("++=");
                self.print(expression, Style::Value);
            }
            Statement::DropAssignment { target } => {
                self.name(target.name);
                self.out.emit("--");
            }
            Statement::While { condition, .. } => {
                self.out.emit("while ");
                self.print(condition, Style::Value);
            }
            Statement::For {
                item, container, ..
            } => {
                self.out.emit("for ");
                self.name(item.name);
                self.out.emit(" in ");
                self.name(container.name);
            }
            Statement::ForSimple { container, .. } => {
                self.out.emit("for ");
                self.name(container.name);
            }
            Statement::WhileEnd { .. } | Statement::ForEnd { .. } | Statement::ForSimpleEnd { .. } => {
                self.out.emit("end");
            }
            Statement::Return => self.out.emit("return"),
        }
    }
}

/// Items of a `Stack` or `EvaluatedStack`, top first.
fn stack_items(arena: &Arena, handle: Handle) -> Vec<Handle> {
    let mut items = Vec::new();
    let mut current = handle;
    loop {
        let cell = match current.kind {
            Kind::Stack => arena.stack(current),
            Kind::EvaluatedStack => arena.evaluated_stack(current),
            _ => break,
        };
        items.push(cell.top);
        current = cell.rest;
    }
    items
}
