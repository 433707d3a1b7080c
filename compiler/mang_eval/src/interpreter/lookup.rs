//! Lexical name resolution.
//!
//! The first evaluation of a read site walks the parent chain and records
//! how many frames it had to climb. Later evaluations of the same site climb
//! exactly that many frames and scan only the frame they land on.

use mang_ir::{Handle, Kind, Lookup, Name, Span};

use super::Interpreter;
use crate::errors::{missing_symbol, EvalResult};

impl Interpreter {
    pub(super) fn lookup(&mut self, lookup: Lookup, env: Handle, span: Span) -> EvalResult<Handle> {
        if let Some(&hops) = self.hops.get(&lookup.site) {
            return self.lookup_at(lookup.name, hops, env, span);
        }
        let (value, hops) = self.walk(lookup.name, env, span)?;
        tracing::trace!(
            name = self.arena.name_text(lookup.name),
            hops,
            "read site bound"
        );
        self.hops.insert(lookup.site, hops);
        Ok(value)
    }

    /// Uncached walk from `env`: the value and the number of parents climbed.
    pub(super) fn walk(&self, name: Name, env: Handle, span: Span) -> EvalResult<(Handle, u32)> {
        let mut frame = env;
        let mut hops = 0;
        loop {
            if !frame.is(Kind::EvaluatedDictionary) {
                return Err(missing_symbol(self.arena.name_text(name), frame.kind, span));
            }
            if let Some(value) = self.arena.frame_lookup(frame, name) {
                return Ok((value, hops));
            }
            frame = self.arena.frame(frame).parent;
            hops += 1;
        }
    }

    fn lookup_at(&self, name: Name, hops: u32, env: Handle, span: Span) -> EvalResult<Handle> {
        let mut frame = env;
        for _ in 0..hops {
            if !frame.is(Kind::EvaluatedDictionary) {
                return Err(missing_symbol(self.arena.name_text(name), frame.kind, span));
            }
            frame = self.arena.frame(frame).parent;
        }
        if !frame.is(Kind::EvaluatedDictionary) {
            return Err(missing_symbol(self.arena.name_text(name), frame.kind, span));
        }
        self.arena
            .frame_lookup(frame, name)
            .ok_or_else(|| missing_symbol(self.arena.name_text(name), frame.kind, span))
    }
}
