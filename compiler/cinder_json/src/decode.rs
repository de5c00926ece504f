//! JSON value to arena decoding.

use cinder_ir::{Name, NodeArena, NodeId, StringInterner};
use cinder_stack::ensure_sufficient_stack;
use serde::Deserialize;
use serde_json::{Map, Number, Value as Json};

use crate::DecodeError;

/// A decoded program: the arena and its root expression.
#[derive(Debug)]
pub struct Program {
    pub arena: NodeArena,
    pub root: NodeId,
}

/// Parse and decode a JSON-encoded program.
pub fn decode_str(source: &str, interner: &StringInterner) -> Result<Program, DecodeError> {
    let json = parse(source)?;
    Decoder::new(NodeArena::with_capacity(source.len()), interner).finish(&json)
}

/// Decode an already-parsed JSON value.
pub fn decode_value(json: &Json, interner: &StringInterner) -> Result<Program, DecodeError> {
    Decoder::new(NodeArena::new(), interner).finish(json)
}

/// Parse without serde_json's nesting limit; nesting depth is bounded only
/// by memory, with the stack grown on demand.
fn parse(source: &str) -> Result<Json, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let json = Json::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(json)
}

struct Decoder<'a> {
    arena: NodeArena,
    interner: &'a StringInterner,
}

impl<'a> Decoder<'a> {
    fn new(arena: NodeArena, interner: &'a StringInterner) -> Self {
        Self { arena, interner }
    }

    fn finish(mut self, json: &Json) -> Result<Program, DecodeError> {
        let root = self.expr(json)?;
        tracing::debug!(nodes = self.arena.len(), "decoded program");
        Ok(Program {
            arena: self.arena,
            root,
        })
    }

    fn expr(&mut self, json: &Json) -> Result<NodeId, DecodeError> {
        ensure_sufficient_stack(|| match json {
            Json::Number(n) => self.number(n),
            Json::String(s) => {
                let s = self.interner.try_intern(s)?;
                Ok(self.arena.string(s))
            }
            Json::Object(map) => self.form(map),
            Json::Bool(_) => self.unknown("bool"),
            Json::Null => self.unknown("null"),
            Json::Array(_) => self.unknown("array"),
        })
    }

    /// Integral numbers become literals for the evaluator to range-check.
    /// Anything else is an unknown form.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "saturating cast of an integral float; out-of-range literals are rejected at evaluation"
    )]
    fn number(&mut self, n: &Number) -> Result<NodeId, DecodeError> {
        let literal = if let Some(i) = n.as_i64() {
            i128::from(i)
        } else if let Some(u) = n.as_u64() {
            i128::from(u)
        } else {
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => f as i128,
                _ => return self.unknown("number"),
            }
        };
        Ok(self.arena.int(literal))
    }

    fn unknown(&mut self, tag: &str) -> Result<NodeId, DecodeError> {
        let tag = self.interner.try_intern(tag)?;
        Ok(self.arena.unknown(tag))
    }

    fn form(&mut self, map: &Map<String, Json>) -> Result<NodeId, DecodeError> {
        let mut entries = map.iter();
        let (Some((key, payload)), None) = (entries.next(), entries.next()) else {
            return Err(DecodeError::ObjectShape { keys: map.len() });
        };

        match key.as_str() {
            "Identifier" => {
                let name = self.identifier_payload(payload, "Identifier")?;
                Ok(self.arena.ident(name))
            }
            "Application" => {
                let items = array(payload, "Application")?;
                let Some((op, operands)) = items.split_first() else {
                    return Err(DecodeError::Arity {
                        form: "Application",
                        expected: "at least 1",
                        got: 0,
                    });
                };
                let func = self.expr(op)?;
                let args = self.exprs(operands)?;
                Ok(self.arena.apply(func, args))
            }
            "Lambda" => {
                let [params, body] = fixed::<2>(payload, "Lambda")?;
                let params = self.params(params)?;
                let body = self.expr(body)?;
                Ok(self.arena.lambda(params, body))
            }
            "Block" => {
                let items = array(payload, "Block")?;
                let ids = self.exprs(items)?;
                Ok(self.arena.block(ids))
            }
            "Cond" => {
                let items = array(payload, "Cond")?;
                let mut clauses = Vec::with_capacity(items.len());
                for item in items {
                    clauses.push(self.clause(item)?);
                }
                Ok(self.arena.cond(clauses))
            }
            "Let" => {
                let [name, init, body] = fixed::<3>(payload, "Let")?;
                let name = self.identifier(name, "Let")?;
                let init = self.expr(init)?;
                let body = self.expr(body)?;
                Ok(self.arena.let_in(name, init, body))
            }
            "Assignment" => {
                let [name, value] = fixed::<2>(payload, "Assignment")?;
                let name = self.identifier(name, "Assignment")?;
                let value = self.expr(value)?;
                Ok(self.arena.assign(name, value))
            }
            other => self.unknown(other),
        }
    }

    fn exprs(&mut self, items: &[Json]) -> Result<Vec<NodeId>, DecodeError> {
        items.iter().map(|item| self.expr(item)).collect()
    }

    /// `{"Parameters": [{"Identifier": ..}...]}`
    fn params(&mut self, json: &Json) -> Result<Vec<Name>, DecodeError> {
        wrapped(json, "Parameters", "Lambda")?
            .iter()
            .map(|p| self.identifier(p, "Parameters"))
            .collect()
    }

    /// `{"Clause": [test, consequence]}`
    fn clause(&mut self, json: &Json) -> Result<(NodeId, NodeId), DecodeError> {
        let items = wrapped(json, "Clause", "Cond")?;
        let [test, consequence] =
            <&[Json; 2]>::try_from(items).map_err(|_| DecodeError::Arity {
                form: "Clause",
                expected: "2",
                got: items.len(),
            })?;
        let test = self.expr(test)?;
        let consequence = self.expr(consequence)?;
        Ok((test, consequence))
    }

    /// `{"Identifier": "x"}` in a binding position.
    fn identifier(&self, json: &Json, form: &'static str) -> Result<Name, DecodeError> {
        match json.as_object() {
            Some(map) if map.len() == 1 => match map.get("Identifier") {
                Some(payload) => self.identifier_payload(payload, form),
                None => Err(DecodeError::MalformedIdentifier { form }),
            },
            _ => Err(DecodeError::MalformedIdentifier { form }),
        }
    }

    fn identifier_payload(&self, payload: &Json, form: &'static str) -> Result<Name, DecodeError> {
        let s = payload
            .as_str()
            .ok_or(DecodeError::MalformedIdentifier { form })?;
        Ok(self.interner.try_intern(s)?)
    }
}

fn array<'j>(payload: &'j Json, form: &'static str) -> Result<&'j [Json], DecodeError> {
    payload
        .as_array()
        .map(Vec::as_slice)
        .ok_or(DecodeError::Payload {
            form,
            expected: "an array",
        })
}

/// A form payload with exactly `N` elements.
fn fixed<'j, const N: usize>(
    payload: &'j Json,
    form: &'static str,
) -> Result<&'j [Json; N], DecodeError> {
    let items = array(payload, form)?;
    <&[Json; N]>::try_from(items).map_err(|_| DecodeError::Arity {
        form,
        expected: arity_word(N),
        got: items.len(),
    })
}

fn arity_word(n: usize) -> &'static str {
    match n {
        2 => "2",
        3 => "3",
        _ => "a fixed number of",
    }
}

/// The array inside a single-key wrapper object such as `{"Clause": [..]}`.
fn wrapped<'j>(
    json: &'j Json,
    wrapper: &'static str,
    form: &'static str,
) -> Result<&'j [Json], DecodeError> {
    json.as_object()
        .filter(|map| map.len() == 1)
        .and_then(|map| map.get(wrapper))
        .and_then(Json::as_array)
        .map(Vec::as_slice)
        .ok_or(DecodeError::MissingWrapper { form, wrapper })
}
