//! Running a match plan against a subject.
//!
//! Cases are tried in order. A case succeeds when its pattern matches
//! structurally and its guard, evaluated with the case's bindings in scope,
//! is true. A failed case or alternative leaves no bindings behind.

use rustc_hash::FxHashSet;
use sere_ir::Name;
use tracing::{debug, trace};

use crate::env::{Bindings, MatchEnv};
use crate::plan::{ClassRef, KeywordMatcher, MappingKey, MatchPlan, Matcher, NamePath};
use crate::value::Value;
use crate::MatchError;

/// The first case that matched.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSuccess {
    /// Index into the statement's `cases`.
    pub case_index: usize,
    pub bindings: Bindings,
}

impl MatchPlan {
    /// Match `subject` against each case in order.
    ///
    /// Returns `Ok(None)` when no case applies.
    ///
    /// # Errors
    ///
    /// Propagates guard failures and reports names the environment cannot
    /// resolve, class patterns naming non-classes, and class patterns with
    /// more positional sub-patterns than the class accepts.
    pub fn execute(
        &self,
        subject: &Value,
        env: &mut impl MatchEnv,
    ) -> Result<Option<MatchSuccess>, MatchError> {
        for (index, case) in self.cases.iter().enumerate() {
            trace!(case = index, "trying case");
            let mut bindings = Bindings::new();
            if !match_value(&case.matcher, subject, env, &mut bindings)? {
                continue;
            }
            if let Some(guard) = &case.guard {
                if !env.eval_guard(guard, &bindings)? {
                    trace!(case = index, "guard rejected case");
                    continue;
                }
            }
            debug!(case = index, bindings = bindings.len(), "case matched");
            return Ok(Some(MatchSuccess {
                case_index: index,
                bindings,
            }));
        }
        debug!("no case matched");
        Ok(None)
    }
}

fn resolve<E: MatchEnv + ?Sized>(path: &NamePath, env: &mut E) -> Result<Value, MatchError> {
    env.lookup(&path.parts)
        .ok_or_else(|| MatchError::UndefinedName(path.text.clone()))
}

fn match_value<E: MatchEnv + ?Sized>(
    matcher: &Matcher,
    subject: &Value,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    match matcher {
        Matcher::Wildcard => Ok(true),
        Matcher::Capture(name) => {
            bindings.bind(*name, subject.clone());
            Ok(true)
        }
        Matcher::Equal(value) => Ok(value.equals(subject)),
        Matcher::Singleton(value) => Ok(value.is_same_singleton(subject)),
        Matcher::Value(path) => Ok(resolve(path, env)?.equals(subject)),
        Matcher::Sequence {
            before,
            star,
            after,
        } => match_sequence(before, *star, after, subject, env, bindings),
        Matcher::Mapping { entries, rest } => match_mapping(entries, *rest, subject, env, bindings),
        Matcher::Class {
            class,
            positional,
            keywords,
        } => match_class(class, positional, keywords, subject, env, bindings),
        Matcher::Or(alternatives) => {
            for alternative in alternatives {
                let mark = bindings.mark();
                if match_value(alternative, subject, env, bindings)? {
                    return Ok(true);
                }
                bindings.truncate(mark);
            }
            Ok(false)
        }
        Matcher::As(inner, name) => {
            if !match_value(inner, subject, env, bindings)? {
                return Ok(false);
            }
            bindings.bind(*name, subject.clone());
            Ok(true)
        }
    }
}

fn match_all<'v, E: MatchEnv + ?Sized>(
    matchers: &[Matcher],
    items: impl IntoIterator<Item = &'v Value>,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    for (matcher, item) in matchers.iter().zip(items) {
        if !match_value(matcher, item, env, bindings)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn match_sequence<E: MatchEnv + ?Sized>(
    before: &[Matcher],
    star: Option<Option<Name>>,
    after: &[Matcher],
    subject: &Value,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    let Some(items) = subject.as_sequence() else {
        return Ok(false);
    };
    let fixed = before.len() + after.len();
    let fits = match star {
        Some(_) => items.len() >= fixed,
        None => items.len() == fixed,
    };
    if !fits {
        return Ok(false);
    }

    let tail_start = items.len() - after.len();
    if !match_all(before, &items[..before.len()], env, bindings)? {
        return Ok(false);
    }
    if let Some(Some(name)) = star {
        bindings.bind(name, Value::List(items[before.len()..tail_start].to_vec()));
    }
    match_all(after, &items[tail_start..], env, bindings)
}

fn match_mapping<E: MatchEnv + ?Sized>(
    entries: &[(MappingKey, Matcher)],
    rest: Option<Name>,
    subject: &Value,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    let Value::Dict(subject_entries) = subject else {
        return Ok(false);
    };

    let mut keys: Vec<Value> = Vec::with_capacity(entries.len());
    for (key, _) in entries {
        let key = match key {
            MappingKey::Literal(value) => value.clone(),
            MappingKey::Value(path) => resolve(path, env)?,
        };
        if keys.iter().any(|seen| seen.equals(&key)) {
            return Err(MatchError::DuplicateKey(key.to_string()));
        }
        keys.push(key);
    }

    for (key, (_, matcher)) in keys.iter().zip(entries) {
        let Some(value) = subject.dict_get(key) else {
            return Ok(false);
        };
        if !match_value(matcher, value, env, bindings)? {
            return Ok(false);
        }
    }

    if let Some(rest) = rest {
        let remaining = subject_entries
            .iter()
            .filter(|(key, _)| !keys.iter().any(|matched| matched.equals(key)))
            .cloned()
            .collect::<Vec<_>>();
        bindings.bind(rest, Value::Dict(remaining));
    }
    Ok(true)
}

fn match_class<E: MatchEnv + ?Sized>(
    class: &ClassRef,
    positional: &[Matcher],
    keywords: &[KeywordMatcher],
    subject: &Value,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    match class {
        ClassRef::Builtin(builtin) => {
            if !builtin.accepts(subject) {
                return Ok(false);
            }
            if positional.len() > 1 {
                return Err(MatchError::TooManyPositional {
                    class: builtin.name().to_owned(),
                    accepted: 1,
                    given: positional.len(),
                });
            }
            if !match_all(positional, [subject], env, bindings)? {
                return Ok(false);
            }
            match_keywords(keywords, subject, env, bindings)
        }
        ClassRef::User(path) => {
            if !env.is_class(&path.parts) {
                return Err(MatchError::NotAClass(path.text.clone()));
            }
            if !env.is_instance(subject, &path.parts) {
                return Ok(false);
            }
            if positional.is_empty() {
                return match_keywords(keywords, subject, env, bindings);
            }

            let attrs = env.match_args(&path.parts).unwrap_or_default();
            if positional.len() > attrs.len() {
                return Err(MatchError::TooManyPositional {
                    class: path.text.clone(),
                    accepted: attrs.len(),
                    given: positional.len(),
                });
            }
            let positional_attrs: FxHashSet<Name> =
                attrs[..positional.len()].iter().copied().collect();
            if let Some(keyword) = keywords
                .iter()
                .find(|keyword| positional_attrs.contains(&keyword.attr))
            {
                return Err(MatchError::DuplicateAttribute {
                    class: path.text.clone(),
                    attr: keyword.text.clone(),
                });
            }

            for (attr, matcher) in attrs.iter().zip(positional) {
                let Some(value) = env.get_attr(subject, *attr) else {
                    return Ok(false);
                };
                if !match_value(matcher, &value, env, bindings)? {
                    return Ok(false);
                }
            }
            match_keywords(keywords, subject, env, bindings)
        }
    }
}

fn match_keywords<E: MatchEnv + ?Sized>(
    keywords: &[KeywordMatcher],
    subject: &Value,
    env: &mut E,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    for keyword in keywords {
        let Some(value) = env.get_attr(subject, keyword.attr) else {
            return Ok(false);
        };
        if !match_value(&keyword.matcher, &value, env, bindings)? {
            return Ok(false);
        }
    }
    Ok(true)
}
