//! Host-interpreter boundary for the `Alphabet` builtin.
//!
//! A host registers builtins through [`BuiltinRegistry`], evaluates calls
//! with an [`Evaluation`] that receives diagnostic messages, and gets back
//! an optional [`Expr`]. `None` means the call produced no value.

use crate::alphabet::{AlphabetError, AlphabetResolver};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// The subset of host values this module produces and consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    String(String),
    List(Vec<Expr>),
}

impl Expr {
    pub fn string(s: impl Into<String>) -> Self {
        Expr::String(s.into())
    }

    /// Input-form rendering: strings are quoted.
    pub fn input_form(&self) -> String {
        match self {
            Expr::String(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Expr::List(items) => {
                let inner: Vec<String> = items.iter().map(Expr::input_form).collect();
                format!("{{{}}}", inner.join(", "))
            }
        }
    }
}

/// Output-form rendering: `{a, b, c}`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::String(s) => write!(f, "{}", s),
            Expr::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Receives diagnostics raised while a builtin evaluates.
pub trait Evaluation {
    /// Report message `symbol::tag` with its already formatted text.
    fn message(&mut self, symbol: &str, tag: &str, text: &str);
}

/// Fill each `` in `template` with the next argument in input form.
pub fn format_message(template: &str, args: &[Expr]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("``") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.input_form()),
            None => out.push_str("``"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// An [`Evaluation`] that keeps formatted messages in order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Evaluation for MessageLog {
    fn message(&mut self, symbol: &str, tag: &str, text: &str) {
        self.messages.push(format!("{}::{}: {}", symbol, tag, text));
    }
}

/// A named callable the host can register.
pub trait Builtin: Send + Sync {
    fn name(&self) -> &'static str;

    fn summary_text(&self) -> &'static str;

    /// Message tag → template.
    fn messages(&self) -> &'static [(&'static str, &'static str)];

    fn eval(&self, args: &[Expr], evaluation: &mut dyn Evaluation) -> Option<Expr>;

    /// Raise one of this builtin's own messages.
    fn message(&self, evaluation: &mut dyn Evaluation, tag: &str, args: &[Expr]) {
        let template = self
            .messages()
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, tmpl)| *tmpl)
            .unwrap_or("``");
        evaluation.message(self.name(), tag, &format_message(template, args));
    }
}

// ─── Alphabet ───────────────────────────────────────────────────

/// `Alphabet[]` and `Alphabet["lang"]`.
pub struct AlphabetBuiltin {
    resolver: Arc<AlphabetResolver>,
    default_language: String,
}

impl AlphabetBuiltin {
    pub fn new(resolver: Arc<AlphabetResolver>, default_language: impl Into<String>) -> Self {
        Self {
            resolver,
            default_language: default_language.into(),
        }
    }

    fn eval_alphabet(&self, name: &str, evaluation: &mut dyn Evaluation) -> Option<Expr> {
        match self.resolver.resolve(name) {
            Ok(alphabet) => Some(Expr::List(
                alphabet.letters.into_iter().map(Expr::String).collect(),
            )),
            Err(e) => {
                if !matches!(e, AlphabetError::NotFound(_)) {
                    warn!(language = name, error = %e, "alphabet data unavailable");
                }
                self.message(evaluation, "nalph", &[Expr::string(name)]);
                None
            }
        }
    }
}

impl Builtin for AlphabetBuiltin {
    fn name(&self) -> &'static str {
        "Alphabet"
    }

    fn summary_text(&self) -> &'static str {
        "lowercase letters in an alphabet"
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[("nalph", "The alphabet `` is not known or not available.")]
    }

    fn eval(&self, args: &[Expr], evaluation: &mut dyn Evaluation) -> Option<Expr> {
        match args {
            [] => self.eval_alphabet(&self.default_language, evaluation),
            [Expr::String(name)] => self.eval_alphabet(name, evaluation),
            // No matching rule: the host leaves the call unevaluated.
            _ => None,
        }
    }
}

// ─── Module registration ────────────────────────────────────────

/// Metadata a host shows for a loaded module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub requires: &'static [&'static str],
}

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    name: "Language",
    version: env!("CARGO_PKG_VERSION"),
    author: "The Mathics Team",
    requires: &["icu"],
};

/// The host's registration hook.
pub trait BuiltinRegistry {
    fn register(&mut self, builtin: Box<dyn Builtin>);
}

/// Register every builtin of this module and return its metadata.
pub fn load_module(
    registry: &mut dyn BuiltinRegistry,
    resolver: Arc<AlphabetResolver>,
    default_language: &str,
) -> ModuleInfo {
    registry.register(Box::new(AlphabetBuiltin::new(resolver, default_language)));
    MODULE_INFO
}

/// A minimal registry that dispatches calls by builtin name.
#[derive(Default)]
pub struct SymbolTable {
    builtins: BTreeMap<&'static str, Box<dyn Builtin>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.builtins.get(name).map(|b| b.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtins.keys().copied()
    }

    /// Evaluate `name[args]`. `None` if the symbol is unknown or produced no value.
    pub fn call(&self, name: &str, args: &[Expr], evaluation: &mut dyn Evaluation) -> Option<Expr> {
        self.get(name)?.eval(args, evaluation)
    }
}

impl BuiltinRegistry for SymbolTable {
    fn register(&mut self, builtin: Box<dyn Builtin>) {
        self.builtins.insert(builtin.name(), builtin);
    }
}
