use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Magic lifecycle methods. Renaming any of these would change
    /// runtime dispatch, so they are exempt at declaration and call
    /// sites alike. Lookup is case-insensitive.
    pub static ref MAGIC_METHODS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("__construct");
        s.insert("__destruct");
        s.insert("__call");
        s.insert("__callstatic");
        s.insert("__get");
        s.insert("__set");
        s.insert("__isset");
        s.insert("__unset");
        s.insert("__sleep");
        s.insert("__wakeup");
        s.insert("__serialize");
        s.insert("__unserialize");
        s.insert("__tostring");
        s.insert("__invoke");
        s.insert("__set_state");
        s.insert("__clone");
        s.insert("__debuginfo");
        s
    };

    /// Variables the language itself defines. These names are load-bearing
    /// and must never be rewritten.
    pub static ref NATIVE_VARIABLES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("this");
        s.insert("GLOBALS");
        s.insert("_SERVER");
        s.insert("_GET");
        s.insert("_POST");
        s.insert("_FILES");
        s.insert("_COOKIE");
        s.insert("_SESSION");
        s.insert("_REQUEST");
        s.insert("_ENV");
        s.insert("argc");
        s.insert("argv");
        s.insert("http_response_header");
        s.insert("php_errormsg");
        s
    };
}

pub fn is_magic_method(name: &str) -> bool {
    MAGIC_METHODS.contains(name.to_ascii_lowercase().as_str())
}

/// Decides whether a variable name is a language built-in. The
/// property/variable rule treats a positive answer as a hard veto.
pub trait NativeVariableClassifier {
    fn is_native_variable(&self, name: &str) -> bool;
}

/// Default classifier backed by [`NATIVE_VARIABLES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVariables;

impl NativeVariableClassifier for BuiltinVariables {
    fn is_native_variable(&self, name: &str) -> bool {
        NATIVE_VARIABLES.contains(name)
    }
}
