//! Classification of type signatures and members.

use crate::{
    constants::{LIST_INTERFACE, SET_INTERFACE},
    modifiers::{HasModifiers, Modifier},
    primitive::PrimitiveType,
};

/// Strip generic arguments, array brackets and wildcard bounds from a type
/// signature.
///
/// `java.util.List<String>` becomes `java.util.List`,
/// `? extends de.Foo[]` becomes `de.Foo`.
pub fn raw_type(signature: &str) -> &str {
    let mut s = signature.trim();
    for bound in ["? extends ", "? super "] {
        if let Some(rest) = s.strip_prefix(bound) {
            s = rest.trim_start();
        }
    }
    if s == "?" {
        return "";
    }
    if let Some(idx) = s.find('<') {
        s = &s[..idx];
    }
    while let Some(rest) = s.trim_end().strip_suffix("[]") {
        s = rest;
    }
    s.trim_end().trim_end_matches("...").trim()
}

/// Top-level generic arguments of a signature, in order.
///
/// `java.util.Map<String, java.util.List<Foo>>` yields
/// `["String", "java.util.List<Foo>"]`.
pub fn generic_arguments(signature: &str) -> Vec<&str> {
    let Some(open) = signature.find('<') else {
        return Vec::new();
    };

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = open + 1;
    for (i, c) in signature.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    push_argument(&mut args, &signature[start..i]);
                    break;
                }
            }
            ',' if depth == 1 => {
                push_argument(&mut args, &signature[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    args
}

fn push_argument<'a>(args: &mut Vec<&'a str>, arg: &'a str) {
    let arg = arg.trim();
    if !arg.is_empty() {
        args.push(arg);
    }
}

/// True if the signature names the list interface, whatever its type
/// arguments.
pub fn is_list(signature: &str) -> bool {
    is_family(signature, LIST_INTERFACE)
}

/// True if the signature names the set interface, whatever its type
/// arguments.
pub fn is_set(signature: &str) -> bool {
    is_family(signature, SET_INTERFACE)
}

/// True for list-like and set-like signatures.
pub fn is_supported_collection(signature: &str) -> bool {
    is_list(signature) || is_set(signature)
}

/// The signature up to its generic arguments. Array and varargs suffixes are
/// kept, so `List<String>[]` is not a list.
fn generic_base(signature: &str) -> &str {
    let s = signature.trim();
    match s.find('<') {
        Some(idx) if s.ends_with('>') => s[..idx].trim_end(),
        Some(_) => "",
        None => s,
    }
}

fn is_family(signature: &str, interface: &str) -> bool {
    let base = generic_base(signature);
    base == interface || interface.rsplit('.').next() == Some(base)
}

pub fn is_primitive_type(name: &str) -> bool {
    PrimitiveType::from_name(name.trim()).is_some()
}

/// True if the member is class-scoped or read-only.
pub fn is_static_or_final<M: HasModifiers + ?Sized>(member: &M) -> bool {
    let modifiers = member.modifiers();
    modifiers.contains(Modifier::Static) || modifiers.contains(Modifier::Final)
}
