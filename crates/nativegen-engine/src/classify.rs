//! Purity inference
//!
//! Decides the minimal effect level of a signature and rewrites its types
//! into the matching Frege effect constructors:
//!
//! | level | mutable parameter | mutable return   | plain return |
//! |-------|-------------------|------------------|--------------|
//! | ST    | `Mutable s T`     | `STMutable s T`  | `ST s T`     |
//! | IO    | `MutableIO T`     | `IOMutable T`    | `IO T`       |
//!
//! Parameters whose type is intrinsically pure are never wrapped.

use tracing::debug;

use crate::purity::Purity;
use crate::signature::Signature;
use crate::ty::TargetType;

fn any_with(sig: &Signature, level: Purity) -> bool {
    sig.return_type.purity == level || sig.params.iter().any(|p| p.purity == level)
}

/// The effect level a signature requires
pub fn required_level(sig: &Signature) -> Purity {
    if any_with(sig, Purity::Io) {
        Purity::Io
    } else if sig.return_type.is_void()
        || sig.is_constructor()
        || !sig.exceptions.is_empty()
        || any_with(sig, Purity::St)
        || sig.params.iter().any(TargetType::is_void)
        || sig.is_instance_field()
    {
        Purity::St
    } else {
        Purity::Pure
    }
}

/// Classify a signature and wrap its types for the required level.
///
/// Already classified signatures are returned unchanged.
pub fn classify(sig: &Signature) -> Signature {
    if sig.effect.is_some() {
        return sig.clone();
    }
    let level = required_level(sig);
    debug!(member = %sig.name, %level, "classified");
    let mut classified = with_level(sig, level);
    classified.effect = Some(level);
    classified
}

/// Classify every signature, preserving order
pub fn classify_all(sigs: &[Signature]) -> Vec<Signature> {
    sigs.iter().map(classify).collect()
}

/// Rewrite parameter and return types for `level`
pub fn with_level(sig: &Signature, level: Purity) -> Signature {
    if level.is_pure() {
        return sig.clone();
    }
    let params = sig.params.iter().map(|p| wrap_param(p, level)).collect();
    sig.with_params(params)
        .with_return_type(wrap_return(&sig.return_type, level))
}

/// Wrap an intrinsically mutable parameter in its handle constructor
pub fn wrap_param(param: &TargetType, level: Purity) -> TargetType {
    match level.mutable_param() {
        Some(wrapper) if !param.purity.is_pure() => TargetType::new(
            format!("{} {}", wrapper, param.parenthesized()),
            param.source.clone(),
            level,
        ),
        _ => param.clone(),
    }
}

/// Wrap a return type in the computation constructor for `level`
pub fn wrap_return(ret: &TargetType, level: Purity) -> TargetType {
    let wrapper = if ret.purity.is_pure() {
        level.effect_return()
    } else {
        level.mutable_return()
    };
    match wrapper {
        Some(wrapper) => TargetType::new(
            format!("{} {}", wrapper, ret.parenthesized()),
            ret.source.clone(),
            level,
        ),
        None => ret.clone(),
    }
}
