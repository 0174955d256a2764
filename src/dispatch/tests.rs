use assert_call::{call, CallRecorder};
use rstest::rstest;

use crate::{Dispatch, DispatchMode};

#[test]
fn unconditional_always_selects() {
    let d = Dispatch::<i32, _>::unconditional("x");
    assert_eq!(d.select(&0, &1), Some("x"));
    assert_eq!(d.select(&1, &0), Some("x"));
    assert_eq!(d.mode(), DispatchMode::Unconditional);
}

#[test]
fn conditional_follows_condition() {
    let d = Dispatch::conditional("up", |prev: &i32, cur: &i32| cur > prev);
    assert_eq!(d.select(&0, &5), Some("up"));
    assert_eq!(d.select(&5, &3), None);
    assert_eq!(d.mode(), DispatchMode::Conditional);
}

#[test]
fn conditional_receives_previous_then_current() {
    let mut cr = CallRecorder::new();
    let d = Dispatch::conditional((), |prev: &i32, cur: &i32| {
        call!("{prev} -> {cur}");
        true
    });
    d.select(&1, &2);
    cr.verify("1 -> 2");
}

#[test]
fn dynamic_returns_computed_action() {
    let d = Dispatch::dynamic(|prev: &i32, cur: &i32| (cur - prev > 2).then_some("big"));
    assert_eq!(d.select(&11, &15), Some("big"));
    assert_eq!(d.select(&10, &11), None);
    assert_eq!(d.mode(), DispatchMode::Dynamic);
}

#[test]
fn dispatch_calls_handler_once() {
    let mut cr = CallRecorder::new();
    let d = Dispatch::<i32, _>::unconditional(7);
    assert!(d.dispatch(&0, &1, |a| call!("{a}")));
    cr.verify("7");
}

#[test]
fn dispatch_skips_handler_on_none() {
    let mut cr = CallRecorder::new();
    let d = Dispatch::dynamic(|_: &i32, _: &i32| None::<u8>);
    assert!(!d.dispatch(&0, &1, |a| call!("{a}")));
    cr.verify(());
}

#[test]
fn clone_shares_closure() {
    let mut cr = CallRecorder::new();
    let d = Dispatch::dynamic(|prev: &i32, cur: &i32| {
        call!("compute");
        Some(cur - prev)
    });
    let d2 = d.clone();
    assert_eq!(d2.select(&1, &4), Some(3));
    assert_eq!(d.select(&1, &2), Some(1));
    cr.verify(["compute", "compute"]);
}

#[test]
fn debug_hides_closures() {
    let d = Dispatch::conditional(1, |_: &i32, _: &i32| true);
    assert_eq!(format!("{d:?}"), "Conditional { action: 1, .. }");
    let d = Dispatch::dynamic(|_: &i32, _: &i32| Some(1));
    assert_eq!(format!("{d:?}"), "Dynamic(..)");
    let d = Dispatch::<i32, _>::unconditional(1);
    assert_eq!(format!("{d:?}"), "Unconditional(1)");
}

#[rstest]
#[case(DispatchMode::Unconditional, "unconditional")]
#[case(DispatchMode::Conditional, "conditional")]
#[case(DispatchMode::Dynamic, "dynamic")]
fn mode_names(#[case] mode: DispatchMode, #[case] name: &str) {
    assert_eq!(mode.to_string(), name);
    assert_eq!(name.parse::<DispatchMode>().unwrap(), mode);
    assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{name}\""));
    assert_eq!(
        serde_json::from_str::<DispatchMode>(&format!("\"{name}\"")).unwrap(),
        mode
    );
}

#[test]
fn mode_rejects_unknown_name() {
    assert!("always".parse::<DispatchMode>().is_err());
}
