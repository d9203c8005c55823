//! Chains emit tracing events under an installed subscriber without
//! changing their outcomes.

use wrapchain::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn labelled_chain_logs_and_runs() {
    init_tracing();
    let config = ChainConfig::from_json(r#"{"label": "checkout", "max_depth": 2}"#).unwrap();
    let mut chain = Chain::with_config(config)
        .wrap_top(wrap_fn(|_: &(), args: u8, next| next.invoke(args)), ());
    chain
        .wrap_bottom(wrap_fn(|_: &(), args: u8, _next| Ok(Some(args + 1))), ())
        .unwrap();

    assert_eq!(chain.config().label.as_deref(), Some("checkout"));
    assert_eq!(chain.invoke(1).unwrap(), Some(2));

    chain
        .wrap_bottom(wrap_fn(|_: &(), args: u8, _next| Ok(Some(args))), ())
        .unwrap();
    assert_eq!(chain.release_all(), 3);
}

#[test]
fn depth_guard_logs_and_fails() {
    init_tracing();
    let chain = Chain::with_config(ChainConfig::default().with_label("loop").with_max_depth(1))
        .wrap_top(wrap_fn(|_: &(), args: u8, _next| Ok(Some(args))), ())
        .wrap_top(wrap_fn(|_: &(), args: u8, next| next.invoke(args)), ());

    assert!(matches!(chain.invoke(0), Err(ChainError::TooDeep { limit: 1 })));
}
