//! End-to-end validation tests.
//!
//! Exercises the engine through its public surface: registration, sequential
//! AND composition with short-circuit, async checks, and the composite
//! factories over the primitive catalogue.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use scrutiny::{
    RegisterError, Scrutiny, ValidationError, Value, array_of, async_check_fn, check_fn, object_of,
    one_of, one_of_type, shape,
};

fn veggie_check() -> scrutiny::CheckRef {
    check_fn(|value| match value {
        Value::String(s) if ["potato", "tomato"].contains(&s.as_str()) => Ok(()),
        _ => Err(ValidationError::new("not a veggie").into()),
    })
}

fn fruit_check() -> scrutiny::CheckRef {
    check_fn(|value| match value {
        Value::String(s) if ["apple", "orange", "banana", "tomato"].contains(&s.as_str()) => Ok(()),
        _ => Err(ValidationError::new("not a fruit").into()),
    })
}

#[test]
fn test_register_and_look_up_user_checks() {
    let mut engine = Scrutiny::new();
    engine.register("veggie", veggie_check()).unwrap();
    engine.register("fruit", fruit_check()).unwrap();

    assert!(engine.check("veggie").is_some());
    assert!(engine.check("fruit").is_some());
    assert!(engine.check("mineral").is_none());
}

#[test]
fn test_checks_of_different_instances_never_mix() {
    let mut instance1 = Scrutiny::new();
    let mut instance2 = Scrutiny::new();

    instance1.register("type1", check_fn(|_| Ok(()))).unwrap();
    instance2.register("type2", check_fn(|_| Ok(()))).unwrap();

    assert!(instance1.check("type1").is_some() && instance1.check("type2").is_none());
    assert!(instance2.check("type2").is_some() && instance2.check("type1").is_none());
}

#[test]
fn test_register_rejects_blank_name() {
    let mut engine = Scrutiny::new();
    let err = engine.register("", check_fn(|_| Ok(()))).unwrap_err();
    assert!(matches!(err, RegisterError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_register_and_validate_and_composition() {
    let mut engine = Scrutiny::new();
    engine.register("veggie", veggie_check()).unwrap();
    engine.register("fruit", fruit_check()).unwrap();

    let veggie = engine.check("veggie").unwrap();
    let fruit = engine.check("fruit").unwrap();

    let err = engine
        .validate(&Value::from("water"), &[veggie.clone()])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not a veggie");

    engine
        .validate(&Value::from("tomato"), &[veggie.clone()])
        .await
        .unwrap();

    // AND composition: fruit passes, then veggie fails.
    let err = engine
        .validate(&Value::from("apple"), &[fruit.clone(), veggie.clone()])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not a veggie");

    // First failure wins: potato is a veggie but not a fruit.
    let err = engine
        .validate(&Value::from("potato"), &[fruit.clone(), veggie.clone()])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not a fruit");

    let outcome = engine
        .validate(&Value::from("tomato"), &[fruit, veggie])
        .await
        .unwrap();
    assert_eq!(outcome, Value::from("tomato"));
}

#[tokio::test]
async fn test_second_check_never_runs_after_first_failure() {
    let engine = Scrutiny::new();
    let failing = check_fn(|_| Err(ValidationError::new("first").into()));

    let calls = Arc::new(AtomicUsize::new(0));
    let probe = calls.clone();
    let counting = check_fn(move |_| {
        probe.fetch_add(1, Ordering::SeqCst);
        Err(ValidationError::new("second").into())
    });

    let err = engine
        .validate(&Value::from("thing"), &[failing, counting])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "first");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_async_check_passes_after_delay() {
    let engine = Scrutiny::new();
    let delayed = async_check_fn(|_| {
        async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(())
        }
        .boxed()
    });

    let thing = Value::from("thing");
    let outcome = engine.validate(&thing, &[delayed]).await.unwrap();
    assert_eq!(outcome, thing);
}

#[tokio::test]
async fn test_async_rejection_propagates_unchanged() {
    let engine = Scrutiny::new();
    let delayed_failure = async_check_fn(|_| {
        async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err(ValidationError::new("its wrong").into())
        }
        .boxed()
    });

    let err = engine
        .validate(&Value::from("shoot"), &[delayed_failure])
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>().unwrap().message(),
        "its wrong"
    );
}

#[tokio::test]
async fn test_user_error_type_survives_the_round_trip() {
    #[derive(Debug, thiserror::Error)]
    #[error("the check itself broke")]
    struct Malfunction;

    let engine = Scrutiny::new();
    let broken = check_fn(|_| Err(Malfunction.into()));

    let err = engine.validate(&Value::Null, &[broken]).await.unwrap_err();
    assert!(err.downcast_ref::<Malfunction>().is_some());
    assert!(err.downcast_ref::<ValidationError>().is_none());
}

#[tokio::test]
async fn test_primitive_checks_through_the_engine() {
    let engine = Scrutiny::new();
    let string = engine.check("string").unwrap();
    let number = engine.check("number").unwrap();
    let object = engine.check("object").unwrap();
    let array = engine.check("array").unwrap();

    let name = Value::from("john snow");
    assert_eq!(engine.validate(&name, &[string.clone()]).await.unwrap(), name);
    assert_eq!(
        engine.validate(&Value::Null, &[string]).await.unwrap_err().to_string(),
        "not a string"
    );

    assert!(engine.validate(&Value::from(108), &[number.clone()]).await.is_ok());
    assert_eq!(
        engine
            .validate(&Value::Number(f64::NAN), &[number])
            .await
            .unwrap_err()
            .to_string(),
        "not a number"
    );

    assert!(engine.validate(&Value::from(543), &[object.clone()]).await.is_err());
    assert!(engine.validate(&Value::Null, &[object]).await.is_err());

    let array_like = Value::object([
        ("0", Value::from("a")),
        ("1", Value::from("b")),
        ("length", Value::from(2)),
    ]);
    assert_eq!(
        engine.validate(&array_like, &[array]).await.unwrap_err().to_string(),
        "not an array"
    );
}

#[tokio::test]
async fn test_composites_through_the_engine() {
    let engine = Scrutiny::new();
    let string = engine.check("string").unwrap();
    let number = engine.check("number").unwrap();

    let fruit = one_of(vec![Value::from("apple"), Value::from("banana")]);
    assert!(engine.validate(&Value::from("apple"), &[fruit.clone()]).await.is_ok());
    assert!(engine.validate(&Value::from("orange"), &[fruit]).await.is_err());

    let numbers = array_of(number.clone());
    let ok = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
    let bad = Value::Array(vec![Value::from("a"), Value::from("b")]);
    assert!(engine.validate(&ok, &[numbers.clone()]).await.is_ok());
    assert!(engine.validate(&bad, &[numbers]).await.is_err());

    let string_props = object_of(string.clone());
    let bad = Value::object([("items", Value::from(3))]);
    assert!(engine.validate(&bad, &[string_props]).await.is_err());

    let num_or_string = one_of_type(vec![number, string.clone()]);
    assert!(engine.validate(&Value::from("boo"), &[num_or_string.clone()]).await.is_ok());
    assert!(engine.validate(&Value::from(123), &[num_or_string.clone()]).await.is_ok());
    assert!(
        engine
            .validate(&Value::object::<&str, _>([]), &[num_or_string])
            .await
            .is_err()
    );

    let hero = shape(vec![
        ("name", string.clone()),
        ("enemies", array_of(string)),
    ]);
    let flash = Value::object([
        ("name", Value::from("Flash")),
        (
            "enemies",
            Value::Array(vec![Value::from("Zoom"), Value::from("Grodd")]),
        ),
        ("rating", Value::from(5)),
    ]);
    assert!(engine.validate(&flash, &[hero.clone()]).await.is_ok());

    let batman = Value::object([("name", Value::from("Batman"))]);
    assert_eq!(
        engine.validate(&batman, &[hero]).await.unwrap_err().to_string(),
        "doesn't match the shape"
    );
}

#[tokio::test]
async fn test_validating_decoded_json() {
    let mut engine = Scrutiny::new();
    engine.register("fruit", fruit_check()).unwrap();

    let json: serde_json::Value = serde_json::from_str(r#""banana""#).unwrap();
    let value = Value::from(json);
    let outcome = engine
        .validate(&value, &[engine.check("fruit").unwrap()])
        .await
        .unwrap();
    assert_eq!(outcome, Value::from("banana"));
}

#[tokio::test]
async fn test_concurrent_validate_calls_share_one_engine() {
    let mut engine = Scrutiny::new();
    engine.register("veggie", veggie_check()).unwrap();
    let engine = Arc::new(engine);

    let mut handles = Vec::new();
    for input in ["potato", "tomato", "water"] {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let check = engine.check("veggie").unwrap();
            engine.validate(&Value::from(input), &[check]).await.is_ok()
        }));
    }

    let outcomes: Vec<bool> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();
    assert_eq!(outcomes, vec![true, true, false]);
}
