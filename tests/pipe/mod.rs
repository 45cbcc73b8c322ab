use outcome_rail::{Outcome, Pipe};

#[test]
fn pipe_returns_the_transform_result() {
    let doubled = 21.pipe(|n| n * 2);
    assert_eq!(doubled, 42);

    let shouted = "hello".pipe(str::to_uppercase);
    assert_eq!(shouted, "HELLO");
}

#[test]
fn pipe_invokes_the_transform_exactly_once() {
    let mut calls = 0;
    let result = 5.pipe(|n| {
        calls += 1;
        n + 1
    });
    assert_eq!(calls, 1);
    assert_eq!(result, 6);
}

#[test]
fn also_returns_the_value_unchanged() {
    let mut seen = Vec::new();
    let value = vec![1, 2, 3].also(|v| seen.push(v.len()));
    assert_eq!(value, vec![1, 2, 3]);
    assert_eq!(seen, vec![3]);
}

#[test]
fn also_invokes_the_observer_exactly_once_with_the_value() {
    let mut calls = 0;
    let mut observed = 0;
    let value = 42.also(|v| {
        calls += 1;
        observed = *v;
    });
    assert_eq!(calls, 1);
    assert_eq!(observed, 42);
    assert_eq!(value, 42);
}

#[test]
fn combinators_compose_with_outcome_chains() {
    let outcome = 21
        .pipe(|n| n * 2)
        .also(|n| assert_eq!(*n, 42))
        .pipe(Outcome::<i32, &str>::ok)
        .map(|n| n + 1);

    assert_eq!(outcome.into_ok(), Some(43));
}
