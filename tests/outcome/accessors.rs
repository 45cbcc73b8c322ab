use outcome_rail::Outcome;

#[test]
fn unwrap_ok_returns_the_success_payload() {
    let ok = Outcome::<i32, &str>::ok(42);
    assert_eq!(*ok.unwrap_ok(), 42);

    let mut ok = Outcome::<i32, &str>::ok(41);
    *ok.unwrap_ok_mut() += 1;
    assert_eq!(*ok.unwrap_ok(), 42);
}

#[test]
#[should_panic(expected = "try to extract the result of err with ok")]
fn unwrap_ok_panics_on_err() {
    let err = Outcome::<i32, &str>::err("boom");
    let _ = err.unwrap_ok();
}

#[test]
#[should_panic(expected = "try to extract the result of err with ok")]
fn unwrap_ok_mut_panics_on_err() {
    let mut err = Outcome::<i32, &str>::err("boom");
    let _ = err.unwrap_ok_mut();
}

#[test]
fn unwrap_err_returns_the_error_payload() {
    let err = Outcome::<i32, String>::err("boom".to_string());
    assert_eq!(err.unwrap_err(), "boom");

    let mut err = Outcome::<i32, String>::err("boom".to_string());
    err.unwrap_err_mut().push('!');
    assert_eq!(err.unwrap_err(), "boom!");
}

#[test]
#[should_panic(expected = "try to extract the result of ok with err")]
fn unwrap_err_panics_on_ok() {
    let ok = Outcome::<i32, &str>::ok(42);
    let _ = ok.unwrap_err();
}

#[test]
#[should_panic(expected = "try to extract the result of ok with err")]
fn unwrap_err_mut_panics_on_ok() {
    let mut ok = Outcome::<i32, &str>::ok(42);
    let _ = ok.unwrap_err_mut();
}

#[test]
fn try_accessors_never_panic_and_agree_with_the_discriminant() {
    let ok = Outcome::<i32, &str>::ok(42);
    assert_eq!(ok.try_ok(), Some(&42));
    assert_eq!(ok.try_err(), None);

    let err = Outcome::<i32, &str>::err("boom");
    assert_eq!(err.try_ok(), None);
    assert_eq!(err.try_err(), Some(&"boom"));
}

#[test]
fn try_mut_accessors_allow_in_place_mutation() {
    let mut ok = Outcome::<i32, &str>::ok(41);
    if let Some(value) = ok.try_ok_mut() {
        *value += 1;
    }
    assert_eq!(ok.try_ok(), Some(&42));
    assert!(ok.try_err_mut().is_none());

    let mut err = Outcome::<i32, String>::err("boom".to_string());
    if let Some(error) = err.try_err_mut() {
        error.push('!');
    }
    assert_eq!(err.try_err().map(String::as_str), Some("boom!"));
    assert!(err.try_ok_mut().is_none());
}

#[test]
fn unchecked_accessors_read_the_proven_variant() {
    let mut ok = Outcome::<i32, &str>::ok(42);
    if ok.is_ok() {
        // SAFETY: discriminant checked just above.
        assert_eq!(unsafe { *ok.unwrap_ok_unchecked() }, 42);
        unsafe { *ok.unwrap_ok_unchecked_mut() += 1 };
    }
    assert_eq!(ok.try_ok(), Some(&43));

    let mut err = Outcome::<i32, String>::err("boom".to_string());
    if err.is_err() {
        // SAFETY: discriminant checked just above.
        assert_eq!(unsafe { err.unwrap_err_unchecked() }, "boom");
        unsafe { err.unwrap_err_unchecked_mut().push('!') };
    }
    assert_eq!(err.try_err().map(String::as_str), Some("boom!"));
}
